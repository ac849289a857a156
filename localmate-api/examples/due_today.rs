use localmate_api::{authenticate, LocalMateClient};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url =
        env::var("LOCALMATE_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let username = env::var("LOCALMATE_USER")?;
    let password = env::var("LOCALMATE_PASSWORD")?;

    let session = authenticate(&base_url, &username, &password).await?;
    let client = LocalMateClient::new(&base_url, &session.token);

    let today = time::OffsetDateTime::now_utc().date();
    let tasks = client.list_tasks().await?;

    println!("Tasks due {} for {}:", today, session.username);
    for task in tasks.iter().filter(|t| t.due_date.date() <= today) {
        let marker = if task.is_completed { "x" } else { " " };
        println!("  [{}] #{} {}", marker, task.id, task.title);
    }

    Ok(())
}
