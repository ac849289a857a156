use anyhow::{bail, Context, Result};
use std::io::Write;

use crate::config::MateConfig;
use crate::session_store;

/// Interactive login: prompt for credentials, exchange them for a token and
/// save the session. The config language follows the account's stored
/// preference afterwards.
pub async fn run_login(config: &mut MateConfig) -> Result<()> {
    let username = prompt_line("Username: ")?;
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let session = match localmate_api::authenticate(&config.api_url, &username, &password).await {
        Ok(session) => session,
        Err(e) => bail!("{}", e),
    };

    config.language = session.language.clone();
    config.save()?;
    session_store::save_session(&session)?;

    println!("Logged in as {}.", session.username);
    Ok(())
}

/// Interactive registration. The confirmation password never leaves the
/// process; only the agreed fields are sent.
pub async fn run_register(config: &mut MateConfig) -> Result<()> {
    let username = prompt_line("Username: ")?;
    let password = rpassword::prompt_password("Password: ").context("Failed to read password")?;
    let confirmation =
        rpassword::prompt_password("Confirm password: ").context("Failed to read password")?;

    if password != confirmation {
        bail!("Passwords do not match");
    }

    let session =
        match localmate_api::register(&config.api_url, &username, &password, &config.language)
            .await
        {
            Ok(session) => session,
            Err(e) => bail!("{}", e),
        };

    config.language = session.language.clone();
    config.save()?;
    session_store::save_session(&session)?;

    println!("Account created. Logged in as {}.", session.username);
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    let trimmed = line.trim().to_string();
    if trimmed.is_empty() {
        bail!("Input must not be empty");
    }
    Ok(trimmed)
}
