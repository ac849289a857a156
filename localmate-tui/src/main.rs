mod app;
mod bootstrap;
mod cli;
mod config;
mod i18n;
mod login;
mod runtime;
mod session_store;
mod time_utils;
mod ui;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use cli::{Cli, Commands};
use config::MateConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = MateConfig::load()?;

    match cli.command {
        Commands::Run => run(&mut config).await,
        Commands::Login => login::run_login(&mut config).await,
        Commands::Register => login::run_register(&mut config).await,
        Commands::Logout => {
            session_store::clear_session()?;
            session_store::clear_timer_snapshot()?;
            println!("Logged out.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = MateConfig::config_path()?;
            if !path.exists() {
                config.save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Logs go to a file next to the config; writing to the terminal would
/// corrupt the alternate screen.
fn init_tracing() {
    let Some(config_dir) = dirs::config_dir() else {
        return;
    };
    let log_path = config_dir.join("localmate-tui").join("localmate.log");
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .init();
    }
}

async fn run(config: &mut MateConfig) -> Result<()> {
    let Some(session) = session_store::load_session()? else {
        bail!("Not logged in. Run `localmate-tui login` first.");
    };

    let client = localmate_api::LocalMateClient::new(&config.api_url, &session.token);
    let mut app = app::App::new(i18n::Lang::parse(&config.language));

    bootstrap::initialize_app_state(&mut app, &client).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
