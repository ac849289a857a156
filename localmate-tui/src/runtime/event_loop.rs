use crate::app::App;
use crate::config::MateConfig;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use localmate_api::LocalMateClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use time::OffsetDateTime;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &LocalMateClient,
    config: &mut MateConfig,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }
        app.expire_notification(Instant::now());

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        // Expiry fires at most once per run: the countdown hands over its
        // state here and is Idle before the completion action executes.
        if let Some(run) = app.timer.take_if_expired(OffsetDateTime::now_utc()) {
            let _ = action_tx.send(Action::CompleteTimer {
                task_id: run.task_id,
                duration_minutes: run.duration_minutes,
            });
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client, config).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
