use localmate_api::LocalMateClient;
use time::OffsetDateTime;

use crate::app::{App, RunningTimer};
use crate::session_store;

/// Load the initial task list and restore a countdown that was running when
/// the previous process exited.
pub async fn initialize_app_state(app: &mut App, client: &LocalMateClient) {
    app.is_loading = true;

    match client.list_tasks().await {
        Ok(tasks) => app.set_tasks(tasks),
        Err(e) => {
            tracing::error!("could not load tasks at startup: {}", e);
            app.set_tasks(Vec::new());
            app.notify_error(app.text("task_fetch_failed"));
        }
    }

    restore_countdown(app);

    app.is_loading = false;
}

/// A snapshot whose end already passed is discarded without recording a
/// time entry; completion only counts when the countdown finishes while
/// the app is attending to it.
fn restore_countdown(app: &mut App) {
    let snapshot = match session_store::load_timer_snapshot() {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("could not read timer snapshot: {}", e);
            return;
        }
    };

    let end_at = match OffsetDateTime::from_unix_timestamp(snapshot.end_at_unix) {
        Ok(end_at) => end_at,
        Err(_) => {
            let _ = session_store::clear_timer_snapshot();
            return;
        }
    };

    if end_at <= OffsetDateTime::now_utc() {
        tracing::info!("discarding expired timer snapshot");
        let _ = session_store::clear_timer_snapshot();
        return;
    }

    app.timer.restore(RunningTimer {
        task_id: snapshot.task_id,
        task_title: snapshot.task_title,
        duration_minutes: snapshot.duration_minutes,
        end_at,
    });
    app.current_view = crate::app::View::Timer;
}
