use anyhow::Result;
use localmate_api::domain::{NewTask, NewTimeEntry};
use localmate_api::LocalMateClient;
use time::OffsetDateTime;

use crate::app::{self, App, StartError, View};
use crate::config::MateConfig;
use crate::session_store::{self, TimerSnapshot};

use super::action_queue::Action;

pub(super) async fn run_action(
    action: Action,
    app: &mut App,
    client: &LocalMateClient,
    config: &mut MateConfig,
) -> Result<()> {
    match action {
        Action::ReloadTasks => {
            reload_tasks(app, client).await;
        }
        Action::CreateTask => {
            handle_create_task(app, client).await;
        }
        Action::ToggleTask { task_id } => {
            if let Err(e) = client.toggle_completion(task_id).await {
                tracing::error!(task_id, error = %e, "failed to toggle task");
                app.notify_error(app.text("task_toggle_failed"));
            }
            reload_tasks(app, client).await;
        }
        Action::MoveToToday { task_id } => {
            match client.move_to_today(task_id).await {
                Ok(_) => app.notify_success(app.text("task_moved")),
                Err(e) => {
                    tracing::error!(task_id, error = %e, "failed to move task to today");
                    app.notify_error(app.text("task_move_failed"));
                }
            }
            reload_tasks(app, client).await;
        }
        Action::ConfirmDelete => {
            handle_confirm_delete(app, client).await;
        }
        Action::StartTimer => {
            handle_start_timer(app);
        }
        Action::StopTimer => {
            handle_stop_timer(app);
        }
        Action::CompleteTimer {
            task_id,
            duration_minutes,
        } => {
            handle_complete_timer(app, client, task_id, duration_minutes).await;
        }
        Action::RefreshTotalTime { task_id } => {
            refresh_total_time(app, client, task_id).await;
        }
        Action::ToggleLanguage => {
            app.lang = app.lang.toggled();
            config.language = app.lang.as_str().to_string();
            if let Err(e) = config.save() {
                tracing::warn!(error = %e, "failed to persist language preference");
            }
            // The running countdown is untouched; only labels change.
            reload_tasks(app, client).await;
        }
    }
    Ok(())
}

/// Fetch all tasks and rebuild both buckets. A fetch failure is surfaced as
/// its own notification rather than being conflated with an empty list.
async fn reload_tasks(app: &mut App, client: &LocalMateClient) {
    app.is_loading = true;
    match client.list_tasks().await {
        Ok(tasks) => app.set_tasks(tasks),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch tasks");
            app.set_tasks(Vec::new());
            app.notify_error(app.text("task_fetch_failed"));
        }
    }
    app.is_loading = false;
}

async fn handle_create_task(app: &mut App, client: &LocalMateClient) {
    let title = app.add_task_form.title.value.trim().to_string();
    let due_date = app::parse_due_input(&app.add_task_form.due_date.value);

    let (title, due_date) = match (title.is_empty(), due_date) {
        (false, Some(due)) => (title, due),
        _ => {
            app.notify_error(app.text("title_and_date_required"));
            return;
        }
    };

    let description = app.add_task_form.description.value.trim();
    let new_task = NewTask {
        title,
        description: (!description.is_empty()).then(|| description.to_string()),
        due_date,
    };

    match client.create_task(&new_task).await {
        Ok(_) => {
            app.notify_success(app.text("task_added"));
            app.add_task_form = app::AddTaskForm::new(&app::default_due_input());
            app.current_view = View::Tasks;
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create task");
            app.notify_error(app.text("task_create_failed"));
        }
    }
    reload_tasks(app, client).await;
}

async fn handle_confirm_delete(app: &mut App, client: &LocalMateClient) {
    let Some(ctx) = app.delete_context.take() else {
        return;
    };
    app.current_view = View::Tasks;

    match client.delete_task(ctx.task_id).await {
        Ok(()) => app.notify_success(app.text("task_deleted")),
        Err(e) => {
            tracing::error!(task_id = ctx.task_id, error = %e, "failed to delete task");
            app.notify_error(app.text("task_delete_failed"));
        }
    }
    reload_tasks(app, client).await;
}

fn handle_start_timer(app: &mut App) {
    let task = app.selector_selected().map(|t| (t.id, t.title.clone()));
    let duration = app.parsed_duration();

    match app.timer.start(task, duration, OffsetDateTime::now_utc()) {
        Ok(run) => {
            let snapshot = TimerSnapshot {
                task_id: run.task_id,
                task_title: run.task_title.clone(),
                duration_minutes: run.duration_minutes,
                end_at_unix: run.end_at.unix_timestamp(),
            };
            if let Err(e) = session_store::save_timer_snapshot(&snapshot) {
                tracing::warn!(error = %e, "failed to persist timer snapshot");
            }
        }
        Err(StartError::NoTaskSelected) => app.notify_error(app.text("select_task_first")),
        Err(StartError::InvalidDuration) => app.notify_error(app.text("enter_duration")),
        // Unreachable through the UI: the start affordance is swapped to
        // "stop" while a run exists.
        Err(StartError::AlreadyRunning) => {}
    }
}

fn handle_stop_timer(app: &mut App) {
    if app.timer.stop().is_some() {
        if let Err(e) = session_store::clear_timer_snapshot() {
            tracing::warn!(error = %e, "failed to clear timer snapshot");
        }
        app.reset_timer_inputs();
    }
}

/// Expiry side effects: exactly one time entry, a refreshed total, a visual
/// cue. A failed write never blocks the reset to Idle.
async fn handle_complete_timer(
    app: &mut App,
    client: &LocalMateClient,
    task_id: i64,
    duration_minutes: u32,
) {
    if let Err(e) = session_store::clear_timer_snapshot() {
        tracing::warn!(error = %e, "failed to clear timer snapshot");
    }

    let entry = NewTimeEntry {
        task_id,
        duration_minutes,
    };
    match client.create_time_entry(&entry).await {
        Ok(()) => {
            app.notify_success(app.text("timer_completed"));
            refresh_total_time(app, client, task_id).await;
        }
        Err(e) => {
            tracing::error!(task_id, error = %e, "failed to save time entry");
            app.notify_error(app.text("timer_save_failed"));
        }
    }

    app.reset_timer_inputs();
    app.start_flash();
}

async fn refresh_total_time(app: &mut App, client: &LocalMateClient, task_id: i64) {
    app.selected_total = match client.total_minutes(task_id).await {
        Ok(total) if total.total_minutes > 0 => Some(total.total_minutes),
        Ok(_) => None,
        Err(e) => {
            tracing::error!(task_id, error = %e, "failed to fetch total time");
            None
        }
    };
}
