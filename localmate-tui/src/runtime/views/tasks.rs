use crate::app::{self, App, DeleteContext, Pane, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_tasks_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::ToggleLanguage);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.toggle_pane();
        }
        KeyCode::Char('h') | KeyCode::Char('l') => {
            app.toggle_pane();
        }
        KeyCode::Down | KeyCode::Char('j') => app.selection_down(),
        KeyCode::Up | KeyCode::Char('k') => app.selection_up(),
        KeyCode::Char(' ') => {
            if let Some(task) = app.selected_task() {
                enqueue_action(action_tx, Action::ToggleTask { task_id: task.id });
            }
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            // Move-to-today only applies to the pending bucket.
            if app.focused_pane == Pane::Pending {
                if let Some(task) = app.selected_task() {
                    enqueue_action(action_tx, Action::MoveToToday { task_id: task.id });
                }
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Backspace => {
            if let Some(task) = app.selected_task() {
                app.delete_context = Some(DeleteContext {
                    task_id: task.id,
                    title: task.title.clone(),
                });
                app.current_view = View::ConfirmDelete;
            }
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.add_task_form = app::AddTaskForm::new(&app::default_due_input());
            app.current_view = View::AddTask;
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.current_view = View::Timer;
            // Seed the total-time line for the initially selected task.
            if let Some(task) = app.selector_selected() {
                enqueue_action(action_tx, Action::RefreshTotalTime { task_id: task.id });
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::ReloadTasks);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use localmate_api::domain::Task;
    use time::macros::datetime;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn task(id: i64, due: time::PrimitiveDateTime, is_completed: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: None,
            due_date: due,
            is_completed,
        }
    }

    fn test_app() -> App {
        let mut app = App::new(Lang::En);
        // One overdue task (today bucket) and one far-future task (pending).
        app.set_tasks(vec![
            task(1, datetime!(2020-01-01 09:00:00), false),
            task(2, datetime!(2099-01-01 09:00:00), false),
        ]);
        app
    }

    #[test]
    fn space_toggles_the_selected_task() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_tasks_key(key(KeyCode::Char(' ')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::ToggleTask { task_id: 1 }));
    }

    #[test]
    fn move_to_today_only_fires_from_the_pending_pane() {
        let mut app = test_app();
        let (tx, mut rx) = channel();

        handle_tasks_key(key(KeyCode::Char('m')), &mut app, &tx);
        assert!(rx.try_recv().is_err());

        app.toggle_pane();
        handle_tasks_key(key(KeyCode::Char('m')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::MoveToToday { task_id: 2 }));
    }

    #[test]
    fn opening_the_timer_refreshes_the_selected_total() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_tasks_key(key(KeyCode::Char('t')), &mut app, &tx);

        assert_eq!(app.current_view, View::Timer);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::RefreshTotalTime { task_id: 1 })
        );
    }

    #[test]
    fn delete_opens_the_confirmation_dialog_without_calling_out() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_tasks_key(key(KeyCode::Char('d')), &mut app, &tx);

        assert_eq!(app.current_view, View::ConfirmDelete);
        assert_eq!(
            app.delete_context,
            Some(DeleteContext {
                task_id: 1,
                title: "task 1".to_string()
            })
        );
        assert!(rx.try_recv().is_err());
    }
}
