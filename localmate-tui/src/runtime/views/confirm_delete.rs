use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_delete_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::ConfirmDelete);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            // Declining issues no call at all.
            app.delete_context = None;
            app.current_view = View::Tasks;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DeleteContext;
    use crate::i18n::Lang;
    use crossterm::event::KeyModifiers;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new(Lang::En);
        app.current_view = View::ConfirmDelete;
        app.delete_context = Some(DeleteContext {
            task_id: 3,
            title: "Old task".to_string(),
        });
        app
    }

    #[test]
    fn confirming_enqueues_the_delete() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_confirm_delete_key(key(KeyCode::Char('y')), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::ConfirmDelete));
    }

    #[test]
    fn declining_performs_no_action_and_no_call() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_confirm_delete_key(key(KeyCode::Esc), &mut app, &tx);

        assert!(app.delete_context.is_none());
        assert_eq!(app.current_view, View::Tasks);
        assert!(rx.try_recv().is_err());
    }
}
