use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_add_task_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc => {
            app.current_view = View::Tasks;
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::CreateTask);
        }
        KeyCode::Tab | KeyCode::Down => app.add_task_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.add_task_form.prev_field(),
        KeyCode::Left => app.add_task_form.focused_input_mut().move_left(),
        KeyCode::Right => app.add_task_form.focused_input_mut().move_right(),
        KeyCode::Backspace => app.add_task_form.focused_input_mut().backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.add_task_form.focused_input_mut().insert(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AddTaskField;
    use crate::i18n::Lang;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut app = App::new(Lang::En);
        app.current_view = View::AddTask;
        let (tx, _rx) = channel();

        handle_add_task_key(key(KeyCode::Char('h')), &mut app, &tx);
        handle_add_task_key(key(KeyCode::Char('i')), &mut app, &tx);
        assert_eq!(app.add_task_form.title.value, "hi");

        handle_add_task_key(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.add_task_form.focused, AddTaskField::Description);
        handle_add_task_key(key(KeyCode::Char('x')), &mut app, &tx);
        assert_eq!(app.add_task_form.description.value, "x");
    }

    #[test]
    fn enter_submits_the_form() {
        let mut app = App::new(Lang::En);
        app.current_view = View::AddTask;
        let (tx, mut rx) = channel();
        handle_add_task_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::CreateTask));
    }
}
