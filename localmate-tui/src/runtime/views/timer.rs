use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Language switch never touches the countdown.
            enqueue_action(action_tx, Action::ToggleLanguage);
        }
        KeyCode::Esc => {
            app.current_view = View::Tasks;
        }
        // The single action key: start when Idle, stop when Running. While a
        // run exists the start transition is unreachable from the UI.
        KeyCode::Enter => {
            if app.timer.is_running() {
                enqueue_action(action_tx, Action::StopTimer);
            } else {
                enqueue_action(action_tx, Action::StartTimer);
            }
        }
        // Everything below edits the selector or duration inputs, which are
        // disabled while the countdown runs.
        _ if app.timer.is_running() => {}
        KeyCode::Tab | KeyCode::BackTab => {
            app.duration_focused = !app.duration_focused;
        }
        KeyCode::Down => {
            app.selector_down();
            refresh_selected_total(app, action_tx);
        }
        KeyCode::Up => {
            app.selector_up();
            refresh_selected_total(app, action_tx);
        }
        KeyCode::Backspace => {
            if app.duration_focused {
                app.duration_input.backspace();
            } else {
                app.selector_search.backspace();
                app.filter_selector();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.duration_focused {
                if c.is_ascii_digit() {
                    app.duration_input.insert(c);
                }
            } else {
                app.selector_search.insert(c);
                app.filter_selector();
            }
        }
        _ => {}
    }
}

fn refresh_selected_total(app: &App, action_tx: &ActionTx) {
    if let Some(task) = app.selector_selected() {
        enqueue_action(action_tx, Action::RefreshTotalTime { task_id: task.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TextInput;
    use crate::i18n::Lang;
    use localmate_api::domain::Task;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new(Lang::En);
        app.current_view = View::Timer;
        app.set_tasks(vec![Task {
            id: 7,
            title: "Read chapter 4".to_string(),
            description: None,
            due_date: datetime!(2099-01-01 09:00:00),
            is_completed: false,
        }]);
        app
    }

    fn start_run(app: &mut App) {
        app.timer
            .start(
                Some((7, "Read chapter 4".to_string())),
                Some(5),
                OffsetDateTime::now_utc(),
            )
            .unwrap();
    }

    #[test]
    fn enter_starts_when_idle() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_timer_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::StartTimer));
    }

    #[test]
    fn enter_stops_when_running() {
        let mut app = test_app();
        start_run(&mut app);
        let (tx, mut rx) = channel();
        handle_timer_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::StopTimer));
        assert!(rx.try_recv().is_err(), "no second action scheduled");
    }

    #[test]
    fn inputs_are_frozen_while_running() {
        let mut app = test_app();
        start_run(&mut app);
        app.duration_focused = true;
        app.duration_input = TextInput::from_str("5");

        let (tx, _rx) = channel();
        handle_timer_key(key(KeyCode::Char('9')), &mut app, &tx);
        handle_timer_key(key(KeyCode::Backspace), &mut app, &tx);

        assert_eq!(app.duration_input.value, "5");
    }

    #[test]
    fn language_toggle_works_while_running() {
        let mut app = test_app();
        start_run(&mut app);
        let (tx, mut rx) = channel();
        handle_timer_key(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert_eq!(rx.try_recv().ok(), Some(Action::ToggleLanguage));
        assert!(app.timer.is_running());
    }

    #[test]
    fn duration_input_only_accepts_digits() {
        let mut app = test_app();
        app.duration_focused = true;
        let (tx, _rx) = channel();
        handle_timer_key(key(KeyCode::Char('2')), &mut app, &tx);
        handle_timer_key(key(KeyCode::Char('x')), &mut app, &tx);
        handle_timer_key(key(KeyCode::Char('5')), &mut app, &tx);
        assert_eq!(app.duration_input.value, "25");
    }
}
