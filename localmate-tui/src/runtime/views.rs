use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod add_task;
mod confirm_delete;
mod tasks;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Tasks => tasks::handle_tasks_key(key, app, action_tx),
        View::Timer => timer::handle_timer_key(key, app, action_tx),
        View::AddTask => add_task::handle_add_task_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}
