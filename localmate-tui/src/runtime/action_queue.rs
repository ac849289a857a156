use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    ReloadTasks,
    CreateTask,
    ToggleTask { task_id: i64 },
    MoveToToday { task_id: i64 },
    ConfirmDelete,
    StartTimer,
    StopTimer,
    CompleteTimer { task_id: i64, duration_minutes: u32 },
    RefreshTotalTime { task_id: i64 },
    ToggleLanguage,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
