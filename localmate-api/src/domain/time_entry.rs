use serde::{Deserialize, Serialize};

/// Request body for POST /time-entries. Written exactly once per completed
/// countdown run; the client never reads raw entries back.
#[derive(Debug, Clone, Serialize)]
pub struct NewTimeEntry {
    pub task_id: i64,
    pub duration_minutes: u32,
}

/// Aggregated minutes for a task, from GET /tasks/{id}/total-time.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TotalTime {
    pub total_minutes: u32,
}
