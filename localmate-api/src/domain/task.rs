use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

// The backend serializes datetimes as local ISO strings without an offset,
// e.g. "2024-01-01T12:30:00".
time::serde::format_description!(
    pub(crate) iso_local,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

/// A task as returned by the backend. The client never caches these between
/// reloads; every render cycle works on a freshly fetched copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "iso_local")]
    pub due_date: PrimitiveDateTime,
    pub is_completed: bool,
}

/// Request body for POST /tasks.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "iso_local")]
    pub due_date: PrimitiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_parses_backend_datetime() {
        let raw = r#"{
            "id": 7,
            "title": "Read chapter 4",
            "description": null,
            "due_date": "2024-01-01T12:30:00",
            "is_completed": false
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.due_date.date(), time::macros::date!(2024 - 01 - 01));
        assert!(!task.is_completed);
    }

    #[test]
    fn new_task_serializes_datetime_without_offset() {
        let new_task = NewTask {
            title: "Review notes".to_string(),
            description: None,
            due_date: time::macros::datetime!(2025-03-10 09:00:00),
        };
        let json = serde_json::to_value(&new_task).unwrap();
        assert_eq!(json["due_date"], "2025-03-10T09:00:00");
    }
}
