use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::domain::{NewTask, NewTimeEntry, Task, TotalTime};
use crate::ApiUrl;

pub struct LocalMateClient {
    http: reqwest::Client,
    base_url: ApiUrl,
    token: String,
}

impl LocalMateClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: ApiUrl::new(base_url),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> ApiUrl {
        self.base_url.append_path(path).with_token(&self.token)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::ResponseError(e.to_string()))?;
        check_status(resp, fallback).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = self.send(request, fallback).await?;
        resp.json::<T>().await.map_err(|e| {
            ApiError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.endpoint("/tasks");
        self.fetch(self.http.get(url.as_ref()), "Failed to fetch tasks")
            .await
    }

    #[tracing::instrument(skip(self, new_task), fields(title = %new_task.title))]
    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task, ApiError> {
        let url = self.endpoint("/tasks");
        self.fetch(
            self.http.post(url.as_ref()).json(new_task),
            "Failed to create task",
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn toggle_completion(&self, task_id: i64) -> Result<Task, ApiError> {
        let url = self.endpoint(&format!("/tasks/{}/complete", task_id));
        self.fetch(
            self.http.put(url.as_ref()),
            "Failed to toggle task completion",
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn move_to_today(&self, task_id: i64) -> Result<Task, ApiError> {
        let url = self.endpoint(&format!("/tasks/{}/move-to-today", task_id));
        self.fetch(self.http.put(url.as_ref()), "Failed to move task to today")
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, task_id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/tasks/{}", task_id));
        let resp = self
            .send(self.http.delete(url.as_ref()), "Failed to delete task")
            .await?;
        let _ = resp.bytes().await;
        Ok(())
    }

    #[tracing::instrument(skip(self, entry), fields(task_id = entry.task_id))]
    pub async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<(), ApiError> {
        let url = self.endpoint("/time-entries");
        let resp = self
            .send(
                self.http.post(url.as_ref()).json(entry),
                "Failed to save time entry",
            )
            .await?;
        let _ = resp.bytes().await;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn total_minutes(&self, task_id: i64) -> Result<TotalTime, ApiError> {
        let url = self.endpoint(&format!("/tasks/{}/total-time", task_id));
        self.fetch(self.http.get(url.as_ref()), "Failed to fetch total time")
            .await
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Rejected(String),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Map a non-success status to an [`ApiError`], preferring the server's
/// `detail` message over the generic per-operation fallback.
pub(crate) async fn check_status(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Rejected(detail_message(&body, fallback)));
    }
    Ok(resp)
}

fn detail_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_message_prefers_server_detail() {
        let body = r#"{"detail": "Username already registered"}"#;
        assert_eq!(
            detail_message(body, "Registration failed"),
            "Username already registered"
        );
    }

    #[test]
    fn detail_message_falls_back_on_non_json() {
        assert_eq!(
            detail_message("<html>502</html>", "Failed to fetch tasks"),
            "Failed to fetch tasks"
        );
    }

    #[test]
    fn detail_message_falls_back_on_missing_field() {
        assert_eq!(
            detail_message(r#"{"error": "nope"}"#, "Failed to delete task"),
            "Failed to delete task"
        );
    }
}
