#[derive(Debug, Clone)]
pub struct ApiUrl(String);

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ApiUrl {
    pub fn new(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Attach the session token as a query parameter, per the backend contract.
    pub fn with_token(&self, token: &str) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&token={}", self.0, token))
        } else {
            Self(format!("{}?token={}", self.0, token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_normalizes_slashes() {
        let url = ApiUrl::new("http://localhost:8000/api/");
        assert_eq!(
            url.append_path("/tasks").as_ref(),
            "http://localhost:8000/api/tasks"
        );
    }

    #[test]
    fn with_token_starts_query_string() {
        let url = ApiUrl::new("http://localhost:8000/api").append_path("tasks");
        assert_eq!(
            url.with_token("abc123").as_ref(),
            "http://localhost:8000/api/tasks?token=abc123"
        );
    }

    #[test]
    fn with_token_extends_existing_query_string() {
        let url = ApiUrl(String::from("http://localhost:8000/api/tasks?page=2"));
        assert_eq!(
            url.with_token("abc123").as_ref(),
            "http://localhost:8000/api/tasks?page=2&token=abc123"
        );
    }
}
