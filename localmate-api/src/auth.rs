use serde::{Deserialize, Serialize};

use crate::client::{check_status, ApiError};
use crate::ApiUrl;

/// The authenticated client state for the current user. Persisted by the
/// client between runs and attached to every API call as a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    username: String,
    language: String,
}

impl From<TokenResponse> for Session {
    fn from(resp: TokenResponse) -> Self {
        Session {
            token: resp.access_token,
            username: resp.username,
            language: resp.language,
        }
    }
}

/// Log in an existing user. On a non-success status the server's `detail`
/// message is surfaced so the caller can show it inline.
#[tracing::instrument(skip(password))]
pub async fn authenticate(
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let url = ApiUrl::new(base_url).append_path("/login");

    let resp = reqwest::Client::new()
        .post(url.as_ref())
        .json(&LoginRequest { username, password })
        .send()
        .await
        .map_err(|e| ApiError::ResponseError(e.to_string()))?;
    let resp = check_status(resp, "Login failed").await?;

    let token = resp
        .json::<TokenResponse>()
        .await
        .map_err(|e| ApiError::ParsingError(format!("Failed to parse login response: {}", e)))?;

    Ok(token.into())
}

/// Register a new account and log it in. The password confirmation check is
/// the caller's responsibility; only the agreed fields go over the wire.
#[tracing::instrument(skip(password))]
pub async fn register(
    base_url: &str,
    username: &str,
    password: &str,
    language: &str,
) -> Result<Session, ApiError> {
    let url = ApiUrl::new(base_url).append_path("/register");

    let resp = reqwest::Client::new()
        .post(url.as_ref())
        .json(&RegisterRequest {
            username,
            password,
            language,
        })
        .send()
        .await
        .map_err(|e| ApiError::ResponseError(e.to_string()))?;
    let resp = check_status(resp, "Registration failed").await?;

    let token = resp.json::<TokenResponse>().await.map_err(|e| {
        ApiError::ParsingError(format!("Failed to parse register response: {}", e))
    })?;

    Ok(token.into())
}
