//! Login client and credential checks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Error body returned by the login endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginFailure {
    #[serde(default)]
    pub message: Option<String>,
}

/// Signup form values.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Both fields are required.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        Ok(())
    }
}

impl SignupRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        Ok(())
    }
}

/// Message for a rejected login, taken from the JSON response body.
///
/// A body that is not JSON is an error; valid JSON without a message falls
/// back to "Login failed".
pub fn rejection_message(body: &str) -> Result<String> {
    let failure: LoginFailure = serde_json::from_str(body)?;
    Ok(failure
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Login failed".to_string()))
}

/// HTTP client for the church backend.
pub struct AuthClient {
    client: reqwest::Client,
    login_url: String,
    offline: bool,
}

impl AuthClient {
    /// Create a new client instance.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            login_url: config.login_url(),
            offline: config.offline_login,
        })
    }

    /// Authenticate against `POST /api/login`.
    ///
    /// Any 2xx response signs the user in. In offline mode the request is
    /// skipped and only the required-field check applies.
    pub async fn login(&self, request: &LoginRequest) -> Result<()> {
        request.validate()?;

        if self.offline {
            tracing::info!("Offline login accepted for {}", request.email);
            return Ok(());
        }

        tracing::info!("Logging in {} via {}", request.email, self.login_url);
        let response = self.client.post(&self.login_url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        let message = rejection_message(&body).inspect_err(|e| {
            tracing::error!("Login failed ({}), unreadable response body: {}", status, e);
        })?;
        tracing::warn!("Login rejected ({}): {}", status, message);
        Err(AppError::LoginRejected(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(LoginRequest::new("", "secret").validate().is_err());
        assert!(LoginRequest::new("a@b.org", "").validate().is_err());
        assert!(LoginRequest::new(" a@b.org ", "secret").validate().is_ok());
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let mut req = SignupRequest {
            name: "Grace".to_string(),
            email: "grace@church.org".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
        req.password = "secret".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(r#"{"message":"Invalid credentials"}"#).unwrap(),
            "Invalid credentials"
        );
        assert_eq!(rejection_message(r#"{"error":"nope"}"#).unwrap(), "Login failed");
        assert_eq!(rejection_message(r#"{"message":"  "}"#).unwrap(), "Login failed");
    }

    #[test]
    fn test_rejection_message_non_json_body_is_error() {
        let err = rejection_message("<html>502</html>").unwrap_err();
        assert_eq!(err.login_message(), "Server error. Try again later.");
    }

    /// Serve one HTTP response on a local port and return the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_html_error_page_gives_generic_message() {
        let config = ApiConfig {
            base_url: serve_once("502 Bad Gateway", "<html>502 Bad Gateway</html>").await,
            timeout_secs: 5,
            offline_login: false,
        };
        let client = AuthClient::new(&config).unwrap();

        let err = client.login(&LoginRequest::new("a@b.org", "pw")).await.unwrap_err();
        assert_eq!(err.login_message(), "Server error. Try again later.");
    }

    #[tokio::test]
    async fn test_json_rejection_keeps_server_message() {
        let config = ApiConfig {
            base_url: serve_once("401 Unauthorized", r#"{"message":"Invalid credentials"}"#).await,
            timeout_secs: 5,
            offline_login: false,
        };
        let client = AuthClient::new(&config).unwrap();

        let err = client.login(&LoginRequest::new("a@b.org", "pw")).await.unwrap_err();
        assert_eq!(err.login_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_offline_login_skips_network() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            offline_login: true,
            ..Default::default()
        };
        let client = AuthClient::new(&config).unwrap();
        assert!(client.login(&LoginRequest::new("a@b.org", "pw")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_gives_generic_message() {
        // Reserve a port, then free it so nothing is listening there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ApiConfig {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout_secs: 2,
            offline_login: false,
        };
        let client = AuthClient::new(&config).unwrap();

        let err = client.login(&LoginRequest::new("a@b.org", "pw")).await.unwrap_err();
        assert_eq!(err.login_message(), "Server error. Try again later.");
    }

    #[tokio::test]
    async fn test_missing_fields_fail_before_request() {
        let config = ApiConfig {
            offline_login: false,
            ..Default::default()
        };
        let client = AuthClient::new(&config).unwrap();

        let err = client.login(&LoginRequest::new("", "")).await.unwrap_err();
        assert_eq!(err.login_message(), "Please fill in all fields");
    }
}
