//! API Gateway Adapter
//!
//! Wraps HTTP calls to the admin REST backend, organized by resource.
//! Network failures, non-2xx responses, and malformed bodies all collapse
//! into one error shape so callers have a single branch. No retries; a
//! failure surfaces immediately.

mod auth;
mod category;
mod config;
mod kyc;
mod payment;
mod product;
mod scheme;
mod user;

pub use auth::*;
pub use category::*;
pub use config::*;
pub use kyc::*;
pub use payment::*;
pub use product::*;
pub use scheme::*;
pub use user::*;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::session;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Could not reach the server, check your connection")]
    Network,
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response from the server")]
    Decode,
}

pub fn base_url() -> &'static str {
    option_env!("ADMIN_API_BASE").unwrap_or("http://localhost:8000/api")
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Attach the bearer token and run the request, mapping every failure
/// mode into [`ApiError`].
async fn execute(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let request = match session::auth_token() {
        Some(token) => request.header("Authorization", format!("Bearer {}", token)),
        None => request,
    };
    let response = request.send().await.map_err(|_| ApiError::Network)?;
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Api(extract_error_message(&body, status)))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = execute(client().get(url(path))).await?;
    response.json().await.map_err(|_| ApiError::Decode)
}

pub(crate) async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = execute(client().request(method, url(path)).json(body)).await?;
    response.json().await.map_err(|_| ApiError::Decode)
}

/// Fire a request whose response body we do not care about
pub(crate) async fn send_unit<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    let mut request = client().request(method, url(path));
    if let Some(body) = body {
        request = request.json(body);
    }
    execute(request).await?;
    Ok(())
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    execute(client().delete(url(path))).await?;
    Ok(())
}

/// Best-effort extraction of a human-readable message from a failure
/// body: structured `message`/`error` field first, then the `<pre>`
/// marker of legacy HTML error pages, finally a status generic.
fn extract_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    if let Some(start) = body.find("<pre>") {
        if let Some(len) = body[start + 5..].find("</pre>") {
            let scraped = body[start + 5..start + 5 + len].trim();
            if !scraped.is_empty() {
                return scraped.lines().next().unwrap_or(scraped).to_string();
            }
        }
    }
    format!("Request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_message_wins() {
        let body = r#"{"message":"Scheme name already exists"}"#;
        assert_eq!(extract_error_message(body, 409), "Scheme name already exists");
        let body = r#"{"error":"Invalid token"}"#;
        assert_eq!(extract_error_message(body, 401), "Invalid token");
    }

    #[test]
    fn test_html_error_page_is_scraped() {
        let body = "<html><body><pre>Error: Cannot PATCH /admin/scheme/99\n    at ...</pre></body></html>";
        assert_eq!(
            extract_error_message(body, 404),
            "Error: Cannot PATCH /admin/scheme/99"
        );
    }

    #[test]
    fn test_fallback_is_status_generic() {
        assert_eq!(
            extract_error_message("", 500),
            "Request failed with status 500"
        );
        assert_eq!(
            extract_error_message("{\"message\":\"\"}", 422),
            "Request failed with status 422"
        );
    }
}
