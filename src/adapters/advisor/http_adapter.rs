//! HTTP adapter for the recommendation backend.
//!
//! `POST` the profile as JSON, read `{ "answer": "..." }` back.

use crate::domain::summary::NO_RECOMMENDATION_TEXT;
use crate::domain::{DomainError, RecommendationRequest, RecommendationResponse};
use crate::ports::AdvisorPort;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Recommendation backend reached over HTTP.
pub struct HttpAdvisorAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl HttpAdvisorAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Endpoint (e.g., "http://127.0.0.1:8000/api/recommend")
    /// * `timeout` - Whole-request timeout; a stalled backend counts as a failure
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Missing or empty answers become the fixed placeholder.
    fn answer_or_placeholder(response: RecommendationResponse) -> String {
        response
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| NO_RECOMMENDATION_TEXT.to_string())
    }
}

#[async_trait::async_trait]
impl AdvisorPort for HttpAdvisorAdapter {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<String, DomainError> {
        info!(
            url = %self.api_url,
            specialization = %request.specialization,
            "requesting recommendation"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Advisor(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "advisor API returned error");
            return Err(DomainError::Advisor(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: RecommendationResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Advisor(format!("Failed to parse API response: {}", e)))?;

        let answer = Self::answer_or_placeholder(body);
        debug!(answer_len = answer.len(), "received recommendation");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_profile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;

    /// Read one HTTP request and return its body.
    async fn read_request_body(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return String::new();
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    return text[head_end + 4..].to_string();
                }
            }
        }
    }

    /// Serve exactly one response; the captured request body arrives on the receiver.
    async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request_body = read_request_body(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();
            let _ = tx.send(request_body);
        });
        (format!("http://{}/api/recommend", addr), rx)
    }

    fn adapter(url: String) -> HttpAdvisorAdapter {
        HttpAdvisorAdapter::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_answer_returned() {
        let (url, rx) = serve_once("200 OK", r#"{"answer":"Take **ML**"}"#).await;
        let request = RecommendationRequest::from_profile(&sample_profile());

        let answer = adapter(url).recommend(&request).await.unwrap();
        assert_eq!(answer, "Take **ML**");

        let sent: serde_json::Value = serde_json::from_str(&rx.await.unwrap()).unwrap();
        assert_eq!(sent["gpa"], serde_json::json!(3.5));
        assert_eq!(sent["career"], "AI");
    }

    #[tokio::test]
    async fn test_missing_answer_uses_placeholder() {
        let (url, _rx) = serve_once("200 OK", "{}").await;
        let request = RecommendationRequest::from_profile(&sample_profile());

        let answer = adapter(url).recommend(&request).await.unwrap();
        assert_eq!(answer, NO_RECOMMENDATION_TEXT);
    }

    #[tokio::test]
    async fn test_empty_answer_uses_placeholder() {
        let (url, _rx) = serve_once("200 OK", r#"{"answer":""}"#).await;
        let request = RecommendationRequest::from_profile(&sample_profile());

        let answer = adapter(url).recommend(&request).await.unwrap();
        assert_eq!(answer, NO_RECOMMENDATION_TEXT);
    }

    #[tokio::test]
    async fn test_server_error_is_advisor_error() {
        let (url, _rx) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let request = RecommendationRequest::from_profile(&sample_profile());

        let err = adapter(url).recommend(&request).await.unwrap_err();
        assert!(matches!(err, DomainError::Advisor(ref m) if m.contains("500")));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_advisor_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let request = RecommendationRequest::from_profile(&sample_profile());

        let err = adapter(format!("http://{}/api/recommend", addr))
            .recommend(&request)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Advisor(_)));
    }
}
