//! Mock advisor for running without a backend.
//!
//! Returns the canned recommendation built from the request's subjects and career interest.

use crate::domain::summary::mock_recommendation;
use crate::domain::{DomainError, RecommendationRequest};
use crate::ports::AdvisorPort;
use std::time::Duration;
use tracing::info;

/// Mock advisor. Simulates network latency with a configurable delay.
pub struct MockAdvisorAdapter {
    delay_ms: u64,
}

impl MockAdvisorAdapter {
    /// Create a new mock adapter with default delay (400ms).
    pub fn new() -> Self {
        Self { delay_ms: 400 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAdvisorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AdvisorPort for MockAdvisorAdapter {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<String, DomainError> {
        info!(
            specialization = %request.specialization,
            career = %request.career,
            "[MOCK] Simulating recommendation"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(mock_recommendation(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_profile;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockAdvisorAdapter::with_delay(5);
        let request = RecommendationRequest::from_profile(&sample_profile());

        let answer = adapter.recommend(&request).await.unwrap();

        assert!(answer.starts_with("Based on your profile"));
        assert!(answer.contains("strengths in Coding"));
    }
}
