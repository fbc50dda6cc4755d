//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError, RecommendationRequest};
use std::path::PathBuf;

/// Recommendation backend.
#[async_trait::async_trait]
pub trait AdvisorPort: Send + Sync {
    /// Ask for advice on a validated profile. Returns raw markdown.
    ///
    /// # Errors
    /// Returns `DomainError::Advisor` on transport failure, non-2xx status or an unreadable body.
    /// Callers substitute fallback text; the error never reaches the student.
    async fn recommend(&self, request: &RecommendationRequest) -> Result<String, DomainError>;
}

/// Sink for a rendered view of the transcript (e.g. an HTML page).
#[async_trait::async_trait]
pub trait TranscriptPort: Send + Sync {
    /// Render every message once and write the view. Returns where it was written.
    async fn export(&self, messages: &[ChatMessage]) -> Result<PathBuf, DomainError>;
}
