//! Advisor service. Orchestrates one profile submission end to end.
//!
//! validate -> student turn (profile summary) -> backend request -> advisor turn -> export.

use crate::domain::summary::{mock_recommendation, profile_summary};
use crate::domain::{
    ChatMessage, DomainError, RecommendationRequest, Transcript, ValidationErrors,
    ValidationResult, validate,
};
use crate::ports::{AdvisorPort, TranscriptPort};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// What happened to a submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Blocked before anything was sent; transcript unchanged.
    Rejected(ValidationErrors),
    /// Advisor turn appended. `fallback` is true when the canned text replaced a failed request.
    Answered { reply: ChatMessage, fallback: bool },
}

/// Service for the advising chat.
pub struct AdvisorService {
    advisor: Arc<dyn AdvisorPort>,
    sink: Option<Arc<dyn TranscriptPort>>,
    transcript: Mutex<Transcript>,
}

impl AdvisorService {
    /// Create a new advisor service.
    ///
    /// # Arguments
    /// * `advisor` - Backend implementation (HTTP, Mock, etc.)
    /// * `sink` - Optional transcript view, refreshed after every answered submission
    pub fn new(advisor: Arc<dyn AdvisorPort>, sink: Option<Arc<dyn TranscriptPort>>) -> Self {
        Self {
            advisor,
            sink,
            transcript: Mutex::new(Transcript::new()),
        }
    }

    /// Submit raw form fields keyed by wire name.
    ///
    /// Never fails: validation errors are returned, backend errors fall back to canned advice
    /// and export errors are logged.
    pub async fn submit(&self, fields: &HashMap<String, String>) -> SubmitOutcome {
        let profile = match validate(fields) {
            ValidationResult::Valid(profile) => profile,
            ValidationResult::Invalid(errors) => {
                info!(errors = errors.len(), "submission blocked by validation");
                return SubmitOutcome::Rejected(errors);
            }
        };

        self.transcript
            .lock()
            .await
            .push(ChatMessage::student(profile_summary(&profile)));

        let request = RecommendationRequest::from_profile(&profile);
        let (content, fallback) = match self.advisor.recommend(&request).await {
            Ok(answer) => (answer, false),
            Err(e) => {
                warn!(error = %e, "recommendation unavailable, using mock response");
                (mock_recommendation(&request), true)
            }
        };

        let reply = ChatMessage::ai(content);
        self.transcript.lock().await.push(reply.clone());
        info!(fallback, "recommendation delivered");

        if let Err(e) = self.export_transcript().await {
            warn!(error = %e, "transcript export failed");
        }

        SubmitOutcome::Answered { reply, fallback }
    }

    /// Snapshot of the conversation so far.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.messages().to_vec()
    }

    /// Write the rendered transcript view. `Ok(None)` when no sink is configured.
    pub async fn export_transcript(&self) -> Result<Option<PathBuf>, DomainError> {
        let Some(sink) = &self.sink else {
            return Ok(None);
        };
        let messages = self.messages().await;
        sink.export(&messages).await.map(Some)
    }
}
