//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the message renderer and the profile schema live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod markdown;
pub mod profile_schema;
pub mod summary;
pub mod transcript;

pub use entities::{
    ChatMessage, ChatRole, RecommendationRequest, RecommendationResponse, StudentProfile,
};
pub use errors::DomainError;
pub use markdown::{RenderMode, render, render_compat, render_with};
pub use profile_schema::{
    ProfileField, ValidationErrors, ValidationResult, validate, validate_field, validate_json,
};
pub use transcript::Transcript;
