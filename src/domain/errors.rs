//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The renderer and the profile schema
//! never fail and do not appear here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Recommendation request failed: {0}")]
    Advisor(String),

    #[error("Transcript export failed: {0}")]
    Transcript(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
