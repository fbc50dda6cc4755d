//! Application use cases. Orchestrate domain logic via ports.

pub mod advisor_service;

pub use advisor_service::{AdvisorService, SubmitOutcome};
