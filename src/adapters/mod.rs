//! Infrastructure adapters. Implement ports.
//!
//! Recommendation backend, transcript view, terminal UI. Map errors to DomainError.

pub mod advisor;
pub mod transcript;
pub mod ui;
