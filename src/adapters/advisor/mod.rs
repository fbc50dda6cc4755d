//! Advisor adapters. Implement AdvisorPort.
//!
//! HTTP backend for real recommendations, mock adapter for offline use and tests.

pub mod http_adapter;
pub mod mock_adapter;

pub use http_adapter::HttpAdvisorAdapter;
pub use mock_adapter::MockAdvisorAdapter;
