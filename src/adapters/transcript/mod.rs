//! Transcript adapters. Implement TranscriptPort.

pub mod html_writer;

pub use html_writer::HtmlTranscriptWriter;
