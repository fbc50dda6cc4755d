//! Implements TranscriptPort as a single self-contained HTML page.
//!
//! Every message is rendered exactly once per export. The page is a view: nothing reads it back.

use crate::domain::{ChatMessage, ChatRole, DomainError, RenderMode, render_with};
use crate::ports::TranscriptPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Academic &amp; Elective Advisor</title>
<style>
body { font-family: sans-serif; background: #0b1f3a; margin: 0; padding: 1rem; }
.chat { max-width: 48rem; margin: 0 auto; display: flex; flex-direction: column; gap: .75rem; }
.bubble { padding: .75rem 1rem; border-radius: 1rem; max-width: 80%; line-height: 1.4; }
.bubble.student { align-self: flex-end; background: #f5a623; color: #1a1a1a; }
.bubble.ai { align-self: flex-start; background: #ffffff; color: #1a1a1a; }
.bubble time { display: block; font-size: .7rem; opacity: .6; margin-top: .35rem; }
.list-disc { list-style: disc; } .pl-4 { padding-left: 1rem; }
.border-l-2 { border-left: 2px solid #1d3b66; } .pl-3 { padding-left: .75rem; }
.italic { font-style: italic; } .opacity-80 { opacity: .8; }
</style>
</head>
<body>
<div class="chat">
"#;

const PAGE_TAIL: &str = "</div>\n</body>\n</html>\n";

/// Writes `transcript.html` under the configured directory.
pub struct HtmlTranscriptWriter {
    path: PathBuf,
    mode: RenderMode,
}

impl HtmlTranscriptWriter {
    pub fn new(dir: impl AsRef<Path>, mode: RenderMode) -> Self {
        Self {
            path: dir.as_ref().join("transcript.html"),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn bubble(&self, message: &ChatMessage) -> String {
        let class = match message.role {
            ChatRole::Student => "student",
            ChatRole::Ai => "ai",
        };
        format!(
            "<div class=\"bubble {}\"><div>{}</div><time>{}</time></div>\n",
            class,
            render_with(&message.content, self.mode),
            message.time_label()
        )
    }

    fn page(&self, messages: &[ChatMessage]) -> String {
        let mut html = String::from(PAGE_HEAD);
        for message in messages {
            html.push_str(&self.bubble(message));
        }
        html.push_str(PAGE_TAIL);
        html
    }

    /// Write-replace: temp file, fsync, rename.
    async fn write_atomic(&self, contents: &str) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Transcript(format!("create dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("html.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Transcript(format!("create temp file: {}", e)))?;
        f.write_all(contents.as_bytes())
            .await
            .map_err(|e| DomainError::Transcript(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Transcript(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Transcript(format!("atomic rename failed: {}", e)))
    }
}

#[async_trait::async_trait]
impl TranscriptPort for HtmlTranscriptWriter {
    async fn export(&self, messages: &[ChatMessage]) -> Result<PathBuf, DomainError> {
        self.write_atomic(&self.page(messages)).await?;
        info!(path = %self.path.display(), messages = messages.len(), "transcript exported");
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_renders_each_message_once() {
        let dir = tempfile::tempdir().unwrap();
        let writer = HtmlTranscriptWriter::new(dir.path(), RenderMode::Structured);
        let messages = vec![
            ChatMessage::student("**bold**"),
            ChatMessage::ai("- one\n- two"),
        ];

        let path = writer.export(&messages).await.unwrap();
        let html = std::fs::read_to_string(&path).unwrap();

        assert!(html.contains("<div class=\"bubble student\"><div><strong>bold</strong></div>"));
        assert!(html.contains("<li>one</li><li>two</li>"));
        assert_eq!(html.matches("<ul").count(), 1);
        assert!(!dir.path().join("transcript.html.tmp").exists());
    }

    #[tokio::test]
    async fn test_export_overwrites_previous_view() {
        let dir = tempfile::tempdir().unwrap();
        let writer = HtmlTranscriptWriter::new(dir.path().join("nested"), RenderMode::Compat);

        writer.export(&[ChatMessage::ai("first")]).await.unwrap();
        let path = writer
            .export(&[ChatMessage::ai("first"), ChatMessage::ai("> second")])
            .await
            .unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert_eq!(html.matches("class=\"bubble ai\"").count(), 2);
        assert!(html.contains("<blockquote class='border-l-2"));
    }
}
