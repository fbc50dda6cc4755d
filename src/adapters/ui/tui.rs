//! Implements InputPort. Inquire menu + chat bubbles printed to the terminal.

use crate::adapters::ui::{form, progress};
use crate::domain::{ChatMessage, ChatRole, DomainError, ValidationErrors};
use crate::ports::InputPort;
use crate::usecases::{AdvisorService, SubmitOutcome};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use inquire::Select;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use tracing::debug;

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(PromptColor::LightYellow));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Recommend,
    ShowTranscript,
    ExportTranscript,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 4] = [
        MenuAction::Recommend,
        MenuAction::ShowTranscript,
        MenuAction::ExportTranscript,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recommend => "Get Recommendation",
            Self::ShowTranscript => "Show conversation",
            Self::ExportTranscript => "Export conversation (HTML)",
            Self::Quit => "Quit",
        })
    }
}

fn role_header(role: ChatRole) -> (&'static str, Color) {
    match role {
        ChatRole::Student => ("You", Color::Yellow),
        ChatRole::Ai => ("Advisor", Color::Cyan),
    }
}

/// Print one bubble. The terminal shows raw markdown; HTML is only for the exported view.
fn print_message(message: &ChatMessage) {
    let mut out = stdout();
    let (who, color) = role_header(message.role);
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("\n{} · {}\n", who, message.time_label())));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    for line in message.content.lines() {
        let _ = out.execute(Print(format!("  {}\n", line)));
    }
    let _ = out.flush();
}

fn print_note(text: &str, color: Color) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(format!("{}\n", text)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

fn print_errors(errors: &ValidationErrors) {
    print_note("Please fix the following before submitting:", Color::Red);
    for (field, message) in errors.iter() {
        print_note(&format!("  • {}: {}", field.label(), message), Color::Red);
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<AdvisorService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<AdvisorService>) -> Self {
        Self { service }
    }

    async fn recommend(&self) -> Result<(), DomainError> {
        let Some(fields) = form::prompt_profile()? else {
            debug!("profile form abandoned");
            return Ok(());
        };

        let pb = progress::spinner("Processing...");
        let outcome = self.service.submit(&fields).await;
        pb.finish_and_clear();

        match outcome {
            SubmitOutcome::Rejected(errors) => print_errors(&errors),
            SubmitOutcome::Answered { reply, fallback } => {
                let messages = self.service.messages().await;
                if let Some(student) = messages.iter().rev().find(|m| m.role == ChatRole::Student)
                {
                    print_message(student);
                }
                print_message(&reply);
                if fallback {
                    print_note(
                        "(recommendation backend unreachable; showing offline advice)",
                        Color::DarkGrey,
                    );
                }
            }
        }
        Ok(())
    }

    async fn show_transcript(&self) {
        for message in self.service.messages().await {
            print_message(&message);
        }
    }

    async fn export(&self) {
        match self.service.export_transcript().await {
            Ok(Some(path)) => print_note(
                &format!("Conversation written to {}", path.display()),
                Color::Green,
            ),
            Ok(None) => print_note("Transcript export is disabled.", Color::DarkGrey),
            Err(e) => print_note(&e.to_string(), Color::Red),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.show_transcript().await;

        loop {
            let picked = form::skippable(
                Select::new("What would you like to do?", MenuAction::ALL.to_vec())
                    .prompt_skippable(),
            )?;

            match picked.unwrap_or(MenuAction::Quit) {
                MenuAction::Recommend => self.recommend().await?,
                MenuAction::ShowTranscript => self.show_transcript().await,
                MenuAction::ExportTranscript => self.export().await,
                MenuAction::Quit => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels[0], "Get Recommendation");
        assert_eq!(labels.last().map(String::as_str), Some("Quit"));
    }

    #[test]
    fn test_role_headers_differ() {
        assert_ne!(role_header(ChatRole::Student).0, role_header(ChatRole::Ai).0);
    }
}
