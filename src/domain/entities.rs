//! Domain entities. Pure data structures for the advising chat.
//!
//! No HTTP/terminal types here; adapters map into these.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A validated student profile. Every field stays textual, exactly as it came from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub specialization: String,
    pub gpa: String,
    pub credits: String,
    pub grade_points: String,
    pub faculty: String,
    pub career_interest: String,
    pub strong_subjects: String,
    pub weak_subjects: String,
    pub difficulty: String,
    pub language: String,
}

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Student,
    Ai,
}

/// One turn of the transcript. `content` is raw markdown; rendering happens at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn student(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Student, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Ai, content)
    }

    /// Hour and minute, e.g. "14:05".
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// JSON body posted to the recommendation backend.
///
/// Field names follow the backend contract, not the profile: `strong`, `weak`, `career`.
/// `gpa` is sent as a number; difficulty is not sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub gpa: f64,
    pub faculty: String,
    pub strong: String,
    pub weak: String,
    pub career: String,
    pub specialization: String,
    pub credits: String,
    pub grade_points: String,
    pub language: String,
}

impl RecommendationRequest {
    /// Build the request body. A profile that passed validation always has a numeric GPA;
    /// anything else degrades to 0.0.
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            gpa: profile.gpa.trim().parse().unwrap_or(0.0),
            faculty: profile.faculty.clone(),
            strong: profile.strong_subjects.clone(),
            weak: profile.weak_subjects.clone(),
            career: profile.career_interest.clone(),
            specialization: profile.specialization.clone(),
            credits: profile.credits.clone(),
            grade_points: profile.grade_points.clone(),
            language: profile.language.clone(),
        }
    }
}

/// Backend reply. Only `answer` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

#[cfg(test)]
pub(crate) fn sample_profile() -> StudentProfile {
    StudentProfile {
        specialization: "IT".into(),
        gpa: "3.5".into(),
        credits: "80".into(),
        grade_points: "300".into(),
        faculty: "Computing".into(),
        career_interest: "AI".into(),
        strong_subjects: "Coding".into(),
        weak_subjects: "None".into(),
        difficulty: "Moderate".into(),
        language: "English".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let req = RecommendationRequest::from_profile(&sample_profile());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["gpa"], serde_json::json!(3.5));
        assert_eq!(json["strong"], "Coding");
        assert_eq!(json["weak"], "None");
        assert_eq!(json["career"], "AI");
        assert_eq!(json["gradePoints"], "300");
        assert_eq!(json["credits"], "80");
        assert!(json.get("difficulty").is_none());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(json["careerInterest"], "AI");
        assert_eq!(json["strongSubjects"], "Coding");
    }

    #[test]
    fn test_response_without_answer() {
        let resp: RecommendationResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_none());
    }

    #[test]
    fn test_time_label_format() {
        let msg = ChatMessage::ai("hi");
        assert_eq!(msg.time_label().len(), 5);
        assert_eq!(msg.role, ChatRole::Ai);
    }
}
