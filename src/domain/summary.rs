//! Chat text builders: profile summary, welcome and fallback advice.
//!
//! Output is raw markdown; it goes through the renderer like any other message.

use crate::domain::{RecommendationRequest, StudentProfile};

/// First advisor turn shown before any submission.
pub const WELCOME_TEXT: &str = "👋 Welcome to the SLIIT AI Academic & Elective Advisor for year 4 semester 1! Fill in your academic profile above and click **Get Recommendation** to receive personalized elective and academic guidance.";

/// Substituted when the backend answers without an `answer`.
pub const NO_RECOMMENDATION_TEXT: &str = "No recommendation received.";

/// The student's turn: a markdown list of every profile field.
pub fn profile_summary(p: &StudentProfile) -> String {
    format!(
        "📋 **My Profile:**\n\
         - Specialization: {}\n\
         - Cumulative GPA: {}\n\
         - Cumulative Credits: {}\n\
         - Cumulative Grade Points: {}\n\
         - Faculty: {}\n\
         - Strong Subjects: {}\n\
         - Weak Subjects: {}\n\
         - Career Interest: {}\n\
         - Preferred Difficulty: {}\n\
         - Preferred Language: {}",
        p.specialization,
        p.gpa,
        p.credits,
        p.grade_points,
        p.faculty,
        p.strong_subjects,
        p.weak_subjects,
        p.career_interest,
        p.difficulty,
        p.language
    )
}

/// Canned advice used when the backend cannot be reached.
pub fn mock_recommendation(req: &RecommendationRequest) -> String {
    format!(
        "Based on your profile, here are my recommendations:\n\n\
         **Recommended Electives:**\n\
         - Machine Learning Fundamentals\n\
         - Data Visualization & Analytics\n\
         - Cloud Computing Essentials\n\n\
         **Study Tips:**\n\
         - Focus on strengthening {} with online resources\n\
         - Leverage your strengths in {} for project work\n\n\
         **Career Path:** Your interest in {} aligns well with your profile. \
         Consider joining related student clubs and pursuing certifications.\n\n\
         > *This is a mock response. Connect the backend API for real recommendations.*",
        req.weak, req.strong, req.career
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_profile;
    use crate::domain::markdown::render;

    #[test]
    fn test_profile_summary_lists_every_field() {
        let summary = profile_summary(&sample_profile());
        assert!(summary.starts_with("📋 **My Profile:**\n- Specialization: IT\n"));
        assert_eq!(summary.lines().filter(|l| l.starts_with("- ")).count(), 10);
        assert!(summary.ends_with("- Preferred Language: English"));
    }

    #[test]
    fn test_summary_renders_as_single_list() {
        let html = render(&profile_summary(&sample_profile()));
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("<li>").count(), 10);
        assert!(html.contains("<strong>My Profile:</strong>"));
    }

    #[test]
    fn test_mock_mentions_profile() {
        let text = mock_recommendation(&RecommendationRequest::from_profile(&sample_profile()));
        assert!(text.contains("Focus on strengthening None with online resources"));
        assert!(text.contains("strengths in Coding"));
        assert!(text.contains("Your interest in AI aligns"));
        assert!(text.contains("pursuing certifications.\n\n> *This is a mock response."));
    }

    #[test]
    fn test_mock_renders_two_lists_and_a_quote() {
        let html = render(&mock_recommendation(&RecommendationRequest::from_profile(&sample_profile())));
        assert_eq!(html.matches("<ul").count(), 2);
        assert_eq!(html.matches("<blockquote").count(), 1);
    }
}
