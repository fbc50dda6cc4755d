//! Student profile schema. Declarative field rules, all evaluated on every call.
//!
//! The rule table is an ordered list of (field, check, message). Numeric fields go through
//! an explicit parse step first; the reported message is the same for a parse failure and
//! an out-of-range value, the parse outcome is only visible in debug logs.

use crate::domain::StudentProfile;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use tracing::debug;

/// The ten profile fields, in declaration order. `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Specialization,
    Gpa,
    Credits,
    GradePoints,
    Faculty,
    CareerInterest,
    StrongSubjects,
    WeakSubjects,
    Difficulty,
    Language,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        ProfileField::Specialization,
        ProfileField::Gpa,
        ProfileField::Credits,
        ProfileField::GradePoints,
        ProfileField::Faculty,
        ProfileField::CareerInterest,
        ProfileField::StrongSubjects,
        ProfileField::WeakSubjects,
        ProfileField::Difficulty,
        ProfileField::Language,
    ];

    /// Form / wire key (camelCase).
    pub fn key(self) -> &'static str {
        match self {
            Self::Specialization => "specialization",
            Self::Gpa => "gpa",
            Self::Credits => "credits",
            Self::GradePoints => "gradePoints",
            Self::Faculty => "faculty",
            Self::CareerInterest => "careerInterest",
            Self::StrongSubjects => "strongSubjects",
            Self::WeakSubjects => "weakSubjects",
            Self::Difficulty => "difficulty",
            Self::Language => "language",
        }
    }

    /// Human-readable label used by the form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Specialization => "Specialization",
            Self::Gpa => "Cumulative GPA",
            Self::Credits => "Cumulative Credits",
            Self::GradePoints => "Cumulative Grade Points",
            Self::Faculty => "Faculty",
            Self::CareerInterest => "Career Interest",
            Self::StrongSubjects => "Strong Subjects",
            Self::WeakSubjects => "Weak Subjects",
            Self::Difficulty => "Preferred Difficulty",
            Self::Language => "Preferred Language",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a numeric field did not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    Empty,
    Malformed,
    NonFinite,
    /// Well-formed whole number beyond `i64`. Carries the sign.
    OutOfRange { negative: bool },
}

/// Parse a decimal after trimming. NaN and infinities are rejected.
pub fn parse_decimal(raw: &str) -> Result<f64, NumberError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }
    let n: f64 = s.parse().map_err(|_| NumberError::Malformed)?;
    if !n.is_finite() {
        return Err(NumberError::NonFinite);
    }
    Ok(n)
}

/// Parse a whole number after trimming.
pub fn parse_integer(raw: &str) -> Result<i64, NumberError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }
    s.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => NumberError::OutOfRange { negative: false },
        IntErrorKind::NegOverflow => NumberError::OutOfRange { negative: true },
        _ => NumberError::Malformed,
    })
}

struct FieldRule {
    field: ProfileField,
    check: fn(&str) -> bool,
    message: &'static str,
}

fn non_empty(raw: &str) -> bool {
    !raw.is_empty()
}

fn non_blank(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn gpa_in_range(raw: &str) -> bool {
    match parse_decimal(raw) {
        Ok(gpa) => (0.0..=4.0).contains(&gpa),
        Err(reason) => {
            debug!(field = "gpa", ?reason, "numeric parse failed");
            false
        }
    }
}

fn credits_positive(raw: &str) -> bool {
    match parse_integer(raw) {
        Ok(credits) => credits > 0,
        Err(NumberError::OutOfRange { negative }) => !negative,
        Err(reason) => {
            debug!(field = "credits", ?reason, "numeric parse failed");
            false
        }
    }
}

fn grade_points_non_negative(raw: &str) -> bool {
    match parse_decimal(raw) {
        Ok(points) => points >= 0.0,
        Err(reason) => {
            debug!(field = "gradePoints", ?reason, "numeric parse failed");
            false
        }
    }
}

static RULES: [FieldRule; 10] = [
    FieldRule {
        field: ProfileField::Specialization,
        check: non_blank,
        message: "Specialization is required",
    },
    FieldRule {
        field: ProfileField::Gpa,
        check: gpa_in_range,
        message: "GPA must be between 0 and 4.0",
    },
    FieldRule {
        field: ProfileField::Credits,
        check: credits_positive,
        message: "Credits must be a positive whole number",
    },
    FieldRule {
        field: ProfileField::GradePoints,
        check: grade_points_non_negative,
        message: "Grade points must be zero or more",
    },
    FieldRule {
        field: ProfileField::Faculty,
        check: non_empty,
        message: "Faculty is required",
    },
    FieldRule {
        field: ProfileField::CareerInterest,
        check: non_empty,
        message: "Career interest is required",
    },
    FieldRule {
        field: ProfileField::StrongSubjects,
        check: non_empty,
        message: "Strong subjects are required",
    },
    FieldRule {
        field: ProfileField::WeakSubjects,
        check: non_empty,
        message: "Weak subjects are required",
    },
    FieldRule {
        field: ProfileField::Difficulty,
        check: non_empty,
        message: "Preferred difficulty is required",
    },
    FieldRule {
        field: ProfileField::Language,
        check: non_empty,
        message: "Preferred language is required",
    },
];

fn rule_for(field: ProfileField) -> &'static FieldRule {
    // RULES holds exactly one rule per field, in ProfileField order.
    &RULES[field as usize]
}

/// Per-field messages, iterated in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ProfileField, String>);

impl ValidationErrors {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Keyed by wire name, for callers that speak in form keys.
    pub fn to_key_map(&self) -> Vec<(&'static str, String)> {
        self.0.iter().map(|(f, m)| (f.key(), m.clone())).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Outcome of validating a profile submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(StudentProfile),
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<StudentProfile, ValidationErrors> {
        match self {
            Self::Valid(profile) => Ok(profile),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Validate raw form fields keyed by wire name. Missing keys are invalid.
pub fn validate(fields: &HashMap<String, String>) -> ValidationResult {
    validate_with(|field| fields.get(field.key()).map(String::as_str))
}

/// Validate an untyped JSON object. Missing keys and non-string values are invalid.
pub fn validate_json(value: &Value) -> ValidationResult {
    validate_with(|field| value.get(field.key()).and_then(Value::as_str))
}

/// Check a single field, e.g. on every keystroke/change.
pub fn validate_field(field: ProfileField, raw: &str) -> Result<(), &'static str> {
    let rule = rule_for(field);
    if (rule.check)(raw) {
        Ok(())
    } else {
        Err(rule.message)
    }
}

fn validate_with<'a>(lookup: impl Fn(ProfileField) -> Option<&'a str>) -> ValidationResult {
    let mut errors = BTreeMap::new();
    for rule in &RULES {
        let passed = lookup(rule.field).is_some_and(|raw| (rule.check)(raw));
        if !passed {
            errors.insert(rule.field, rule.message.to_string());
        }
    }

    if !errors.is_empty() {
        debug!(errors = errors.len(), "profile rejected");
        return ValidationResult::Invalid(ValidationErrors(errors));
    }

    let take = |field| lookup(field).unwrap_or_default().to_string();
    ValidationResult::Valid(StudentProfile {
        specialization: take(ProfileField::Specialization),
        gpa: take(ProfileField::Gpa),
        credits: take(ProfileField::Credits),
        grade_points: take(ProfileField::GradePoints),
        faculty: take(ProfileField::Faculty),
        career_interest: take(ProfileField::CareerInterest),
        strong_subjects: take(ProfileField::StrongSubjects),
        weak_subjects: take(ProfileField::WeakSubjects),
        difficulty: take(ProfileField::Difficulty),
        language: take(ProfileField::Language),
    })
}
