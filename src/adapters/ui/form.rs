//! Profile form. One inquire prompt per field, validated on every edit.

use crate::domain::{DomainError, ProfileField, validate_field};
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};
use std::collections::HashMap;
use std::fmt;

/// A selectable option: stored `value`, shown `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const SPECIALIZATIONS: &[Choice] = &[
    choice("IT", "Information Technology (IT)"),
    choice("SE", "Software Engineering (SE)"),
    choice("DS", "Data Science (DS)"),
    choice("ISE", "Information Systems Engineering (ISE)"),
    choice("CS", "Cyber Security (CS)"),
    choice("IM", "Interactive Media (IM)"),
    choice("CSNE", "Computer Systems & Network Engineering (CSNE)"),
];

pub const FACULTIES: &[Choice] = &[
    choice("Faculty of Computing", "Faculty of Computing"),
    choice("Faculty of Engineering", "Faculty of Engineering"),
    choice("Faculty of Business", "Faculty of Business"),
];

pub const CAREER_INTERESTS: &[Choice] = &[
    choice("AI", "AI"),
    choice("Data Science", "Data Science"),
    choice("Cybersecurity", "Cybersecurity"),
    choice("Software Engineering", "Software Engineering"),
    choice("DevOps", "DevOps"),
    choice("General IT", "General IT"),
];

pub const DIFFICULTIES: &[Choice] = &[
    choice("Low", "Low"),
    choice("Moderate", "Moderate"),
    choice("High", "High"),
];

/// English first: it is the default selection.
pub const LANGUAGES: &[Choice] = &[
    choice("English", "English"),
    choice("Sinhala", "Sinhala"),
    choice("Tamil", "Tamil"),
];

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Select(&'static [Choice]),
    Text { placeholder: &'static str },
}

pub fn input_for(field: ProfileField) -> FieldInput {
    match field {
        ProfileField::Specialization => FieldInput::Select(SPECIALIZATIONS),
        ProfileField::Faculty => FieldInput::Select(FACULTIES),
        ProfileField::CareerInterest => FieldInput::Select(CAREER_INTERESTS),
        ProfileField::Difficulty => FieldInput::Select(DIFFICULTIES),
        ProfileField::Language => FieldInput::Select(LANGUAGES),
        ProfileField::Gpa => FieldInput::Text {
            placeholder: "e.g. 3.77",
        },
        ProfileField::Credits => FieldInput::Text {
            placeholder: "e.g. 84",
        },
        ProfileField::GradePoints => FieldInput::Text {
            placeholder: "e.g. 316.4",
        },
        ProfileField::StrongSubjects => FieldInput::Text {
            placeholder: "e.g. Math, OOP",
        },
        ProfileField::WeakSubjects => FieldInput::Text {
            placeholder: "e.g. Statistics",
        },
    }
}

/// Inquire validator backed by the profile schema's rule for `field`.
fn field_validator(
    field: ProfileField,
) -> impl Fn(&str) -> Result<Validation, CustomUserError> + Clone {
    move |input: &str| {
        Ok(match validate_field(field, input) {
            Ok(()) => Validation::Valid,
            Err(message) => Validation::Invalid(message.into()),
        })
    }
}

/// Esc / Ctrl-C mean "back to menu", not an error.
pub(crate) fn skippable<T>(
    result: Result<Option<T>, InquireError>,
) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

fn prompt_field(field: ProfileField) -> Result<Option<String>, DomainError> {
    match input_for(field) {
        FieldInput::Select(choices) => {
            let picked = skippable(
                Select::new(field.label(), choices.to_vec())
                    .with_starting_cursor(0)
                    .prompt_skippable(),
            )?;
            Ok(picked.map(|c| c.value.to_string()))
        }
        FieldInput::Text { placeholder } => skippable(
            Text::new(field.label())
                .with_placeholder(placeholder)
                .with_validator(field_validator(field))
                .prompt_skippable(),
        ),
    }
}

/// Ask for every field in declaration order. `Ok(None)` if the student backs out.
pub fn prompt_profile() -> Result<Option<HashMap<String, String>>, DomainError> {
    let mut fields = HashMap::new();
    for field in ProfileField::ALL {
        match prompt_field(field)? {
            Some(value) => {
                fields.insert(field.key().to_string(), value);
            }
            None => return Ok(None),
        }
    }
    Ok(Some(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ValidationResult, validate};

    #[test]
    fn test_every_field_has_an_input() {
        let selects = ProfileField::ALL
            .into_iter()
            .filter(|f| matches!(input_for(*f), FieldInput::Select(_)))
            .count();
        assert_eq!(selects, 5);
    }

    #[test]
    fn test_first_choices_form_a_valid_profile() {
        let mut fields = HashMap::new();
        for field in ProfileField::ALL {
            let value = match input_for(field) {
                FieldInput::Select(choices) => choices[0].value,
                FieldInput::Text { .. } => match field {
                    ProfileField::Gpa => "3.77",
                    ProfileField::Credits => "84",
                    ProfileField::GradePoints => "316.4",
                    _ => "Math, OOP",
                },
            };
            fields.insert(field.key().to_string(), value.to_string());
        }
        assert!(matches!(validate(&fields), ValidationResult::Valid(_)));
        assert_eq!(fields["language"], "English");
    }

    #[test]
    fn test_field_validator_uses_schema_messages() {
        let check = field_validator(ProfileField::Gpa);
        assert!(matches!(check("3.2"), Ok(Validation::Valid)));
        assert!(matches!(check("4.2"), Ok(Validation::Invalid(_))));
    }

    #[test]
    fn test_choice_displays_label() {
        assert_eq!(SPECIALIZATIONS[0].to_string(), "Information Technology (IT)");
    }
}
