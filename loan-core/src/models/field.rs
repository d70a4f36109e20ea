use std::sync::OnceLock;

use regex::Regex;

/// A field-level validation function.
///
/// Returns a user-facing message when the value is rejected, `None` when it
/// passes. Validators only run against non-empty values; required-ness is
/// checked separately and first.
pub type Validator = fn(&str) -> Option<String>;

/// One choice in a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Input kind of a form field.
///
/// Choice kinds carry their options directly, so a select with no options
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Checkbox,
    Select { options: Vec<FieldOption> },
    Radio { options: Vec<FieldOption> },
}

impl FieldKind {
    /// Options for choice kinds, `None` for free-form kinds.
    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            Self::Select { options } | Self::Radio { options } => Some(options),
            _ => None,
        }
    }
}

/// Descriptor for a single data-collection field within a step.
///
/// `name` is the key the collected value is stored under in
/// [`FormData`](super::FormData).
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub validator: Option<Validator>,
}

impl FormField {
    /// A required field. Every field in the base catalog is required.
    pub fn required(name: &'static str, label: &str, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            required: true,
            placeholder: None,
            validator: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Built-in field validators used by the step catalog.
pub mod validators {
    use super::*;

    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

    /// Basic email shape: something@something.tld, no whitespace.
    pub fn email(value: &str) -> Option<String> {
        let re = EMAIL_RE
            .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));
        if re.is_match(value.trim()) {
            None
        } else {
            Some("Please enter a valid email address".to_string())
        }
    }

    /// Phone numbers must carry at least 10 digits; formatting characters
    /// like `(818) 555-0123` are accepted.
    pub fn phone(value: &str) -> Option<String> {
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if digits >= 10 {
            None
        } else {
            Some("Please enter a valid phone number".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_kind_exposes_options() {
        let kind = FieldKind::Select {
            options: vec![FieldOption::new("purchase", "Purchase")],
        };

        assert_eq!(kind.options().map(<[FieldOption]>::len), Some(1));
        assert_eq!(FieldKind::Text.options(), None);
    }

    #[test]
    fn email_validator_accepts_plain_addresses() {
        assert_eq!(validators::email("john@example.com"), None);
        assert_eq!(validators::email("  john@example.com  "), None);
    }

    #[test]
    fn email_validator_rejects_malformed_addresses() {
        assert!(validators::email("not-an-email").is_some());
        assert!(validators::email("a@b").is_some());
        assert!(validators::email("two words@example.com").is_some());
    }

    #[test]
    fn phone_validator_accepts_formatted_numbers() {
        assert_eq!(validators::phone("(818) 555-0123"), None);
        assert_eq!(validators::phone("8185550123"), None);
    }

    #[test]
    fn phone_validator_rejects_short_numbers() {
        assert!(validators::phone("555-0123").is_some());
        assert!(validators::phone("").is_some());
    }
}
