//! Declarative validation schema for client forms.
//!
//! A schema is plain data: an ordered list of fields, each with an ordered
//! list of rules. [`ValidationSchema::validate`] walks it and reports the
//! first violated rule per field.

use std::collections::BTreeMap;
use std::fmt;

use clients_domain::{ClientField, ClientFields};
use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape accepted by HTML `type=email` inputs.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Errors reported per field, ordered by field.
pub type FieldErrors = BTreeMap<ClientField, ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Required => "required",
            ErrorKind::InvalidFormat => "invalid format",
        };
        f.write_str(label)
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Built-in constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails on the empty string only. Whitespace counts as a value.
    Required { message: &'static str },
    /// Fails on a non-empty value that is not shaped like an email address.
    Email { message: &'static str },
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required { message } => {
                if value.is_empty() {
                    Err(ValidationError::new(ErrorKind::Required, *message))
                } else {
                    Ok(())
                }
            }
            Rule::Email { message } => {
                if value.is_empty() || is_email(value) {
                    Ok(())
                } else {
                    Err(ValidationError::new(ErrorKind::InvalidFormat, *message))
                }
            }
        }
    }
}

/// Returns `true` when `value` has the shape of an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Ordered rules attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: ClientField,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: ClientField, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }
}

/// Metadata describing every constrained field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: Vec<FieldRules>,
}

impl ValidationSchema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Schema shared by the new-client and edit-client screens.
    pub fn client() -> Self {
        Self::new(vec![
            FieldRules::new(
                ClientField::FirstName,
                vec![Rule::Required {
                    message: "First name is required",
                }],
            ),
            FieldRules::new(
                ClientField::LastName,
                vec![Rule::Required {
                    message: "Last name is required",
                }],
            ),
            FieldRules::new(
                ClientField::Company,
                vec![Rule::Required {
                    message: "Company is required",
                }],
            ),
            FieldRules::new(
                ClientField::Email,
                vec![
                    Rule::Required {
                        message: "Email is required",
                    },
                    Rule::Email {
                        message: "Email is not valid",
                    },
                ],
            ),
        ])
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Evaluates every field against its rules. Pure in `values`.
    pub fn validate(&self, values: &ClientFields) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for entry in &self.fields {
            let value = values.get(entry.field);
            if let Some(err) = entry.rules.iter().find_map(|rule| rule.check(value).err()) {
                errors.insert(entry.field, err);
            }
        }
        errors
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::client()
    }
}
