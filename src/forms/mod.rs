//! Form state and validation for the client screens.

pub mod controller;
pub mod validation;

pub use controller::FormController;
pub use validation::{
    is_email, ErrorKind, FieldErrors, FieldRules, Rule, ValidationError, ValidationSchema,
};
