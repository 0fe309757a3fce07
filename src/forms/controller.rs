use std::collections::BTreeSet;

use clients_domain::{ClientField, ClientFields};

use super::validation::{FieldErrors, ValidationError, ValidationSchema};

/// Explicit state of one mounted client form.
///
/// Errors are always recomputed from the full value set. Whether an error is
/// shown is a separate question answered by [`FormController::visible_error`].
#[derive(Debug, Clone)]
pub struct FormController {
    schema: ValidationSchema,
    values: ClientFields,
    touched: BTreeSet<ClientField>,
    errors: FieldErrors,
    submit_count: u32,
}

impl FormController {
    pub fn new(schema: ValidationSchema, initial: ClientFields) -> Self {
        let errors = schema.validate(&initial);
        Self {
            schema,
            values: initial,
            touched: BTreeSet::new(),
            errors,
            submit_count: 0,
        }
    }

    /// Blank form for the new-client screen.
    pub fn empty() -> Self {
        Self::new(ValidationSchema::client(), ClientFields::default())
    }

    pub fn values(&self) -> &ClientFields {
        &self.values
    }

    pub fn value(&self, field: ClientField) -> &str {
        self.values.get(field)
    }

    pub fn set_value(&mut self, field: ClientField, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate();
    }

    /// Records a blur. Touched fields never revert to pristine.
    pub fn touch(&mut self, field: ClientField) {
        self.touched.insert(field);
        self.revalidate();
    }

    pub fn is_touched(&self, field: ClientField) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> &BTreeSet<ClientField> {
        &self.touched
    }

    /// Every current error, shown or not.
    pub fn current_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error to render for `field`, which requires the field to be touched.
    pub fn visible_error(&self, field: ClientField) -> Option<&ValidationError> {
        if self.is_touched(field) {
            self.errors.get(&field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Touches every field and revalidates. Returns the values to send only
    /// when the whole form is valid.
    pub fn submit(&mut self) -> Option<ClientFields> {
        self.submit_count += 1;
        self.touched.extend(ClientField::ALL);
        self.revalidate();
        if self.is_valid() {
            Some(self.values.clone())
        } else {
            None
        }
    }

    /// Replaces the values wholesale and forgets interaction history.
    pub fn reset(&mut self, initial: ClientFields) {
        self.values = initial;
        self.touched.clear();
        self.submit_count = 0;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::empty()
    }
}
