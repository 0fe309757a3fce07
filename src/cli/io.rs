use std::fmt;

use clients_domain::ClientField;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::forms::FormController;

use super::{output, CliError};

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Let the user pick one entry; returns its index.
pub fn choose(theme: &ColorfulTheme, prompt: &str, items: &[String]) -> Result<usize, CliError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}

/// Walks every field in order: each answer is a change followed by a blur.
pub fn fill_form(theme: &ColorfulTheme, form: &mut FormController) -> Result<(), CliError> {
    for field in ClientField::ALL {
        let value = Input::<String>::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(form.value(field))
            .allow_empty(true)
            .interact_text()?;
        form.set_value(field, value);
        form.touch(field);
        if let Some(err) = form.visible_error(field) {
            print_warning(err);
        }
    }
    Ok(())
}

/// Prints every error that is currently visible.
pub fn print_visible_errors(form: &FormController) {
    for field in ClientField::ALL {
        if let Some(err) = form.visible_error(field) {
            print_error(format!("{}: {}", field.label(), err));
        }
    }
}
