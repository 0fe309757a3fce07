use colored::Colorize;
use std::fmt;

use clients_domain::ClientRecord;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Banner,
    Section,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Banner | MessageKind::Section => ("", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Banner => format!(" {} ", text),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Banner => formatted.bold().on_white().black().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn banner(message: impl fmt::Display) {
    print(MessageKind::Banner, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Renders the listing as aligned columns.
pub fn client_table(clients: &[ClientRecord]) -> Vec<String> {
    let mut lines = vec![format!("{:<28} {:<24} {}", "Name", "Company", "Email")
        .bold()
        .to_string()];
    lines.extend(clients.iter().map(|client| {
        format!(
            "{:<28} {:<24} {}",
            client.display_name(),
            client.company,
            client.email
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clients_domain::{ClientFields, ClientId};

    #[test]
    fn table_has_header_and_one_line_per_client() {
        colored::control::set_override(false);
        let client = ClientRecord::from_fields(
            ClientId::new("1"),
            ClientFields {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                company: "Acme".into(),
                email: "jane@acme.com".into(),
                phone: String::new(),
            },
        );

        let lines = client_table(&[client]);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("Jane Doe"));
        assert!(lines[1].ends_with("jane@acme.com"));
    }
}
