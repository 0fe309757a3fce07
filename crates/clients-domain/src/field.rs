//! Named input slots shared by the client forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One independently validated input slot of a client form.
///
/// Variant order is the render and validation order of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientField {
    FirstName,
    LastName,
    Company,
    Email,
    Phone,
}

impl ClientField {
    pub const ALL: [ClientField; 5] = [
        ClientField::FirstName,
        ClientField::LastName,
        ClientField::Company,
        ClientField::Email,
        ClientField::Phone,
    ];

    /// Wire key used in request payloads.
    pub fn key(self) -> &'static str {
        match self {
            ClientField::FirstName => "firstName",
            ClientField::LastName => "lastName",
            ClientField::Company => "company",
            ClientField::Email => "email",
            ClientField::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClientField::FirstName => "First name",
            ClientField::LastName => "Last name",
            ClientField::Company => "Company",
            ClientField::Email => "Email",
            ClientField::Phone => "Phone",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
