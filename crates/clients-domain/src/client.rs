//! Domain types representing client business records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::field::ClientField;

/// Opaque identifier assigned by the remote system once a client exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The five editable values of a client, as typed by the user.
///
/// Doubles as the form value map and the create/update input payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFields {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    /// Optional on the wire: a missing key and `null` both read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ClientFields {
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::FirstName => &self.first_name,
            ClientField::LastName => &self.last_name,
            ClientField::Company => &self.company,
            ClientField::Email => &self.email,
            ClientField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: ClientField, value: impl Into<String>) {
        let slot = match field {
            ClientField::FirstName => &mut self.first_name,
            ClientField::LastName => &mut self.last_name,
            ClientField::Company => &mut self.company,
            ClientField::Email => &mut self.email,
            ClientField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Builder-style setter used by fixtures and prompts.
    pub fn with(mut self, field: ClientField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// A client as stored by the remote system.
///
/// List results omit `phone`, so it is optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ClientRecord {
    pub fn from_fields(id: ClientId, fields: ClientFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            company: fields.company,
            email: fields.email,
            phone: Some(fields.phone),
        }
    }

    /// Returns the editable values, with an absent phone read as empty.
    pub fn fields(&self) -> ClientFields {
        ClientFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
        }
    }

    /// Overwrites the editable values, keeping the identifier.
    pub fn apply(&mut self, fields: ClientFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.company = fields.company;
        self.email = fields.email;
        self.phone = Some(fields.phone);
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_use_camel_case_wire_keys() {
        let fields = ClientFields::default()
            .with(ClientField::FirstName, "Jane")
            .with(ClientField::LastName, "Doe");
        let json = serde_json::to_value(&fields).expect("serialize fields");

        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn list_item_without_phone_decodes() {
        let json = r#"{"id":"7","firstName":"Jane","lastName":"Doe","company":"Acme","email":"jane@acme.com"}"#;
        let record: ClientRecord = serde_json::from_str(json).expect("decode record");

        assert_eq!(record.id, ClientId::new("7"));
        assert_eq!(record.phone, None);
        assert_eq!(record.fields().phone, "");
    }

    #[test]
    fn null_phone_reads_as_empty() {
        let json = r#"{"firstName":"Jane","lastName":"Doe","company":"Acme","email":"jane@acme.com","phone":null}"#;
        let fields: ClientFields = serde_json::from_str(json).expect("decode fields");

        assert_eq!(fields.phone, "");
        assert_eq!(fields.first_name, "Jane");
    }

    #[test]
    fn get_and_set_address_every_field() {
        let mut fields = ClientFields::default();
        for field in ClientField::ALL {
            fields.set(field, field.label());
        }
        for field in ClientField::ALL {
            assert_eq!(fields.get(field), field.label());
        }
    }

    #[test]
    fn field_keys_round_trip() {
        assert_eq!(ClientField::from_key("company"), Some(ClientField::Company));
        assert_eq!(ClientField::from_key("nombre"), None);
    }
}
