//! Rust structs that represent database table mappings.
//!
//! Row types (`School`, `User`, ...) are what the API returns. The `New*`
//! types are the request payloads accepted on create and full update; they
//! never carry an id.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub postcode: String,
    pub phone: String,
    pub website: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub postcode: String,
    /// Accepted as a JSON number or string; stored as text so leading zeros survive.
    #[serde(deserialize_with = "number_or_string")]
    pub phone: String,
    pub website: String,
    pub domain: String,
}

/// A user account. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub account_type: String,
    pub school_id: Option<i64>,
    #[serde(skip)]
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub account_type: String,
    #[serde(default)]
    pub school_id: Option<i64>,
}

/// A booked supervision session between a supervisor and a client.
///
/// Participant ids become `None` when the referenced user is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub school_id: Option<i64>,
    pub supervisor_id: Option<i64>,
    pub supervisor_email: String,
    pub client_id: Option<i64>,
    pub client_email: String,
    pub date: NaiveDate,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    #[serde(default)]
    pub school_id: Option<i64>,
    pub supervisor_id: i64,
    pub supervisor_email: String,
    pub client_id: i64,
    pub client_email: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// A request to change an existing (or propose a new) session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEdit {
    pub id: i64,
    pub session_id: Option<i64>,
    pub school_id: Option<i64>,
    pub supervisor_id: Option<i64>,
    pub supervisor_email: String,
    pub client_id: i64,
    pub client_email: String,
    pub date: NaiveDate,
    pub request: String,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSessionEdit {
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub school_id: Option<i64>,
    pub supervisor_id: i64,
    pub supervisor_email: String,
    pub client_id: i64,
    pub client_email: String,
    pub date: NaiveDate,
    pub request: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n.to_string()),
        Raw::Text(s) => Ok(s),
    }
}
