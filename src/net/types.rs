//! Wire DTOs for the student API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Student ids arrive as either
//! strings or integers depending on the backing store, so they are normalized
//! to strings on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A registered student as returned by the student API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique student identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Creation timestamp as issued by the server (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp as issued by the server (ISO-8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Student {
    /// "First Last", trimmed when either part is blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// Registration payload: the student profile minus server-assigned fields,
/// plus the chosen password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /students/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful `POST /students/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub student: Student,
    /// Opaque session token, persisted in the token cookie.
    pub token: String,
}

/// Successful `GET /students/me` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub user: Student,
}

/// `POST /students/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
