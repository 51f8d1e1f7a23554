/// User domain types
use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Auto-assigned row identifier
    pub id: i64,

    /// Unique username
    pub username: String,

    /// Insertion timestamp as stored by `SQLite` (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub created_at: String,
}

/// A username that has been checked to be non-blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Accept any value that is not empty or whitespace-only.
    ///
    /// The value is stored as given; surrounding whitespace is not trimmed,
    /// so lookups match exactly what the caller sent.
    ///
    /// Whitespace-only names are refused even though `SQLite` would store
    /// them: HTTP strips surrounding whitespace from header values, so such a
    /// user could never be found through the verify header.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RegistryError::missing("username"));
        }
        Ok(Self(raw))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Result of inserting a user
///
/// A uniqueness violation is an expected outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was written
    Inserted(User),
    /// A user with this username already exists; nothing was written
    Conflict,
}

impl InsertOutcome {
    /// Whether a row was written
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    /// Convert into a `Result`, turning a conflict into `RegistryError::Duplicate`
    pub fn into_result(self, username: &Username) -> Result<User> {
        match self {
            Self::Inserted(user) => Ok(user),
            Self::Conflict => Err(RegistryError::Duplicate(username.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            Username::parse(""),
            Err(RegistryError::MissingParameter("username".to_string()))
        );
        assert!(Username::parse(" \t ").is_err());
    }

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let username = Username::parse(" bob ").unwrap();
        assert_eq!(username.as_str(), " bob ");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Username = serde_json::from_str("\"toms\"").unwrap();
        assert_eq!(ok.to_string(), "toms");

        assert!(serde_json::from_str::<Username>("\"\"").is_err());
    }

    #[test]
    fn test_conflict_into_duplicate() {
        let username = Username::parse("alice").unwrap();
        let err = InsertOutcome::Conflict.into_result(&username).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("alice".to_string()));
    }

    #[test]
    fn test_inserted_into_user() {
        let username = Username::parse("alice").unwrap();
        let user = User {
            id: 7,
            username: "alice".to_string(),
            created_at: "2025-01-05 10:00:00".to_string(),
        };
        let outcome = InsertOutcome::Inserted(user.clone());
        assert!(outcome.is_inserted());
        assert_eq!(outcome.into_result(&username).unwrap(), user);
    }
}
