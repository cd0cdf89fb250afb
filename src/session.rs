//! Signed-in identity and role.
//!
//! DESIGN
//! ======
//! `Session` is the exact shape persisted to the local slot. Field names are
//! serialized in camelCase so the stored blob reads
//! `{"id", "displayName", "email", "role"}` with no version field.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed classification controlling route access and navigation content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Both roles, in display order.
    pub const ALL: [Role; 2] = [Role::Teacher, Role::Student];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a role string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// The current signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque user identifier; never empty for a live session.
    pub id: String,
    /// Name shown in navigation and greetings.
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Whether this record satisfies the live-session invariant.
    ///
    /// The role half of the invariant is enforced by the type; only the id
    /// can be violated by a hand-edited or truncated blob.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Derive a display name from the local part of an email address.
///
/// Falls back to `"user"` when the local part is blank.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("user")
        .to_owned()
}
