//! # Persisted identity models
//!
//! The signed-in user is cached in local storage so a reload can render the
//! shell before the API has confirmed the token. These types are what gets
//! written there, and they are also what the API's auth payloads normalize to.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | One of `client`, `staff`, `admin`. Decides which shell and routes a session may use. |
//! | [`SessionUser`] | The cached profile: id, e-mail, full name, role, optional department and phone. |

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Access role of an account.
///
/// Deserializes from any casing (`staff`, `STAFF`, `Staff`, `sTaFf`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Staff,
    Admin,
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, &["client", "staff", "admin"]))
    }
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Client, Role::Staff, Role::Admin];

    /// Case-insensitive lookup by name.
    pub fn parse(value: &str) -> Option<Role> {
        let value = value.trim();
        Role::ALL.into_iter().find(|r| r.as_str().eq_ignore_ascii_case(value))
    }

    /// Lower-case name used in routes and the cached profile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Upper-case enum name the API expects in request bodies.
    pub fn as_api_value(&self) -> &'static str {
        match self {
            Role::Client => "CLIENT",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user's profile as cached in local storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SessionUser {
    /// Initials for the avatar bubble, e.g. "Jean Niyibizi" → "JN".
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.role.label()[..1].to_string()
        } else {
            initials
        }
    }

    /// Full name, falling back to e-mail when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "jean@example.rw".to_string(),
            full_name: name.to_string(),
            role: Role::Client,
            department: None,
            phone: None,
        }
    }

    #[test]
    fn test_role_accepts_api_casing() {
        let lower: Role = serde_json::from_str("\"staff\"").unwrap();
        let upper: Role = serde_json::from_str("\"STAFF\"").unwrap();
        assert_eq!(lower, Role::Staff);
        assert_eq!(upper, Role::Staff);
        let mixed: Role = serde_json::from_str("\"aDmIn\"").unwrap();
        assert_eq!(mixed, Role::Admin);
        assert!(serde_json::from_str::<Role>("\"guest\"").is_err());
        assert_eq!(Role::parse(" Client "), Some(Role::Client));
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Client.as_api_value(), "CLIENT");
    }

    #[test]
    fn test_session_user_json_shape() {
        let json = r#"{"id":"7","email":"a@b.rw","fullName":"Marie Uwase","role":"staff","department":"Scheduling"}"#;
        let parsed: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.full_name, "Marie Uwase");
        assert_eq!(parsed.department.as_deref(), Some("Scheduling"));
        assert!(parsed.phone.is_none());

        let written = serde_json::to_string(&parsed).unwrap();
        assert!(written.contains("\"fullName\":\"Marie Uwase\""));
        assert!(!written.contains("phone"));
    }

    #[test]
    fn test_initials_and_display_name() {
        assert_eq!(user("Jean Niyibizi").initials(), "JN");
        assert_eq!(user("  ").initials(), "C");
        assert_eq!(user("").display_name(), "jean@example.rw");
        assert_eq!(user("Jean").display_name(), "Jean");
    }
}
