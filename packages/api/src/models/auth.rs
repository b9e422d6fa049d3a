//! # Authentication payloads
//!
//! The API answers every successful sign-in (`/login`, `/register`,
//! `/google`) with an [`AuthResponse`]: the user's profile fields plus a
//! bearer token. `/me` answers with a [`UserProfile`], the same fields plus
//! the account's `active` flag and no token.
//!
//! Both normalize into the persisted [`SessionUser`] via
//! [`AuthResponse::into_session`] and [`UserProfile::into_user`], which is
//! the only place the API's representation meets the cached one.

use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionUser};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub token: String,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session {
            user: SessionUser {
                id: self.id,
                email: self.email,
                full_name: self.full_name,
                role: self.role,
                department: non_blank(self.department),
                phone: non_blank(self.phone),
            },
            token: self.token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl UserProfile {
    pub fn into_user(self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            department: non_blank(self.department),
            phone: non_blank(self.phone),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Self-registration body. `role` is the API's upper-case enum name.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// `{ "message": "..." }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_normalizes_into_session() {
        let json = r#"{
            "id": "c1", "email": "client@example.rw", "fullName": "Jean Niyibizi",
            "role": "client", "department": null, "phone": "", "token": "abc"
        }"#;
        let session = serde_json::from_str::<AuthResponse>(json).unwrap().into_session();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.role, Role::Client);
        assert!(session.user.department.is_none());
        assert!(session.user.phone.is_none());
    }

    #[test]
    fn test_profile_without_active_defaults_true() {
        let json = r#"{"id":"s1","email":"s@x.rw","fullName":"Marie","role":"STAFF","department":"Scheduling"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.active);
        let user = profile.into_user();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.department.as_deref(), Some("Scheduling"));
    }

    #[test]
    fn test_register_request_shape() {
        let req = RegisterRequest {
            email: "a@b.rw".into(),
            full_name: "A B".into(),
            role: Role::Client.as_api_value().into(),
            department: None,
            phone: None,
            password: "secret123".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "A B");
        assert_eq!(value["role"], "CLIENT");
        assert!(value.get("department").is_none());
    }

    #[test]
    fn test_reset_and_google_requests_are_camel_case() {
        let reset = serde_json::to_value(ResetPasswordRequest {
            email: "a@b.rw".into(),
            code: "123456".into(),
            new_password: "newpassword".into(),
        })
        .unwrap();
        assert_eq!(reset["newPassword"], "newpassword");

        let google = serde_json::to_value(GoogleLoginRequest { id_token: "jwt".into() }).unwrap();
        assert_eq!(google["idToken"], "jwt");
    }
}
