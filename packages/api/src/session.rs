//! # Authentication session
//!
//! [`SessionManager`] ties the persisted session ([`SessionStore`]) to the
//! authentication endpoints. The HTTP side sits behind the [`AuthBackend`]
//! trait so the flows can be exercised against an in-memory fake.
//!
//! | Flow | Endpoint | On success | On failure |
//! |------|----------|------------|------------|
//! | `restore` | none | cached session | `None` |
//! | `bootstrap` | `GET /api/auth/me` | fresh profile, token kept | both keys cleared |
//! | `login` | `POST /api/auth/login` | session persisted | nothing persisted |
//! | `signup` | `POST /api/auth/register` | session persisted | nothing persisted |
//! | `login_with_google` | `POST /api/auth/google` | session persisted | nothing persisted |
//! | `logout` | none | both keys cleared | n/a |

use store::{KeyValueStore, Role, Session, SessionStore};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, GoogleLoginRequest, LoginRequest, RegisterRequest, UserProfile};

/// A sign-in attempt that did not produce a session.
///
/// Displays as the message to show the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct AuthFailure(pub String);

impl AuthFailure {
    /// Status errors keep their message, including the bare status line.
    fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Status { message, .. } => AuthFailure(message),
            ApiError::Network(_) | ApiError::Decode(_) => AuthFailure(fallback.to_string()),
        }
    }
}

/// The authentication calls a [`SessionManager`] needs.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn google(&self, req: &GoogleLoginRequest) -> Result<AuthResponse, ApiError>;
    /// Profile of the user `token` belongs to.
    async fn me(&self, token: &str) -> Result<UserProfile, ApiError>;
}

impl AuthBackend for ApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        ApiClient::login(self, req).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        ApiClient::register(self, req).await
    }

    async fn google(&self, req: &GoogleLoginRequest) -> Result<AuthResponse, ApiError> {
        self.google_login(req).await
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.clone().with_token(Some(token.to_string())).me().await
    }
}

/// Fields collected by the signup page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl SignupForm {
    fn into_request(self) -> RegisterRequest {
        let phone = self.phone.trim().to_string();
        RegisterRequest {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            role: Role::Client.as_api_value().to_string(),
            department: None,
            phone: (!phone.is_empty()).then_some(phone),
            password: self.password,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionManager<S: KeyValueStore, B: AuthBackend> {
    store: SessionStore<S>,
    backend: B,
}

impl<S: KeyValueStore, B: AuthBackend> SessionManager<S, B> {
    pub fn new(store: S, backend: B) -> Self {
        Self {
            store: SessionStore::new(store),
            backend,
        }
    }

    /// Cached session, read without contacting the server.
    pub fn restore(&self) -> Option<Session> {
        self.store.load()
    }

    /// Validate the persisted token against `/api/auth/me`.
    ///
    /// Any failure downgrades to signed out and clears both keys.
    pub async fn bootstrap(&self) -> Option<Session> {
        let token = self.store.token()?;
        match self.backend.me(&token).await {
            Ok(profile) => {
                let user = profile.into_user();
                self.store.save_user(&user);
                tracing::info!("session restored for {}", user.email);
                Some(Session { user, token })
            }
            Err(e) => {
                tracing::warn!("stored session rejected: {e}");
                self.store.clear();
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthFailure> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let result = self.backend.login(&req).await;
        self.establish(result, "Login failed")
    }

    /// Register a client account and sign in as it.
    pub async fn signup(&self, form: SignupForm) -> Result<Session, AuthFailure> {
        let result = self.backend.register(&form.into_request()).await;
        self.establish(result, "Signup failed")
    }

    /// Exchange a Google ID token for a session.
    pub async fn login_with_google(&self, credential: &str) -> Result<Session, AuthFailure> {
        let req = GoogleLoginRequest {
            id_token: credential.to_string(),
        };
        let result = self.backend.google(&req).await;
        self.establish(result, "Google sign-in failed")
    }

    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("signed out");
    }

    fn establish(
        &self,
        result: Result<AuthResponse, ApiError>,
        fallback: &str,
    ) -> Result<Session, AuthFailure> {
        let session = result
            .map_err(|e| {
                tracing::warn!("{fallback}: {e}");
                AuthFailure::from_api(e, fallback)
            })?
            .into_session();
        self.store.save(&session);
        tracing::info!("signed in as {} ({})", session.user.email, session.role());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use store::session::{TOKEN_KEY, USER_KEY};
    use store::{MemoryStore, SessionUser};

    #[derive(Clone, Default)]
    struct FakeBackend {
        accounts: Arc<Mutex<Vec<(String, String, Role)>>>,
        registered: Arc<Mutex<Vec<RegisterRequest>>>,
        valid_token: Option<String>,
        offline: bool,
    }

    impl FakeBackend {
        fn with_account(email: &str, password: &str, role: Role) -> Self {
            let fake = Self::default();
            fake.accounts
                .lock()
                .unwrap()
                .push((email.into(), password.into(), role));
            fake
        }

        fn response(email: &str, role: Role) -> AuthResponse {
            AuthResponse {
                id: format!("id-{email}"),
                email: email.into(),
                full_name: "Jean Niyibizi".into(),
                role,
                department: None,
                phone: None,
                token: format!("token-{email}"),
            }
        }
    }

    impl AuthBackend for FakeBackend {
        async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
            if self.offline {
                return Err(ApiError::Network("connection refused".into()));
            }
            let accounts = self.accounts.lock().unwrap();
            accounts
                .iter()
                .find(|(e, p, _)| *e == req.email && *p == req.password)
                .map(|(e, _, role)| Self::response(e, *role))
                .ok_or_else(|| ApiError::from_response(401, r#"{"error":"Invalid credentials"}"#))
        }

        async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
            self.registered.lock().unwrap().push(req.clone());
            if req.email.contains("taken") {
                return Err(ApiError::from_response(409, r#"{"error":"Email already registered"}"#));
            }
            Ok(Self::response(&req.email, Role::Client))
        }

        async fn google(&self, req: &GoogleLoginRequest) -> Result<AuthResponse, ApiError> {
            if req.id_token == "good-credential" {
                Ok(Self::response("google@example.rw", Role::Client))
            } else {
                Err(ApiError::from_response(500, ""))
            }
        }

        async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
            if self.valid_token.as_deref() != Some(token) {
                return Err(ApiError::from_response(401, ""));
            }
            Ok(UserProfile {
                id: "u1".into(),
                email: "fresh@example.rw".into(),
                full_name: "Fresh Name".into(),
                role: Role::Staff,
                department: Some("Scheduling".into()),
                phone: None,
                active: true,
            })
        }
    }

    fn cached_user() -> SessionUser {
        SessionUser {
            id: "u1".into(),
            email: "old@example.rw".into(),
            full_name: "Old Name".into(),
            role: Role::Staff,
            department: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(
            store.clone(),
            FakeBackend::with_account("admin@example.rw", "password123", Role::Admin),
        );

        let session = manager.login(" admin@example.rw ", "password123").await.unwrap();
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("token-admin@example.rw"));
        assert_eq!(manager.restore(), Some(session));
    }

    #[tokio::test]
    async fn test_failed_login_persists_nothing_and_keeps_message() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone(), FakeBackend::default());

        let err = manager.login("nobody@example.rw", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let backend = FakeBackend {
            offline: true,
            ..FakeBackend::default()
        };
        let manager = SessionManager::new(MemoryStore::new(), backend);
        let err = manager.login("a@b.rw", "password123").await.unwrap_err();
        assert_eq!(err, AuthFailure("Login failed".into()));
    }

    #[tokio::test]
    async fn test_signup_registers_client() {
        let store = MemoryStore::new();
        let backend = FakeBackend::default();
        let manager = SessionManager::new(store.clone(), backend.clone());

        let session = manager
            .signup(SignupForm {
                full_name: " Jean Niyibizi ".into(),
                email: "jean@example.rw".into(),
                phone: "".into(),
                password: "password123".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.role(), Role::Client);
        let sent = backend.registered.lock().unwrap();
        assert_eq!(sent[0].role, "CLIENT");
        assert_eq!(sent[0].full_name, "Jean Niyibizi");
        assert!(sent[0].phone.is_none());
        assert!(store.get(USER_KEY).is_some());
    }

    #[tokio::test]
    async fn test_signup_conflict_surfaces_server_message() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store.clone(), FakeBackend::default());
        let err = manager
            .signup(SignupForm {
                email: "taken@example.rw".into(),
                ..SignupForm::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_google_login() {
        let manager = SessionManager::new(MemoryStore::new(), FakeBackend::default());
        assert!(manager.login_with_google("good-credential").await.is_ok());

        let err = manager.login_with_google("bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed (500)");
    }

    #[test]
    fn test_status_without_message_keeps_status_line() {
        let unavailable = AuthFailure::from_api(ApiError::from_response(503, ""), "Login failed");
        let unauthorized = AuthFailure::from_api(ApiError::from_response(401, "{}"), "Login failed");
        assert_eq!(unavailable.to_string(), "Request failed (503)");
        assert_eq!(unauthorized.to_string(), "Request failed (401)");
        let decode = AuthFailure::from_api(ApiError::Decode("eof".into()), "Signup failed");
        assert_eq!(decode, AuthFailure("Signup failed".into()));
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_is_signed_out() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(store, FakeBackend::default());
        assert!(manager.bootstrap().await.is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_refreshes_profile() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());
        sessions.save(&Session {
            user: cached_user(),
            token: "live".into(),
        });
        let backend = FakeBackend {
            valid_token: Some("live".into()),
            ..FakeBackend::default()
        };
        let manager = SessionManager::new(store, backend);

        let session = manager.bootstrap().await.unwrap();
        assert_eq!(session.token, "live");
        assert_eq!(session.user.full_name, "Fresh Name");
        assert_eq!(sessions.user().unwrap().email, "fresh@example.rw");
    }

    #[tokio::test]
    async fn test_bootstrap_failure_clears_keys() {
        let store = MemoryStore::new();
        SessionStore::new(store.clone()).save(&Session {
            user: cached_user(),
            token: "expired".into(),
        });
        let manager = SessionManager::new(store.clone(), FakeBackend::default());

        assert!(manager.restore().is_some());
        assert!(manager.bootstrap().await.is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_and_is_idempotent() {
        let store = MemoryStore::new();
        let manager = SessionManager::new(
            store.clone(),
            FakeBackend::with_account("c@example.rw", "password123", Role::Client),
        );
        manager.login("c@example.rw", "password123").await.unwrap();

        manager.logout();
        assert!(store.is_empty());
        assert!(manager.restore().is_none());
        assert!(manager.bootstrap().await.is_none());

        manager.logout();
        assert!(store.is_empty());
    }
}
