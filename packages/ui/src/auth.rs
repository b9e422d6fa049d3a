//! Authentication context and hooks for the UI.

use api::{ApiClient, SessionManager};
use dioxus::prelude::*;
use store::{AppConfig, Role, Session, SessionUser};

use crate::platform::{make_session_manager, PlatformStore};

pub type AppSessionManager = SessionManager<PlatformStore, ApiClient>;

/// Authentication state for the application.
///
/// `ready` flips to `true` once the stored token has been checked against the
/// server. Nothing should redirect on a missing session before that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub ready: bool,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            ready: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            ready: true,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session manager provided by [`AuthProvider`].
pub fn use_session_manager() -> AppSessionManager {
    use_context::<AppSessionManager>()
}

/// An API client carrying the current user's token.
pub fn use_api() -> Memo<ApiClient> {
    let config = use_context::<AppConfig>();
    let auth = use_auth();
    use_memo(move || ApiClient::new(config.api_base_url()).with_token(auth.read().token()))
}

/// Provider component that manages authentication state.
///
/// Seeds the state from the cached session, then validates it once against
/// the server. Requires an [`AppConfig`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let manager = use_context_provider(|| make_session_manager(&config));

    let mut auth_state = use_signal(|| AuthState {
        session: manager.restore(),
        ready: false,
    });

    let _ = use_resource(move || {
        let manager = manager.clone();
        async move {
            let session = manager.bootstrap().await;
            auth_state.set(AuthState {
                session,
                ready: true,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
