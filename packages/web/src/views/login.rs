//! Login page: e-mail/password plus Google when a client id is configured.

use dioxus::prelude::*;
use store::AppConfig;
use ui::{use_auth, use_session_manager, AuthState, ErrorBanner, GoogleSignInButton};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let manager = use_session_manager();
    let config = use_context::<AppConfig>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in: go straight to the dashboard
    use_effect(move || {
        let state = auth.read();
        if state.ready && state.session.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let password_manager = manager.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        let manager = password_manager.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match manager.login(email().trim(), &password()).await {
                Ok(session) => {
                    tracing::info!("signed in as {}", session.user.email);
                    auth.set(AuthState::signed_in(session));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let on_google = move |credential: String| {
        let manager = manager.clone();
        spawn(async move {
            error.set(None);
            match manager.login_with_google(&credential).await {
                Ok(session) => {
                    tracing::info!("signed in with Google as {}", session.user.email);
                    auth.set(AuthState::signed_in(session));
                    nav.push(Route::Dashboard {});
                }
                // Staff and admin accounts are rejected by the API for Google sign-in
                Err(e) if e.0.to_lowercase().contains("staff/admin") => {
                    error.set(Some(
                        "Clients can sign in with Google or email/password.".to_string(),
                    ));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-brand",
                    span { class: "shell-logo", "RRA" }
                    h1 { class: "auth-title", "Welcome back" }
                    p { class: "muted", "Sign in to manage your appointments" }
                }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                form {
                    class: "form",
                    onsubmit: on_submit,
                    label {
                        class: "field",
                        span { "Email Address" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            placeholder: "you@example.com",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            placeholder: "********",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    div {
                        class: "form-row end",
                        Link { class: "link", to: Route::ForgotPassword {}, "Forgot password?" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign In" }
                    }
                }

                if let Some(client_id) = config.google_client_id() {
                    div { class: "divider", span { "or" } }
                    GoogleSignInButton { client_id: client_id.to_string(), on_credential: on_google }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { class: "link", to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
