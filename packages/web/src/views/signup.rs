use api::SignupForm;
use dioxus::prelude::*;
use store::AppConfig;
use ui::validation;
use ui::{use_auth, use_session_manager, AuthState, ErrorBanner, GoogleSignInButton};

use crate::Route;

fn validate(form: &SignupForm, confirmation: &str, terms: bool) -> Result<(), String> {
    if form.full_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || confirmation.is_empty()
    {
        return Err("Please fill in all fields".to_string());
    }
    validation::email(&form.email)?;
    validation::password(&form.password)?;
    validation::password_confirmation(&form.password, confirmation)?;
    if !terms {
        return Err("Please accept the terms and conditions".to_string());
    }
    Ok(())
}

/// Self-registration. Accounts created here are always clients.
#[component]
pub fn Signup() -> Element {
    let mut auth = use_auth();
    let manager = use_session_manager();
    let config = use_context::<AppConfig>();
    let nav = use_navigator();

    let mut form = use_signal(SignupForm::default);
    let mut confirmation = use_signal(String::new);
    let mut terms = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let form_manager = manager.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(message) = validate(&form.read(), &confirmation.read(), terms()) {
            error.set(Some(message));
            return;
        }
        let manager = form_manager.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match manager.signup(form()).await {
                Ok(session) => {
                    tracing::info!("registered {}", session.user.email);
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
            match manager.login_with_google(&credential).await {
                Ok(session) => {
                    auth.set(AuthState::signed_in(session));
                    nav.push(Route::Dashboard {});
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
                    h1 { class: "auth-title", "Create your account" }
                    p { class: "muted", "Book and track your RRA appointments" }
                }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                form {
                    class: "form",
                    onsubmit: on_submit,
                    label {
                        class: "field",
                        span { "Full Name" }
                        input {
                            value: "{form.read().full_name}",
                            placeholder: "Jean Niyibizi",
                            oninput: move |e| form.write().full_name = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Email Address" }
                        input {
                            r#type: "email",
                            value: "{form.read().email}",
                            placeholder: "you@example.com",
                            oninput: move |e| form.write().email = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Phone (optional)" }
                        input {
                            r#type: "tel",
                            value: "{form.read().phone}",
                            placeholder: "+250 7xx xxx xxx",
                            oninput: move |e| form.write().phone = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            value: "{form.read().password}",
                            placeholder: "At least 8 characters",
                            oninput: move |e| form.write().password = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Confirm Password" }
                        input {
                            r#type: "password",
                            value: "{confirmation}",
                            oninput: move |e| confirmation.set(e.value()),
                        }
                    }
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: terms(),
                            onchange: move |e| terms.set(e.checked()),
                        }
                        span { "I agree to the terms and conditions" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Creating account..." } else { "Create Account" }
                    }
                }

                if let Some(client_id) = config.google_client_id() {
                    div { class: "divider", span { "or" } }
                    GoogleSignInButton { client_id: client_id.to_string(), on_credential: on_google }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { class: "link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm {
            full_name: "Jean Niyibizi".into(),
            email: "jean@example.rw".into(),
            phone: String::new(),
            password: "longenough".into(),
        }
    }

    #[test]
    fn test_signup_validation_order() {
        assert!(validate(&form(), "longenough", true).is_ok());

        let mut blank = form();
        blank.full_name = " ".into();
        assert_eq!(validate(&blank, "longenough", true).unwrap_err(), "Please fill in all fields");

        let mut short = form();
        short.password = "short".into();
        assert!(validate(&short, "short", true).unwrap_err().contains("at least 8"));

        assert_eq!(validate(&form(), "different1", true).unwrap_err(), "Passwords do not match");
        assert!(validate(&form(), "longenough", false).unwrap_err().contains("terms"));
    }
}
