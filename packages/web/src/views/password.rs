//! Forgot/reset password: request a code by e-mail, then redeem it.

use api::models::ResetPasswordRequest;
use dioxus::prelude::*;
use ui::{use_api, use_toast, validation, ErrorBanner};

use crate::Route;

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_reset(email: &str, code: &str, password: &str, confirmation: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email.".to_string());
    }
    if code.trim().is_empty() {
        return Err("Please enter the verification code.".to_string());
    }
    if password.is_empty() || confirmation.is_empty() {
        return Err("Please fill in both password fields.".to_string());
    }
    validation::password(password)?;
    validation::password_confirmation(password, confirmation)
}

#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() {
            error.set(Some("Please enter your email address.".to_string()));
            return;
        }
        spawn(async move {
            busy.set(true);
            error.set(None);
            let address = normalize_email(&email());
            match api().forgot_password(&address).await {
                Ok(res) => {
                    let message = if res.message.is_empty() {
                        "If that email exists, a verification code has been sent."
                    } else {
                        res.message.as_str()
                    };
                    toast.success("Check your inbox", message);
                    nav.push(Route::ResetPassword { email: address });
                }
                Err(e) => error.set(Some(
                    e.server_message()
                        .unwrap_or("Failed to send verification code.")
                        .to_string(),
                )),
            }
            busy.set(false);
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
                    h1 { class: "auth-title", "Forgot password" }
                    p { class: "muted", "We'll e-mail you a verification code" }
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
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Sending..." } else { "Send Verification Code" }
                    }
                }
                p {
                    class: "auth-footer",
                    "Got a code? "
                    Link {
                        class: "link",
                        to: Route::ResetPassword { email: normalize_email(&email()) },
                        "Verify and reset"
                    }
                }
                p {
                    class: "auth-footer",
                    "Remember your password? "
                    Link { class: "link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[component]
pub fn ResetPassword(email: String) -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();

    let mut address = use_signal(|| normalize_email(&email));
    let mut code = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(message) = validate_reset(&address(), &code(), &password(), &confirmation()) {
            error.set(Some(message));
            return;
        }
        let req = ResetPasswordRequest {
            email: normalize_email(&address()),
            code: code().trim().to_string(),
            new_password: password(),
        };
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api().reset_password(&req).await {
                Ok(_) => {
                    toast.success("Password updated", "You can now sign in with your new password.");
                    nav.push(Route::Login {});
                }
                Err(e) => error.set(Some(
                    e.server_message()
                        .unwrap_or("Failed to reset password.")
                        .to_string(),
                )),
            }
            busy.set(false);
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
                    h1 { class: "auth-title", "Reset password" }
                    p { class: "muted", "Enter the code we sent and choose a new password" }
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
                            value: "{address}",
                            placeholder: "you@example.com",
                            oninput: move |e| address.set(e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { "Verification Code" }
                        input {
                            value: "{code}",
                            placeholder: "6-digit code",
                            oninput: move |e| code.set(e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { "New Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            placeholder: "********",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { "Confirm Password" }
                        input {
                            r#type: "password",
                            value: "{confirmation}",
                            placeholder: "********",
                            oninput: move |e| confirmation.set(e.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Resetting..." } else { "Reset Password" }
                    }
                }
                p {
                    class: "auth-footer",
                    "Back to "
                    Link { class: "link", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_checks_fields_in_order() {
        assert_eq!(validate_reset("", "1", "a", "a").unwrap_err(), "Please enter your email.");
        assert_eq!(
            validate_reset("a@b.rw", " ", "a", "a").unwrap_err(),
            "Please enter the verification code."
        );
        assert_eq!(
            validate_reset("a@b.rw", "123456", "", "x").unwrap_err(),
            "Please fill in both password fields."
        );
        assert!(validate_reset("a@b.rw", "123456", "short", "short").is_err());
        assert_eq!(
            validate_reset("a@b.rw", "123456", "longenough", "longenougH").unwrap_err(),
            "Passwords do not match"
        );
        assert!(validate_reset("a@b.rw", "123456", "longenough", "longenough").is_ok());
    }

    #[test]
    fn test_email_is_normalized() {
        assert_eq!(normalize_email("  Jean@Example.RW "), "jean@example.rw");
    }
}
