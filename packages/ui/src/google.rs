//! Google Identity Services sign-in button.
//!
//! Loads the GIS script, renders Google's button into a placeholder element
//! and forwards every credential (an ID token JWT) to `on_credential`.

use dioxus::prelude::*;

const BUTTON_ID: &str = "google-signin-button";

const GIS_BRIDGE: &str = r#"
const clientId = await dioxus.recv();
const target = document.getElementById("google-signin-button");
const render = () => {
    google.accounts.id.initialize({
        client_id: clientId,
        callback: (response) => dioxus.send(response.credential),
    });
    google.accounts.id.renderButton(target, { theme: "outline", size: "large", width: 320 });
};
if (window.google && window.google.accounts) {
    render();
} else {
    const script = document.createElement("script");
    script.src = "https://accounts.google.com/gsi/client";
    script.async = true;
    script.onload = render;
    document.head.appendChild(script);
}
"#;

#[component]
pub fn GoogleSignInButton(client_id: String, on_credential: EventHandler<String>) -> Element {
    use_effect(move || {
        let client_id = client_id.clone();
        spawn(async move {
            let mut bridge = document::eval(GIS_BRIDGE);
            if let Err(e) = bridge.send(client_id) {
                tracing::warn!("Google sign-in unavailable: {e}");
                return;
            }
            loop {
                match bridge.recv::<String>().await {
                    Ok(credential) => on_credential.call(credential),
                    Err(e) => {
                        tracing::warn!("Google sign-in bridge closed: {e}");
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        div { id: BUTTON_ID, class: "google-signin" }
    }
}
