use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| tracing::warn!("no page at {path}"));

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card center",
                p { class: "not-found-code", "404" }
                h1 { class: "auth-title", "Page not found" }
                p { class: "muted", "The page you're looking for doesn't exist or may have been moved." }
                div {
                    class: "auth-links",
                    Link { class: "btn btn-primary", to: Route::Home {}, "Back to Home" }
                    Link { class: "btn btn-secondary", to: Route::Dashboard {}, "Go to Dashboard" }
                }
            }
        }
    }
}
