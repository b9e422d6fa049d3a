use dioxus::prelude::*;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default = false)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card wide" } else { "modal-card" },
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}

/// Yes/no confirmation with an optional error line and busy state.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    #[props(default = false)] danger: bool,
    #[props(default = false)] busy: bool,
    #[props(default)] error: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title,
            on_close: on_cancel,
            p { class: "modal-message", "{message}" }
            if let Some(err) = error {
                p { class: "form-error", "{err}" }
            }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: if danger { "btn btn-danger" } else { "btn btn-primary" },
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Working..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
