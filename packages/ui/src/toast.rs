use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::sleep;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Queue a toast, dropping the oldest beyond the visible limit.
    pub fn push(&mut self, level: ToastLevel, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
        let overflow = self.entries.len().saturating_sub(MAX_VISIBLE);
        self.entries.drain(..overflow);
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Handle for raising toasts from views.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn info(&self, title: &str, message: &str) {
        self.show(ToastLevel::Info, title, message);
    }

    pub fn success(&self, title: &str, message: &str) {
        self.show(ToastLevel::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(ToastLevel::Error, title, message);
    }

    fn show(&self, level: ToastLevel, title: &str, message: &str) {
        let mut queue = self.queue;
        let id = queue.write().push(level, title, message);
        spawn(async move {
            sleep(TOAST_TTL).await;
            queue.write().dismiss(id);
        });
    }
}

pub fn use_toast() -> Toaster {
    Toaster {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

/// Provides the toast queue to `children` and renders the toast stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut queue = use_context_provider(|| Signal::new(ToastQueue::default()));
    let entries = queue().entries;

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Error => "toast error",
                        ToastLevel::Success => "toast success",
                        ToastLevel::Info => "toast info",
                    },
                    div {
                        class: "toast-body",
                        p { class: "toast-title", "{toast.title}" }
                        if !toast.message.is_empty() {
                            p { class: "toast-message", "{toast.message}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        onclick: move |_| queue.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_dismiss_removes() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Info, "a", "");
        let b = queue.push(ToastLevel::Error, "b", "failed");
        assert!(b > a);
        queue.dismiss(a);
        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].title, "b");
        queue.dismiss(a);
        assert_eq!(queue.entries.len(), 1);
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..6 {
            queue.push(ToastLevel::Success, &format!("t{i}"), "");
        }
        assert_eq!(queue.entries.len(), MAX_VISIBLE);
        assert_eq!(queue.entries[0].title, "t2");
    }
}
