use api::models::NotificationResponse;
use dioxus::prelude::*;
use ui::filters::{self, count_kind};
use ui::icons::*;
use ui::time::{format_date, now, time_ago};
use ui::{use_api, use_toast, EmptyState, ErrorBanner, Icon, Loading, PageHeader, StatCard};

use crate::Route;

const KINDS: [(&str, &str); 4] = [
    ("reminder", "Reminders"),
    ("confirmation", "Confirmations"),
    ("alert", "Alerts"),
    ("info", "Info"),
];

fn kind_icon(kind: &str) -> Element {
    match kind {
        "reminder" => rsx! { Icon { icon: FaBell, width: 18, height: 18 } },
        "confirmation" => rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18 } },
        "alert" => rsx! { Icon { icon: FaCircleExclamation, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: FaCircleInfo, width: 18, height: 18 } },
    }
}

fn notice_class(n: &NotificationResponse) -> String {
    let state = if n.read { "" } else { " unread" };
    format!("notice kind-{}{state}", n.kind)
}

/// Newest `created_at` as a short date, or `N/A`.
fn last_received(list: &[NotificationResponse]) -> String {
    list.iter()
        .map(|n| n.created_at.as_str())
        .max()
        .map(|ts| format_date(ts.get(..10).unwrap_or(ts)))
        .unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn ClientNotifications() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut notifications = use_signal(Vec::<NotificationResponse>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut kind = use_signal(|| filters::ALL.to_string());
    let mut acting_on = use_signal(|| Option::<String>::None);
    let mut bulk = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api().list_notifications().await {
            Ok(list) => {
                notifications.set(list);
                load_error.set(None);
            }
            Err(e) => {
                tracing::warn!("could not load notifications: {e}");
                notifications.set(Vec::new());
                load_error.set(Some("Failed to load notifications.".to_string()));
            }
        }
        loading.set(false);
    });

    let mark_read = move |id: String| {
        spawn(async move {
            acting_on.set(Some(id.clone()));
            match api().mark_notification_read(&id).await {
                Ok(updated) => {
                    for n in notifications.write().iter_mut().filter(|n| n.id == id) {
                        n.read = updated.read;
                    }
                }
                Err(e) => toast.error(
                    "Error",
                    e.server_message().unwrap_or("Failed to mark notification as read"),
                ),
            }
            acting_on.set(None);
        });
    };

    let delete = move |id: String| {
        spawn(async move {
            acting_on.set(Some(id.clone()));
            match api().delete_notification(&id).await {
                Ok(()) => notifications.write().retain(|n| n.id != id),
                Err(e) => toast.error(
                    "Error",
                    e.server_message().unwrap_or("Failed to delete notification"),
                ),
            }
            acting_on.set(None);
        });
    };

    let mark_all_read = move |_| {
        let unread: Vec<String> = notifications
            .read()
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        if unread.is_empty() {
            return;
        }
        spawn(async move {
            bulk.set(true);
            let client = api();
            let mut failed = None;
            for id in &unread {
                if let Err(e) = client.mark_notification_read(id).await {
                    failed = Some(e);
                    break;
                }
            }
            match failed {
                None => {
                    for n in notifications.write().iter_mut() {
                        n.read = true;
                    }
                }
                Some(e) => toast.error(
                    "Error",
                    e.server_message().unwrap_or("Failed to mark all as read"),
                ),
            }
            bulk.set(false);
        });
    };

    let clear_all = move |_| {
        let ids: Vec<String> = notifications.read().iter().map(|n| n.id.clone()).collect();
        if ids.is_empty() {
            return;
        }
        spawn(async move {
            bulk.set(true);
            let client = api();
            for id in ids {
                match client.delete_notification(&id).await {
                    Ok(()) => notifications.write().retain(|n| n.id != id),
                    Err(e) => {
                        toast.error(
                            "Error",
                            e.server_message().unwrap_or("Failed to clear notifications"),
                        );
                        break;
                    }
                }
            }
            bulk.set(false);
        });
    };

    let all = notifications.read().clone();
    let unread = all.iter().filter(|n| !n.read).count();
    let visible = filters::notifications(&all, &kind.read());
    let now = now();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Notifications",
                subtitle: "{unread} unread",
                button {
                    class: "btn btn-secondary",
                    disabled: bulk() || unread == 0,
                    onclick: mark_all_read,
                    "Mark all read"
                }
                button {
                    class: "btn btn-danger",
                    disabled: bulk() || all.is_empty(),
                    onclick: clear_all,
                    "Clear all"
                }
            }

            div {
                class: "tabs",
                button {
                    class: if kind() == filters::ALL { "tab active" } else { "tab" },
                    onclick: move |_| kind.set(filters::ALL.to_string()),
                    "All {all.len()}"
                }
                for (id, label) in KINDS {
                    button {
                        key: "{id}",
                        class: if kind() == id { "tab active" } else { "tab" },
                        onclick: move |_| kind.set(id.to_string()),
                        "{label}"
                    }
                }
            }

            if loading() {
                Loading {}
            } else if let Some(message) = load_error() {
                ErrorBanner { message }
            } else if visible.is_empty() {
                EmptyState { message: "No notifications" }
            } else {
                div {
                    class: "stack",
                    for notif in visible {
                        div {
                            key: "{notif.id}",
                            class: notice_class(&notif),
                            div { class: "notice-icon", {kind_icon(&notif.kind)} }
                            div {
                                class: "notice-body",
                                div {
                                    class: "notice-head",
                                    h3 { class: "list-title", "{notif.title}" }
                                    div {
                                        class: "list-actions",
                                        if !notif.read {
                                            button {
                                                class: "btn btn-small btn-secondary",
                                                disabled: acting_on() == Some(notif.id.clone()),
                                                onclick: {
                                                    let id = notif.id.clone();
                                                    move |_| mark_read(id.clone())
                                                },
                                                "Mark read"
                                            }
                                        }
                                        button {
                                            class: "icon-button",
                                            title: "Delete",
                                            disabled: acting_on() == Some(notif.id.clone()),
                                            onclick: {
                                                let id = notif.id.clone();
                                                move |_| delete(id.clone())
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                                p { class: "muted", "{notif.message}" }
                                p { class: "notice-time", "{time_ago(&notif.created_at, now)}" }
                                if notif.kind == "reminder" {
                                    Link { class: "link", to: Route::ClientAppointments {}, "View Appointment →" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Reminders", value: count_kind(&all, "reminder").to_string(), tone: "blue" }
                StatCard { label: "Confirmations", value: count_kind(&all, "confirmation").to_string(), tone: "green" }
                StatCard { label: "Alerts", value: count_kind(&all, "alert").to_string(), tone: "orange" }
                StatCard { label: "Last received", value: last_received(&all), tone: "purple" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_received() {
        assert_eq!(last_received(&[]), "N/A");
        let list = vec![
            NotificationResponse {
                id: "1".into(),
                kind: "info".into(),
                title: "t".into(),
                message: String::new(),
                read: true,
                created_at: "2025-03-04T09:00:00Z".into(),
            },
            NotificationResponse {
                id: "2".into(),
                kind: "alert".into(),
                title: "t".into(),
                message: String::new(),
                read: false,
                created_at: "2025-01-10T09:00:00Z".into(),
            },
        ];
        assert_eq!(last_received(&list), "Mar 4, 2025");
    }
}
