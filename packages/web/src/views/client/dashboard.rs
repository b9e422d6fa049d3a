use api::models::{AppointmentResponse, AppointmentStatus, AppointmentUpdate, NotificationResponse};
use dioxus::prelude::*;
use ui::icons::*;
use ui::time::{format_date, format_time_12h, min_booking_date, today};
use ui::{use_api, use_auth, use_toast, EmptyState, Icon, Modal, StatCard, StatusBadge};

use crate::Route;

/// The three newest notifications.
fn recent(list: &[NotificationResponse]) -> Vec<NotificationResponse> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(3);
    sorted
}

#[derive(Clone, Copy, PartialEq)]
enum Action {
    Reschedule,
    Cancel,
}

#[component]
pub fn ClientDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();

    let mut appointments = use_signal(Vec::<AppointmentResponse>::new);
    let mut notifications = use_signal(Vec::<NotificationResponse>::new);
    let mut selected = use_signal(|| Option::<(AppointmentResponse, Action)>::None);
    let mut new_date = use_signal(String::new);
    let mut new_time = use_signal(String::new);

    let _appointments = use_resource(move || async move {
        match api().list_appointments().await {
            Ok(list) => appointments.set(list),
            Err(e) => {
                tracing::warn!("could not load appointments: {e}");
                appointments.set(Vec::new());
            }
        }
    });
    let _notifications = use_resource(move || async move {
        match api().list_notifications().await {
            Ok(list) => notifications.set(list),
            Err(e) => {
                tracing::warn!("could not load notifications: {e}");
                notifications.set(Vec::new());
            }
        }
    });

    let name = auth
        .read()
        .user()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();
    let list = appointments();
    let completed = list.iter().filter(|a| a.status == AppointmentStatus::Completed).count();
    let cancelled = list.iter().filter(|a| a.status == AppointmentStatus::Cancelled).count();
    let upcoming = list.len() - completed - cancelled;
    let unread = notifications.read().iter().filter(|n| !n.read).count();
    let latest = recent(&notifications.read());

    let mut close = move || {
        selected.set(None);
        new_date.set(String::new());
        new_time.set(String::new());
    };

    let submit_reschedule = move |_| {
        let Some((apt, _)) = selected() else { return };
        if new_date().is_empty() || new_time().is_empty() {
            toast.error("Error", "Please select both date and time");
            return;
        }
        let (date, time) = (new_date(), new_time());
        let update = AppointmentUpdate {
            status: Some(AppointmentStatus::Pending),
            ..AppointmentUpdate::reschedule(date.clone(), time.clone())
        };
        close();
        spawn(async move {
            match api().update_appointment(&apt.id, &update).await {
                Ok(_) => {
                    for a in appointments.write().iter_mut().filter(|a| a.id == apt.id) {
                        a.date = date.clone();
                        a.time = time.clone();
                        a.status = AppointmentStatus::Pending;
                    }
                    toast.success(
                        "Success",
                        &format!("Appointment rescheduled to {date} at {time}"),
                    );
                }
                Err(e) => toast.error("Error", e.server_message().unwrap_or("Failed to reschedule appointment")),
            }
        });
    };

    let confirm_cancel = move |_| {
        let Some((apt, _)) = selected() else { return };
        close();
        spawn(async move {
            let update = AppointmentUpdate::status(AppointmentStatus::Cancelled);
            match api().update_appointment(&apt.id, &update).await {
                Ok(_) => {
                    appointments.write().retain(|a| a.id != apt.id);
                    toast.success(
                        "Success",
                        &format!("{} appointment has been cancelled", apt.appointment_type),
                    );
                }
                Err(e) => toast.error("Error", e.server_message().unwrap_or("Failed to cancel appointment")),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Welcome, {name}" }
                    p { class: "page-subtitle", "Manage your RRA appointments easily" }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Upcoming", value: upcoming.to_string(), tone: "blue" }
                StatCard { label: "Completed", value: completed.to_string(), tone: "green" }
                StatCard { label: "Cancelled", value: cancelled.to_string(), tone: "red" }
            }

            div {
                class: "two-column",
                div {
                    class: "card",
                    h3 { class: "card-title", "Your Appointments" }
                    if list.is_empty() {
                        EmptyState { message: "You have no appointments yet." }
                    }
                    for apt in list.iter().cloned() {
                        div {
                            key: "{apt.id}",
                            class: "list-row",
                            div {
                                class: "list-main",
                                p { class: "list-title", "{apt.appointment_type}" }
                                p {
                                    class: "muted icon-line",
                                    Icon { icon: FaClock, width: 12, height: 12 }
                                    "{format_date(&apt.date)}, {format_time_12h(&apt.time)}"
                                }
                                p {
                                    class: "muted icon-line",
                                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                                    "{apt.location}"
                                }
                            }
                            div {
                                class: "list-actions",
                                StatusBadge { status: apt.status }
                                if apt.status.is_open() {
                                    button {
                                        class: "btn btn-small btn-secondary",
                                        onclick: {
                                            let apt = apt.clone();
                                            move |_| selected.set(Some((apt.clone(), Action::Reschedule)))
                                        },
                                        "Reschedule"
                                    }
                                    button {
                                        class: "btn btn-small btn-danger",
                                        onclick: {
                                            let apt = apt.clone();
                                            move |_| selected.set(Some((apt.clone(), Action::Cancel)))
                                        },
                                        "Cancel"
                                    }
                                }
                            }
                        }
                    }
                    Link { class: "link", to: Route::ClientAppointments {}, "View All Appointments →" }
                }

                div {
                    class: "card",
                    h3 { class: "card-title", "Quick Actions" }
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| {
                            nav.push(Route::Schedule {});
                        },
                        "+ Book New"
                    }
                    div {
                        class: "help-box",
                        h4 { "Need Help?" }
                        p {
                            class: "muted icon-line",
                            Icon { icon: FaPhone, width: 12, height: 12 }
                            "+250 788 123 456"
                        }
                        p {
                            class: "muted icon-line",
                            Icon { icon: FaEnvelope, width: 12, height: 12 }
                            "support@rra.gov.rw"
                        }
                    }
                }
            }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h3 { class: "card-title", "Recent Notifications" }
                    span { class: "muted", "{unread} unread" }
                }
                if latest.is_empty() {
                    EmptyState { message: "No notifications available." }
                }
                for notif in latest {
                    div {
                        key: "{notif.id}",
                        class: "notice",
                        p {
                            class: "list-title",
                            "{notif.title}"
                            if !notif.read {
                                span { class: "unread-dot" }
                            }
                        }
                        p { class: "muted", "{notif.message}" }
                    }
                }
            }
        }

        if let Some((apt, Action::Reschedule)) = selected() {
            Modal {
                title: "Reschedule Appointment",
                on_close: move |_| close(),
                p { class: "muted", "Rescheduling: {apt.appointment_type}" }
                label {
                    class: "field",
                    span { "New Date" }
                    input {
                        r#type: "date",
                        min: min_booking_date(today()),
                        value: "{new_date}",
                        oninput: move |e| new_date.set(e.value()),
                    }
                }
                label {
                    class: "field",
                    span { "New Time" }
                    input {
                        r#type: "time",
                        value: "{new_time}",
                        oninput: move |e| new_time.set(e.value()),
                    }
                }
                div {
                    class: "info-box",
                    p { class: "list-title", "Current Details:" }
                    p { "{format_date(&apt.date)} at {format_time_12h(&apt.time)}" }
                    p { "{apt.location}" }
                }
                div {
                    class: "modal-actions",
                    button { class: "btn btn-secondary", onclick: move |_| close(), "Cancel" }
                    button { class: "btn btn-primary", onclick: submit_reschedule, "Reschedule" }
                }
            }
        }

        if let Some((apt, Action::Cancel)) = selected() {
            Modal {
                title: "Cancel Appointment",
                on_close: move |_| close(),
                p { "Are you sure you want to cancel: {apt.appointment_type}?" }
                div {
                    class: "info-box danger",
                    p { class: "list-title", "Appointment Details:" }
                    p { "{format_date(&apt.date)} at {format_time_12h(&apt.time)}" }
                    p { "{apt.location}" }
                    p { "This action cannot be undone." }
                }
                div {
                    class: "modal-actions",
                    button { class: "btn btn-secondary", onclick: move |_| close(), "Keep Appointment" }
                    button { class: "btn btn-danger", onclick: confirm_cancel, "Cancel Appointment" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, created_at: &str) -> NotificationResponse {
        NotificationResponse {
            id: id.into(),
            kind: "reminder".into(),
            title: id.into(),
            message: String::new(),
            read: false,
            created_at: created_at.into(),
        }
    }

    #[test]
    fn test_recent_keeps_three_newest() {
        let list = vec![
            notification("a", "2025-01-01T08:00:00Z"),
            notification("b", "2025-03-01T08:00:00Z"),
            notification("c", "2025-02-01T08:00:00Z"),
            notification("d", "2025-04-01T08:00:00Z"),
        ];
        let ids: Vec<_> = recent(&list).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["d", "b", "c"]);
    }
}
