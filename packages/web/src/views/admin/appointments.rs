use api::models::{AppointmentResponse, AppointmentStatus, AppointmentUpdate};
use dioxus::prelude::*;
use ui::filters::{self, count_status, parse_status_filter};
use ui::icons::*;
use ui::time::{format_date, format_time_12h};
use ui::{use_api, use_toast, ConfirmDialog, EmptyState, Icon, Loading, PageHeader, StatCard, StatusBadge};

#[derive(Debug, Clone, PartialEq)]
struct PendingAction {
    id: String,
    client: String,
    target: AppointmentStatus,
}

fn confirm_title(target: AppointmentStatus) -> &'static str {
    match target {
        AppointmentStatus::Cancelled => "Cancel appointment",
        _ => "Complete appointment",
    }
}

#[component]
pub fn AdminAppointments() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut appointments = use_signal(Vec::<AppointmentResponse>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| filters::ALL.to_string());
    let mut pending = use_signal(|| Option::<PendingAction>::None);
    let mut busy = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().list_appointments().await {
            Ok(list) => appointments.set(list),
            Err(e) => {
                tracing::warn!("could not load appointments: {e}");
                toast.error("Failed to load appointments", &e.to_string());
            }
        }
        loading.set(false);
    });

    let confirm = move |_: ()| {
        let Some(action) = pending() else { return };
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api()
                .update_appointment(&action.id, &AppointmentUpdate::status(action.target))
                .await
            {
                Ok(updated) => {
                    for a in appointments.write().iter_mut().filter(|a| a.id == action.id) {
                        *a = updated.clone();
                    }
                    toast.success("Appointment updated", &format!("Marked as {}", action.target.label()));
                    pending.set(None);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let all = appointments();
    let visible = filters::admin_appointments(&all, &query.read(), parse_status_filter(&status.read()));

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "All Appointments",
                subtitle: "Monitor and manage every appointment in the system",
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total", value: all.len().to_string(), tone: "blue" }
                StatCard { label: "Pending", value: count_status(&all, AppointmentStatus::Pending).to_string(), tone: "yellow" }
                StatCard { label: "Completed", value: count_status(&all, AppointmentStatus::Completed).to_string(), tone: "green" }
                StatCard { label: "Cancelled", value: count_status(&all, AppointmentStatus::Cancelled).to_string(), tone: "red" }
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        placeholder: "Search by client name, phone, or type...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                select {
                    value: "{status}",
                    onchange: move |e| status.set(e.value()),
                    option { value: filters::ALL, "All Status" }
                    for s in AppointmentStatus::FILTERABLE {
                        option { key: "{s.as_str()}", value: s.as_str(), "{s.label()}" }
                    }
                }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if visible.is_empty() {
                    EmptyState { message: "No appointments found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Type" }
                                th { "Staff" }
                                th { "Date & Time" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for apt in visible {
                                tr {
                                    key: "{apt.id}",
                                    td {
                                        p { class: "list-title", "{apt.client_label()}" }
                                        p { class: "muted", {apt.client_phone.clone().unwrap_or_default()} }
                                    }
                                    td { "{apt.appointment_type}" }
                                    td { "{apt.staff_label()}" }
                                    td { "{format_date(&apt.date)} {format_time_12h(&apt.time)}" }
                                    td { StatusBadge { status: apt.status } }
                                    td {
                                        class: "table-actions",
                                        if apt.status.is_open() {
                                            button {
                                                class: "btn btn-small btn-primary",
                                                onclick: {
                                                    let action = PendingAction {
                                                        id: apt.id.clone(),
                                                        client: apt.client_label().to_string(),
                                                        target: AppointmentStatus::Completed,
                                                    };
                                                    move |_| {
                                                        action_error.set(None);
                                                        pending.set(Some(action.clone()));
                                                    }
                                                },
                                                "Complete"
                                            }
                                            button {
                                                class: "btn btn-small btn-danger",
                                                onclick: {
                                                    let action = PendingAction {
                                                        id: apt.id.clone(),
                                                        client: apt.client_label().to_string(),
                                                        target: AppointmentStatus::Cancelled,
                                                    };
                                                    move |_| {
                                                        action_error.set(None);
                                                        pending.set(Some(action.clone()));
                                                    }
                                                },
                                                "Cancel"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(action) = pending() {
            ConfirmDialog {
                title: confirm_title(action.target).to_string(),
                message: format!("Mark the appointment for {} as {}?", action.client, action.target.label().to_lowercase()),
                confirm_label: action.target.label().to_string(),
                danger: action.target == AppointmentStatus::Cancelled,
                busy: busy(),
                error: action_error(),
                on_confirm: confirm,
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}
