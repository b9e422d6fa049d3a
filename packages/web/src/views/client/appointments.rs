use api::models::{AppointmentResponse, AppointmentStatus, AppointmentUpdate};
use dioxus::prelude::*;
use ui::filters::{self, count_status, parse_status_filter};
use ui::icons::*;
use ui::time::{format_date, format_time_12h};
use ui::{use_api, use_toast, ConfirmDialog, EmptyState, Icon, Loading, PageHeader, StatCard, StatusBadge};

use crate::Route;

#[component]
pub fn ClientAppointments() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut appointments = use_signal(Vec::<AppointmentResponse>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| filters::ALL.to_string());
    let mut cancelling = use_signal(|| Option::<AppointmentResponse>::None);
    let mut busy = use_signal(|| false);
    let mut cancel_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().list_appointments().await {
            Ok(list) => appointments.set(list),
            Err(e) => {
                tracing::warn!("could not load appointments: {e}");
                appointments.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let visible = filters::client_appointments(
        &appointments.read(),
        &query.read(),
        parse_status_filter(&status.read()),
    );
    let all = appointments.read().clone();

    let confirm_cancel = move |_| {
        let Some(apt) = cancelling() else { return };
        spawn(async move {
            busy.set(true);
            cancel_error.set(None);
            let update = AppointmentUpdate::status(AppointmentStatus::Cancelled);
            match api().update_appointment(&apt.id, &update).await {
                Ok(updated) => {
                    for a in appointments.write().iter_mut().filter(|a| a.id == updated.id) {
                        *a = updated.clone();
                    }
                    cancelling.set(None);
                    toast.success("Appointment cancelled", &apt.appointment_type);
                }
                Err(e) => cancel_error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "My Appointments",
                subtitle: "View and manage all your scheduled appointments",
                Link {
                    class: "btn btn-primary",
                    to: Route::Schedule {},
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "Book New" }
                }
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        placeholder: "Search appointments...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                select {
                    value: "{status}",
                    onchange: move |e| status.set(e.value()),
                    option { value: filters::ALL, "All Statuses" }
                    for s in AppointmentStatus::FILTERABLE {
                        option { key: "{s.as_str()}", value: s.as_str(), "{s.label()}" }
                    }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total", value: all.len().to_string(), tone: "blue" }
                StatCard {
                    label: "Confirmed",
                    value: count_status(&all, AppointmentStatus::Confirmed).to_string(),
                    tone: "green",
                }
                StatCard {
                    label: "Pending",
                    value: count_status(&all, AppointmentStatus::Pending).to_string(),
                    tone: "yellow",
                }
                StatCard {
                    label: "Completed",
                    value: count_status(&all, AppointmentStatus::Completed).to_string(),
                    tone: "purple",
                }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if visible.is_empty() {
                    EmptyState { message: "No appointments found" }
                } else {
                    for apt in visible {
                        div {
                            key: "{apt.id}",
                            class: "list-row",
                            div {
                                class: "list-date",
                                p { class: "list-title", "{format_date(&apt.date)}" }
                                p { class: "muted", "{format_time_12h(&apt.time)}" }
                            }
                            div {
                                class: "list-main",
                                p { class: "list-title", "{apt.appointment_type}" }
                                p {
                                    class: "muted icon-line",
                                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                                    "{apt.location}"
                                }
                                p {
                                    class: "muted icon-line",
                                    Icon { icon: FaUser, width: 12, height: 12 }
                                    {apt.staff_name.as_deref().unwrap_or("TBD")}
                                }
                            }
                            div {
                                class: "list-actions",
                                StatusBadge { status: apt.status }
                                if apt.status.is_open() {
                                    button {
                                        class: "btn btn-small btn-danger",
                                        onclick: {
                                            let apt = apt.clone();
                                            move |_| {
                                                cancel_error.set(None);
                                                cancelling.set(Some(apt.clone()));
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

            div {
                class: "info-box",
                p { class: "list-title", "Need to make changes?" }
                p { class: "muted", "Pending and confirmed appointments can be cancelled here. Reschedule from your dashboard." }
            }
        }

        if let Some(apt) = cancelling() {
            ConfirmDialog {
                title: "Cancel Appointment",
                message: format!(
                    "Cancel {} on {} at {}?",
                    apt.appointment_type,
                    format_date(&apt.date),
                    format_time_12h(&apt.time),
                ),
                confirm_label: "Cancel Appointment",
                danger: true,
                busy: busy(),
                error: cancel_error(),
                on_confirm: confirm_cancel,
                on_cancel: move |_| cancelling.set(None),
            }
        }
    }
}
