use api::models::{AppointmentResponse, AppointmentStatus, AppointmentUpdate};
use dioxus::prelude::*;
use ui::filters::{self, count_status, parse_status_filter};
use ui::icons::*;
use ui::time::{format_date, format_time_12h};
use ui::{use_api, use_toast, EmptyState, Icon, Loading, PageHeader, StatCard, StatusBadge};

/// Status changes a staff member may make from `status`.
fn transitions(status: AppointmentStatus) -> &'static [AppointmentStatus] {
    match status {
        AppointmentStatus::Pending => &[AppointmentStatus::Confirmed, AppointmentStatus::Cancelled],
        AppointmentStatus::Confirmed | AppointmentStatus::Scheduled => {
            &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
        }
        _ => &[],
    }
}

fn action_label(target: AppointmentStatus) -> &'static str {
    match target {
        AppointmentStatus::Confirmed => "Confirm",
        AppointmentStatus::Completed => "Complete",
        AppointmentStatus::Cancelled => "Cancel",
        _ => "Update",
    }
}

#[component]
pub fn StaffAppointments() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut appointments = use_signal(Vec::<AppointmentResponse>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| filters::ALL.to_string());
    let mut updating = use_signal(|| Option::<String>::None);

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

    let set_status = move |id: String, target: AppointmentStatus| {
        spawn(async move {
            updating.set(Some(id.clone()));
            match api().update_appointment(&id, &AppointmentUpdate::status(target)).await {
                Ok(updated) => {
                    for a in appointments.write().iter_mut().filter(|a| a.id == id) {
                        *a = updated.clone();
                    }
                    toast.success("Appointment updated", &format!("Marked as {}", target.label()));
                }
                Err(e) => toast.error("Update failed", &e.to_string()),
            }
            updating.set(None);
        });
    };

    let all = appointments();
    let visible = filters::staff_appointments(&all, &query.read(), parse_status_filter(&status.read()));

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "My Appointments",
                subtitle: "Manage the appointments assigned to you",
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total", value: all.len().to_string(), tone: "blue" }
                StatCard { label: "Pending", value: count_status(&all, AppointmentStatus::Pending).to_string(), tone: "yellow" }
                StatCard { label: "Confirmed", value: count_status(&all, AppointmentStatus::Confirmed).to_string(), tone: "green" }
                StatCard { label: "Completed", value: count_status(&all, AppointmentStatus::Completed).to_string(), tone: "purple" }
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        placeholder: "Search by client, service, or location...",
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
                    EmptyState { message: "No appointments found matching your criteria." }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Service" }
                                th { "Date & Time" }
                                th { "Location" }
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
                                        p { class: "muted", {apt.client_phone.clone().unwrap_or_else(|| "N/A".to_string())} }
                                    }
                                    td { "{apt.appointment_type}" }
                                    td { "{format_date(&apt.date)} {format_time_12h(&apt.time)}" }
                                    td { "{apt.location}" }
                                    td { StatusBadge { status: apt.status } }
                                    td {
                                        class: "table-actions",
                                        for target in transitions(apt.status).iter().copied() {
                                            button {
                                                key: "{target.as_str()}",
                                                class: if target == AppointmentStatus::Cancelled { "btn btn-small btn-danger" } else { "btn btn-small btn-primary" },
                                                disabled: updating() == Some(apt.id.clone()),
                                                onclick: {
                                                    let id = apt.id.clone();
                                                    move |_| set_status(id.clone(), target)
                                                },
                                                "{action_label(target)}"
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_appointments_have_no_actions() {
        assert!(transitions(AppointmentStatus::Completed).is_empty());
        assert!(transitions(AppointmentStatus::Cancelled).is_empty());
        assert!(transitions(AppointmentStatus::Unknown).is_empty());
    }

    #[test]
    fn test_pending_can_be_confirmed_then_completed() {
        assert!(transitions(AppointmentStatus::Pending).contains(&AppointmentStatus::Confirmed));
        assert!(transitions(AppointmentStatus::Confirmed).contains(&AppointmentStatus::Completed));
        assert_eq!(action_label(AppointmentStatus::Cancelled), "Cancel");
    }
}
