use api::models::{AppointmentResponse, AppointmentStatus};
use dioxus::prelude::*;
use ui::filters::{count_dated_within, count_status};
use ui::time::{format_date, format_time_12h, today};
use ui::{use_api, use_auth, EmptyState, PageHeader, StatCard, StatusBadge};

#[component]
pub fn StaffDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();

    let mut appointments = use_signal(Vec::<AppointmentResponse>::new);
    let mut avg_rating = use_signal(|| Option::<f64>::None);

    let _appointments = use_resource(move || async move {
        match api().list_appointments().await {
            Ok(list) => appointments.set(list),
            Err(e) => {
                tracing::warn!("could not load appointments: {e}");
                appointments.set(Vec::new());
            }
        }
    });
    let _rating = use_resource(move || async move {
        match api().staff_performance().await {
            Ok(perf) => avg_rating.set(Some(perf.metrics.avg_rating)),
            Err(e) => tracing::debug!("performance unavailable: {e}"),
        }
    });

    let name = auth
        .read()
        .user()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();
    let list = appointments();
    let day = today();
    let rating = avg_rating().map_or_else(|| "N/A".to_string(), |r| format!("{r:.1}"));

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Welcome back, {name}",
                subtitle: "Here's your schedule at a glance",
            }

            div {
                class: "stat-grid",
                StatCard { label: "Today's Appointments", value: count_dated_within(&list, day, 0).to_string(), tone: "blue" }
                StatCard { label: "This Week", value: count_dated_within(&list, day, 7).to_string(), tone: "yellow" }
                StatCard {
                    label: "Completed",
                    value: count_status(&list, AppointmentStatus::Completed).to_string(),
                    tone: "green",
                }
                StatCard { label: "Avg. Rating", value: rating, tone: "purple" }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Upcoming Appointments" }
                if list.is_empty() {
                    EmptyState { message: "No appointments scheduled" }
                }
                for apt in list.iter().filter(|a| a.status.is_open()) {
                    div {
                        key: "{apt.id}",
                        class: "list-row",
                        div {
                            class: "list-main",
                            p { class: "list-title", "{apt.client_label()}" }
                            p { class: "muted", "{apt.appointment_type}" }
                        }
                        div {
                            class: "list-date",
                            p { "{format_date(&apt.date)}" }
                            p { class: "muted", "{format_time_12h(&apt.time)}" }
                        }
                        StatusBadge { status: apt.status }
                    }
                }
            }
        }
    }
}
