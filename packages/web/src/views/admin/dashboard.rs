use api::models::AdminDashboard as Overview;
use dioxus::prelude::*;
use ui::icons::*;
use ui::{use_api, BarChart, EmptyState, ErrorBanner, Icon, Loading, PageHeader, Pill, StatCard};

use super::level_tone;

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();

    let mut overview = use_signal(Overview::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().admin_dashboard().await {
            Ok(data) => overview.set(data),
            Err(e) => {
                tracing::warn!("could not load admin dashboard: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    if loading() {
        return rsx! { Loading {} };
    }

    let data = overview();
    let metrics = &data.metrics;
    let trend: Vec<(String, u64)> = data
        .weekly_trend
        .iter()
        .map(|d| (d.day.clone(), d.value))
        .collect();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Admin Dashboard",
                subtitle: "System-wide overview of appointments and staff",
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Appointments", value: metrics.total_appointments.to_string(), tone: "blue" }
                StatCard { label: "Active Staff", value: metrics.active_staff.to_string(), tone: "green" }
                StatCard { label: "Avg. Wait Time", value: format!("{:.0} min", metrics.avg_wait_minutes), tone: "yellow" }
                StatCard { label: "Completion Rate", value: format!("{:.1}%", metrics.completion_rate), tone: "purple" }
            }

            div {
                class: "two-column",
                div {
                    class: "card",
                    h3 { class: "card-title", "Appointments This Week" }
                    if trend.is_empty() {
                        EmptyState { message: "No appointments this week" }
                    } else {
                        BarChart { points: trend }
                    }
                }
                div {
                    class: "card",
                    h3 { class: "card-title", "System Status" }
                    for item in data.system_status.iter() {
                        div {
                            key: "{item.name}",
                            class: "list-row",
                            span { class: "list-title", "{item.name}" }
                            Pill { label: item.status.clone(), tone: level_tone(&item.level).to_string() }
                        }
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Recent Activity" }
                if data.recent_activity.is_empty() {
                    EmptyState { message: "No recent activity" }
                }
                for (index, item) in data.recent_activity.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "list-row",
                        span {
                            class: "icon-line",
                            Icon { icon: FaCircleInfo, width: 14, height: 14 }
                            span { class: "list-title", "{item.event}" }
                        }
                        span { class: "muted", "{item.user}" }
                        span { class: "list-date", "{item.time_ago}" }
                    }
                }
            }
        }
    }
}
