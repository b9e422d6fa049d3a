use api::models::StaffPerformance as Performance;
use dioxus::prelude::*;
use ui::icons::*;
use ui::time::format_date;
use ui::{use_api, BarChart, EmptyState, ErrorBanner, Icon, Loading, PageHeader, StatCard};

/// Share of `count` in `total` as a whole percentage.
fn percent_of(count: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        (count * 100 + total / 2) / total
    }
}

fn comparison_class(yours: f64, average: f64) -> &'static str {
    if yours >= average {
        "stat-value stat-green"
    } else {
        "stat-value stat-red"
    }
}

#[component]
pub fn StaffPerformance() -> Element {
    let api = use_api();

    let mut performance = use_signal(Performance::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().staff_performance().await {
            Ok(perf) => performance.set(perf),
            Err(e) => {
                tracing::warn!("could not load performance: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    if loading() {
        return rsx! { Loading {} };
    }

    let perf = performance();
    let metrics = &perf.metrics;
    let months: Vec<(String, u64)> = perf
        .appointments_by_month
        .iter()
        .map(|m| (m.month.clone(), m.value))
        .collect();
    let ratings_total: u64 = perf.feedback_distribution.iter().map(|r| r.count).sum();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "My Performance",
                subtitle: "Track how your appointments and reviews are going",
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Appointments", value: metrics.total_appointments.to_string(), tone: "blue" }
                StatCard { label: "Completion Rate", value: format!("{:.1}%", metrics.completion_rate), tone: "green" }
                StatCard { label: "Average Rating", value: format!("{:.1}", metrics.avg_rating), tone: "yellow" }
                StatCard { label: "On-time Rate", value: format!("{:.1}%", metrics.on_time_rate), tone: "purple" }
            }

            div {
                class: "two-column",
                div {
                    class: "card",
                    h3 { class: "card-title", "Appointments by Month" }
                    if months.is_empty() {
                        EmptyState { message: "No data yet" }
                    } else {
                        BarChart { points: months }
                    }
                }
                div {
                    class: "card",
                    h3 { class: "card-title", "Rating Distribution" }
                    for entry in perf.feedback_distribution.iter() {
                        div {
                            key: "{entry.rating}",
                            class: "bar-row",
                            span { class: "bar-label stars", "{ui::stars(entry.rating as f64)}" }
                            div {
                                class: "bar-track",
                                div {
                                    class: "bar-fill",
                                    style: format!("width: {}%", percent_of(entry.count, ratings_total)),
                                }
                            }
                            span { class: "bar-value", "{entry.count}" }
                        }
                    }
                }
            }

            div {
                class: "two-column",
                div {
                    class: "card",
                    h3 { class: "card-title", "Service Breakdown" }
                    for service in perf.service_breakdown.iter() {
                        div {
                            key: "{service.name}",
                            class: "list-row",
                            span { class: "list-title", "{service.name}" }
                            span { class: "muted", "{service.count} appointments" }
                            span { class: "badge badge-blue", "{service.percentage}%" }
                        }
                    }
                }
                div {
                    class: "card",
                    h3 { class: "card-title", "Compared to Team Average" }
                    for cmp in perf.comparisons.iter() {
                        div {
                            key: "{cmp.metric}",
                            class: "list-row",
                            span { class: "list-title", "{cmp.metric}" }
                            span { class: comparison_class(cmp.yours, cmp.average), "{cmp.yours:.1}" }
                            span { class: "muted", "avg {cmp.average:.1}" }
                        }
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Achievements" }
                if perf.achievements.is_empty() {
                    EmptyState { message: "No achievements yet. Keep going!" }
                }
                for badge in perf.achievements.iter() {
                    div {
                        key: "{badge.badge}",
                        class: "list-row",
                        span {
                            class: "icon-line",
                            Icon { icon: FaAward, width: 16, height: 16 }
                            span { class: "list-title", "{badge.badge}" }
                        }
                        span { class: "muted", "{badge.description}" }
                        span { class: "list-date", "{format_date(&badge.date)}" }
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
    fn test_percent_of_rounds() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(5, 0), 0);
    }

    #[test]
    fn test_comparison_class() {
        assert_eq!(comparison_class(4.8, 4.2), "stat-value stat-green");
        assert_eq!(comparison_class(3.0, 4.2), "stat-value stat-red");
    }
}
