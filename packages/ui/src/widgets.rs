use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(sub) = subtitle {
                    p { class: "page-subtitle", "{sub}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String, #[props(default = "blue".to_string())] tone: String) -> Element {
    rsx! {
        div {
            class: "stat-card stat-{tone}",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", span { class: "spinner" } span { "{label}" } }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}

/// Horizontal bars scaled to the largest value.
#[component]
pub fn BarChart(points: Vec<(String, u64)>) -> Element {
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    rsx! {
        div {
            class: "bar-chart",
            for (label, value) in points {
                div {
                    key: "{label}",
                    class: "bar-row",
                    span { class: "bar-label", "{label}" }
                    div {
                        class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: format!("width: {}%", bar_width(value, max)),
                        }
                    }
                    span { class: "bar-value", "{value}" }
                }
            }
        }
    }
}

fn bar_width(value: u64, max: u64) -> u64 {
    (value * 100) / max.max(1)
}

/// `★★★★☆` for a 0-5 rating.
pub fn stars(rating: f64) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scales_to_max() {
        assert_eq!(bar_width(5, 10), 50);
        assert_eq!(bar_width(0, 0), 0);
        assert_eq!(bar_width(10, 10), 100);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.6), "★★★★★");
        assert_eq!(stars(3.2), "★★★☆☆");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }
}
