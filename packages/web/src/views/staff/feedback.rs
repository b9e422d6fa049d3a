use api::models::Feedback;
use dioxus::prelude::*;
use ui::filters;
use ui::time::format_date;
use ui::{stars, use_api, EmptyState, Loading, PageHeader, Pill, StatCard};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct FeedbackSummary {
    average: f64,
    total: usize,
    positive: usize,
    neutral: usize,
    negative: usize,
}

impl FeedbackSummary {
    fn of(list: &[Feedback]) -> Self {
        let mut summary = Self {
            total: list.len(),
            ..Self::default()
        };
        for f in list {
            match f.rating {
                4.. => summary.positive += 1,
                3 => summary.neutral += 1,
                _ => summary.negative += 1,
            }
        }
        if !list.is_empty() {
            let sum: u64 = list.iter().map(|f| u64::from(f.rating)).sum();
            summary.average = sum as f64 / list.len() as f64;
        }
        summary
    }

    /// Percentage of four- and five-star reviews.
    fn satisfaction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.positive as f64 * 100.0 / self.total as f64
        }
    }
}

fn sentiment(rating: u8) -> (&'static str, &'static str) {
    match rating {
        4.. => ("Positive", "green"),
        3 => ("Neutral", "yellow"),
        _ => ("Negative", "red"),
    }
}

#[component]
pub fn StaffFeedback() -> Element {
    let api = use_api();

    let mut feedback = use_signal(Vec::<Feedback>::new);
    let mut loading = use_signal(|| true);
    let mut rating = use_signal(|| filters::ALL.to_string());

    let _loader = use_resource(move || async move {
        match api().staff_performance().await {
            Ok(perf) => feedback.set(perf.recent_feedback),
            Err(e) => {
                tracing::warn!("could not load feedback: {e}");
                feedback.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let all = feedback();
    let summary = FeedbackSummary::of(&all);
    let visible = filters::feedback(&all, rating.read().parse::<u8>().ok());

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Client Feedback",
                subtitle: "What clients said about their appointments with you",
            }

            div {
                class: "stat-grid",
                StatCard { label: "Average Rating", value: format!("{:.1}", summary.average), tone: "yellow" }
                StatCard { label: "Total Reviews", value: summary.total.to_string(), tone: "blue" }
                StatCard { label: "Satisfaction", value: format!("{:.0}%", summary.satisfaction()), tone: "green" }
                StatCard {
                    label: "Positive / Neutral / Negative",
                    value: format!("{} / {} / {}", summary.positive, summary.neutral, summary.negative),
                    tone: "purple",
                }
            }

            div {
                class: "toolbar",
                select {
                    value: "{rating}",
                    onchange: move |e| rating.set(e.value()),
                    option { value: filters::ALL, "All Ratings" }
                    for r in (1..=5u8).rev() {
                        option { key: "{r}", value: "{r}", "{r} stars" }
                    }
                }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if visible.is_empty() {
                    EmptyState { message: "No feedback found" }
                }
                for (index, item) in visible.iter().enumerate() {
                    {
                        let (label, tone) = sentiment(item.rating);
                        rsx! {
                            div {
                                key: "{index}-{item.client}",
                                class: "list-row",
                                div {
                                    class: "list-main",
                                    p { class: "list-title", "{item.client}" }
                                    p { class: "stars", "{stars(item.rating as f64)}" }
                                    if !item.comment.is_empty() {
                                        p { class: "muted", "{item.comment}" }
                                    }
                                }
                                span { class: "list-date", "{format_date(&item.date)}" }
                                Pill { label: label.to_string(), tone: tone.to_string() }
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

    fn review(rating: u8) -> Feedback {
        Feedback {
            client: format!("client {rating}"),
            rating,
            comment: String::new(),
            date: "2025-03-04".into(),
        }
    }

    #[test]
    fn test_summary_buckets_by_rating() {
        let list: Vec<Feedback> = [5, 4, 3, 2, 1].into_iter().map(review).collect();
        let summary = FeedbackSummary::of(&list);
        assert_eq!(summary.total, 5);
        assert_eq!((summary.positive, summary.neutral, summary.negative), (2, 1, 2));
        assert_eq!(summary.average, 3.0);
        assert_eq!(summary.satisfaction(), 40.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = FeedbackSummary::of(&[]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.satisfaction(), 0.0);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(sentiment(5).0, "Positive");
        assert_eq!(sentiment(3).0, "Neutral");
        assert_eq!(sentiment(1).1, "red");
    }
}
