use api::models::ClientHistory as History;
use dioxus::prelude::*;
use ui::download::{csv_row, download_csv, escape_html, html_table, print_report};
use ui::time::{current_year, format_date, format_time_12h, generated_at};
use ui::{stars, use_api, use_toast, BarChart, EmptyState, PageHeader, StatCard};

/// The selectable report years: this year and the two before it.
fn years(current: i32) -> [i32; 3] {
    [current, current - 1, current - 2]
}

fn history_csv(history: &History) -> String {
    let stats = &history.stats;
    let mut lines = vec![
        csv_row(["Section", "Field", "Value"]),
        csv_row(["Stats", "Total Completed", stats.total_completed.to_string().as_str()]),
        csv_row(["Stats", "Total Cancelled", stats.total_cancelled.to_string().as_str()]),
        csv_row(["Stats", "Average Duration (min)", stats.avg_duration_minutes.to_string().as_str()]),
        String::new(),
        csv_row(["Completed", "Date", "Time", "Title", "Duration", "Officer", "Notes"]),
    ];
    lines.extend(history.completed_appointments.iter().map(|a| {
        csv_row([
            "Completed",
            a.date.as_str(),
            a.time.as_str(),
            a.title.as_str(),
            a.duration.as_str(),
            a.officer.as_str(),
            a.notes.as_str(),
        ])
    }));
    lines.push(String::new());
    lines.push(csv_row(["Cancelled", "Date", "Title", "Reason", "Rescheduled"]));
    lines.extend(history.cancelled_appointments.iter().map(|a| {
        csv_row([
            "Cancelled",
            a.date.as_str(),
            a.title.as_str(),
            a.reason.as_str(),
            if a.rescheduled { "Yes" } else { "No" },
        ])
    }));
    lines.push(String::new());
    lines.push(csv_row(["Monthly Breakdown", "Month", "Count"]));
    lines.extend(
        history
            .monthly_breakdown
            .iter()
            .map(|m| csv_row(["Monthly Breakdown", m.month.as_str(), m.count.to_string().as_str()])),
    );
    lines.join("\n")
}

/// Printable body for the PDF export.
fn history_report_html(history: &History, year: i32, generated: &str) -> String {
    let stats = &history.stats;
    let completed: Vec<Vec<String>> = history
        .completed_appointments
        .iter()
        .map(|a| {
            vec![
                a.date.clone(),
                a.time.clone(),
                a.title.clone(),
                a.duration.clone(),
                a.officer.clone(),
            ]
        })
        .collect();
    let cancelled: Vec<Vec<String>> = history
        .cancelled_appointments
        .iter()
        .map(|a| {
            vec![
                a.date.clone(),
                a.title.clone(),
                a.reason.clone(),
                if a.rescheduled { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();
    format!(
        "<h1>Client Appointment History Report</h1>\
         <p>Year: {year} | Generated: {}</p>\
         <p>Completed: {} | Cancelled: {} | Avg Duration: {} min</p>\
         <h2>Completed Appointments</h2>{}\
         <h2>Cancelled Appointments</h2>{}",
        escape_html(generated),
        stats.total_completed,
        stats.total_cancelled,
        stats.avg_duration_minutes,
        html_table(
            &["Date", "Time", "Title", "Duration", "Officer"],
            &completed,
            "No completed appointments",
        ),
        html_table(
            &["Date", "Title", "Reason", "Rescheduled"],
            &cancelled,
            "No cancelled appointments",
        ),
    )
}

/// `/reports` for clients: completed and cancelled appointments for one year.
#[component]
pub fn ClientHistory() -> Element {
    let api = use_api();
    let toast = use_toast();
    let this_year = current_year();

    let mut year = use_signal(move || this_year);
    let mut history = use_signal(|| Option::<History>::None);

    let _loader = use_resource(move || async move {
        let selected = year();
        match api().client_history(selected).await {
            Ok(data) => history.set(Some(data)),
            Err(e) => {
                tracing::warn!("could not load history for {selected}: {e}");
                history.set(None);
            }
        }
    });

    let export = move |_| {
        let Some(data) = history() else {
            toast.info("Nothing to export", "No history data to export.");
            return;
        };
        match download_csv(&format!("client-history-{}.csv", year()), history_csv(&data)) {
            Ok(()) => toast.success("Export", "CSV exported successfully."),
            Err(e) => {
                tracing::warn!("csv export failed: {e}");
                toast.error("Export", "Could not export CSV.");
            }
        }
    };

    let export_pdf = move |_: MouseEvent| {
        let Some(data) = history() else {
            toast.info("Nothing to export", "No history data to export.");
            return;
        };
        let body = history_report_html(&data, year(), &generated_at());
        spawn(async move {
            match print_report("Client History Report", &body).await {
                Ok(true) => toast.success("Export", "PDF export dialog opened."),
                Ok(false) => toast.error("Popup blocked", "Allow popups to export PDF."),
                Err(e) => {
                    tracing::warn!("pdf export failed: {e}");
                    toast.error("Export", "Could not export PDF.");
                }
            }
        });
    };

    let data = history().unwrap_or_default();
    let stats = data.stats.clone();
    let months: Vec<(String, u64)> = data
        .monthly_breakdown
        .iter()
        .map(|m| (m.month.clone(), m.count))
        .collect();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Appointment History",
                subtitle: "Your completed and cancelled appointments",
                select {
                    value: "{year}",
                    onchange: move |e| {
                        if let Ok(y) = e.value().parse() {
                            year.set(y);
                        }
                    },
                    for y in years(this_year) {
                        option { key: "{y}", value: "{y}", "{y}" }
                    }
                }
                button { class: "btn btn-secondary", onclick: export, "Export CSV" }
                button { class: "btn btn-secondary", onclick: export_pdf, "Export PDF" }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Completed", value: stats.total_completed.to_string(), tone: "green" }
                StatCard { label: "Cancelled", value: stats.total_cancelled.to_string(), tone: "red" }
                StatCard { label: "Avg Duration", value: format!("{:.0} min", stats.avg_duration_minutes), tone: "blue" }
                StatCard { label: "Avg Rating", value: format!("{:.1}", stats.avg_rating), tone: "yellow" }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Completed Appointments" }
                if data.completed_appointments.is_empty() {
                    EmptyState { message: "No completed appointments" }
                }
                for apt in data.completed_appointments.iter() {
                    div {
                        key: "{apt.id}",
                        class: "list-row",
                        div {
                            class: "list-main",
                            p { class: "list-title", "{apt.title}" }
                            p { class: "muted", "{format_date(&apt.date)} at {format_time_12h(&apt.time)} · {apt.duration}" }
                            p { class: "muted", "Officer: {apt.officer}" }
                            if !apt.notes.is_empty() {
                                p { class: "muted", "{apt.notes}" }
                            }
                        }
                        span { class: "stars", {stars(f64::from(apt.rating))} }
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Cancelled Appointments" }
                if data.cancelled_appointments.is_empty() {
                    EmptyState { message: "No cancelled appointments" }
                }
                for apt in data.cancelled_appointments.iter() {
                    div {
                        key: "{apt.id}",
                        class: "list-row",
                        div {
                            class: "list-main",
                            p { class: "list-title", "{apt.title}" }
                            p { class: "muted", "{format_date(&apt.date)}" }
                            p { class: "muted", "Reason: {apt.reason}" }
                        }
                        if apt.rescheduled {
                            span { class: "badge badge-green", "✓ Rescheduled" }
                        }
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Monthly Breakdown" }
                BarChart { points: months }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{CancelledAppointment, CompletedAppointment, HistoryStats, MonthCount};

    #[test]
    fn test_years_counts_back() {
        assert_eq!(years(2025), [2025, 2024, 2023]);
    }

    #[test]
    fn test_history_csv_sections() {
        let history = History {
            stats: HistoryStats {
                total_completed: 1,
                total_cancelled: 1,
                avg_duration_minutes: 30.0,
                avg_rating: 4.0,
            },
            completed_appointments: vec![CompletedAppointment {
                id: "1".into(),
                date: "2025-02-01".into(),
                time: "09:00".into(),
                title: "Tax Consultation".into(),
                duration: "30 min".into(),
                officer: "Marie".into(),
                notes: "brought \"all\" receipts".into(),
                rating: 4,
            }],
            cancelled_appointments: vec![CancelledAppointment {
                id: "2".into(),
                date: "2025-03-01".into(),
                title: "Audit Meeting".into(),
                reason: "Travel".into(),
                rescheduled: true,
            }],
            monthly_breakdown: vec![MonthCount {
                month: "Feb".into(),
                count: 1,
            }],
        };
        let csv = history_csv(&history);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], r#""Section","Field","Value""#);
        assert_eq!(lines[1], r#""Stats","Total Completed","1""#);
        assert!(csv.contains(r#""brought ""all"" receipts""#));
        assert!(csv.contains(r#""Cancelled","2025-03-01","Audit Meeting","Travel","Yes""#));
        assert_eq!(lines.last(), Some(&r#""Monthly Breakdown","Feb","1""#));
    }

    #[test]
    fn test_history_report_html_escapes_and_marks_empty() {
        let history = History {
            stats: HistoryStats {
                total_completed: 0,
                total_cancelled: 1,
                avg_duration_minutes: 45.0,
                avg_rating: 0.0,
            },
            cancelled_appointments: vec![CancelledAppointment {
                id: "2".into(),
                date: "2025-03-01".into(),
                title: "Audit <Meeting>".into(),
                reason: "Travel & leave".into(),
                rescheduled: false,
            }],
            ..History::default()
        };
        let html = history_report_html(&history, 2025, "Mar 4, 2025 09:00 AM");
        assert!(html.contains("<p>Year: 2025 | Generated: Mar 4, 2025 09:00 AM</p>"));
        assert!(html.contains("Completed: 0 | Cancelled: 1 | Avg Duration: 45 min"));
        assert!(html.contains("<td colspan='5'>No completed appointments</td>"));
        assert!(html.contains("<td>Audit &lt;Meeting&gt;</td><td>Travel &amp; leave</td><td>No</td>"));
        assert!(!html.contains("No cancelled appointments"));
    }
}
