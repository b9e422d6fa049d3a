use api::models::{AdminReports as Report, ReportRange};
use dioxus::prelude::*;
use ui::download::{csv_row, download_csv, escape_html, html_table, print_report};
use ui::filters;
use ui::time::generated_at;
use ui::icons::*;
use ui::{stars, use_api, use_toast, BarChart, EmptyState, ErrorBanner, Icon, Loading, PageHeader, Pill, StatCard};

use super::level_tone;

/// Department choices: every catalog department plus any the report mentions.
fn department_names(catalog: &[String], report: &Report) -> Vec<String> {
    let mut names: Vec<String> = catalog
        .iter()
        .cloned()
        .chain(report.department_breakdown.iter().map(|d| d.name.clone()))
        .filter(|n| !n.trim().is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn report_csv(report: &Report) -> String {
    let m = &report.metrics;
    let mut lines = vec![
        csv_row(["Metric", "Value"]),
        csv_row(["Total appointments", m.total_appointments.to_string().as_str()]),
        csv_row(["Completion rate (%)", format!("{:.1}", m.completion_rate).as_str()]),
        csv_row(["Avg response time (h)", format!("{:.1}", m.avg_response_time_hours).as_str()]),
        csv_row(["Active users", m.active_users.to_string().as_str()]),
        String::new(),
        csv_row(["Service", "Appointments", "Share (%)"]),
    ];
    for s in &report.service_types {
        lines.push(csv_row([
            s.name.as_str(),
            s.count.to_string().as_str(),
            s.percentage.to_string().as_str(),
        ]));
    }
    lines.push(String::new());
    lines.push(csv_row(["Department", "Appointments"]));
    for d in &report.department_breakdown {
        lines.push(csv_row([d.name.as_str(), d.count.to_string().as_str()]));
    }
    lines.push(String::new());
    lines.push(csv_row(["Staff", "Department", "Completed", "Rating"]));
    for s in &report.top_staff {
        lines.push(csv_row([
            s.name.as_str(),
            s.department.as_deref().unwrap_or_default(),
            s.completed.to_string().as_str(),
            format!("{:.1}", s.rating).as_str(),
        ]));
    }
    lines.join("\n")
}

/// Printable body for the PDF export.
fn reports_report_html(report: &Report, range: ReportRange, department: &str, generated: &str) -> String {
    let m = &report.metrics;
    let department = if department == filters::ALL { "All Departments" } else { department };
    let services: Vec<Vec<String>> = report
        .service_types
        .iter()
        .map(|s| vec![s.name.clone(), s.count.to_string(), format!("{}%", s.percentage)])
        .collect();
    let departments: Vec<Vec<String>> = report
        .department_breakdown
        .iter()
        .map(|d| vec![d.name.clone(), d.count.to_string()])
        .collect();
    let staff: Vec<Vec<String>> = report
        .top_staff
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.department.clone().unwrap_or_default(),
                s.completed.to_string(),
                format!("{:.1}", s.rating),
            ]
        })
        .collect();
    format!(
        "<h1>Appointment Report</h1>\
         <p>Range: {} | Department: {} | Generated: {}</p>\
         <p>Total: {} | Completion Rate: {:.1}% | Avg Response: {:.1}h | Active Users: {}</p>\
         <h2>Service Types</h2>{}\
         <h2>Departments</h2>{}\
         <h2>Top Staff</h2>{}",
        escape_html(range.label()),
        escape_html(department),
        escape_html(generated),
        m.total_appointments,
        m.completion_rate,
        m.avg_response_time_hours,
        m.active_users,
        html_table(&["Service", "Appointments", "Share"], &services, "No service data"),
        html_table(&["Department", "Appointments"], &departments, "No department data"),
        html_table(&["Staff", "Department", "Completed", "Rating"], &staff, "No completed appointments"),
    )
}

#[component]
pub fn AdminReports() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut range = use_signal(ReportRange::default);
    let mut department = use_signal(|| filters::ALL.to_string());
    let mut report = use_signal(|| Option::<Report>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut catalog = use_signal(Vec::<String>::new);

    let _departments = use_resource(move || async move {
        match api().list_departments().await {
            Ok(list) => catalog.set(list.into_iter().map(|d| d.name).collect()),
            Err(e) => tracing::debug!("department list unavailable: {e}"),
        }
    });

    let _loader = use_resource(move || async move {
        let (r, dept) = (range(), department());
        match api().admin_reports(r, &dept).await {
            Ok(data) => {
                report.set(Some(data));
                error.set(None);
            }
            Err(e) => {
                tracing::warn!("could not load reports: {e}");
                error.set(Some(e.to_string()));
            }
        }
    });

    let export = move |_: MouseEvent| {
        let Some(data) = report() else {
            toast.info("No report data to export.", "");
            return;
        };
        let filename = format!("admin-report-{}-{}.csv", range().as_str(), department());
        match download_csv(&filename, report_csv(&data)) {
            Ok(()) => toast.success("CSV exported successfully.", &filename),
            Err(e) => toast.error("Export failed", &e.to_string()),
        }
    };

    let export_pdf = move |_: MouseEvent| {
        let Some(data) = report() else {
            toast.info("No report data to export.", "");
            return;
        };
        let body = reports_report_html(&data, range(), &department(), &generated_at());
        spawn(async move {
            match print_report("Appointment Report", &body).await {
                Ok(true) => toast.success("PDF export dialog opened.", ""),
                Ok(false) => toast.error("Popup blocked", "Allow popups to export PDF."),
                Err(e) => {
                    tracing::warn!("pdf export failed: {e}");
                    toast.error("Export failed", &e.to_string());
                }
            }
        });
    };

    let current = report();
    let names = current
        .as_ref()
        .map(|r| department_names(&catalog.read(), r))
        .unwrap_or_else(|| catalog());

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Reports & Analytics",
                subtitle: "System performance across departments",
                button {
                    class: "btn btn-secondary",
                    onclick: export,
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    span { "Export CSV" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: export_pdf,
                    Icon { icon: FaPrint, width: 14, height: 14 }
                    span { "Export PDF" }
                }
            }

            div {
                class: "toolbar",
                select {
                    value: range().as_str(),
                    onchange: move |e| range.set(ReportRange::parse(&e.value())),
                    for r in ReportRange::ALL {
                        option { key: "{r.as_str()}", value: r.as_str(), "{r.label()}" }
                    }
                }
                select {
                    value: "{department}",
                    onchange: move |e| department.set(e.value()),
                    option { value: filters::ALL, "All Departments" }
                    for name in names {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            {match current {
                None => rsx! { Loading { label: "Loading report..." } },
                Some(data) => rsx! {
                    div {
                        class: "stat-grid",
                        StatCard { label: "Total Appointments", value: data.metrics.total_appointments.to_string(), tone: "blue" }
                        StatCard { label: "Completion Rate", value: format!("{:.1}%", data.metrics.completion_rate), tone: "green" }
                        StatCard { label: "Avg. Response Time", value: format!("{:.1}h", data.metrics.avg_response_time_hours), tone: "yellow" }
                        StatCard { label: "Active Users", value: data.metrics.active_users.to_string(), tone: "purple" }
                    }

                    div {
                        class: "two-column",
                        div {
                            class: "card",
                            h3 { class: "card-title", "Weekly Trend" }
                            BarChart { points: data.weekly_trend.iter().map(|d| (d.day.clone(), d.value)).collect::<Vec<_>>() }
                        }
                        div {
                            class: "card",
                            h3 { class: "card-title", "Appointments by Department" }
                            if data.department_breakdown.is_empty() {
                                EmptyState { message: "No department data" }
                            } else {
                                BarChart { points: data.department_breakdown.iter().map(|d| (d.name.clone(), d.count)).collect::<Vec<_>>() }
                            }
                        }
                    }

                    div {
                        class: "two-column",
                        div {
                            class: "card",
                            h3 { class: "card-title", "Service Types" }
                            for s in data.service_types.iter() {
                                div {
                                    key: "{s.name}",
                                    class: "list-row",
                                    span { class: "list-title", "{s.name}" }
                                    span { class: "muted", "{s.count}" }
                                    span { class: "badge badge-blue", "{s.percentage}%" }
                                }
                            }
                        }
                        div {
                            class: "card",
                            h3 { class: "card-title", "Top Staff" }
                            for s in data.top_staff.iter() {
                                div {
                                    key: "{s.name}",
                                    class: "list-row",
                                    div {
                                        class: "list-main",
                                        p { class: "list-title", "{s.name}" }
                                        p { class: "muted", {s.department.clone().unwrap_or_default()} }
                                    }
                                    span { "{s.completed} completed" }
                                    span { class: "stars", "{stars(s.rating)}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "card",
                        h3 { class: "card-title", "System Health" }
                        for h in data.system_health.iter() {
                            div {
                                key: "{h.label}",
                                class: "list-row",
                                span { class: "list-title", "{h.label}" }
                                span { "{h.value:.1}" }
                                Pill { label: h.status.clone(), tone: level_tone(&h.status).to_string() }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::{NameCount, ServiceShare};

    fn report() -> Report {
        Report {
            service_types: vec![ServiceShare {
                name: "Tax Filing".into(),
                count: 60,
                percentage: 50,
            }],
            department_breakdown: vec![
                NameCount { name: "Customs".into(), count: 10 },
                NameCount { name: "Domestic Taxes".into(), count: 70 },
            ],
            ..Report::default()
        }
    }

    #[test]
    fn test_department_names_merge_catalog_and_report() {
        let catalog = vec!["Domestic Taxes".to_string(), "Audit".to_string()];
        assert_eq!(
            department_names(&catalog, &report()),
            vec!["Audit", "Customs", "Domestic Taxes"]
        );
    }

    #[test]
    fn test_report_csv_sections() {
        let csv = report_csv(&report());
        assert!(csv.starts_with("\"Metric\",\"Value\""));
        assert!(csv.contains("\"Tax Filing\",\"60\",\"50\""));
        assert!(csv.contains("\"Domestic Taxes\",\"70\""));
    }

    #[test]
    fn test_reports_report_html_escapes_and_marks_empty() {
        let mut data = report();
        data.service_types[0].name = "Tax <Filing> & Audit".into();
        let html = reports_report_html(&data, ReportRange::default(), filters::ALL, "Mar 4, 2025 09:00 AM");
        assert!(html.contains("Department: All Departments | Generated: Mar 4, 2025 09:00 AM"));
        assert!(html.contains("<td>Tax &lt;Filing&gt; &amp; Audit</td><td>60</td><td>50%</td>"));
        assert!(html.contains("<td>Customs</td><td>10</td>"));
        assert!(html.contains("<td colspan='4'>No completed appointments</td>"));
        assert!(!html.contains("<Filing>"));

        let html = reports_report_html(&data, ReportRange::default(), "R&D", "now");
        assert!(html.contains("Department: R&amp;D"));
    }
}
