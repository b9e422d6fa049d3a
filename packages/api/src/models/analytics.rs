//! Read-only aggregates served under `/api/analytics`.
//!
//! The server computes everything here; the client only renders it. Series
//! entries are small labelled points (`{ day, value }`, `{ name, count }`)
//! that feed the dashboards' bar charts and tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayCount {
    pub day: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceShare {
    pub name: String,
    pub count: u64,
    pub percentage: u32,
}

// -- admin dashboard --

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDashboard {
    pub metrics: AdminDashboardMetrics,
    pub weekly_trend: Vec<DayCount>,
    pub system_status: Vec<SystemStatus>,
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDashboardMetrics {
    pub total_appointments: u64,
    pub active_staff: u64,
    pub avg_wait_minutes: f64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    pub name: String,
    pub status: String,
    /// `good`, `warn` or `bad`.
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub event: String,
    pub user: String,
    pub time_ago: String,
}

// -- admin reports --

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminReports {
    pub metrics: AdminReportMetrics,
    pub service_types: Vec<ServiceShare>,
    pub top_staff: Vec<StaffSummary>,
    pub weekly_trend: Vec<DayCount>,
    pub department_breakdown: Vec<NameCount>,
    pub system_health: Vec<HealthMetric>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminReportMetrics {
    pub total_appointments: u64,
    pub completion_rate: f64,
    pub avg_response_time_hours: f64,
    pub active_users: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaffSummary {
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    pub completed: u64,
    pub rating: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthMetric {
    pub label: String,
    pub value: f64,
    pub status: String,
}

/// Reporting window accepted by `/api/analytics/admin/reports`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportRange {
    pub const ALL: [ReportRange; 4] = [
        ReportRange::Week,
        ReportRange::Month,
        ReportRange::Quarter,
        ReportRange::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRange::Week => "week",
            ReportRange::Month => "month",
            ReportRange::Quarter => "quarter",
            ReportRange::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportRange::Week => "This Week",
            ReportRange::Month => "This Month",
            ReportRange::Quarter => "This Quarter",
            ReportRange::Year => "This Year",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == value)
            .unwrap_or_default()
    }
}

// -- staff performance --

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffPerformance {
    pub metrics: StaffMetrics,
    pub appointments_by_month: Vec<MonthValue>,
    pub feedback_distribution: Vec<RatingCount>,
    pub service_breakdown: Vec<ServiceShare>,
    pub achievements: Vec<Achievement>,
    pub comparisons: Vec<Comparison>,
    pub recent_feedback: Vec<Feedback>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffMetrics {
    pub total_appointments: u64,
    pub completion_rate: f64,
    pub avg_rating: f64,
    pub on_time_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthValue {
    pub month: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub badge: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub metric: String,
    pub yours: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub client: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub date: String,
}

// -- staff hours --

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffHours {
    pub schedule: Vec<super::WorkDay>,
    pub blocked_dates: Vec<super::BlockedDate>,
    pub appointments: Vec<StaffAppointment>,
    pub stats: StaffAppointmentStats,
}

/// Bucket the hours view sorts an appointment into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentBucket {
    Today,
    Upcoming,
    Completed,
}

impl AppointmentBucket {
    pub const ALL: [AppointmentBucket; 3] = [
        AppointmentBucket::Today,
        AppointmentBucket::Upcoming,
        AppointmentBucket::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentBucket::Today => "Today",
            AppointmentBucket::Upcoming => "Upcoming",
            AppointmentBucket::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffAppointment {
    pub id: String,
    pub client_name: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: AppointmentBucket,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaffAppointmentStats {
    pub today: u64,
    pub upcoming: u64,
    pub completed: u64,
}

// -- client history --

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientHistory {
    pub stats: HistoryStats,
    pub completed_appointments: Vec<CompletedAppointment>,
    pub cancelled_appointments: Vec<CancelledAppointment>,
    pub monthly_breakdown: Vec<MonthCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryStats {
    pub total_completed: u64,
    pub total_cancelled: u64,
    pub avg_duration_minutes: f64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletedAppointment {
    pub id: String,
    pub date: String,
    pub time: String,
    pub title: String,
    pub duration: String,
    pub officer: String,
    pub notes: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CancelledAppointment {
    pub id: String,
    pub date: String,
    pub title: String,
    pub reason: String,
    pub rescheduled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthCount {
    pub month: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_payload() {
        let json = r#"{
            "metrics": {"totalAppointments": 120, "completionRate": 87.5, "avgResponseTimeHours": 2.4, "activeUsers": 45},
            "serviceTypes": [{"name": "Tax Filing", "count": 60, "percentage": 50}],
            "topStaff": [{"name": "Marie", "department": null, "completed": 30, "rating": 4.8}],
            "weeklyTrend": [{"day": "Mon", "value": 12}],
            "departmentBreakdown": [{"name": "Domestic Taxes", "count": 70}],
            "systemHealth": [{"label": "Uptime", "value": 99.9, "status": "good"}]
        }"#;
        let reports: AdminReports = serde_json::from_str(json).unwrap();
        assert_eq!(reports.metrics.total_appointments, 120);
        assert_eq!(reports.service_types[0].percentage, 50);
        assert!(reports.top_staff[0].department.is_none());
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let dashboard: AdminDashboard = serde_json::from_str(r#"{"metrics":{"totalAppointments":3}}"#).unwrap();
        assert_eq!(dashboard.metrics.total_appointments, 3);
        assert!(dashboard.weekly_trend.is_empty());
        assert!(dashboard.recent_activity.is_empty());
    }

    #[test]
    fn test_staff_hours_buckets() {
        let json = r#"{
            "schedule": [{"day":"Monday","startTime":"08:00","endTime":"17:00","isWorking":true}],
            "blockedDates": [{"id":"b1","date":"2025-12-25","reason":null}],
            "appointments": [{"id":"a1","clientName":"Jean","serviceType":"VAT","date":"2025-03-01","time":"09:00","location":"Kigali","status":"today"}],
            "stats": {"today":1,"upcoming":0,"completed":4}
        }"#;
        let hours: StaffHours = serde_json::from_str(json).unwrap();
        assert_eq!(hours.appointments[0].status, AppointmentBucket::Today);
        assert!(hours.schedule[0].is_working);
        assert_eq!(hours.stats.completed, 4);
    }

    #[test]
    fn test_report_range_parse() {
        assert_eq!(ReportRange::parse("quarter"), ReportRange::Quarter);
        assert_eq!(ReportRange::parse("decade"), ReportRange::Month);
    }
}
