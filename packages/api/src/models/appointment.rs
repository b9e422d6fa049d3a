use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an appointment as reported by the API.
///
/// Anything the client does not recognise becomes `Unknown`, which never
/// matches a concrete status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[serde(alias = "PENDING")]
    Pending,
    #[serde(alias = "CONFIRMED")]
    Confirmed,
    #[serde(alias = "SCHEDULED")]
    Scheduled,
    #[serde(alias = "COMPLETED")]
    Completed,
    #[serde(alias = "CANCELLED")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub const FILTERABLE: [AppointmentStatus; 5] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Unknown => "Unknown",
        }
    }

    /// Still waiting to happen: can be confirmed, completed or cancelled.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed | AppointmentStatus::Scheduled
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    pub appointment_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    pub location: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(default)]
    pub staff_email: Option<String>,
}

impl AppointmentResponse {
    pub fn client_label(&self) -> &str {
        self.client_name.as_deref().unwrap_or("Client")
    }

    pub fn staff_label(&self) -> &str {
        self.staff_name.as_deref().unwrap_or("Unassigned")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub appointment_type: String,
    pub date: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

/// PATCH body; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

impl AppointmentUpdate {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn reschedule(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_with_nulls() {
        let json = r#"{
            "id": "a1", "serviceId": null, "serviceName": "Tax Filing",
            "departmentId": null, "departmentName": null,
            "appointmentType": "Tax Filing", "date": "2025-03-04", "time": "14:30:00",
            "location": "Kigali Head Office", "status": "confirmed",
            "clientName": "Jean", "clientEmail": null, "clientPhone": null,
            "staffName": null, "staffEmail": null
        }"#;
        let apt: AppointmentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(apt.status, AppointmentStatus::Confirmed);
        assert_eq!(apt.client_label(), "Jean");
        assert_eq!(apt.staff_label(), "Unassigned");
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let s: AppointmentStatus = serde_json::from_str(r#""no_show""#).unwrap();
        assert_eq!(s, AppointmentStatus::Unknown);
        let s: AppointmentStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
        assert_eq!(s, AppointmentStatus::Cancelled);
        assert!(!AppointmentStatus::Unknown.is_open());
        assert!(AppointmentStatus::Pending.is_open());
    }

    #[test]
    fn test_update_only_sends_set_fields() {
        let body = serde_json::to_value(AppointmentUpdate::status(AppointmentStatus::Cancelled)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "cancelled" }));

        let body = serde_json::to_value(AppointmentUpdate::reschedule("2025-05-01", "09:00")).unwrap();
        assert_eq!(body, serde_json::json!({ "date": "2025-05-01", "time": "09:00" }));
    }

    #[test]
    fn test_request_omits_empty_optionals() {
        let req = AppointmentRequest {
            appointment_type: "Business Registration".into(),
            date: "2025-06-10".into(),
            time: "14:30".into(),
            location: "Musanze Branch".into(),
            notes: None,
            staff_id: None,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["appointmentType"], "Business Registration");
        assert!(body.get("notes").is_none());
        assert!(body.get("staffId").is_none());
    }
}
