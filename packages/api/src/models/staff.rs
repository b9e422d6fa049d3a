use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// `active` or `inactive`.
    pub status: String,
    #[serde(default)]
    pub appointments_handled: u64,
}

impl StaffResponse {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffRequest {
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// One weekday of a staff member's working hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub is_working: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockedDate {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BlockedDateRequest {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_day_keeps_is_working_key() {
        let day = WorkDay {
            day: "Monday".into(),
            start_time: "08:00".into(),
            end_time: "17:00".into(),
            is_working: true,
        };
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["isWorking"], true);
        assert_eq!(value["startTime"], "08:00");
    }

    #[test]
    fn test_staff_status() {
        let json = r#"{"id":"s1","fullName":"Marie","email":"m@x.rw","department":null,"phone":null,"status":"inactive","appointmentsHandled":12}"#;
        let staff: StaffResponse = serde_json::from_str(json).unwrap();
        assert!(!staff.is_active());
        assert_eq!(staff.appointments_handled, 12);
    }
}
