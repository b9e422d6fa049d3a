use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsResponse {
    pub system_name: String,
    pub support_email: String,
    pub max_appointments_per_day: u32,
    /// Minutes.
    pub appointment_duration: u32,
    pub admin_notifications: bool,
    pub staff_notifications: bool,
    pub client_notifications: bool,
    pub maintenance_mode: bool,
    pub auto_backup: bool,
    pub backup_time: String,
    pub two_factor_auth: bool,
    /// Days.
    pub password_expiry: u32,
    #[serde(default)]
    pub updated_at: String,
}

/// Everything in [`SystemSettingsResponse`] except `updatedAt`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsUpdate {
    pub system_name: String,
    pub support_email: String,
    pub max_appointments_per_day: u32,
    pub appointment_duration: u32,
    pub admin_notifications: bool,
    pub staff_notifications: bool,
    pub client_notifications: bool,
    pub maintenance_mode: bool,
    pub auto_backup: bool,
    pub backup_time: String,
    pub two_factor_auth: bool,
    pub password_expiry: u32,
}

impl From<&SystemSettingsResponse> for SystemSettingsUpdate {
    fn from(s: &SystemSettingsResponse) -> Self {
        Self {
            system_name: s.system_name.clone(),
            support_email: s.support_email.clone(),
            max_appointments_per_day: s.max_appointments_per_day,
            appointment_duration: s.appointment_duration,
            admin_notifications: s.admin_notifications,
            staff_notifications: s.staff_notifications,
            client_notifications: s.client_notifications,
            maintenance_mode: s.maintenance_mode,
            auto_backup: s.auto_backup,
            backup_time: s.backup_time.clone(),
            two_factor_auth: s.two_factor_auth,
            password_expiry: s.password_expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drops_updated_at() {
        let json = r#"{
            "systemName": "RRA Appointments", "supportEmail": "support@rra.gov.rw",
            "maxAppointmentsPerDay": 40, "appointmentDuration": 30,
            "adminNotifications": true, "staffNotifications": true, "clientNotifications": false,
            "maintenanceMode": false, "autoBackup": true, "backupTime": "02:00",
            "twoFactorAuth": false, "passwordExpiry": 90, "updatedAt": "2025-01-01T00:00:00Z"
        }"#;
        let settings: SystemSettingsResponse = serde_json::from_str(json).unwrap();
        let body = serde_json::to_value(SystemSettingsUpdate::from(&settings)).unwrap();
        assert!(body.get("updatedAt").is_none());
        assert_eq!(body["maxAppointmentsPerDay"], 40);
        assert_eq!(body["backupTime"], "02:00");
    }
}
