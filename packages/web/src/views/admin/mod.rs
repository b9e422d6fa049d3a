mod dashboard;
pub use dashboard::AdminDashboard;

mod appointments;
pub use appointments::AdminAppointments;

mod staff;
pub use staff::AdminStaff;

mod departments;
pub use departments::AdminDepartments;

mod services;
pub use services::AdminServices;

mod clients;
pub use clients::AdminClients;

mod reports;
pub use reports::AdminReports;

mod settings;
pub use settings::AdminSettings;

/// Badge tone for a free-form health or status level reported by the API.
fn level_tone(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "good" | "ok" | "healthy" | "operational" | "online" => "green",
        "warning" | "degraded" | "slow" => "yellow",
        "bad" | "critical" | "down" | "error" | "offline" => "red",
        _ => "gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tone() {
        assert_eq!(level_tone("Good"), "green");
        assert_eq!(level_tone("degraded"), "yellow");
        assert_eq!(level_tone("DOWN"), "red");
        assert_eq!(level_tone("unknown"), "gray");
    }
}
