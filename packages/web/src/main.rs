use dioxus::prelude::*;

use store::AppConfig;
use ui::{AuthProvider, ToastProvider};
use views::admin::{
    AdminAppointments, AdminClients, AdminDashboard, AdminDepartments, AdminReports, AdminServices,
    AdminSettings, AdminStaff,
};
use views::client::{ClientAppointments, ClientHistory, ClientNotifications, Schedule};
use views::staff::{StaffAppointments, StaffDashboard, StaffFeedback, StaffHours, StaffPerformance};
use views::{
    AdminLayout, ClientLayout, Dashboard, ForgotPassword, Home, Login, NotFound, ResetPassword,
    Signup, StaffLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password?:email")]
    ResetPassword { email: String },
    #[route("/dashboard")]
    Dashboard {},

    #[layout(ClientLayout)]
        #[route("/appointments")]
        ClientAppointments {},
        #[route("/schedule")]
        Schedule {},
        #[route("/notifications")]
        ClientNotifications {},
        #[route("/reports")]
        ClientHistory {},
    #[end_layout]

    #[layout(StaffLayout)]
        #[route("/staff-dashboard")]
        StaffDashboard {},
        #[route("/staff-appointments")]
        StaffAppointments {},
        #[route("/staff-hours")]
        StaffHours {},
        #[route("/staff-performance")]
        StaffPerformance {},
        #[route("/staff-feedback")]
        StaffFeedback {},
    #[end_layout]

    #[layout(AdminLayout)]
        #[route("/admin-dashboard")]
        AdminDashboard {},
        #[route("/admin-appointments")]
        AdminAppointments {},
        #[route("/admin-staff")]
        AdminStaff {},
        #[route("/admin-departments")]
        AdminDepartments {},
        #[route("/admin-services")]
        AdminServices {},
        #[route("/admin-clients")]
        AdminClients {},
        #[route("/admin-reports")]
        AdminReports {},
        #[route("/admin-settings")]
        AdminSettings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../appointments.toml");

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {e}");
    }
    dioxus::launch(App);
}

/// Compiled-in configuration with build-time overrides applied.
fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config.with_build_env(),
        Err(e) => {
            tracing::error!("{} is invalid, using defaults: {e}", AppConfig::filename());
            AppConfig::default().with_build_env()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_hook(|| tracing::info!("API at {}", config.api_base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
