use api::models::AppointmentStatus;
use dioxus::prelude::*;

pub fn status_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Confirmed => "badge badge-green",
        AppointmentStatus::Pending => "badge badge-yellow",
        AppointmentStatus::Scheduled => "badge badge-blue",
        AppointmentStatus::Completed => "badge badge-purple",
        AppointmentStatus::Cancelled => "badge badge-red",
        AppointmentStatus::Unknown => "badge badge-gray",
    }
}

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> Element {
    rsx! {
        span { class: status_class(status), "{status.label()}" }
    }
}

/// Small coloured pill for free-form labels (`active`, `support`, `alert`...).
#[component]
pub fn Pill(label: String, #[props(default = "gray".to_string())] tone: String) -> Element {
    rsx! {
        span { class: "badge badge-{tone}", "{label}" }
    }
}
