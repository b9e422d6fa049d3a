//! Public landing page.

use dioxus::prelude::*;
use ui::icons::*;
use ui::{use_auth, Icon};

use crate::Route;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Online Booking",
        body: "Pick a service, a date, a time slot and an office in four short steps.",
    },
    Feature {
        title: "Real-time Notifications",
        body: "Confirmations, reminders and changes arrive in your notification inbox.",
    },
    Feature {
        title: "Staff Scheduling",
        body: "Officers manage working hours, blocked dates and their daily queue.",
    },
    Feature {
        title: "Reports & Analytics",
        body: "Administrators follow volumes, completion rates and service demand.",
    },
];

const STEPS: [&str; 4] = [
    "Create your account",
    "Choose a service and time",
    "Get confirmation",
    "Attend your appointment",
];

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth.read().session.is_some();

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-header",
                div {
                    class: "landing-brand",
                    span { class: "shell-logo", "RRA" }
                    div {
                        p { class: "landing-name", "RRA Appointments" }
                        p { class: "muted", "Rwanda Revenue Authority" }
                    }
                }
                nav {
                    class: "landing-nav",
                    if signed_in {
                        Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to Dashboard" }
                    } else {
                        Link { class: "btn btn-secondary", to: Route::Login {}, "Sign in" }
                        Link { class: "btn btn-primary", to: Route::Signup {}, "Get started" }
                    }
                }
            }

            section {
                class: "landing-hero",
                h1 { "Book your RRA appointments online" }
                p { "Skip the queue. Schedule tax consultations, license renewals and filings with the office that suits you." }
                Link {
                    class: "btn btn-primary btn-large",
                    to: if signed_in { Route::Schedule {} } else { Route::Signup {} },
                    Icon { icon: FaCalendarPlus, width: 16, height: 16 }
                    span { "Book an appointment" }
                }
            }

            section {
                class: "landing-section",
                h2 { "Core Features" }
                div {
                    class: "card-grid",
                    for feature in FEATURES.iter() {
                        div {
                            key: "{feature.title}",
                            class: "card",
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.body}" }
                        }
                    }
                }
            }

            section {
                class: "landing-section",
                h2 { "How It Works" }
                ol {
                    class: "landing-steps",
                    for (i, step) in STEPS.iter().enumerate() {
                        li {
                            key: "{i}",
                            span { class: "step-number", "{i + 1}" }
                            span { "{step}" }
                        }
                    }
                }
            }

            footer {
                class: "landing-footer",
                "© Rwanda Revenue Authority. All rights reserved."
            }
        }
    }
}
