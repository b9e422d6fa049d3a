//! Four-step booking wizard.

use std::time::Duration;

use dioxus::prelude::*;
use ui::icons::*;
use ui::time::{format_date_long, min_booking_date, today};
use ui::wizard::{BookingWizard, APPOINTMENT_TYPES, OFFICE_LOCATIONS, STEP_COUNT, TIME_SLOTS};
use ui::{sleep, use_api, use_toast, Icon, PageHeader};

use crate::Route;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn Schedule() -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();

    let mut wizard = use_signal(BookingWizard::default);
    let mut submitted = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let on_next = move |_| {
        if let Err(e) = wizard.write().next() {
            toast.error("Please complete this step", &e.to_string());
        }
    };

    let on_submit = move |_| {
        let Some(req) = wizard.read().request() else {
            toast.error("Error", "Please fill in all required fields");
            return;
        };
        spawn(async move {
            busy.set(true);
            match api().create_appointment(&req).await {
                Ok(created) => {
                    tracing::info!("booked appointment {}", created.id);
                    submitted.set(true);
                    toast.success("Success", "Your appointment has been booked successfully!");
                    sleep(REDIRECT_DELAY).await;
                    nav.push(Route::ClientAppointments {});
                }
                Err(e) => toast.error(
                    "Error",
                    e.server_message().unwrap_or("Failed to book appointment"),
                ),
            }
            busy.set(false);
        });
    };

    if submitted() {
        return rsx! {
            div {
                class: "page",
                div {
                    class: "card center success-card",
                    Icon { icon: FaCircleCheck, width: 48, height: 48 }
                    h2 { "Appointment Booked!" }
                    p { class: "muted", "Your appointment has been submitted. You will be redirected to your appointments shortly." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            nav.push(Route::ClientAppointments {});
                        },
                        "View My Appointments"
                    }
                }
            }
        };
    }

    let state = wizard();
    let step = state.step();

    rsx! {
        div {
            class: "page narrow",
            PageHeader {
                title: "Book an Appointment",
                subtitle: "Step {step} of {STEP_COUNT}",
                Link { class: "btn btn-secondary", to: Route::Dashboard {}, "Back to Dashboard" }
            }

            div {
                class: "wizard-progress",
                for n in 1..=STEP_COUNT {
                    div {
                        key: "{n}",
                        class: if n <= step { "wizard-bar done" } else { "wizard-bar" },
                    }
                }
            }

            div {
                class: "card",
                {match step {
                    1 => rsx! {
                        h3 { class: "card-title", "Select Appointment Type" }
                        div {
                            class: "choice-grid",
                            for kind in APPOINTMENT_TYPES.iter() {
                                button {
                                    key: "{kind.id}",
                                    class: if state.appointment_type == Some(kind.id) { "choice selected" } else { "choice" },
                                    onclick: move |_| wizard.write().select_type(kind.id),
                                    p { class: "list-title", "{kind.label}" }
                                    p { class: "muted", "{kind.description}" }
                                }
                            }
                        }
                    },
                    2 => rsx! {
                        h3 { class: "card-title", "Choose Date & Time" }
                        label {
                            class: "field",
                            span { "Date" }
                            input {
                                r#type: "date",
                                min: min_booking_date(today()),
                                value: "{state.date}",
                                oninput: move |e| wizard.write().date = e.value(),
                            }
                        }
                        p { class: "field-label", "Time Slot" }
                        div {
                            class: "slot-grid",
                            for slot in TIME_SLOTS {
                                button {
                                    key: "{slot}",
                                    class: if state.time == Some(slot) { "slot selected" } else { "slot" },
                                    onclick: move |_| wizard.write().select_time(slot),
                                    "{slot}"
                                }
                            }
                        }
                    },
                    3 => rsx! {
                        h3 { class: "card-title", "Select Office Location" }
                        div {
                            class: "choice-grid",
                            for office in OFFICE_LOCATIONS.iter() {
                                button {
                                    key: "{office.id}",
                                    class: if state.office == Some(office.id) { "choice selected" } else { "choice" },
                                    onclick: move |_| wizard.write().select_office(office.id),
                                    Icon { icon: FaLocationDot, width: 16, height: 16 }
                                    p { class: "list-title", "{office.name}" }
                                    p { class: "muted", "{office.address}" }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        h3 { class: "card-title", "Review & Confirm" }
                        dl {
                            class: "summary",
                            dt { "Appointment Type" }
                            dd { "{state.type_label()}" }
                            dt { "Date" }
                            dd { "{format_date_long(&state.date)}" }
                            dt { "Time" }
                            dd { {state.time.unwrap_or_default()} }
                            dt { "Office" }
                            dd { "{state.office_name()}" }
                        }
                        label {
                            class: "field",
                            span { "Additional Notes (optional)" }
                            textarea {
                                rows: "4",
                                placeholder: "Add any additional information or requirements...",
                                value: "{state.notes}",
                                oninput: move |e| wizard.write().notes = e.value(),
                            }
                        }
                    },
                }}
            }

            div {
                class: "wizard-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: step == 1,
                    onclick: move |_| {
                        wizard.write().previous();
                    },
                    "Previous"
                }
                if step < STEP_COUNT {
                    button { class: "btn btn-primary", onclick: on_next, "Next" }
                } else {
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: on_submit,
                        if busy() { "Booking..." } else { "Confirm Booking" }
                    }
                }
            }
        }
    }
}
