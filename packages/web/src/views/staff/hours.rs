use api::models::{
    AppointmentBucket, AppointmentStatus, AppointmentUpdate, BlockedDate, BlockedDateRequest,
    StaffAppointment, StaffAppointmentStats, StaffHours as HoursData, WorkDay,
};
use dioxus::prelude::*;
use ui::icons::*;
use ui::time::{format_date, format_time_12h, shift_hours, today, MonthView};
use ui::{use_api, use_toast, EmptyState, Icon, Loading, Modal, PageHeader, Pill, StatCard};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn bucket_stats(list: &[StaffAppointment]) -> StaffAppointmentStats {
    let count = |bucket: AppointmentBucket| list.iter().filter(|a| a.status == bucket).count() as u64;
    StaffAppointmentStats {
        today: count(AppointmentBucket::Today),
        upcoming: count(AppointmentBucket::Upcoming),
        completed: count(AppointmentBucket::Completed),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduleSummary {
    working_days: usize,
    total_hours: f64,
    average_hours: f64,
}

fn summarize(schedule: &[WorkDay]) -> ScheduleSummary {
    let working: Vec<f64> = schedule
        .iter()
        .filter(|d| d.is_working)
        .map(|d| shift_hours(&d.start_time, &d.end_time))
        .collect();
    let total_hours: f64 = working.iter().sum();
    ScheduleSummary {
        working_days: working.len(),
        total_hours,
        average_hours: if working.is_empty() { 0.0 } else { total_hours / working.len() as f64 },
    }
}

fn blocked_on<'a>(blocked: &'a [BlockedDate], iso: &str) -> Option<&'a BlockedDate> {
    blocked.iter().find(|b| b.date == iso)
}

fn day_class(blocked: bool, is_today: bool) -> &'static str {
    match (blocked, is_today) {
        (true, _) => "calendar-day blocked",
        (false, true) => "calendar-day today",
        (false, false) => "calendar-day",
    }
}

#[component]
pub fn StaffHours() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut data = use_signal(HoursData::default);
    let mut loading = use_signal(|| true);
    let mut tab = use_signal(|| AppointmentBucket::Today);
    let mut month = use_signal(|| MonthView::containing(today()));
    let mut acting_on = use_signal(|| Option::<String>::None);

    let mut block_open = use_signal(|| false);
    let mut block_date = use_signal(String::new);
    let mut block_reason = use_signal(String::new);
    let mut block_error = use_signal(|| Option::<String>::None);

    let mut schedule_open = use_signal(|| false);
    let mut draft = use_signal(Vec::<WorkDay>::new);
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().staff_hours().await {
            Ok(hours) => data.set(hours),
            Err(e) => {
                tracing::warn!("could not load staff hours: {e}");
                toast.error("Failed to load schedule", &e.to_string());
            }
        }
        loading.set(false);
    });

    let set_status = move |id: String, target: AppointmentStatus| {
        spawn(async move {
            acting_on.set(Some(id.clone()));
            match api().update_appointment(&id, &AppointmentUpdate::status(target)).await {
                Ok(_) => {
                    let mut hours = data.write();
                    if target == AppointmentStatus::Cancelled {
                        hours.appointments.retain(|a| a.id != id);
                        toast.info("Appointment cancelled", "");
                    } else {
                        for a in hours.appointments.iter_mut().filter(|a| a.id == id) {
                            a.status = AppointmentBucket::Completed;
                        }
                        toast.success("Appointment completed", "");
                    }
                    hours.stats = bucket_stats(&hours.appointments);
                }
                Err(e) => toast.error("Update failed", &e.to_string()),
            }
            acting_on.set(None);
        });
    };

    let unblock = move |id: String| {
        spawn(async move {
            match api().delete_blocked_date(&id).await {
                Ok(()) => {
                    data.write().blocked_dates.retain(|b| b.id != id);
                    toast.info("Date unblocked", "");
                }
                Err(e) => toast.error("Could not unblock date", &e.to_string()),
            }
        });
    };

    let submit_block = move |evt: FormEvent| {
        evt.prevent_default();
        let date = block_date.read().trim().to_string();
        if date.is_empty() {
            block_error.set(Some("Please choose a date".to_string()));
            return;
        }
        let reason = block_reason.read().trim().to_string();
        let req = BlockedDateRequest {
            date,
            reason: (!reason.is_empty()).then_some(reason),
        };
        spawn(async move {
            match api().add_blocked_date(&req).await {
                Ok(blocked) => {
                    toast.success("Date blocked", &format_date(&blocked.date));
                    data.write().blocked_dates.push(blocked);
                    block_open.set(false);
                }
                Err(e) => block_error.set(Some(e.to_string())),
            }
        });
    };

    let save_schedule = move |_: MouseEvent| {
        let schedule = draft();
        spawn(async move {
            saving.set(true);
            match api().update_staff_schedule(&schedule).await {
                Ok(updated) => {
                    data.write().schedule = updated;
                    saved.set(Some("Working hours saved".to_string()));
                    schedule_open.set(false);
                }
                Err(e) => toast.error("Could not save working hours", &e.to_string()),
            }
            saving.set(false);
        });
    };

    let hours = data();
    let summary = summarize(&hours.schedule);
    let view = month();
    let today_iso = today().to_string();
    let listed: Vec<StaffAppointment> = hours
        .appointments
        .iter()
        .filter(|a| a.status == tab())
        .cloned()
        .collect();

    if loading() {
        return rsx! { Loading {} };
    }

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "My Hours",
                subtitle: "Working hours, blocked dates and your appointments",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        draft.set(data.read().schedule.clone());
                        saved.set(None);
                        schedule_open.set(true);
                    },
                    Icon { icon: FaClock, width: 14, height: 14 }
                    span { "Edit Hours" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        block_date.set(String::new());
                        block_reason.set(String::new());
                        block_error.set(None);
                        block_open.set(true);
                    },
                    Icon { icon: FaBan, width: 14, height: 14 }
                    span { "Block Date" }
                }
            }

            if let Some(msg) = saved() {
                div { class: "info-box", "{msg}" }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Today", value: hours.stats.today.to_string(), tone: "blue" }
                StatCard { label: "Upcoming", value: hours.stats.upcoming.to_string(), tone: "yellow" }
                StatCard { label: "Completed", value: hours.stats.completed.to_string(), tone: "green" }
                StatCard { label: "Blocked Dates", value: hours.blocked_dates.len().to_string(), tone: "red" }
            }

            div {
                class: "two-column",
                div {
                    class: "card",
                    div {
                        class: "card-header",
                        button {
                            class: "icon-button",
                            title: "Previous month",
                            onclick: move |_| month.set(month().previous()),
                            Icon { icon: FaChevronLeft, width: 12, height: 12 }
                        }
                        h3 { class: "card-title", "{view.title()}" }
                        button {
                            class: "icon-button",
                            title: "Next month",
                            onclick: move |_| month.set(month().next()),
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                    div {
                        class: "calendar",
                        for name in WEEKDAYS {
                            div { key: "{name}", class: "calendar-weekday", "{name}" }
                        }
                        for blank in 0..view.leading_blanks() {
                            div { key: "blank-{blank}", class: "calendar-day empty" }
                        }
                        for day in 1..=view.days() {
                            {
                                let iso = view.iso(day);
                                let blocked = blocked_on(&hours.blocked_dates, &iso).cloned();
                                let class = day_class(blocked.is_some(), iso == today_iso);
                                let reason = blocked.as_ref().and_then(|b| b.reason.clone()).unwrap_or_default();
                                let picked = iso.clone();
                                rsx! {
                                    button {
                                        key: "{iso}",
                                        class,
                                        title: reason,
                                        onclick: move |_| match &blocked {
                                            Some(b) => unblock(b.id.clone()),
                                            None => {
                                                block_date.set(picked.clone());
                                                block_reason.set(String::new());
                                                block_error.set(None);
                                                block_open.set(true);
                                            }
                                        },
                                        "{day}"
                                    }
                                }
                            }
                        }
                    }
                    p { class: "muted", "Click a date to block it; click a blocked date to unblock it." }
                }

                div {
                    class: "card",
                    h3 { class: "card-title", "Working Hours" }
                    for day in hours.schedule.iter() {
                        div {
                            key: "{day.day}",
                            class: "list-row",
                            span { class: "list-title", "{day.day}" }
                            if day.is_working {
                                span { "{format_time_12h(&day.start_time)} - {format_time_12h(&day.end_time)}" }
                            } else {
                                Pill { label: "Off", tone: "gray" }
                            }
                        }
                    }
                    div {
                        class: "summary",
                        p { "Working days: {summary.working_days}" }
                        p { "Total hours: {summary.total_hours:.1}" }
                        p { "Average per day: {summary.average_hours:.1}" }
                    }
                }
            }

            div {
                class: "card",
                div {
                    class: "tabs",
                    for bucket in AppointmentBucket::ALL {
                        button {
                            key: "{bucket.label()}",
                            class: if tab() == bucket { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(bucket),
                            "{bucket.label()}"
                        }
                    }
                }
                if listed.is_empty() {
                    EmptyState { message: "No appointments in this list" }
                }
                for apt in listed {
                    div {
                        key: "{apt.id}",
                        class: "list-row",
                        div {
                            class: "list-main",
                            p { class: "list-title", "{apt.client_name}" }
                            p { class: "muted", "{apt.service_type} · {apt.location}" }
                            if let Some(desc) = apt.description.clone() {
                                p { class: "muted", "{desc}" }
                            }
                        }
                        div {
                            class: "list-date",
                            p { "{format_date(&apt.date)}" }
                            p { class: "muted", "{format_time_12h(&apt.time)}" }
                        }
                        if apt.status != AppointmentBucket::Completed {
                            div {
                                class: "list-actions",
                                button {
                                    class: "btn btn-small btn-primary",
                                    disabled: acting_on() == Some(apt.id.clone()),
                                    onclick: {
                                        let id = apt.id.clone();
                                        move |_| set_status(id.clone(), AppointmentStatus::Completed)
                                    },
                                    "Complete"
                                }
                                button {
                                    class: "btn btn-small btn-danger",
                                    disabled: acting_on() == Some(apt.id.clone()),
                                    onclick: {
                                        let id = apt.id.clone();
                                        move |_| set_status(id.clone(), AppointmentStatus::Cancelled)
                                    },
                                    "Cancel"
                                }
                            }
                        }
                    }
                }
            }
        }

        if block_open() {
            Modal {
                title: "Block a Date",
                on_close: move |_| block_open.set(false),
                form {
                    class: "form",
                    onsubmit: submit_block,
                    label {
                        class: "field",
                        span { class: "field-label", "Date" }
                        input {
                            r#type: "date",
                            value: "{block_date}",
                            oninput: move |e| block_date.set(e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Reason (optional)" }
                        input {
                            placeholder: "e.g. Annual leave",
                            value: "{block_reason}",
                            oninput: move |e| block_reason.set(e.value()),
                        }
                    }
                    if let Some(err) = block_error() {
                        p { class: "form-error", "{err}" }
                    }
                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| block_open.set(false),
                            "Cancel"
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Block Date" }
                    }
                }
            }
        }

        if schedule_open() {
            Modal {
                title: "Edit Working Hours",
                wide: true,
                on_close: move |_| schedule_open.set(false),
                for (index, day) in draft().into_iter().enumerate() {
                    div {
                        key: "{day.day}",
                        class: "form-row",
                        label {
                            class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: day.is_working,
                                onchange: move |e| {
                                    if let Some(d) = draft.write().get_mut(index) {
                                        d.is_working = e.checked();
                                    }
                                },
                            }
                            span { "{day.day}" }
                        }
                        input {
                            r#type: "time",
                            disabled: !day.is_working,
                            value: "{day.start_time}",
                            oninput: move |e| {
                                if let Some(d) = draft.write().get_mut(index) {
                                    d.start_time = e.value();
                                }
                            },
                        }
                        input {
                            r#type: "time",
                            disabled: !day.is_working,
                            value: "{day.end_time}",
                            oninput: move |e| {
                                if let Some(d) = draft.write().get_mut(index) {
                                    d.end_time = e.value();
                                }
                            },
                        }
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: saving(),
                        onclick: move |_| schedule_open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: save_schedule,
                        if saving() { "Saving..." } else { "Save Hours" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_day(day: &str, start: &str, end: &str, is_working: bool) -> WorkDay {
        WorkDay {
            day: day.into(),
            start_time: start.into(),
            end_time: end.into(),
            is_working,
        }
    }

    fn appointment(id: &str, status: AppointmentBucket) -> StaffAppointment {
        StaffAppointment {
            id: id.into(),
            client_name: "Jean".into(),
            service_type: "Tax Consultation".into(),
            date: "2025-03-04".into(),
            time: "09:00".into(),
            location: "Main Office".into(),
            status,
            description: None,
        }
    }

    #[test]
    fn test_summary_counts_working_days_only() {
        let schedule = vec![
            work_day("Monday", "08:00", "17:00", true),
            work_day("Tuesday", "08:00", "12:00", true),
            work_day("Saturday", "09:00", "13:00", false),
        ];
        let summary = summarize(&schedule);
        assert_eq!(summary.working_days, 2);
        assert_eq!(summary.total_hours, 13.0);
        assert_eq!(summary.average_hours, 6.5);
        assert_eq!(summarize(&[]).average_hours, 0.0);
    }

    #[test]
    fn test_bucket_stats() {
        let list = vec![
            appointment("a", AppointmentBucket::Today),
            appointment("b", AppointmentBucket::Upcoming),
            appointment("c", AppointmentBucket::Upcoming),
            appointment("d", AppointmentBucket::Completed),
        ];
        let stats = bucket_stats(&list);
        assert_eq!((stats.today, stats.upcoming, stats.completed), (1, 2, 1));
    }

    #[test]
    fn test_blocked_lookup_and_day_class() {
        let blocked = vec![BlockedDate {
            id: "b1".into(),
            date: "2025-03-10".into(),
            reason: Some("Leave".into()),
        }];
        assert_eq!(blocked_on(&blocked, "2025-03-10").map(|b| b.id.as_str()), Some("b1"));
        assert!(blocked_on(&blocked, "2025-03-11").is_none());
        assert_eq!(day_class(true, true), "calendar-day blocked");
        assert_eq!(day_class(false, true), "calendar-day today");
    }
}
