use std::time::Duration;

use api::models::SystemSettingsUpdate;
use dioxus::prelude::*;
use ui::icons::*;
use ui::{sleep, use_api, use_toast, validation, ErrorBanner, Icon, Loading, PageHeader};

const SAVED_NOTICE: Duration = Duration::from_secs(3);

struct Toggle {
    label: &'static str,
    description: &'static str,
    get: fn(&SystemSettingsUpdate) -> bool,
    set: fn(&mut SystemSettingsUpdate, bool),
}

static NOTIFICATION_TOGGLES: [Toggle; 3] = [
    Toggle {
        label: "Admin Notifications",
        description: "Receive notifications about system events",
        get: |s| s.admin_notifications,
        set: |s, on| s.admin_notifications = on,
    },
    Toggle {
        label: "Staff Notifications",
        description: "Notify staff about new appointments",
        get: |s| s.staff_notifications,
        set: |s, on| s.staff_notifications = on,
    },
    Toggle {
        label: "Client Notifications",
        description: "Send confirmations and reminders to clients",
        get: |s| s.client_notifications,
        set: |s, on| s.client_notifications = on,
    },
];

static SYSTEM_TOGGLES: [Toggle; 3] = [
    Toggle {
        label: "Automatic Backups",
        description: "Back up the database every day",
        get: |s| s.auto_backup,
        set: |s, on| s.auto_backup = on,
    },
    Toggle {
        label: "Maintenance Mode",
        description: "Only administrators can sign in while enabled",
        get: |s| s.maintenance_mode,
        set: |s, on| s.maintenance_mode = on,
    },
    Toggle {
        label: "Two-factor Authentication",
        description: "Require a second factor for staff and admin accounts",
        get: |s| s.two_factor_auth,
        set: |s, on| s.two_factor_auth = on,
    },
];

fn validate(settings: &SystemSettingsUpdate) -> Result<(), String> {
    validation::required("System name", &settings.system_name)?;
    validation::email(&settings.support_email)?;
    if settings.max_appointments_per_day == 0 {
        return Err("Max appointments per day must be at least 1".to_string());
    }
    if settings.appointment_duration == 0 {
        return Err("Appointment duration must be at least 1 minute".to_string());
    }
    if settings.auto_backup && settings.backup_time.trim().is_empty() {
        return Err("Choose a backup time".to_string());
    }
    Ok(())
}

/// Parses a numeric field, keeping `current` when the input is not a number.
fn parse_number(value: &str, current: u32) -> u32 {
    value.trim().parse().unwrap_or(current)
}

/// Applies `apply` to the loaded settings and clears the saved notice.
fn edit(
    mut settings: Signal<Option<SystemSettingsUpdate>>,
    mut saved: Signal<bool>,
    apply: impl FnOnce(&mut SystemSettingsUpdate),
) {
    if let Some(s) = settings.write().as_mut() {
        apply(s);
    }
    saved.set(false);
}

#[component]
fn ToggleRow(label: &'static str, description: &'static str, on: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "list-row",
            div {
                class: "list-main",
                p { class: "list-title", "{label}" }
                p { class: "muted", "{description}" }
            }
            label {
                class: "switch",
                input {
                    r#type: "checkbox",
                    checked: on,
                    onchange: move |e| onchange.call(e.checked()),
                }
                span { class: "switch-slider" }
            }
        }
    }
}

#[component]
pub fn AdminSettings() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut settings = use_signal(|| Option::<SystemSettingsUpdate>::None);
    let mut updated_at = use_signal(String::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api().get_settings().await {
            Ok(resp) => {
                updated_at.set(resp.updated_at.clone());
                settings.set(Some(SystemSettingsUpdate::from(&resp)));
            }
            Err(e) => {
                tracing::warn!("could not load settings: {e}");
                load_error.set(Some(e.server_message().unwrap_or("Failed to load settings").to_string()));
            }
        }
    });

    let save = move |_: MouseEvent| {
        let Some(current) = settings() else { return };
        if let Err(msg) = validate(&current) {
            error.set(Some(msg));
            return;
        }
        spawn(async move {
            saving.set(true);
            error.set(None);
            match api().update_settings(&current).await {
                Ok(resp) => {
                    updated_at.set(resp.updated_at.clone());
                    settings.set(Some(SystemSettingsUpdate::from(&resp)));
                    saved.set(true);
                    toast.success("Settings saved", "");
                    sleep(SAVED_NOTICE).await;
                    saved.set(false);
                }
                Err(e) => error.set(Some(e.server_message().unwrap_or("Failed to save settings").to_string())),
            }
            saving.set(false);
        });
    };

    if let Some(err) = load_error() {
        return rsx! {
            div { class: "page", ErrorBanner { message: err } }
        };
    }
    let Some(current) = settings() else {
        return rsx! { Loading { label: "Loading settings..." } };
    };

    rsx! {
        div {
            class: "page narrow",
            PageHeader {
                title: "System Settings",
                subtitle: "Configure system-wide behaviour",
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: save,
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    span { if saving() { "Saving..." } else { "Save Changes" } }
                }
            }

            if saved() {
                div { class: "info-box", "Settings saved successfully!" }
            }
            if let Some(err) = error() {
                ErrorBanner { message: err }
            }
            if !updated_at().is_empty() {
                p { class: "muted", "Last updated {updated_at}" }
            }

            div {
                class: "card",
                h3 { class: "card-title", "General Settings" }
                label {
                    class: "field",
                    span { class: "field-label", "System Name" }
                    input {
                        value: "{current.system_name}",
                        oninput: move |e| edit(settings, saved, |s| s.system_name = e.value()),
                    }
                }
                label {
                    class: "field",
                    span { class: "field-label", "Support Email" }
                    input {
                        r#type: "email",
                        value: "{current.support_email}",
                        oninput: move |e| edit(settings, saved, |s| s.support_email = e.value()),
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "field",
                        span { class: "field-label", "Max Appointments per Day" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{current.max_appointments_per_day}",
                            oninput: move |e| edit(settings, saved, |s| s.max_appointments_per_day = parse_number(&e.value(), s.max_appointments_per_day)),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Appointment Duration (minutes)" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{current.appointment_duration}",
                            oninput: move |e| edit(settings, saved, |s| s.appointment_duration = parse_number(&e.value(), s.appointment_duration)),
                        }
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Notification Settings" }
                for toggle in NOTIFICATION_TOGGLES.iter() {
                    ToggleRow {
                        key: "{toggle.label}",
                        label: toggle.label,
                        description: toggle.description,
                        on: (toggle.get)(&current),
                        onchange: move |on: bool| edit(settings, saved, |s| (toggle.set)(s, on)),
                    }
                }
            }

            div {
                class: "card",
                h3 { class: "card-title", "Backup, Maintenance & Security" }
                for toggle in SYSTEM_TOGGLES.iter() {
                    ToggleRow {
                        key: "{toggle.label}",
                        label: toggle.label,
                        description: toggle.description,
                        on: (toggle.get)(&current),
                        onchange: move |on: bool| edit(settings, saved, |s| (toggle.set)(s, on)),
                    }
                }
                div {
                    class: "form-row",
                    label {
                        class: "field",
                        span { class: "field-label", "Backup Time" }
                        input {
                            r#type: "time",
                            disabled: !current.auto_backup,
                            value: "{current.backup_time}",
                            oninput: move |e| edit(settings, saved, |s| s.backup_time = e.value()),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Password Expiry (days)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{current.password_expiry}",
                            oninput: move |e| edit(settings, saved, |s| s.password_expiry = parse_number(&e.value(), s.password_expiry)),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SystemSettingsUpdate {
        SystemSettingsUpdate {
            system_name: "RRA Appointments".into(),
            support_email: "support@rra.gov.rw".into(),
            max_appointments_per_day: 40,
            appointment_duration: 30,
            admin_notifications: true,
            staff_notifications: true,
            client_notifications: false,
            maintenance_mode: false,
            auto_backup: true,
            backup_time: "02:00".into(),
            two_factor_auth: false,
            password_expiry: 90,
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&settings()).is_ok());

        let mut s = settings();
        s.system_name = " ".into();
        assert_eq!(validate(&s).unwrap_err(), "System name is required");

        let mut s = settings();
        s.max_appointments_per_day = 0;
        assert!(validate(&s).is_err());

        let mut s = settings();
        s.backup_time.clear();
        assert_eq!(validate(&s).unwrap_err(), "Choose a backup time");
        s.auto_backup = false;
        assert!(validate(&s).is_ok());
    }

    #[test]
    fn test_toggles_address_their_flags() {
        let mut s = settings();
        (NOTIFICATION_TOGGLES[2].set)(&mut s, true);
        assert!(s.client_notifications);
        assert!((NOTIFICATION_TOGGLES[2].get)(&s));
        (SYSTEM_TOGGLES[1].set)(&mut s, true);
        assert!(s.maintenance_mode);
        assert!(!(SYSTEM_TOGGLES[2].get)(&s));
    }

    #[test]
    fn test_parse_number_keeps_current_on_garbage() {
        assert_eq!(parse_number("45", 40), 45);
        assert_eq!(parse_number("", 40), 40);
        assert_eq!(parse_number("-3", 40), 40);
    }
}
