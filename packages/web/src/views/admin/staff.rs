use api::models::{StaffRequest, StaffResponse};
use dioxus::prelude::*;
use ui::filters::{self, staff_departments};
use ui::icons::*;
use ui::{use_api, use_toast, validation, EmptyState, Icon, Loading, Modal, PageHeader, Pill, StatCard};

/// Offered in the add form before any staff member has a department.
const DEFAULT_DEPARTMENTS: [&str; 6] = [
    "Tax Services",
    "License Management",
    "Compliance",
    "Filing Services",
    "Audit",
    "General",
];

#[derive(Debug, Clone, PartialEq)]
struct StaffForm {
    full_name: String,
    email: String,
    phone: String,
    department: String,
    password: String,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: DEFAULT_DEPARTMENTS[0].to_string(),
            password: String::new(),
        }
    }
}

impl StaffForm {
    fn validate(&self) -> Result<StaffRequest, String> {
        let blank = [&self.full_name, &self.email, &self.phone, &self.password]
            .iter()
            .any(|v| v.trim().is_empty());
        if blank {
            return Err("Please fill in all fields.".to_string());
        }
        validation::email(&self.email)?;
        validation::password(&self.password)?;
        let department = self.department.trim();
        Ok(StaffRequest {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            department: (!department.is_empty()).then(|| department.to_string()),
            phone: Some(self.phone.trim().to_string()),
            password: self.password.clone(),
        })
    }
}

fn department_options(staff: &[StaffResponse]) -> Vec<String> {
    let found = staff_departments(staff);
    if found.is_empty() {
        DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
    } else {
        found
    }
}

fn average_handled(staff: &[StaffResponse]) -> u64 {
    if staff.is_empty() {
        return 0;
    }
    let total: u64 = staff.iter().map(|s| s.appointments_handled).sum();
    (total as f64 / staff.len() as f64).round() as u64
}

#[component]
pub fn AdminStaff() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut staff = use_signal(Vec::<StaffResponse>::new);
    let mut loading = use_signal(|| true);
    let mut query = use_signal(String::new);
    let mut department = use_signal(|| filters::ALL.to_string());

    let mut adding = use_signal(|| false);
    let mut form = use_signal(StaffForm::default);
    let mut add_error = use_signal(|| Option::<String>::None);
    let mut add_busy = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api().list_staff().await {
            Ok(list) => staff.set(list),
            Err(e) => {
                tracing::warn!("could not load staff: {e}");
                toast.error("Failed to load staff", &e.to_string());
            }
        }
        loading.set(false);
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = match form.read().validate() {
            Ok(req) => req,
            Err(msg) => {
                add_error.set(Some(msg));
                return;
            }
        };
        spawn(async move {
            add_busy.set(true);
            add_error.set(None);
            match api().create_staff(&req).await {
                Ok(created) => {
                    toast.success("Staff member added", &created.full_name);
                    staff.write().push(created);
                    form.set(StaffForm::default());
                    adding.set(false);
                }
                Err(e) => add_error.set(Some(
                    e.server_message().unwrap_or("Failed to add staff member").to_string(),
                )),
            }
            add_busy.set(false);
        });
    };

    let all = staff();
    let options = department_options(&all);
    let visible = filters::staff_members(&all, &query.read(), &department.read());
    let active = all.iter().filter(|s| s.is_active()).count();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Staff Management",
                subtitle: "Manage staff accounts and departments",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        form.set(StaffForm::default());
                        add_error.set(None);
                        adding.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Staff" }
                }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Total Staff", value: all.len().to_string(), tone: "blue" }
                StatCard { label: "Active", value: active.to_string(), tone: "green" }
                StatCard { label: "Departments", value: staff_departments(&all).len().to_string(), tone: "purple" }
                StatCard { label: "Avg. Appointments", value: average_handled(&all).to_string(), tone: "yellow" }
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        placeholder: "Search by name, email, or phone...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                select {
                    value: "{department}",
                    onchange: move |e| department.set(e.value()),
                    option { value: filters::ALL, "All Departments" }
                    for name in options.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if visible.is_empty() {
                    EmptyState { message: "No staff members found" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Contact" }
                                th { "Department" }
                                th { "Appointments" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for member in visible {
                                tr {
                                    key: "{member.id}",
                                    td { class: "list-title", "{member.full_name}" }
                                    td {
                                        p { class: "icon-line", Icon { icon: FaEnvelope, width: 12, height: 12 } span { "{member.email}" } }
                                        p {
                                            class: "icon-line muted",
                                            Icon { icon: FaPhone, width: 12, height: 12 }
                                            span { {member.phone.clone().unwrap_or_else(|| "N/A".to_string())} }
                                        }
                                    }
                                    td { {member.department.clone().unwrap_or_else(|| "General".to_string())} }
                                    td { "{member.appointments_handled}" }
                                    td {
                                        if member.is_active() {
                                            Pill { label: "Active", tone: "green" }
                                        } else {
                                            Pill { label: "Inactive", tone: "gray" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if adding() {
            Modal {
                title: "Add Staff Member",
                on_close: move |_| adding.set(false),
                form {
                    class: "form",
                    onsubmit: submit,
                    label {
                        class: "field",
                        span { class: "field-label", "Full Name" }
                        input {
                            placeholder: "Enter full name",
                            value: "{form.read().full_name}",
                            oninput: move |e| form.write().full_name = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Email" }
                        input {
                            r#type: "email",
                            placeholder: "name@rra.gov.rw",
                            value: "{form.read().email}",
                            oninput: move |e| form.write().email = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Phone" }
                        input {
                            r#type: "tel",
                            placeholder: "+250 788 123 456",
                            value: "{form.read().phone}",
                            oninput: move |e| form.write().phone = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Department" }
                        select {
                            value: "{form.read().department}",
                            onchange: move |e| form.write().department = e.value(),
                            for name in options.iter() {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Password" }
                        input {
                            r#type: "password",
                            placeholder: "Set initial password",
                            value: "{form.read().password}",
                            oninput: move |e| form.write().password = e.value(),
                        }
                    }
                    if let Some(err) = add_error() {
                        p { class: "form-error", "{err}" }
                    }
                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| adding.set(false),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: add_busy(),
                            if add_busy() { "Adding..." } else { "Add Staff" }
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

    fn member(department: Option<&str>, handled: u64) -> StaffResponse {
        StaffResponse {
            id: format!("s{handled}"),
            full_name: "Marie".into(),
            email: "marie@rra.gov.rw".into(),
            department: department.map(Into::into),
            phone: None,
            status: "active".into(),
            appointments_handled: handled,
        }
    }

    fn filled() -> StaffForm {
        StaffForm {
            full_name: " Marie Uwase ".into(),
            email: "marie@rra.gov.rw".into(),
            phone: "+250788000000".into(),
            department: "Audit".into(),
            password: "longenough".into(),
        }
    }

    #[test]
    fn test_form_requires_every_field() {
        let mut form = filled();
        form.phone = "  ".into();
        assert_eq!(form.validate().unwrap_err(), "Please fill in all fields.");
    }

    #[test]
    fn test_form_checks_email_and_password() {
        let mut form = filled();
        form.email = "marie".into();
        assert!(form.validate().is_err());

        let mut form = filled();
        form.password = "short".into();
        assert_eq!(form.validate().unwrap_err(), "Password must be at least 8 characters");
    }

    #[test]
    fn test_form_builds_trimmed_request() {
        let req = filled().validate().unwrap();
        assert_eq!(req.full_name, "Marie Uwase");
        assert_eq!(req.department.as_deref(), Some("Audit"));
        assert_eq!(req.phone.as_deref(), Some("+250788000000"));
    }

    #[test]
    fn test_department_options_fall_back_to_defaults() {
        assert_eq!(department_options(&[]).len(), DEFAULT_DEPARTMENTS.len());
        let list = vec![member(Some("Audit"), 3), member(None, 5)];
        assert_eq!(department_options(&list), vec!["Audit".to_string()]);
        assert_eq!(average_handled(&list), 4);
    }
}
