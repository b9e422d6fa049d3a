use api::models::{DepartmentResponse, ServiceRequest, ServiceResponse};
use dioxus::prelude::*;
use ui::icons::*;
use ui::{use_api, use_toast, ConfirmDialog, EmptyState, Icon, Loading, Modal, PageHeader, Pill};

fn validate(form: &ServiceRequest) -> Result<ServiceRequest, String> {
    if form.name.trim().is_empty() || form.department_id.trim().is_empty() {
        return Err("Service name and department are required.".to_string());
    }
    Ok(ServiceRequest {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        department_id: form.department_id.clone(),
        requirements: form.requirements.trim().to_string(),
        active: form.active,
    })
}

/// Blank form preselecting the first department.
fn blank_form(departments: &[DepartmentResponse]) -> ServiceRequest {
    ServiceRequest {
        department_id: departments.first().map(|d| d.id.clone()).unwrap_or_default(),
        active: true,
        ..ServiceRequest::default()
    }
}

fn department_name(departments: &[DepartmentResponse], service: &ServiceResponse) -> String {
    service
        .department_name
        .clone()
        .or_else(|| {
            departments
                .iter()
                .find(|d| d.id == service.department_id)
                .map(|d| d.name.clone())
        })
        .unwrap_or_else(|| "Unknown".to_string())
}

#[component]
pub fn AdminServices() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut services = use_signal(Vec::<ServiceResponse>::new);
    let mut departments = use_signal(Vec::<DepartmentResponse>::new);
    let mut loading = use_signal(|| true);

    let mut open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut form = use_signal(ServiceRequest::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut delete_target = use_signal(|| Option::<ServiceResponse>::None);

    let _loader = use_resource(move || async move {
        let client = api();
        match client.list_services().await {
            Ok(list) => services.set(list),
            Err(e) => {
                tracing::warn!("could not load services: {e}");
                services.set(Vec::new());
            }
        }
        match client.list_departments().await {
            Ok(list) => departments.set(list),
            Err(e) => {
                tracing::warn!("could not load departments: {e}");
                departments.set(Vec::new());
            }
        }
        loading.set(false);
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = match validate(&form.read()) {
            Ok(req) => req,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let target = editing();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let result = match &target {
                Some(id) => api().update_service(id, &req).await,
                None => api().create_service(&req).await,
            };
            match result {
                Ok(saved) => {
                    {
                        let mut list = services.write();
                        match list.iter_mut().find(|s| s.id == saved.id) {
                            Some(existing) => *existing = saved.clone(),
                            None => list.push(saved.clone()),
                        }
                    }
                    toast.success(
                        if target.is_some() { "Service updated" } else { "Service created" },
                        &saved.name,
                    );
                    open.set(false);
                    editing.set(None);
                }
                Err(e) => {
                    let fallback = if target.is_some() {
                        "Failed to update service"
                    } else {
                        "Failed to create service"
                    };
                    error.set(Some(e.server_message().unwrap_or(fallback).to_string()));
                }
            }
            busy.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(target) = delete_target() else { return };
        spawn(async move {
            busy.set(true);
            match api().delete_service(&target.id).await {
                Ok(()) => {
                    services.write().retain(|s| s.id != target.id);
                    toast.info("Service deleted", &target.name);
                }
                Err(e) => toast.error(
                    "Failed to delete service",
                    e.server_message().unwrap_or_default(),
                ),
            }
            delete_target.set(None);
            busy.set(false);
        });
    };

    let list = services();
    let depts = departments();
    let modal_title = if editing().is_some() { "Edit Service" } else { "Add Service" };

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Services",
                subtitle: "Manage the services clients can book",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        error.set(None);
                        editing.set(None);
                        form.set(blank_form(&departments.read()));
                        open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Service" }
                }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if list.is_empty() {
                    EmptyState { message: "No services yet" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Department" }
                                th { "Requirements" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for service in list {
                                tr {
                                    key: "{service.id}",
                                    td {
                                        p { class: "list-title", "{service.name}" }
                                        p { class: "muted", {service.description.clone().unwrap_or_default()} }
                                    }
                                    td { {department_name(&depts, &service)} }
                                    td { class: "muted", {service.requirements.clone().unwrap_or_default()} }
                                    td {
                                        if service.active {
                                            Pill { label: "Active", tone: "green" }
                                        } else {
                                            Pill { label: "Inactive", tone: "gray" }
                                        }
                                    }
                                    td {
                                        class: "table-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let service = service.clone();
                                                move |_| {
                                                    error.set(None);
                                                    editing.set(Some(service.id.clone()));
                                                    form.set(ServiceRequest::from(&service));
                                                    open.set(true);
                                                }
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let service = service.clone();
                                                move |_| delete_target.set(Some(service.clone()))
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if open() {
            Modal {
                title: modal_title.to_string(),
                on_close: move |_| open.set(false),
                form {
                    class: "form",
                    onsubmit: submit,
                    label {
                        class: "field",
                        span { class: "field-label", "Name" }
                        input {
                            placeholder: "Service name",
                            value: "{form.read().name}",
                            oninput: move |e| form.write().name = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Description" }
                        textarea {
                            placeholder: "Description",
                            value: "{form.read().description}",
                            oninput: move |e| form.write().description = e.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Department" }
                        select {
                            value: "{form.read().department_id}",
                            onchange: move |e| form.write().department_id = e.value(),
                            if depts.is_empty() {
                                option { value: "", "Create a department first" }
                            }
                            for dept in depts.iter() {
                                option { key: "{dept.id}", value: "{dept.id}", "{dept.name}" }
                            }
                        }
                    }
                    label {
                        class: "field",
                        span { class: "field-label", "Requirements" }
                        textarea {
                            placeholder: "Requirements",
                            value: "{form.read().requirements}",
                            oninput: move |e| form.write().requirements = e.value(),
                        }
                    }
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: form.read().active,
                            onchange: move |e| form.write().active = e.checked(),
                        }
                        span { "Active" }
                    }
                    if let Some(err) = error() {
                        p { class: "form-error", "{err}" }
                    }
                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: busy(),
                            if busy() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }

        if let Some(target) = delete_target() {
            ConfirmDialog {
                title: "Delete Service",
                message: format!("Delete {}? Clients will no longer be able to book it.", target.name),
                confirm_label: "Delete",
                danger: true,
                busy: busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::DepartmentType;

    fn department(id: &str, name: &str) -> DepartmentResponse {
        DepartmentResponse {
            id: id.into(),
            name: name.into(),
            description: None,
            kind: DepartmentType::Operational,
            active: true,
        }
    }

    #[test]
    fn test_name_and_department_are_required() {
        let mut form = blank_form(&[]);
        form.name = "VAT Filing".into();
        assert_eq!(validate(&form).unwrap_err(), "Service name and department are required.");

        let mut form = blank_form(&[department("d1", "Domestic Taxes")]);
        assert_eq!(form.department_id, "d1");
        assert!(form.active);
        assert!(validate(&form).is_err());
        form.name = " VAT Filing ".into();
        assert_eq!(validate(&form).unwrap().name, "VAT Filing");
    }

    #[test]
    fn test_department_name_falls_back_to_lookup() {
        let depts = vec![department("d1", "Domestic Taxes")];
        let mut service = ServiceResponse {
            id: "s1".into(),
            name: "VAT Filing".into(),
            description: None,
            department_id: "d1".into(),
            department_name: None,
            requirements: None,
            active: true,
        };
        assert_eq!(department_name(&depts, &service), "Domestic Taxes");
        service.department_id = "d9".into();
        assert_eq!(department_name(&depts, &service), "Unknown");
        service.department_name = Some("Customs".into());
        assert_eq!(department_name(&depts, &service), "Customs");
    }
}
