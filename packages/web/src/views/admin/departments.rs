use api::models::{DepartmentRequest, DepartmentResponse, DepartmentType};
use dioxus::prelude::*;
use ui::icons::*;
use ui::{use_api, use_toast, ConfirmDialog, EmptyState, Icon, Loading, Modal, PageHeader, Pill};

fn validate(form: &DepartmentRequest) -> Result<DepartmentRequest, String> {
    if form.name.trim().is_empty() {
        return Err("Department name is required.".to_string());
    }
    Ok(DepartmentRequest {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        kind: form.kind,
    })
}

fn kind_tone(kind: DepartmentType) -> &'static str {
    match kind {
        DepartmentType::Operational => "blue",
        DepartmentType::Support => "purple",
    }
}

#[component]
pub fn AdminDepartments() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut departments = use_signal(Vec::<DepartmentResponse>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut form = use_signal(DepartmentRequest::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut delete_target = use_signal(|| Option::<DepartmentResponse>::None);

    let mut loader = use_resource(move || async move {
        load_error.set(None);
        match api().list_departments().await {
            Ok(list) => departments.set(list),
            Err(e) => {
                tracing::warn!("could not load departments: {e}");
                departments.set(Vec::new());
                load_error.set(Some(
                    e.server_message().unwrap_or("Failed to load departments").to_string(),
                ));
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
                Some(id) => api().update_department(id, &req).await,
                None => api().create_department(&req).await,
            };
            match result {
                Ok(saved) => {
                    {
                        let mut list = departments.write();
                        match list.iter_mut().find(|d| d.id == saved.id) {
                            Some(existing) => *existing = saved.clone(),
                            None => list.push(saved.clone()),
                        }
                    }
                    toast.success(
                        if target.is_some() { "Department updated" } else { "Department created" },
                        &saved.name,
                    );
                    open.set(false);
                    editing.set(None);
                    form.set(DepartmentRequest::default());
                    loader.restart();
                }
                Err(e) => {
                    let fallback = if target.is_some() {
                        "Failed to update department"
                    } else {
                        "Failed to create department"
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
            match api().delete_department(&target.id).await {
                Ok(()) => {
                    departments.write().retain(|d| d.id != target.id);
                    toast.info("Department deleted", &target.name);
                    delete_target.set(None);
                    loader.restart();
                }
                Err(e) => {
                    delete_target.set(None);
                    error.set(Some(
                        e.server_message().unwrap_or("Failed to delete department").to_string(),
                    ));
                }
            }
            busy.set(false);
        });
    };

    let list = departments();
    let modal_title = if editing().is_some() { "Edit Department" } else { "Add Department" };

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Departments",
                subtitle: "Create and manage department catalog",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        error.set(None);
                        editing.set(None);
                        form.set(DepartmentRequest::default());
                        open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Department" }
                }
            }

            if let Some(err) = load_error() {
                div {
                    class: "error-banner",
                    span { "{err}" }
                    button { class: "btn btn-small btn-secondary", onclick: move |_| loader.restart(), "Retry" }
                }
            }
            if let Some(err) = error().filter(|_| !open()) {
                div { class: "error-banner", "{err}" }
            }

            div {
                class: "card",
                if loading() {
                    Loading {}
                } else if list.is_empty() {
                    EmptyState { message: "No departments yet" }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th { "Type" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for dept in list {
                                tr {
                                    key: "{dept.id}",
                                    td { class: "list-title", "{dept.name}" }
                                    td { class: "muted", {dept.description.clone().unwrap_or_default()} }
                                    td { Pill { label: dept.kind.label().to_string(), tone: kind_tone(dept.kind).to_string() } }
                                    td {
                                        if dept.active {
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
                                                let dept = dept.clone();
                                                move |_| {
                                                    error.set(None);
                                                    editing.set(Some(dept.id.clone()));
                                                    form.set(DepartmentRequest::from(&dept));
                                                    open.set(true);
                                                }
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let dept = dept.clone();
                                                move |_| {
                                                    error.set(None);
                                                    delete_target.set(Some(dept.clone()));
                                                }
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
                            placeholder: "Department name",
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
                        span { class: "field-label", "Type" }
                        select {
                            value: form.read().kind.as_str(),
                            onchange: move |e| {
                                if let Some(kind) = DepartmentType::parse(&e.value()) {
                                    form.write().kind = kind;
                                }
                            },
                            for kind in DepartmentType::ALL {
                                option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                            }
                        }
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
                title: "Delete Department",
                message: format!("Delete {}? Services in this department may stop working.", target.name),
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

    #[test]
    fn test_name_is_required() {
        let form = DepartmentRequest {
            name: "   ".into(),
            ..DepartmentRequest::default()
        };
        assert_eq!(validate(&form).unwrap_err(), "Department name is required.");
    }

    #[test]
    fn test_validate_trims_and_keeps_type() {
        let form = DepartmentRequest {
            name: " Domestic Taxes ".into(),
            description: " VAT and PAYE ".into(),
            kind: DepartmentType::Support,
        };
        let req = validate(&form).unwrap();
        assert_eq!(req.name, "Domestic Taxes");
        assert_eq!(req.description, "VAT and PAYE");
        assert_eq!(req.kind, DepartmentType::Support);
    }
}
