use api::models::ClientResponse;
use api::ApiError;
use dioxus::prelude::*;
use ui::filters::{self, ActiveFilter};
use ui::icons::*;
use ui::time::format_date;
use ui::{use_api, EmptyState, ErrorBanner, Icon, Loading, PageHeader, Pill};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ClientOp {
    View,
    Update,
}

/// Message for a failed client request; 403 gets the access-denied copy.
fn client_error(e: &ApiError, op: ClientOp) -> String {
    if e.is_forbidden() {
        return match op {
            ClientOp::View => "Access denied. Please login as admin to view clients.",
            ClientOp::Update => "Access denied. Please login as admin to update client status.",
        }
        .to_string();
    }
    let fallback = match op {
        ClientOp::View => "Failed to load clients",
        ClientOp::Update => "Failed to update status",
    };
    e.server_message().unwrap_or(fallback).to_string()
}

#[component]
pub fn AdminClients() -> Element {
    let api = use_api();

    let mut clients = use_signal(Vec::<ClientResponse>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(String::new);
    let mut filter = use_signal(ActiveFilter::default);
    let mut updating = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api().list_clients().await {
            Ok(list) => {
                clients.set(list);
                error.set(None);
            }
            Err(e) => {
                tracing::warn!("could not load clients: {e}");
                error.set(Some(client_error(&e, ClientOp::View)));
            }
        }
        loading.set(false);
    });

    let toggle = move |client: ClientResponse| {
        spawn(async move {
            updating.set(Some(client.id.clone()));
            error.set(None);
            match api().update_client_status(&client.id, !client.active).await {
                Ok(updated) => {
                    for c in clients.write().iter_mut().filter(|c| c.id == updated.id) {
                        *c = updated.clone();
                    }
                }
                Err(e) => {
                    tracing::warn!("could not update client {}: {e}", client.id);
                    error.set(Some(client_error(&e, ClientOp::Update)));
                }
            }
            updating.set(None);
        });
    };

    let all = clients();
    let visible = filters::clients(&all, &query.read(), filter());

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Client Management",
                subtitle: "Manage client accounts and activity",
            }

            div {
                class: "toolbar",
                div {
                    class: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        placeholder: "Search by name, email, phone...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                select {
                    value: filter().as_str(),
                    onchange: move |e| filter.set(ActiveFilter::parse(&e.value())),
                    for f in ActiveFilter::ALL {
                        option {
                            key: "{f.as_str()}",
                            value: f.as_str(),
                            if f == ActiveFilter::All { "All Clients" } else { "{f.label()}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div {
                class: "card",
                div {
                    class: "card-header",
                    h3 { class: "card-title", "Clients" }
                    span { class: "muted", "Showing {visible.len()} of {all.len()}" }
                }
                if loading() {
                    Loading { label: "Loading clients..." }
                } else if visible.is_empty() {
                    EmptyState { message: "No clients found." }
                } else {
                    table {
                        class: "table",
                        thead {
                            tr {
                                th { "Client" }
                                th { "Contact" }
                                th { "Appointments" }
                                th { "Joined" }
                                th { "Status" }
                                th { "Action" }
                            }
                        }
                        tbody {
                            for client in visible {
                                tr {
                                    key: "{client.id}",
                                    td {
                                        p { class: "list-title", "{client.full_name}" }
                                        p { class: "muted", "{client.email}" }
                                    }
                                    td { {client.phone.clone().unwrap_or_else(|| "N/A".to_string())} }
                                    td { "{client.appointments}" }
                                    td { "{format_date(&client.created_at)}" }
                                    td {
                                        if client.active {
                                            Pill { label: "Active", tone: "green" }
                                        } else {
                                            Pill { label: "Inactive", tone: "gray" }
                                        }
                                    }
                                    td {
                                        button {
                                            class: if client.active { "btn btn-small btn-danger" } else { "btn btn-small btn-primary" },
                                            disabled: updating() == Some(client.id.clone()),
                                            onclick: {
                                                let client = client.clone();
                                                move |_| toggle(client.clone())
                                            },
                                            if client.active {
                                                Icon { icon: FaUserXmark, width: 12, height: 12 }
                                                span { "Deactivate" }
                                            } else {
                                                Icon { icon: FaUserCheck, width: 12, height: 12 }
                                                span { "Activate" }
                                            }
                                        }
                                    }
                                }
                            }
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

    #[test]
    fn test_forbidden_gets_access_denied_copy() {
        let e = ApiError::from_response(403, "");
        assert_eq!(
            client_error(&e, ClientOp::View),
            "Access denied. Please login as admin to view clients."
        );
        assert!(client_error(&e, ClientOp::Update).contains("update client status"));
    }

    #[test]
    fn test_other_errors_use_server_message() {
        let e = ApiError::from_response(500, r#"{"error":"Database unavailable"}"#);
        assert_eq!(client_error(&e, ClientOp::View), "Database unavailable");
    }
}
