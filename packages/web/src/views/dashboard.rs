use dioxus::prelude::*;
use store::Role;
use ui::use_auth;

use super::admin::AdminDashboard;
use super::client::ClientDashboard;
use super::staff::StaffDashboard;
use super::RoleFrame;
use crate::Route;

/// `/dashboard`: the signed-in user's own dashboard inside their role's shell.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth.read();
        if state.ready && state.session.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let state = auth.read();
    if !state.ready {
        return rsx! {};
    }
    let Some(role) = state.role() else {
        return rsx! {};
    };

    rsx! {
        RoleFrame {
            role,
            {match role {
                Role::Client => rsx! { ClientDashboard {} },
                Role::Staff => rsx! { StaffDashboard {} },
                Role::Admin => rsx! { AdminDashboard {} },
            }}
        }
    }
}
