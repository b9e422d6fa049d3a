//! Router layouts wrapping each role's pages in the shared shell.

use dioxus::prelude::*;
use store::Role;
use ui::RoleShell;

use crate::Route;

/// [`RoleShell`] wired to the router: sidebar clicks push routes, a denied
/// session is replaced by `/login` and logging out lands on `/`.
#[component]
pub fn RoleFrame(role: Role, children: Element) -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        RoleShell {
            role,
            current_path: route.to_string(),
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(target) => {
                    nav.push(target);
                }
                Err(_) => tracing::warn!("no route for {path}"),
            },
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Home {});
            },
            {children}
        }
    }
}

#[component]
pub fn ClientLayout() -> Element {
    rsx! {
        RoleFrame { role: Role::Client, Outlet::<Route> {} }
    }
}

#[component]
pub fn StaffLayout() -> Element {
    rsx! {
        RoleFrame { role: Role::Staff, Outlet::<Route> {} }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        RoleFrame { role: Role::Admin, Outlet::<Route> {} }
    }
}
