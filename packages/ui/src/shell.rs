//! # Role shell
//!
//! Chrome shared by every signed-in screen: a header with branding and the
//! user menu, a collapsible sidebar with the role's navigation, and the page
//! content. Access is decided by [`check_access`]:
//!
//! | Access | Renders | Side effect |
//! |--------|---------|-------------|
//! | `Pending` | nothing | none |
//! | `Denied` | nothing | `on_denied` (the router layout sends the user to `/login`) |
//! | `Granted` | header, sidebar, children | none |
//!
//! Navigation is reported through `on_navigate` with the target path so the
//! shell stays independent of the binary's `Route` enum.

use dioxus::prelude::*;
use store::Role;

use crate::auth::{use_auth, use_session_manager, AuthState};
use crate::guard::{check_access, Access};
use crate::icons::*;
use crate::modal::ConfirmDialog;
use crate::Icon;

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavIcon {
    Dashboard,
    Calendar,
    CalendarPlus,
    Bell,
    Chart,
    Clock,
    Star,
    Users,
    UserGroup,
    Building,
    Briefcase,
    Gear,
    Comments,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    pub const fn new(label: &'static str, path: &'static str, icon: NavIcon) -> Self {
        Self { label, path, icon }
    }
}

pub const CLIENT_NAV: [NavItem; 5] = [
    NavItem::new("Dashboard", "/dashboard", NavIcon::Dashboard),
    NavItem::new("My Appointments", "/appointments", NavIcon::Calendar),
    NavItem::new("Book Appointment", "/schedule", NavIcon::CalendarPlus),
    NavItem::new("Notifications", "/notifications", NavIcon::Bell),
    NavItem::new("History", "/reports", NavIcon::Chart),
];

pub const STAFF_NAV: [NavItem; 5] = [
    NavItem::new("Dashboard", "/staff-dashboard", NavIcon::Dashboard),
    NavItem::new("Appointments", "/staff-appointments", NavIcon::Calendar),
    NavItem::new("My Hours", "/staff-hours", NavIcon::Clock),
    NavItem::new("Performance", "/staff-performance", NavIcon::Chart),
    NavItem::new("Feedback", "/staff-feedback", NavIcon::Comments),
];

pub const ADMIN_NAV: [NavItem; 8] = [
    NavItem::new("Dashboard", "/admin-dashboard", NavIcon::Dashboard),
    NavItem::new("Appointments", "/admin-appointments", NavIcon::Calendar),
    NavItem::new("Staff", "/admin-staff", NavIcon::Users),
    NavItem::new("Departments", "/admin-departments", NavIcon::Building),
    NavItem::new("Services", "/admin-services", NavIcon::Briefcase),
    NavItem::new("Clients", "/admin-clients", NavIcon::UserGroup),
    NavItem::new("Reports", "/admin-reports", NavIcon::Star),
    NavItem::new("Settings", "/admin-settings", NavIcon::Gear),
];

/// Sidebar entries for a role.
pub fn nav_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Client => &CLIENT_NAV,
        Role::Staff => &STAFF_NAV,
        Role::Admin => &ADMIN_NAV,
    }
}

/// Whether `item` is the entry for `current_path`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    let path = current_path.split(['?', '#']).next().unwrap_or(current_path);
    path.trim_end_matches('/') == item.path
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        NavIcon::Calendar => rsx! { Icon { icon: FaCalendarDays, width: 16, height: 16 } },
        NavIcon::CalendarPlus => rsx! { Icon { icon: FaCalendarPlus, width: 16, height: 16 } },
        NavIcon::Bell => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
        NavIcon::Chart => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        NavIcon::Clock => rsx! { Icon { icon: FaClock, width: 16, height: 16 } },
        NavIcon::Star => rsx! { Icon { icon: FaStar, width: 16, height: 16 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavIcon::UserGroup => rsx! { Icon { icon: FaUserGroup, width: 16, height: 16 } },
        NavIcon::Building => rsx! { Icon { icon: FaBuilding, width: 16, height: 16 } },
        NavIcon::Briefcase => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        NavIcon::Gear => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        NavIcon::Comments => rsx! { Icon { icon: FaComments, width: 16, height: 16 } },
    }
}

#[component]
pub fn RoleShell(
    role: Role,
    current_path: String,
    on_navigate: EventHandler<String>,
    on_denied: EventHandler<()>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    let mut auth = use_auth();
    let manager = use_session_manager();
    let mut sidebar_open = use_signal(|| true);
    let mut menu_open = use_signal(|| false);
    let mut confirm_logout = use_signal(|| false);

    let access = check_access(&auth.read(), role);

    use_effect(move || {
        if check_access(&auth.read(), role) == Access::Denied {
            tracing::info!("{} area requires sign-in", role);
            on_denied.call(());
        }
    });

    if access != Access::Granted {
        return rsx! {};
    }

    let Some(user) = auth.read().user().cloned() else {
        return rsx! {};
    };

    let do_logout = move |_| {
        manager.logout();
        auth.set(AuthState::signed_out());
        confirm_logout.set(false);
        on_logged_out.call(());
    };

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: "shell",

            header {
                class: "shell-header",
                div {
                    class: "shell-brand",
                    button {
                        class: "shell-toggle",
                        title: "Toggle sidebar",
                        onclick: move |_| sidebar_open.toggle(),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                    span { class: "shell-logo", "RRA" }
                    span { class: "shell-title", "Appointment System" }
                }

                div {
                    class: "shell-user",
                    button {
                        class: "shell-user-button",
                        onclick: move |_| menu_open.toggle(),
                        span { class: "avatar", "{user.initials()}" }
                        span {
                            class: "shell-user-meta",
                            span { class: "shell-user-name", "{user.display_name()}" }
                            span { class: "badge badge-blue", "{user.role.label()}" }
                        }
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }
                    if menu_open() {
                        div {
                            class: "shell-menu",
                            div {
                                class: "shell-menu-header",
                                p { class: "shell-user-name", "{user.display_name()}" }
                                p { class: "muted", "{user.email}" }
                            }
                            button {
                                class: "shell-menu-item danger",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    confirm_logout.set(true);
                                },
                                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                span { "Log out" }
                            }
                        }
                    }
                }
            }

            div {
                class: "shell-body",
                nav {
                    class: if sidebar_open() { "shell-sidebar" } else { "shell-sidebar collapsed" },
                    for item in nav_for(role).iter() {
                        button {
                            key: "{item.path}",
                            class: if is_active(item, &current_path) { "nav-item active" } else { "nav-item" },
                            title: item.label,
                            onclick: move |_| on_navigate.call(item.path.to_string()),
                            {nav_icon(item.icon)}
                            if sidebar_open() {
                                span { "{item.label}" }
                            }
                        }
                    }
                }
                main {
                    class: "shell-content",
                    {children}
                }
            }
        }

        if confirm_logout() {
            ConfirmDialog {
                title: "Log out",
                message: "Are you sure you want to log out?",
                confirm_label: "Log out",
                danger: true,
                on_confirm: do_logout,
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matches_path_exactly() {
        let item = &ADMIN_NAV[2];
        assert!(is_active(item, "/admin-staff"));
        assert!(is_active(item, "/admin-staff/"));
        assert!(is_active(item, "/admin-staff?tab=1"));
        assert!(!is_active(item, "/admin-staff-extra"));
        assert!(!is_active(item, "/admin-services"));
    }

    #[test]
    fn test_nav_is_role_scoped() {
        assert!(nav_for(Role::Client).iter().all(|i| !i.path.starts_with("/admin")));
        assert!(nav_for(Role::Staff).iter().all(|i| i.path.starts_with("/staff")));
        assert!(nav_for(Role::Admin).iter().all(|i| i.path.starts_with("/admin")));
    }
}
