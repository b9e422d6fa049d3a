//! Shared UI for the appointment client: auth context, role shell, booking
//! wizard, list filters and the small widgets the views are built from.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;
pub use platform::{make_session_manager, make_store, sleep, PlatformStore};

mod auth;
pub use auth::{use_api, use_auth, use_session_manager, AppSessionManager, AuthProvider, AuthState};

pub mod guard;
pub use guard::{check_access, Access};

pub mod shell;
pub use shell::{nav_for, NavIcon, NavItem, RoleShell};

mod modal;
pub use modal::{ConfirmDialog, Modal};

mod badge;
pub use badge::{status_class, Pill, StatusBadge};

pub mod toast;
pub use toast::{use_toast, ToastLevel, ToastProvider, Toaster};

mod google;
pub use google::GoogleSignInButton;

mod widgets;
pub use widgets::{stars, BarChart, EmptyState, ErrorBanner, Loading, PageHeader, StatCard};

pub mod download;
pub mod filters;
pub mod time;
pub mod validation;
pub mod wizard;
