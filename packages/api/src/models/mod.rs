//! Request and response payloads of the scheduling API.
//!
//! Field names follow the API's camelCase JSON. Optional fields default to
//! `None` when the server omits them or sends `null`.

mod analytics;
mod appointment;
mod auth;
mod catalog;
mod clients;
mod notification;
mod settings;
mod staff;

pub use analytics::*;
pub use appointment::{AppointmentRequest, AppointmentResponse, AppointmentStatus, AppointmentUpdate};
pub use auth::{
    AuthResponse, ForgotPasswordRequest, GoogleLoginRequest, LoginRequest, MessageResponse,
    RegisterRequest, ResetPasswordRequest, UserProfile,
};
pub use catalog::{
    DepartmentRequest, DepartmentResponse, DepartmentType, ServiceRequest, ServiceResponse,
};
pub use clients::{ClientResponse, ClientStatusRequest};
pub use notification::NotificationResponse;
pub use settings::{SystemSettingsResponse, SystemSettingsUpdate};
pub use staff::{BlockedDate, BlockedDateRequest, StaffRequest, StaffResponse, WorkDay};
