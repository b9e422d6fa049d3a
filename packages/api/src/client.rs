//! # REST client for the scheduling API
//!
//! [`ApiClient`] is the only thing in the workspace that talks HTTP. Every
//! endpoint the frontend uses is a method here, grouped by area in the same
//! order as the API's controllers.
//!
//! ## Bearer token
//!
//! The client carries an optional bearer token and attaches it to every
//! request except the public authentication endpoints listed in
//! [`PUBLIC_AUTH_PATHS`]. A stale token must never be sent with a fresh
//! sign-in attempt, so those paths are checked by exact match.
//!
//! ## Responses
//!
//! - 2xx with a JSON body decodes into the method's return type.
//! - 2xx for unit methods (`DELETE`) accepts 204 or any body.
//! - anything else becomes [`ApiError::Status`] with the server's message.
//!
//! There is no retry, timeout or backoff. A failed call is reported once.

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;
use crate::models::*;

/// Authentication endpoints that must be called without a bearer token.
pub const PUBLIC_AUTH_PATHS: [&str; 5] = [
    "/api/auth/login",
    "/api/auth/register",
    "/api/auth/google",
    "/api/auth/forgot-password",
    "/api/auth/reset-password",
];

/// Whether a request to `path` should carry the bearer token.
pub fn requires_auth(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    !PUBLIC_AUTH_PATHS.contains(&path)
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Two clients are equal when they target the same origin as the same user.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, authenticating as `token`. Empty tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let req = self.http.request(method, self.url(path));
        match (&self.token, requires_auth(path)) {
            (Some(token), true) => req.bearer_auth(token),
            _ => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.builder(Method::GET, path)).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.builder(method, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit(self.builder(Method::DELETE, path)).await
    }

    // -- auth --

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/login", req).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/register", req).await
    }

    pub async fn google_login(&self, req: &GoogleLoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/google", req).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let req = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.send_json(Method::POST, "/api/auth/forgot-password", &req)
            .await
    }

    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/reset-password", req)
            .await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/auth/me").await
    }

    // -- appointments --

    pub async fn list_appointments(&self) -> Result<Vec<AppointmentResponse>, ApiError> {
        self.get_json("/api/appointments").await
    }

    pub async fn create_appointment(&self, req: &AppointmentRequest) -> Result<AppointmentResponse, ApiError> {
        self.send_json(Method::POST, "/api/appointments", req).await
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        update: &AppointmentUpdate,
    ) -> Result<AppointmentResponse, ApiError> {
        self.send_json(Method::PATCH, &format!("/api/appointments/{id}"), update)
            .await
    }

    // -- notifications --

    pub async fn list_notifications(&self) -> Result<Vec<NotificationResponse>, ApiError> {
        self.get_json("/api/notifications").await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<NotificationResponse, ApiError> {
        self.send(self.builder(Method::PATCH, &format!("/api/notifications/{id}/read")))
            .await
    }

    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/notifications/{id}")).await
    }

    // -- staff --

    pub async fn list_staff(&self) -> Result<Vec<StaffResponse>, ApiError> {
        self.get_json("/api/staff").await
    }

    pub async fn create_staff(&self, req: &StaffRequest) -> Result<StaffResponse, ApiError> {
        self.send_json(Method::POST, "/api/staff", req).await
    }

    pub async fn get_staff_schedule(&self) -> Result<Vec<WorkDay>, ApiError> {
        self.get_json("/api/staff/schedule").await
    }

    pub async fn update_staff_schedule(&self, schedule: &[WorkDay]) -> Result<Vec<WorkDay>, ApiError> {
        self.send_json(Method::PUT, "/api/staff/schedule", schedule)
            .await
    }

    pub async fn list_blocked_dates(&self) -> Result<Vec<BlockedDate>, ApiError> {
        self.get_json("/api/staff/schedule/blocked").await
    }

    pub async fn add_blocked_date(&self, req: &BlockedDateRequest) -> Result<BlockedDate, ApiError> {
        self.send_json(Method::POST, "/api/staff/schedule/blocked", req)
            .await
    }

    pub async fn delete_blocked_date(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/staff/schedule/blocked/{id}"))
            .await
    }

    // -- departments --

    pub async fn list_departments(&self) -> Result<Vec<DepartmentResponse>, ApiError> {
        self.get_json("/api/departments").await
    }

    pub async fn create_department(&self, req: &DepartmentRequest) -> Result<DepartmentResponse, ApiError> {
        self.send_json(Method::POST, "/api/departments", req).await
    }

    pub async fn update_department(
        &self,
        id: &str,
        req: &DepartmentRequest,
    ) -> Result<DepartmentResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/api/departments/{id}"), req)
            .await
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/departments/{id}")).await
    }

    // -- services --

    pub async fn list_services(&self) -> Result<Vec<ServiceResponse>, ApiError> {
        self.get_json("/api/services").await
    }

    pub async fn create_service(&self, req: &ServiceRequest) -> Result<ServiceResponse, ApiError> {
        self.send_json(Method::POST, "/api/services", req).await
    }

    pub async fn update_service(&self, id: &str, req: &ServiceRequest) -> Result<ServiceResponse, ApiError> {
        self.send_json(Method::PUT, &format!("/api/services/{id}"), req)
            .await
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/services/{id}")).await
    }

    // -- clients --

    pub async fn list_clients(&self) -> Result<Vec<ClientResponse>, ApiError> {
        self.get_json("/api/clients").await
    }

    pub async fn update_client_status(&self, id: &str, active: bool) -> Result<ClientResponse, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/api/clients/{id}/status"),
            &ClientStatusRequest { active },
        )
        .await
    }

    // -- settings --

    pub async fn get_settings(&self) -> Result<SystemSettingsResponse, ApiError> {
        self.get_json("/api/settings").await
    }

    pub async fn update_settings(&self, req: &SystemSettingsUpdate) -> Result<SystemSettingsResponse, ApiError> {
        self.send_json(Method::PUT, "/api/settings", req).await
    }

    // -- analytics --

    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.get_json("/api/analytics/admin/dashboard").await
    }

    pub async fn admin_reports(&self, range: ReportRange, department: &str) -> Result<AdminReports, ApiError> {
        let req = self
            .builder(Method::GET, "/api/analytics/admin/reports")
            .query(&[("range", range.as_str()), ("department", department)]);
        self.send(req).await
    }

    pub async fn staff_performance(&self) -> Result<StaffPerformance, ApiError> {
        self.get_json("/api/analytics/staff/performance").await
    }

    pub async fn staff_hours(&self) -> Result<StaffHours, ApiError> {
        self.get_json("/api/analytics/staff/hours").await
    }

    pub async fn client_history(&self, year: i32) -> Result<ClientHistory, ApiError> {
        let req = self
            .builder(Method::GET, "/api/analytics/client/history")
            .query(&[("year", year)]);
        self.send(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths_skip_bearer() {
        for path in PUBLIC_AUTH_PATHS {
            assert!(!requires_auth(path), "{path} should be public");
        }
        assert!(!requires_auth("/api/auth/login?next=/dashboard"));
    }

    #[test]
    fn test_everything_else_requires_bearer() {
        assert!(requires_auth("/api/auth/me"));
        assert!(requires_auth("/api/appointments"));
        assert!(requires_auth("/api/auth/login/extra"));
        assert!(requires_auth("/api/analytics/client/history?year=2024"));
    }

    #[test]
    fn test_token_attached_only_to_protected_requests() {
        let client = ApiClient::new("http://localhost:8080/").with_token(Some("tok".into()));
        assert_eq!(client.base_url(), "http://localhost:8080");

        let me = client.builder(Method::GET, "/api/auth/me").build().unwrap();
        assert_eq!(
            me.headers().get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
        assert_eq!(me.url().as_str(), "http://localhost:8080/api/auth/me");

        let login = client.builder(Method::POST, "/api/auth/login").build().unwrap();
        assert!(login.headers().get("authorization").is_none());
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let client = ApiClient::new("http://a").with_token(Some(String::new()));
        assert!(client.token().is_none());
        let req = client.builder(Method::GET, "/api/staff").build().unwrap();
        assert!(req.headers().get("authorization").is_none());
    }
}
