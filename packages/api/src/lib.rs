//! # API crate: REST client and session flows for the appointment client
//!
//! Everything the frontend knows about the scheduling server lives here. The
//! server itself is external; this crate only speaks its JSON-over-HTTP API.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: one method per endpoint, bearer token handling |
//! | [`error`] | `ApiError` taxonomy and server error-message extraction |
//! | [`models`] | Request and response payloads (camelCase JSON) |
//! | [`session`] | `SessionManager` login/signup/bootstrap/logout over an `AuthBackend` |
//!
//! Storage types from the `store` crate are re-exported so frontends depend on
//! one crate for the whole session picture.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{AuthBackend, AuthFailure, SessionManager, SignupForm};

pub use store::{AppConfig, KeyValueStore, MemoryStore, Role, Session, SessionUser};
