//! Platform-specific constructors.
//!
//! - **Web** (WASM + `web` feature): session keys live in `localStorage` via
//!   [`store::LocalStore`] and timers come from `gloo-timers`.
//! - **Native** (tests, `dx` tooling): one process-wide [`store::MemoryStore`]
//!   and `tokio` timers.

use std::time::Duration;

use api::{ApiClient, SessionManager};
use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The key-value store the session is persisted in.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}

/// Session manager talking to the configured API origin.
pub fn make_session_manager(config: &AppConfig) -> SessionManager<PlatformStore, ApiClient> {
    SessionManager::new(make_store(), ApiClient::new(config.api_base_url()))
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
