pub mod config;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{AppConfig, ConfigError};
pub use kv::KeyValueStore;
pub use models::{Role, SessionUser};
pub use session::{Session, SessionStore};
