pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

mod app_context;

pub use app_context::AppContext;
pub use config::RelayConfig;

/// Name reported by the liveness endpoint.
pub const SERVICE_NAME: &str = "MindfulMe LLM service";
