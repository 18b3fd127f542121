mod loader;
mod schema;

pub use loader::{apply_env, apply_overrides, load_from_file, load_from_str, LoadError};
pub use schema::{GatewayConfig, ProxyConfig};
