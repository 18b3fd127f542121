mod error;
mod forward;
mod rewrite;

pub use error::ProxyError;
pub use forward::{forward, ProxyState};
pub use rewrite::{rewrite_path, upstream_url};
