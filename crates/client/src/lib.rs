mod client;
mod session;

pub use client::{NumberClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use session::Session;
