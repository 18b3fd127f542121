mod format;
pub(crate) mod render;
pub mod spinner;
mod table;
pub mod theme;

pub use format::{print_fetch_error, print_json, OutputMode};
pub use render::render_state;
pub use table::{build_table, window_table};
