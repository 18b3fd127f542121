pub mod error;
pub mod kind;
pub mod payload;
pub mod shutdown;
pub mod state;
pub mod window;

pub use error::{FetchError, InvalidResponse};
pub use kind::NumberKind;
pub use payload::{parse_numbers, NumbersPayload};
pub use state::{update, Action, CalculatorState};
pub use window::{average, dedup, merge, merge_with_capacity, WINDOW_SIZE};
