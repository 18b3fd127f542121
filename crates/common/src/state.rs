use serde::Serialize;

use crate::payload::{serialize_number, serialize_numbers};
use crate::window::{self, WINDOW_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    #[serde(serialize_with = "serialize_numbers")]
    pub window_prev_state: Vec<f64>,
    #[serde(serialize_with = "serialize_numbers")]
    pub window_curr_state: Vec<f64>,
    #[serde(serialize_with = "serialize_numbers")]
    pub numbers: Vec<f64>,
    #[serde(serialize_with = "serialize_number")]
    pub avg: f64,
    #[serde(skip)]
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<f64>),
    FetchFailed(String),
    Reset,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            window_prev_state: Vec::new(),
            window_curr_state: Vec::new(),
            numbers: Vec::new(),
            avg: 0.0,
            loading: false,
            error: None,
            capacity,
        }
    }

    pub fn can_trigger(&self) -> bool {
        !self.loading
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `action` and returns the next state.
///
/// A `FetchStarted` while a fetch is already outstanding is ignored, and a
/// completion without a matching start leaves the windows untouched.
pub fn update(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::FetchStarted if state.loading => state,
        Action::FetchStarted => CalculatorState {
            window_prev_state: state.window_curr_state.clone(),
            loading: true,
            error: None,
            ..state
        },
        Action::FetchSucceeded(_) | Action::FetchFailed(_) if !state.loading => state,
        Action::FetchSucceeded(numbers) => {
            let window_curr_state =
                window::merge_with_capacity(&state.window_curr_state, &numbers, state.capacity);
            CalculatorState {
                avg: window::average(&window_curr_state),
                window_curr_state,
                numbers,
                loading: false,
                error: None,
                ..state
            }
        }
        Action::FetchFailed(message) => CalculatorState {
            loading: false,
            error: Some(message),
            ..state
        },
        Action::Reset => CalculatorState::with_capacity(state.capacity),
    }
}
