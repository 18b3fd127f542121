use avgcalc_common::{update, Action, CalculatorState, FetchError, NumberKind};
use tokio_util::sync::CancellationToken;

use crate::client::NumberClient;

/// One calculator session: a client plus the state it feeds.
pub struct Session {
    client: NumberClient,
    state: CalculatorState,
}

impl Session {
    pub fn new(client: NumberClient, window_size: usize) -> Self {
        Self {
            client,
            state: CalculatorState::with_capacity(window_size),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn client(&self) -> &NumberClient {
        &self.client
    }

    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let state = std::mem::take(&mut self.state);
        self.state = update(state, action);
        &self.state
    }

    /// Runs one fetch-and-merge cycle for `kind`.
    pub async fn request(
        &mut self,
        kind: NumberKind,
        cancel: &CancellationToken,
    ) -> &CalculatorState {
        if !self.state.can_trigger() {
            return &self.state;
        }
        self.dispatch(Action::FetchStarted);
        let result = self.client.fetch_numbers(kind, cancel).await;
        self.complete(result)
    }

    /// Same as [`request`](Self::request) with the kind given by name; an
    /// unknown name is recorded as the session error.
    pub async fn request_named(
        &mut self,
        name: &str,
        cancel: &CancellationToken,
    ) -> &CalculatorState {
        if !self.state.can_trigger() {
            return &self.state;
        }
        self.dispatch(Action::FetchStarted);
        let result = self.client.fetch_named(name, cancel).await;
        self.complete(result)
    }

    pub fn reset(&mut self) -> &CalculatorState {
        self.dispatch(Action::Reset)
    }

    fn complete(&mut self, result: Result<Vec<f64>, FetchError>) -> &CalculatorState {
        let action = match result {
            Ok(numbers) => Action::FetchSucceeded(numbers),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        self.dispatch(action)
    }
}
