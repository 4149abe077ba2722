// Shared session state.
// One instance managed by Tauri, reset on window teardown so its lifetime
// tracks the window rather than the process.

use std::sync::{Arc, Mutex};

use crate::modules::notifier::ReadyGate;
use crate::providers::Provider;

pub struct AppState {
    /// The provider currently attached to the visible content area.
    /// None before the first activation and after window teardown.
    /// Written only by the tab switch controller.
    pub active_provider: Arc<Mutex<Option<Provider>>>,
    /// Readiness gate for broadcasts to the tab bar.
    /// Written only by the notifier.
    pub ready_gate: Arc<Mutex<ReadyGate>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_provider: Arc::new(Mutex::new(None)),
            ready_gate: Arc::new(Mutex::new(ReadyGate::default())),
        }
    }

    /// Window teardown: clear the selection and return the gate to
    /// its buffering state.
    pub fn reset(&self) {
        if let Ok(mut active) = self.active_provider.lock() {
            *active = None;
        }
        if let Ok(mut gate) = self.ready_gate.lock() {
            gate.reset();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_selection_and_gate() {
        let state = AppState::new();
        {
            let mut active = state.active_provider.lock().unwrap();
            *active = Some(Provider::Gemini);
        }
        {
            let mut gate = state.ready_gate.lock().unwrap();
            gate.mark_ready(None);
        }

        state.reset();

        assert_eq!(*state.active_provider.lock().unwrap(), None);
        assert!(!state.ready_gate.lock().unwrap().is_ready());
    }
}
