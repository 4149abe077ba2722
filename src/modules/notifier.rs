// Readiness-gated notifier.
// The tab bar loads asynchronously and can miss an early "active provider
// changed" broadcast. The gate buffers the latest value until the chrome
// webview reports its page load finished, flushes it exactly once, and after
// that delivers every change immediately.

use tauri::{AppHandle, Emitter, Manager};

use crate::providers::Provider;
use crate::state::AppState;

/// Event name the tab bar listens on.
pub const ACTIVE_PROVIDER_EVENT: &str = "active-provider-changed";

/// Pure two-state gate with a single-slot overwrite buffer.
/// Only the latest value matters, so there is no queue: a second `notify`
/// before readiness simply replaces the pending value.
#[derive(Debug, Default)]
pub struct ReadyGate {
    ready: bool,
    pending: Option<Provider>,
}

impl ReadyGate {
    /// Record a selection change. Returns `Some` when the value should be
    /// delivered now, `None` when it was buffered for `mark_ready`.
    pub fn notify(&mut self, provider: Provider) -> Option<Provider> {
        if self.ready {
            Some(provider)
        } else {
            self.pending = Some(provider);
            None
        }
    }

    /// Flip to ready. Returns the value to deliver as the one-time flush:
    /// the pending selection if any, otherwise the current active selection.
    pub fn mark_ready(&mut self, active: Option<Provider>) -> Option<Provider> {
        self.ready = true;
        self.pending.take().or(active)
    }

    /// Back to the initial state. Called on window teardown.
    pub fn reset(&mut self) {
        self.ready = false;
        self.pending = None;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Tell the tab bar which provider is now active, routed through the gate.
/// No-op without a main window; delivery failures are swallowed (the next
/// selection change retries naturally).
pub fn notify_active(app: &AppHandle, state: &AppState, provider: Provider) {
    if app.get_window(crate::MAIN_WINDOW).is_none() {
        return;
    }

    let deliver = match state.ready_gate.lock() {
        Ok(mut gate) => gate.notify(provider),
        Err(_) => return,
    };

    if let Some(p) = deliver {
        let _ = app.emit_to(crate::CHROME_WEBVIEW, ACTIVE_PROVIDER_EVENT, p.id());
    }
}

/// Called when the chrome webview finishes loading. Flushes the buffered
/// selection (or the current one, if nothing was buffered) exactly once.
pub fn mark_ui_ready(app: &AppHandle, state: &AppState) {
    let active = match state.active_provider.lock() {
        Ok(active) => *active,
        Err(_) => return,
    };

    let deliver = match state.ready_gate.lock() {
        Ok(mut gate) => gate.mark_ready(active),
        Err(_) => return,
    };

    if let Some(p) = deliver {
        println!("[Notifier] UI ready, flushing active provider: {}", p.id());
        let _ = app.emit_to(crate::CHROME_WEBVIEW, ACTIVE_PROVIDER_EVENT, p.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_until_ready_and_flushes_last_value_once() {
        let mut gate = ReadyGate::default();

        assert_eq!(gate.notify(Provider::Claude), None);
        assert_eq!(gate.notify(Provider::Gemini), None);

        // Exactly one flush, carrying the latest value, not earlier ones.
        assert_eq!(gate.mark_ready(None), Some(Provider::Gemini));

        // The slot is cleared - a second mark_ready (no pending, no active)
        // delivers nothing.
        assert_eq!(gate.mark_ready(None), None);
    }

    #[test]
    fn test_ready_with_no_pending_falls_back_to_active_selection() {
        let mut gate = ReadyGate::default();
        assert_eq!(
            gate.mark_ready(Some(Provider::ChatGpt)),
            Some(Provider::ChatGpt)
        );
    }

    #[test]
    fn test_ready_with_no_pending_and_no_active_delivers_nothing() {
        let mut gate = ReadyGate::default();
        assert_eq!(gate.mark_ready(None), None);
        assert!(gate.is_ready());
    }

    #[test]
    fn test_immediate_delivery_after_ready() {
        let mut gate = ReadyGate::default();
        gate.mark_ready(None);

        assert_eq!(gate.notify(Provider::Copilot), Some(Provider::Copilot));
        assert_eq!(gate.notify(Provider::Claude), Some(Provider::Claude));
    }

    #[test]
    fn test_reset_returns_to_buffering() {
        let mut gate = ReadyGate::default();
        gate.mark_ready(None);
        gate.reset();

        assert!(!gate.is_ready());
        assert_eq!(gate.notify(Provider::Perplexity), None);
        assert_eq!(gate.mark_ready(None), Some(Provider::Perplexity));
    }
}
