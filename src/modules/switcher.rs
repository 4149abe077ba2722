// Tab switch controller - owns the active selection.
// Every way of changing tabs (clicks from the tab bar, hotkeys from any
// webview) funnels into show(), which runs a fixed sequence: ensure the
// surface exists, swap visibility, resize to the content area, record the
// selection, notify the tab bar.

use tauri::{AppHandle, Manager, State, Webview, Window};

use crate::modules::notifier;
use crate::modules::registry;
use crate::modules::shortcuts::{match_shortcut, KeyInput, ShortcutAction};
use crate::modules::layout;
use crate::providers::{Provider, PROVIDER_ORDER};
use crate::state::AppState;

/// Advance an index through the fixed provider order, wrapping in both
/// directions. An unset or unknown current selection counts as index 0.
pub fn cycle_index(current: Option<usize>, direction: i32, len: usize) -> usize {
    let idx = current.unwrap_or(0) as i32;
    (idx + direction).rem_euclid(len as i32) as usize
}

/// Resolve a 1-based tab position to a provider. Out of range -> None.
pub fn position_to_provider(n: usize) -> Option<Provider> {
    if n == 0 {
        return None;
    }
    PROVIDER_ORDER.get(n - 1).copied()
}

fn resize_attached(window: &Window, webview: &Webview) {
    let (Ok(size), Ok(scale)) = (window.inner_size(), window.scale_factor()) else {
        return;
    };
    registry::apply_bounds(webview, layout::content_bounds(size.width, size.height, scale));
}

/// Attach a provider's surface as the visible content. No-op when the main
/// window is gone or the surface cannot be created.
pub fn show(app: &AppHandle, state: &AppState, provider: Provider) {
    let Some(window) = app.get_window(crate::MAIN_WINDOW) else {
        return;
    };
    let Some(webview) = registry::ensure(app, &window, provider) else {
        return;
    };

    // Swap: at most one surface is visible at a time.
    let previous = state.active_provider.lock().ok().and_then(|guard| *guard);
    if let Some(prev) = previous.filter(|p| *p != provider) {
        if let Some(prev_view) = app.get_webview(&registry::view_label(prev)) {
            let _ = prev_view.hide();
        }
    }
    let _ = webview.show();

    resize_attached(&window, &webview);

    if let Ok(mut active) = state.active_provider.lock() {
        *active = Some(provider);
    }

    println!("[Tabs] Active provider: {}", provider.id());
    notifier::notify_active(app, state, provider);
}

/// Hotkey cycling: +1 for next, -1 for previous, wrapping at both ends.
pub fn cycle(app: &AppHandle, state: &AppState, direction: i32) {
    let current = state
        .active_provider
        .lock()
        .ok()
        .and_then(|guard| *guard)
        .map(|p| p.ordinal());
    let next = cycle_index(current, direction, PROVIDER_ORDER.len());
    show(app, state, PROVIDER_ORDER[next]);
}

/// Hotkey number selection: 1-based, silently ignores out-of-range.
pub fn select_by_position(app: &AppHandle, state: &AppState, n: usize) {
    if let Some(provider) = position_to_provider(n) {
        show(app, state, provider);
    }
}

/// Switch request from the tab bar. Unknown ids and requests for the
/// already-active provider are dropped; both signal a caller bug or a
/// double-click, not an error worth surfacing.
#[tauri::command]
pub fn switch_provider(
    app: AppHandle,
    state: State<AppState>,
    provider: String,
) -> Result<(), String> {
    let Some(target) = Provider::from_id(&provider) else {
        println!("[Tabs] Ignoring switch to unknown provider: {}", provider);
        return Ok(());
    };

    let already_active = state
        .active_provider
        .lock()
        .map_err(|e| e.to_string())?
        .map(|p| p == target)
        .unwrap_or(false);
    if already_active {
        return Ok(());
    }

    show(&app, &state, target);
    Ok(())
}

/// Keydown forwarded from any webview. Matched combos drive the controller;
/// everything else already passed through unhandled on the webview side.
#[tauri::command]
pub fn dispatch_shortcut(
    app: AppHandle,
    state: State<AppState>,
    input: KeyInput,
) -> Result<(), String> {
    let primary_is_command = cfg!(target_os = "macos");
    match match_shortcut(&input, primary_is_command) {
        Some(ShortcutAction::SelectPosition(n)) => select_by_position(&app, &state, n),
        Some(ShortcutAction::CycleNext) => cycle(&app, &state, 1),
        Some(ShortcutAction::CyclePrev) => cycle(&app, &state, -1),
        None => {}
    }
    Ok(())
}
