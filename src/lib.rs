// Multi-AI Cockpit Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

use tauri::menu::{MenuBuilder, PredefinedMenuItem, SubmenuBuilder};
use tauri::webview::PageLoadEvent;
use tauri::{Manager, PhysicalPosition, PhysicalSize, WebviewBuilder, WebviewUrl};

// Static provider table
pub mod providers;

// Shared session state
pub mod state;

// View-lifecycle core (pure logic modules have no Tauri imports)
pub mod modules;

use modules::{layout, notifier, registry, switcher};
use providers::Provider;
use state::AppState;

/// Label of the single main window.
pub const MAIN_WINDOW: &str = "main";

/// Label of the tab-bar webview pinned to the top of the window.
pub const CHROME_WEBVIEW: &str = "chrome";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // One window only: a second launch focuses the existing one.
            if let Some(window) = app.get_window(MAIN_WINDOW) {
                let _ = window.set_focus();
            }
        }))
        .manage(AppState::new())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let handle = app.handle().clone();

            // --- Build Native Menu ---
            let app_menu = SubmenuBuilder::new(app, "Multi-AI Cockpit")
                .item(&PredefinedMenuItem::about(app, Some("About Multi-AI Cockpit"), None)?)
                .separator()
                .item(&PredefinedMenuItem::quit(app, Some("Quit Multi-AI Cockpit"))?)
                .build()?;

            let edit_menu = SubmenuBuilder::new(app, "Edit")
                .item(&PredefinedMenuItem::undo(app, Some("Undo"))?)
                .item(&PredefinedMenuItem::redo(app, Some("Redo"))?)
                .separator()
                .item(&PredefinedMenuItem::cut(app, Some("Cut"))?)
                .item(&PredefinedMenuItem::copy(app, Some("Copy"))?)
                .item(&PredefinedMenuItem::paste(app, Some("Paste"))?)
                .item(&PredefinedMenuItem::select_all(app, Some("Select All"))?)
                .build()?;

            let menu = MenuBuilder::new(app)
                .items(&[&app_menu, &edit_menu])
                .build()?;

            app.set_menu(menu)?;

            // --- Main Window ---
            let window = tauri::window::WindowBuilder::new(app, MAIN_WINDOW)
                .title("Multi-AI Cockpit")
                .inner_size(1280.0, 800.0)
                .min_inner_size(900.0, 600.0)
                .build()?;

            // Start with maximized window
            let _ = window.maximize();

            // --- Chrome Webview (tab bar) ---
            let physical_size = window.inner_size()?;
            let scale_factor = window.scale_factor()?;
            let bar = layout::top_bar_bounds(physical_size.width, scale_factor);

            let chrome_builder =
                WebviewBuilder::new(CHROME_WEBVIEW, WebviewUrl::App("index.html".into()))
                    // The tab bar signals readiness only once its page load
                    // finishes; until then selection broadcasts are buffered.
                    .on_page_load(|webview, payload| {
                        if matches!(payload.event(), PageLoadEvent::Finished) {
                            let app = webview.app_handle();
                            let state = app.state::<AppState>();
                            notifier::mark_ui_ready(app, &state);
                        }
                    });

            window.add_child(
                chrome_builder,
                PhysicalPosition::new(bar.x, bar.y),
                PhysicalSize::new(bar.width, bar.height),
            )?;

            // --- Window Events: resize tracking and teardown ---
            let window_for_events = window.clone();
            window.on_window_event(move |event| match event {
                tauri::WindowEvent::Resized(new_size) => {
                    let scale = window_for_events.scale_factor().unwrap_or(1.0);

                    if let Some(chrome) = handle.get_webview(CHROME_WEBVIEW) {
                        registry::apply_bounds(
                            &chrome,
                            layout::top_bar_bounds(new_size.width, scale),
                        );
                    }

                    let active = handle
                        .state::<AppState>()
                        .active_provider
                        .lock()
                        .ok()
                        .and_then(|guard| *guard);
                    if let Some(provider) = active {
                        if let Some(surface) =
                            handle.get_webview(&registry::view_label(provider))
                        {
                            registry::apply_bounds(
                                &surface,
                                layout::content_bounds(new_size.width, new_size.height, scale),
                            );
                        }
                    }
                }
                // Fixed teardown order: destroy surfaces, then clear
                // selection and return the notifier gate to buffering.
                tauri::WindowEvent::CloseRequested { .. } => {
                    registry::destroy_all(&handle);
                    handle.state::<AppState>().reset();
                }
                tauri::WindowEvent::Destroyed => {
                    handle.state::<AppState>().reset();
                }
                _ => {}
            });

            // --- Initial Activation ---
            // Lazy preload: only the first provider is created on startup.
            // The chrome page has not finished loading yet, so the resulting
            // notification sits in the gate until on_page_load flushes it.
            let state = app.state::<AppState>();
            switcher::show(app.handle(), &state, Provider::ChatGpt);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            modules::switcher::switch_provider,
            modules::switcher::dispatch_shortcut,
            modules::registry::open_popup,
            modules::registry::open_edit_menu
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
