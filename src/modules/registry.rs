// View registry - owns the embedded provider surfaces.
// One webview per provider, created lazily on first activation, cached by
// label until window teardown. The registry is the only place surfaces are
// created or destroyed; the switch controller only shows/hides them.

use tauri::menu::{ContextMenu, MenuBuilder, PredefinedMenuItem};
use tauri::{AppHandle, Manager, PhysicalPosition, PhysicalSize, Webview, WebviewBuilder, WebviewUrl, Window};
use tauri_plugin_opener::OpenerExt;
use url::Url;

use crate::modules::containment::is_allowed_in_app;
use crate::modules::layout;
use crate::providers::{Provider, PROVIDER_ORDER};

// Some providers gate features on the browser engine they detect.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Hooks injected into every provider surface:
/// 1. keydown forwarding so tab shortcuts work while typing in a provider,
///    suppressing default handling only for candidate combos;
/// 2. popup interception (window.open and target="_blank" clicks) routed
///    through the containment policy on the host side;
/// 3. right-click routed to the native edit context menu.
const SURFACE_INIT_SCRIPT: &str = r"
(function () {
  if (window.__COCKPIT_HOOKS__) return;
  window.__COCKPIT_HOOKS__ = true;

  var invoke = function (cmd, args) {
    if (window.__TAURI_INTERNALS__ && window.__TAURI_INTERNALS__.invoke) {
      window.__TAURI_INTERNALS__.invoke(cmd, args).catch(function () {});
    }
  };

  window.addEventListener('keydown', function (e) {
    if (!e.ctrlKey && !e.metaKey) return;
    var candidate = e.key === 'Tab' || (e.key >= '1' && e.key <= '5');
    if (!candidate) return;
    e.preventDefault();
    invoke('dispatch_shortcut', {
      input: { key: e.key, ctrl: e.ctrlKey, meta: e.metaKey, shift: e.shiftKey }
    });
  }, true);

  var openPopup = function (url) {
    if (url) invoke('open_popup', { url: String(url) });
  };

  window.open = function (url) {
    openPopup(url);
    return null;
  };

  document.addEventListener('click', function (e) {
    var anchor = e.target && e.target.closest ? e.target.closest('a[target=_blank]') : null;
    if (!anchor || !anchor.href) return;
    e.preventDefault();
    openPopup(anchor.href);
  }, true);

  window.addEventListener('contextmenu', function (e) {
    e.preventDefault();
    invoke('open_edit_menu', {});
  }, true);
})();
";

/// Webview label for a provider's surface.
pub fn view_label(provider: Provider) -> String {
    format!("view-{}", provider.id())
}

/// Apply a computed rectangle to a webview. Best-effort: a failure here
/// leaves the surface at its previous bounds until the next resize event.
pub fn apply_bounds(webview: &Webview, bounds: layout::Bounds) {
    let _ = webview.set_bounds(tauri::Rect {
        position: tauri::Position::Physical(PhysicalPosition::new(bounds.x, bounds.y)),
        size: tauri::Size::Physical(PhysicalSize::new(bounds.width, bounds.height)),
    });
}

/// Hand a disallowed URL to the platform's default browser. Fire and forget:
/// the outcome is not tracked.
pub fn eject_to_system_browser(app: &AppHandle, url: &str) {
    println!("[Containment] Ejecting to system browser: {}", url);
    if let Err(e) = app.opener().open_url(url, None::<&str>) {
        println!("[Containment] Failed to open external URL: {}", e);
    }
}

/// Get-or-create the surface for a provider. Idempotent: a cached surface is
/// returned as-is, including its in-flight load if the user switched away
/// before it finished.
///
/// A newly created surface starts hidden and loading its entry URL; the
/// switch controller decides when it becomes visible.
pub fn ensure(app: &AppHandle, window: &Window, provider: Provider) -> Option<Webview> {
    let label = view_label(provider);
    if let Some(existing) = app.get_webview(&label) {
        return Some(existing);
    }

    let entry = match Url::parse(provider.entry_url()) {
        Ok(u) => u,
        Err(e) => {
            println!("[Registry] Bad entry URL for {}: {}", provider.id(), e);
            return None;
        }
    };

    let handle = app.clone();
    let builder = WebviewBuilder::new(&label, WebviewUrl::External(entry))
        .user_agent(BROWSER_USER_AGENT)
        .initialization_script(SURFACE_INIT_SCRIPT)
        // In-place navigation containment: known hosts stay in-app,
        // everything else is cancelled and ejected.
        .on_navigation(move |url| {
            if is_allowed_in_app(url.as_str()) {
                true
            } else {
                eject_to_system_browser(&handle, url.as_str());
                false
            }
        });

    let (inner_size, scale) = match (window.inner_size(), window.scale_factor()) {
        (Ok(size), Ok(scale)) => (size, scale),
        _ => return None,
    };
    let bounds = layout::content_bounds(inner_size.width, inner_size.height, scale);

    let webview = match window.add_child(
        builder,
        PhysicalPosition::new(bounds.x, bounds.y),
        PhysicalSize::new(bounds.width, bounds.height),
    ) {
        Ok(wv) => wv,
        Err(e) => {
            println!("[Registry] Failed to create surface for {}: {}", provider.id(), e);
            return None;
        }
    };

    // Hidden until the switch controller attaches it.
    let _ = webview.hide();

    println!("[Registry] Created surface for {}", provider.id());
    Some(webview)
}

/// Destroy every cached surface. Called on window teardown; per-surface
/// failures are swallowed so one inconsistent webview cannot block cleanup
/// of the rest. Safe when nothing was ever created.
pub fn destroy_all(app: &AppHandle) {
    for provider in PROVIDER_ORDER {
        if let Some(webview) = app.get_webview(&view_label(provider)) {
            if let Err(e) = webview.close() {
                println!("[Registry] Error destroying surface for {}: {}", provider.id(), e);
            }
        }
    }
}

/// Popup request forwarded from a surface's init script. Allowed targets
/// load in the requesting surface (there are no popup windows in the
/// one-window model); everything else goes to the system browser.
#[tauri::command]
pub fn open_popup(app: AppHandle, webview: Webview, url: String) -> Result<(), String> {
    if is_allowed_in_app(&url) {
        let parsed = Url::parse(&url).map_err(|e| e.to_string())?;
        let mut webview = webview;
        webview.navigate(parsed).map_err(|e| e.to_string())?;
    } else {
        eject_to_system_browser(&app, &url);
    }
    Ok(())
}

/// Right-click on a surface: pop a minimal native edit menu anchored to the
/// main window.
#[tauri::command]
pub fn open_edit_menu(app: AppHandle, webview: Webview) -> Result<(), String> {
    let menu = MenuBuilder::new(&app)
        .item(&PredefinedMenuItem::undo(&app, Some("Undo")).map_err(|e| e.to_string())?)
        .item(&PredefinedMenuItem::redo(&app, Some("Redo")).map_err(|e| e.to_string())?)
        .separator()
        .item(&PredefinedMenuItem::cut(&app, Some("Cut")).map_err(|e| e.to_string())?)
        .item(&PredefinedMenuItem::copy(&app, Some("Copy")).map_err(|e| e.to_string())?)
        .item(&PredefinedMenuItem::paste(&app, Some("Paste")).map_err(|e| e.to_string())?)
        .separator()
        .item(&PredefinedMenuItem::select_all(&app, Some("Select All")).map_err(|e| e.to_string())?)
        .build()
        .map_err(|e| e.to_string())?;

    menu.popup(webview.window()).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_labels_are_stable_and_unique() {
        // The label is the registry key: ensure() is idempotent because two
        // calls for the same provider resolve to the same label.
        assert_eq!(view_label(Provider::ChatGpt), "view-chatgpt");
        assert_eq!(view_label(Provider::Claude), "view-claude");

        let labels: Vec<String> = PROVIDER_ORDER.iter().map(|p| view_label(*p)).collect();
        for (i, a) in labels.iter().enumerate() {
            for b in labels.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_labels_do_not_collide_with_chrome() {
        for p in PROVIDER_ORDER {
            assert_ne!(view_label(p), crate::CHROME_WEBVIEW);
        }
    }
}
