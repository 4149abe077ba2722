// Module exports for the view-lifecycle core
pub mod containment;  // Navigation containment policy (pure)
pub mod layout;       // Top-bar / content-area geometry (pure)
pub mod notifier;     // Readiness-gated broadcasts to the tab bar
pub mod registry;     // Provider surface lifecycle
pub mod shortcuts;    // Key-combo interpretation (pure)
pub mod switcher;     // Tab switch controller
