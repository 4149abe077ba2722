// Static provider table.
// The five hosted AI services, their entry URLs and containment hosts.
// This is configuration data: adding or removing a provider is an edit here,
// not a behavior change anywhere else.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    ChatGpt,
    Claude,
    Copilot,
    Gemini,
    Perplexity,
}

/// Fixed cycling order for Ctrl/Cmd+Tab and the 1..5 number keys.
pub const PROVIDER_ORDER: [Provider; 5] = [
    Provider::ChatGpt,
    Provider::Claude,
    Provider::Copilot,
    Provider::Gemini,
    Provider::Perplexity,
];

impl Provider {
    /// Stable identifier used on the IPC request/broadcast channels
    /// and in webview labels.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Claude => "claude",
            Self::Copilot => "copilot",
            Self::Gemini => "gemini",
            Self::Perplexity => "perplexity",
        }
    }

    /// Label shown on the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChatGpt => "ChatGPT",
            Self::Claude => "Claude",
            Self::Copilot => "Copilot",
            Self::Gemini => "Gemini",
            Self::Perplexity => "Perplexity",
        }
    }

    /// URL loaded when the provider's surface is first created.
    pub fn entry_url(&self) -> &'static str {
        match self {
            Self::ChatGpt => "https://chatgpt.com/",
            Self::Claude => "https://claude.ai/",
            Self::Copilot => "https://copilot.microsoft.com/",
            Self::Gemini => "https://gemini.google.com/app",
            Self::Perplexity => "https://www.perplexity.ai/",
        }
    }

    /// Exact host the containment policy keeps in-app. No subdomains.
    pub fn host(&self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt.com",
            Self::Claude => "claude.ai",
            Self::Copilot => "copilot.microsoft.com",
            Self::Gemini => "gemini.google.com",
            Self::Perplexity => "www.perplexity.ai",
        }
    }

    /// Parse an identifier coming from the UI or an embedded surface.
    /// Unknown ids are caller bugs and map to None, never a panic.
    pub fn from_id(id: &str) -> Option<Self> {
        PROVIDER_ORDER.iter().copied().find(|p| p.id() == id)
    }

    /// Zero-based position in the fixed cycling order.
    pub fn ordinal(&self) -> usize {
        PROVIDER_ORDER
            .iter()
            .position(|p| p == self)
            .unwrap_or(0)
    }
}
