// Pure containment policy - no Tauri imports allowed.
// Decides whether a navigation target may stay inside the app or must be
// ejected to the system browser.

use url::Url;

use crate::providers::PROVIDER_ORDER;

/// Returns true iff `url` is allowed to load inside an embedded surface.
///
/// The rules are deliberately strict:
/// 1. The string must parse as a URL. Malformed input fails closed.
/// 2. Only `https` qualifies. Plain `http` to a known host is still ejected.
/// 3. The host must exactly equal one of the five provider hosts.
///    No subdomain matching, so `claude.ai.evil.com` never passes.
/// 4. An explicit non-default port disqualifies the URL.
pub fn is_allowed_in_app(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if parsed.scheme() != "https" {
        return false;
    }

    if parsed.port().is_some() {
        return false;
    }

    match parsed.host_str() {
        Some(host) => PROVIDER_ORDER.iter().any(|p| p.host() == host),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // Provider entry pages and deep links stay in-app
    #[case("https://chatgpt.com/", true)]
    #[case("https://claude.ai/chat/123", true)]
    #[case("https://copilot.microsoft.com/", true)]
    #[case("https://gemini.google.com/app", true)]
    #[case("https://www.perplexity.ai/search?q=rust", true)]
    // Scheme must be https
    #[case("http://claude.ai/", false)]
    #[case("ftp://claude.ai/", false)]
    #[case("file:///etc/passwd", false)]
    // Exact host match only - no suffix tricks, no subdomains
    #[case("https://claude.ai.evil.com/", false)]
    #[case("https://evil.com/?fake=claude.ai", false)]
    #[case("https://chat.chatgpt.com/", false)]
    #[case("https://perplexity.ai/", false)] // allow-list entry is www.
    // Explicit ports are rejected
    #[case("https://claude.ai:8443/", false)]
    // Garbage fails closed
    #[case("not a url", false)]
    #[case("", false)]
    #[case("https://", false)]
    fn test_is_allowed_in_app(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_allowed_in_app(url), expected, "url: {}", url);
    }
}
