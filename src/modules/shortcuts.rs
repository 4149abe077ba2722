// Shortcut dispatcher - pure key-event interpretation, no Tauri imports
// allowed. Keydown events are forwarded here from both the chrome webview
// and every provider surface, so the bindings work regardless of focus.

use serde::Deserialize;

use crate::providers::PROVIDER_ORDER;

/// A keydown event as reported by a webview.
/// `key` follows the DOM KeyboardEvent.key convention ("1", "Tab", ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInput {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// 1-based tab position (primary modifier + digit).
    SelectPosition(usize),
    /// Primary modifier + Tab.
    CycleNext,
    /// Primary modifier + Shift + Tab.
    CyclePrev,
}

/// Map a key event to a tab action, or None to let it pass through.
/// `primary_is_command` selects the platform's primary modifier:
/// Command on macOS, Control elsewhere. Passed as a parameter so both
/// families are unit-testable on any host.
pub fn match_shortcut(input: &KeyInput, primary_is_command: bool) -> Option<ShortcutAction> {
    let primary = if primary_is_command {
        input.meta
    } else {
        input.ctrl
    };
    if !primary {
        return None;
    }

    if input.key == "Tab" {
        return Some(if input.shift {
            ShortcutAction::CyclePrev
        } else {
            ShortcutAction::CycleNext
        });
    }

    // Digits 1..=5 select by position.
    if input.key.len() == 1 {
        if let Some(digit) = input.key.chars().next().and_then(|c| c.to_digit(10)) {
            let n = digit as usize;
            if (1..=PROVIDER_ORDER.len()).contains(&n) {
                return Some(ShortcutAction::SelectPosition(n));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(key: &str, ctrl: bool, meta: bool, shift: bool) -> KeyInput {
        KeyInput {
            key: key.to_string(),
            ctrl,
            meta,
            shift,
        }
    }

    #[rstest]
    #[case("1", 1)]
    #[case("2", 2)]
    #[case("3", 3)]
    #[case("4", 4)]
    #[case("5", 5)]
    fn test_ctrl_digit_selects_position(#[case] k: &str, #[case] n: usize) {
        let input = key(k, true, false, false);
        assert_eq!(
            match_shortcut(&input, false),
            Some(ShortcutAction::SelectPosition(n))
        );
    }

    #[test]
    fn test_digit_out_of_tab_range_passes_through() {
        assert_eq!(match_shortcut(&key("6", true, false, false), false), None);
        assert_eq!(match_shortcut(&key("0", true, false, false), false), None);
    }

    #[test]
    fn test_tab_cycles_forward_and_back() {
        assert_eq!(
            match_shortcut(&key("Tab", true, false, false), false),
            Some(ShortcutAction::CycleNext)
        );
        assert_eq!(
            match_shortcut(&key("Tab", true, false, true), false),
            Some(ShortcutAction::CyclePrev)
        );
    }

    #[test]
    fn test_requires_primary_modifier() {
        assert_eq!(match_shortcut(&key("1", false, false, false), false), None);
        assert_eq!(match_shortcut(&key("Tab", false, true, false), false), None);
    }

    #[test]
    fn test_primary_modifier_is_platform_dependent() {
        // Command on the mac family...
        let cmd_one = key("1", false, true, false);
        assert_eq!(
            match_shortcut(&cmd_one, true),
            Some(ShortcutAction::SelectPosition(1))
        );
        // ...and Command does nothing where Control is primary.
        assert_eq!(match_shortcut(&cmd_one, false), None);

        let ctrl_one = key("1", true, false, false);
        assert_eq!(match_shortcut(&ctrl_one, true), None);
    }

    #[test]
    fn test_plain_typing_passes_through() {
        assert_eq!(match_shortcut(&key("a", false, false, false), false), None);
        assert_eq!(match_shortcut(&key("Enter", true, false, false), false), None);
    }
}
