// Content-area geometry - pure pixel math, no Tauri imports allowed.
// The window is split into a fixed-height top bar (the chrome webview with
// the tab buttons) and the content area underneath (the provider surfaces).

/// Height of the tab bar in logical pixels.
pub const TOP_BAR_HEIGHT_LOGICAL: f64 = 48.0;

/// A webview rectangle in physical pixels, origin at the window's top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

fn top_bar_physical(scale: f64) -> u32 {
    (TOP_BAR_HEIGHT_LOGICAL * scale) as u32
}

/// Bounds of the chrome webview: the full-width strip at the top.
pub fn top_bar_bounds(win_width: u32, scale: f64) -> Bounds {
    Bounds {
        x: 0,
        y: 0,
        width: win_width,
        height: top_bar_physical(scale),
    }
}

/// Bounds of the attached provider surface: everything below the top bar.
/// Saturates instead of underflowing when the window is shorter than the
/// bar itself (mid-resize on some platforms).
pub fn content_bounds(win_width: u32, win_height: u32, scale: f64) -> Bounds {
    let top = top_bar_physical(scale);
    Bounds {
        x: 0,
        y: top as i32,
        width: win_width,
        height: win_height.saturating_sub(top).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1280, 800, 1.0, 48, 752)]
    #[case(1920, 1080, 1.0, 48, 1032)]
    #[case(2560, 1600, 2.0, 96, 1504)]
    #[case(1280, 800, 1.5, 72, 728)]
    fn test_content_fills_window_below_top_bar(
        #[case] w: u32,
        #[case] h: u32,
        #[case] scale: f64,
        #[case] expected_top: u32,
        #[case] expected_height: u32,
    ) {
        let bounds = content_bounds(w, h, scale);
        assert_eq!(bounds.x, 0);
        assert_eq!(bounds.y, expected_top as i32);
        assert_eq!(bounds.width, w);
        assert_eq!(bounds.height, expected_height);
        // Bar and content tile the window exactly.
        assert_eq!(bounds.height, h - expected_top);
    }

    #[test]
    fn test_top_bar_spans_full_width() {
        let bounds = top_bar_bounds(1280, 2.0);
        assert_eq!(
            bounds,
            Bounds {
                x: 0,
                y: 0,
                width: 1280,
                height: 96
            }
        );
    }

    #[test]
    fn test_degenerate_window_height_does_not_underflow() {
        let bounds = content_bounds(400, 10, 1.0);
        assert_eq!(bounds.height, 1);
    }
}
