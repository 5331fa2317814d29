//! Colors and spacing for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::default();
}

/// Get the global calculator theme.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}

#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    pub window_background: Hsla,
    pub window_padding: Pixels,
    pub keypad_gap: Pixels,

    pub display_background: Hsla,
    pub display_border: Hsla,
    pub display_radius: Pixels,
    pub display_height: Pixels,
    pub display_padding_x: Pixels,
    pub display_text_color: Hsla,
    /// Color of the queued operation hint above the number.
    pub display_hint_color: Hsla,
}

impl Default for CalculatorTheme {
    fn default() -> Self {
        Self {
            window_background: hsla(0.0, 0.0, 0.12, 1.0),
            window_padding: px(10.0),
            keypad_gap: px(4.0),

            display_background: hsla(0.0, 0.0, 1.0, 1.0),
            display_border: hsla(0.0, 0.0, 0.7, 1.0),
            display_radius: px(4.0),
            display_height: px(64.0),
            display_padding_x: px(10.0),
            display_text_color: hsla(0.0, 0.0, 0.1, 1.0),
            display_hint_color: hsla(210.0 / 360.0, 0.4, 0.45, 1.0),
        }
    }
}
