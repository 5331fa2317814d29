//! The calculator view: a display above a keypad.

use crate::calculator::{Calculator, InputToken, Key, NumberFormat, Operation, copy_to_clipboard};
use crate::ui::theme::theme;
use gpui::{
    App, ClickEvent, Context, Div, ElementId, FocusHandle, Focusable, KeyDownEvent, SharedString,
    Window, div, prelude::*,
};
use gpui_component::button::{Button, ButtonVariants};
use tracing::{debug, warn};

use InputToken::*;

/// Keypad rows, laid out like a desk calculator.
const KEYPAD: &[&[Key]] = &[
    &[
        Key::Token(Digit1),
        Key::Token(Digit2),
        Key::Token(Digit3),
        Key::Operation(Operation::Add),
    ],
    &[
        Key::Token(Digit4),
        Key::Token(Digit5),
        Key::Token(Digit6),
        Key::Operation(Operation::Sub),
    ],
    &[
        Key::Token(Digit7),
        Key::Token(Digit8),
        Key::Token(Digit9),
        Key::Operation(Operation::Mul),
    ],
    &[
        Key::Token(DecimalSeparator),
        Key::Token(Digit0),
        Key::Operation(Operation::Ans),
        Key::Operation(Operation::Div),
    ],
    &[Key::Clear, Key::Backspace],
];

/// Owns one independent calculator and renders it.
pub struct CalculatorView {
    calculator: Calculator,
    display: SharedString,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(format: NumberFormat, cx: &mut Context<Self>) -> Self {
        let calculator = Calculator::new(format);
        let display = calculator.calculation_result().into();

        Self {
            calculator,
            display,
            focus_handle: cx.focus_handle(),
        }
    }

    fn press(&mut self, key: Key, cx: &mut Context<Self>) {
        self.display = self.calculator.press(key).into();
        debug!(?key, display = %self.display, "key pressed");
        cx.notify();
    }

    fn copy_display(&self) {
        if let Err(err) = copy_to_clipboard(&self.display) {
            warn!(%err, "could not copy display");
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;

        if keystroke.modifiers.control || keystroke.modifiers.platform {
            if keystroke.key == "c" {
                self.copy_display();
                cx.stop_propagation();
            }
            return;
        }

        // Prefer the produced character so shift-= arrives as `+`.
        let key = keystroke
            .key_char
            .as_deref()
            .and_then(Key::from_name)
            .or_else(|| Key::from_name(&keystroke.key));

        if let Some(key) = key {
            self.press(key, cx);
            cx.stop_propagation();
        }
    }

    fn key_label(&self, key: Key) -> SharedString {
        match key {
            Key::Token(token) => token.glyph(self.calculator.format()).to_string().into(),
            Key::Operation(operation) => operation.symbol().into(),
            Key::Backspace => "⌫".into(),
            Key::Clear => "C".into(),
        }
    }

    fn render_display(&self) -> Div {
        let t = theme();

        let hint = self.calculator.operation_hint().map_or("", Operation::symbol);

        div()
            .w_full()
            .h(t.display_height)
            .flex_shrink_0()
            .px(t.display_padding_x)
            .bg(t.display_background)
            .border_1()
            .border_color(t.display_border)
            .rounded(t.display_radius)
            .flex()
            .flex_col()
            .justify_center()
            .items_end()
            .overflow_hidden()
            .child(
                div()
                    .text_xs()
                    .text_color(t.display_hint_color)
                    .child(SharedString::from(hint)),
            )
            .child(
                div()
                    .text_2xl()
                    .text_color(t.display_text_color)
                    .whitespace_nowrap()
                    .child(self.display.clone()),
            )
    }

    fn render_key(&self, key: Key, index: usize, cx: &mut Context<Self>) -> Div {
        let button = Button::new(ElementId::NamedInteger("key".into(), index as u64))
            .label(self.key_label(key))
            .w_full()
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.press(key, cx);
            }));

        let button = match key {
            Key::Operation(_) => button.primary(),
            Key::Clear => button.danger(),
            _ => button,
        };

        div().flex_1().child(button)
    }

    fn render_keypad(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();

        let mut keypad = div().w_full().flex_1().flex().flex_col().gap(t.keypad_gap);
        let mut index = 0;
        for row in KEYPAD {
            let mut row_div = div().w_full().flex_1().flex().flex_row().gap(t.keypad_gap);
            for &key in *row {
                row_div = row_div.child(self.render_key(key, index, cx));
                index += 1;
            }
            keypad = keypad.child(row_div);
        }
        keypad
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .p(t.window_padding)
            .bg(t.window_background)
            .flex()
            .flex_col()
            .gap(t.window_padding)
            .child(self.render_display())
            .child(self.render_keypad(cx))
    }
}
