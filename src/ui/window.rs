//! Opening the calculator window.

use crate::calculator::NumberFormat;
use crate::config::WindowConfig;
use crate::ui::view::CalculatorView;
use gpui::{
    AnyView, App, Application, Bounds, Focusable, TitlebarOptions, WindowBounds, WindowOptions,
    prelude::*, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

/// Run the application with a single calculator window until it is closed.
///
/// Must be called from the main thread; all calculator state lives on the
/// GPUI foreground thread from then on.
pub fn run(format: NumberFormat, window_config: WindowConfig) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            let window_size = size(px(window_config.width), px(window_config.height));
            let bounds = Bounds::centered(None, window_size, cx);
            let options = WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Calculator".into()),
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                is_resizable: window_config.resizable,
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                let view = cx.new(|cx| CalculatorView::new(format, cx));
                window.focus(&view.read(cx).focus_handle(cx));

                let view: AnyView = view.into();
                cx.new(|cx| Root::new(view, window, cx))
            });

            match opened {
                Ok(_) => info!(separator = %format.decimal_separator(), "calculator window opened"),
                Err(err) => {
                    error!(%err, "failed to open calculator window");
                    cx.quit();
                    return;
                }
            }

            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();
            cx.activate(true);
        });
}
