pub mod theme;
pub mod view;
pub mod window;

pub use theme::{CalculatorTheme, theme};
pub use view::CalculatorView;
pub use window::run;
