pub mod gradient;
pub mod palette;

pub use self::gradient::{GradientStyle, GradientTone, gradient_style};
pub use self::palette::{DEFAULT_COLOR, Rgb, resolve_color};
