mod pixel;
mod wheel;

pub use pixel::{Color, Rgbw};
pub use wheel::{calculate_intensity, colorwheel};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
