mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{blend_colors, hsv2rgb, lerp_color, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
