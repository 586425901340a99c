mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    add_saturating, blend_colors, fade_to_black_by, fill_rainbow, fill_solid, hsv2rgb,
    or_max, rgb_from_u32,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
