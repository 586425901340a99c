use crate::color::Rgb;

mod brightness;

pub use brightness::{BrightnessFilter, DimmedOutput};

/// Post-processing step applied to a frame before it leaves the crate
pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}
