//! Software brightness
//!
//! For outputs without a global brightness control of their own.
//! [`DimmedOutput`] keeps the last raw frame, so a brightness change is
//! visible on the strip right away instead of on the next frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{
    OutputDriver,
    color::{BLACK, Rgb},
    math8::scale8,
};

/// Scales every pixel by a global brightness
#[derive(Debug, Clone)]
pub struct BrightnessFilter {
    /// Current brightness value (0-255)
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessFilter.set] setting brightness to {:?}", brightness);
        self.brightness = brightness;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let current = self.brightness;

        if current == 255 {
            return;
        }

        if current == 0 {
            frame.fill(BLACK);
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, current);
            pixel.g = scale8(pixel.g, current);
            pixel.b = scale8(pixel.b, current);
        }
    }
}

/// Output adapter that applies brightness in software
///
/// Frames longer than `LEDS` are truncated.
pub struct DimmedOutput<D: OutputDriver, const LEDS: usize> {
    driver: D,
    filter: BrightnessFilter,
    raw: [Rgb; LEDS],
    scaled: [Rgb; LEDS],
    len: usize,
}

impl<D: OutputDriver, const LEDS: usize> DimmedOutput<D, LEDS> {
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            filter: BrightnessFilter::new(255),
            raw: [BLACK; LEDS],
            scaled: [BLACK; LEDS],
            len: 0,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.filter.brightness()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }

    fn flush(&mut self) {
        let len = self.len;
        self.scaled[..len].copy_from_slice(&self.raw[..len]);
        self.filter.apply(&mut self.scaled[..len]);
        self.driver.write(&self.scaled[..len]);
    }
}

impl<D: OutputDriver, const LEDS: usize> OutputDriver for DimmedOutput<D, LEDS> {
    fn write(&mut self, colors: &[Rgb]) {
        let len = colors.len().min(LEDS);
        self.raw[..len].copy_from_slice(&colors[..len]);
        self.len = len;
        self.flush();
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.filter.set(brightness);
        self.flush();
    }
}
