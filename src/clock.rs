//! Wrapping millisecond clock
//!
//! Timestamps are 32-bit millisecond counters that overflow roughly every
//! 49.7 days. Every comparison goes through [`ClockMs::elapsed_since`], which
//! subtracts with wraparound, so timers stay correct across the overflow.

use embassy_time::Instant;

/// Millisecond timestamp on a clock that wraps at `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockMs(pub u32);

impl ClockMs {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, modulo 2^32
    #[inline]
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Returns true once at least `period` ms passed since `since`
    #[inline]
    pub const fn has_elapsed(self, since: Self, period: u32) -> bool {
        self.elapsed_since(since) >= period
    }

    /// Returns true if `self` lies within `[mark, mark + tolerance]`
    #[inline]
    pub const fn is_within(self, mark: Self, tolerance: u32) -> bool {
        self.elapsed_since(mark) <= tolerance
    }

    /// Timestamp `ms` milliseconds after `self`
    #[inline]
    pub const fn offset(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

impl From<Instant> for ClockMs {
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        Self(instant.as_millis() as u32)
    }
}

impl From<u32> for ClockMs {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}
