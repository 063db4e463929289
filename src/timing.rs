//! Morse timing constants
//!
//! Every duration is a whole multiple of one base unit, following the
//! standard Morse convention: a dot lasts one unit, a dash three units and
//! a space between words seven units.

use embassy_time::Duration;

use crate::symbol::Symbol;

/// Base unit in milliseconds.
///
/// The installation originally ran with 200 ms.
pub const BASE_DELAY_MS: u64 = 100;

/// Length of a dot in base units
pub const DOT_UNITS: u64 = 1;
/// Length of a dash in base units
pub const DASH_UNITS: u64 = 3;
/// Length of a space in base units
pub const SPACE_UNITS: u64 = 7;

/// Base unit
pub const BASE: Duration = Duration::from_millis(BASE_DELAY_MS);
/// Dot duration
pub const DOT: Duration = MorseTimings::DEFAULT.dot();
/// Dash duration
pub const DASH: Duration = MorseTimings::DEFAULT.dash();
/// Space duration
pub const SPACE: Duration = MorseTimings::DEFAULT.space();

/// Morse durations derived from a single base unit
///
/// Only the base is stored, so the 1/3/7 ratios hold for any retuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorseTimings {
    base: Duration,
}

impl MorseTimings {
    /// Timings built on [`BASE`]
    pub const DEFAULT: Self = Self::from_base(BASE);

    /// Create timings from a base unit
    pub const fn from_base(base: Duration) -> Self {
        Self { base }
    }

    /// Create timings from a base unit in milliseconds
    pub const fn from_base_millis(millis: u64) -> Self {
        Self::from_base(Duration::from_millis(millis))
    }

    /// Base unit
    pub const fn base(self) -> Duration {
        self.base
    }

    pub const fn dot(self) -> Duration {
        self.units(DOT_UNITS)
    }

    pub const fn dash(self) -> Duration {
        self.units(DASH_UNITS)
    }

    pub const fn space(self) -> Duration {
        self.units(SPACE_UNITS)
    }

    /// Duration of a single symbol
    pub const fn symbol(self, symbol: Symbol) -> Duration {
        self.units(symbol.units())
    }

    /// Duration of `count` base units
    pub const fn units(self, count: u64) -> Duration {
        Duration::from_ticks(self.base.as_ticks() * count)
    }
}

impl Default for MorseTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
