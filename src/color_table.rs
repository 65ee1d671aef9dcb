//! Byte-to-pulse lookup table.
//!
//! Every WS2812 bit is one PWM period. A `1` bit is a long high pulse, a `0`
//! bit a short one. The table holds the eight compare values for every
//! possible byte, most significant bit first, so the encoder only copies.

/// Raw value written to the timer compare register by DMA.
pub type CompareValue = u16;

/// Compare values for one byte, MSB first.
pub type ByteEncoding = [CompareValue; 8];

/// WS2812 bit rate (one bit every 1.25 µs)
pub const BIT_RATE_HZ: u32 = 800_000;

/// PWM counts per bit for a 100 MHz timer clock.
pub const DEFAULT_PERIOD: u16 = 125;

/// Shortest period with a non-zero `0` pulse that is shorter than the `1` pulse.
pub const MIN_PERIOD: u16 = 6;

/// PWM period and the pulse widths derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmTiming {
    period: u16,
}

impl PwmTiming {
    pub const DEFAULT: Self = Self::new(DEFAULT_PERIOD);

    /// Timing for `period` timer counts per bit, raised to [`MIN_PERIOD`].
    pub const fn new(period: u16) -> Self {
        let period = if period < MIN_PERIOD {
            MIN_PERIOD
        } else {
            period
        };
        Self { period }
    }

    /// Timer counts in one bit slot (auto-reload + 1).
    pub const fn period(self) -> u16 {
        self.period
    }

    /// Derive the period from the timer input clock.
    ///
    /// Clocks below `MIN_PERIOD * BIT_RATE_HZ` cannot produce WS2812 timing
    /// and end up at [`MIN_PERIOD`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_timer_clock(timer_hz: u32) -> Self {
        let period = timer_hz / BIT_RATE_HZ;
        let period = if period > u16::MAX as u32 {
            u16::MAX
        } else {
            period as u16
        };
        Self::new(period)
    }

    /// High time for a `0` bit: a bit less than a third of the period.
    pub const fn short_pulse(self) -> CompareValue {
        (self.period / 3).saturating_sub(1)
    }

    /// High time for a `1` bit: a bit more than two thirds of the period.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn long_pulse(self) -> CompareValue {
        let long = 2 * self.period as u32 / 3 + 2;
        if long > self.period as u32 {
            self.period
        } else {
            long as u16
        }
    }
}

impl Default for PwmTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Identity mapping, used when no gamma table is applied.
#[allow(clippy::cast_possible_truncation)]
const IDENTITY: [u8; 256] = {
    let mut lut = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        lut[i] = i as u8;
        i += 1;
    }
    lut
};

/// Immutable table of encodings for all 256 byte values.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: [ByteEncoding; 256],
    timing: PwmTiming,
}

impl ColorTable {
    /// Build the table for a timing. Usable in `static` initializers.
    pub const fn build(timing: PwmTiming) -> Self {
        Self::with_gamma(timing, &IDENTITY)
    }

    /// Build the table so that entry `v` encodes `lut[v]`.
    pub const fn with_gamma(timing: PwmTiming, lut: &[u8; 256]) -> Self {
        let short = timing.short_pulse();
        let long = timing.long_pulse();
        let mut entries = [[0; 8]; 256];

        let mut value = 0;
        while value < 256 {
            let byte = lut[value];
            let mut bit = 0;
            while bit < 8 {
                entries[value][bit] = if byte & (0x80 >> bit) != 0 {
                    long
                } else {
                    short
                };
                bit += 1;
            }
            value += 1;
        }

        Self { entries, timing }
    }

    /// Encoding for one byte.
    #[inline]
    pub const fn lookup(&self, value: u8) -> &ByteEncoding {
        &self.entries[value as usize]
    }

    pub const fn timing(&self) -> PwmTiming {
        self.timing
    }
}

impl core::fmt::Debug for ColorTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorTable")
            .field("timing", &self.timing)
            .field("short", &self.timing.short_pulse())
            .field("long", &self.timing.long_pulse())
            .finish_non_exhaustive()
    }
}
