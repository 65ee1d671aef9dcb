//! Demo patterns driven from the application loop.
//!
//! Demos only use the client API, so they exercise the same dirty/update
//! path as any application code.

use embassy_time::{Duration, Instant};

use crate::Rgb;
use crate::strip::LedStrip;

/// Delay between two LEDs of the line demo.
pub const LINE_INTERVAL: Duration = Duration::from_millis(20);

/// LEDs painted before the line demo moves on to the next color.
pub const LINE_COLOR_RUN: u32 = 64;

const LINE_COLORS: [Rgb; 7] = [
    Rgb { r: 10, g: 0, b: 0 },
    Rgb { r: 0, g: 10, b: 0 },
    Rgb { r: 0, g: 0, b: 10 },
    Rgb { r: 10, g: 10, b: 0 },
    Rgb { r: 0, g: 10, b: 10 },
    Rgb { r: 10, g: 0, b: 10 },
    Rgb { r: 10, g: 10, b: 10 },
];

/// Selectable demo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoMode {
    #[default]
    None,
    Line,
}

/// Paints the strip one LED at a time, cycling through a dim palette.
#[derive(Debug, Clone)]
pub struct LineDemo {
    interval: Duration,
    next_led: Instant,
    led: usize,
    count: u32,
    color: usize,
}

impl LineDemo {
    pub const fn new() -> Self {
        Self::with_interval(LINE_INTERVAL)
    }

    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_led: Instant::from_ticks(interval.as_ticks()),
            led: 0,
            count: 0,
            color: 0,
        }
    }

    /// Paint the next LED if its time has come.
    ///
    /// Returns true when the strip was changed.
    pub fn tick<const MAX_LEDS: usize>(
        &mut self,
        now: Instant,
        strip: &mut LedStrip<'_, MAX_LEDS>,
    ) -> bool {
        if now < self.next_led {
            return false;
        }

        let color = self.current_color();
        // led is wrapped below, so it is always in range
        let _ = strip.set_color(self.led, color);

        self.led += 1;
        self.count = self.count.wrapping_add(1);
        if self.count % LINE_COLOR_RUN == 0 {
            self.color = (self.color + 1) % LINE_COLORS.len();
        }
        if self.led >= strip.len() {
            self.led = 0;
        }

        self.next_led = now + self.interval;
        true
    }

    pub fn current_color(&self) -> Rgb {
        LINE_COLORS[self.color % LINE_COLORS.len()]
    }

    /// LED painted by the next tick.
    pub const fn position(&self) -> usize {
        self.led
    }
}

impl Default for LineDemo {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs whichever demo is selected.
#[derive(Debug, Clone, Default)]
pub struct Demos {
    mode: DemoMode,
    line: LineDemo,
}

impl Demos {
    pub const fn new() -> Self {
        Self {
            mode: DemoMode::None,
            line: LineDemo::new(),
        }
    }

    pub fn set(&mut self, mode: DemoMode) {
        self.mode = mode;
    }

    pub const fn mode(&self) -> DemoMode {
        self.mode
    }

    pub fn tick<const MAX_LEDS: usize>(
        &mut self,
        now: Instant,
        strip: &mut LedStrip<'_, MAX_LEDS>,
    ) -> bool {
        match self.mode {
            DemoMode::Line => self.line.tick(now, strip),
            DemoMode::None => false,
        }
    }
}
