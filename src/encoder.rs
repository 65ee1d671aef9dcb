//! Frame encoder state machine.
//!
//! Runs once per DMA half-transfer interrupt and fills the half that was
//! just released. A frame is a RESET latch (a sustained low line) followed
//! by one DATA step per LED:
//!
//! ```text
//!            dirty                      last LED
//!   RESET ─────────────▶ DATA ─────────────────────▶ RESET
//!     │ clean              ▲
//!     ▼                    │ dirty
//!   IDLE ──────────────────┘
//! ```
//!
//! The dirty flag is only sampled at the end of RESET and in IDLE, where the
//! store flips its pending frame to the front. An update made while a frame
//! is on the wire lands in the back copy and waits for the next frame.

use crate::color_table::ColorTable;
use crate::double_buffer::HalfBuffer;
use crate::store::LedStore;

/// Full all-zero half-buffer periods that make up the latch.
pub const RESET_CYCLES: u8 = 10;

/// Shortest latch that still exceeds the WS2812 reset threshold.
pub const MIN_RESET_CYCLES: u8 = 10;

/// Encoder state. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    /// Holding the line low so the strip latches
    Reset,
    /// Nothing pending, the line stays low
    Idle,
    /// Streaming LED data, one LED per step
    Data,
}

/// Order in which a LED's channels go on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Green, red, blue (WS2812, WS2812B)
    #[default]
    Grb,
    /// Red, green, blue
    Rgb,
}

/// Wrapping counters for observing the interrupt load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderStats {
    /// Every step
    pub callbacks: u32,
    /// Steps that encoded an LED
    pub data_callbacks: u32,
    /// Completed passes over the strip
    pub frames: u32,
}

#[derive(Debug, Clone)]
pub struct FrameEncoder {
    state: EncoderState,
    reset_cycles: u8,
    reset_count: u8,
    zero_halves_written: u8,
    cursor: usize,
    order: ChannelOrder,
    stats: EncoderStats,
}

impl FrameEncoder {
    /// Start in RESET with both halves known to be zero.
    pub const fn new(reset_cycles: u8, order: ChannelOrder) -> Self {
        let reset_cycles = if reset_cycles < MIN_RESET_CYCLES {
            MIN_RESET_CYCLES
        } else {
            reset_cycles
        };
        Self {
            state: EncoderState::Reset,
            reset_cycles,
            reset_count: 0,
            zero_halves_written: 2,
            cursor: 0,
            order,
            stats: EncoderStats {
                callbacks: 0,
                data_callbacks: 0,
                frames: 0,
            },
        }
    }

    /// Advance one step, writing into the half the hardware just released.
    ///
    /// Must finish within one half-buffer replay (24 PWM periods). Does not
    /// block or allocate.
    pub fn step<const MAX_LEDS: usize>(
        &mut self,
        store: &mut LedStore<MAX_LEDS>,
        table: &ColorTable,
        half: &mut HalfBuffer,
    ) {
        self.stats.callbacks = self.stats.callbacks.wrapping_add(1);

        match self.state {
            EncoderState::Reset => self.step_reset(store, half),
            EncoderState::Idle => {
                if store.take_frame() {
                    self.state = EncoderState::Data;
                }
            }
            EncoderState::Data => self.step_data(store, table, half),
        }
    }

    fn step_reset<const MAX_LEDS: usize>(
        &mut self,
        store: &mut LedStore<MAX_LEDS>,
        half: &mut HalfBuffer,
    ) {
        if self.zero_halves_written < 2 {
            half.fill(0);
            self.zero_halves_written += 1;
        } else if self.reset_count < self.reset_cycles {
            self.reset_count += 1;
        } else {
            self.cursor = 0;
            self.state = if store.take_frame() {
                EncoderState::Data
            } else {
                EncoderState::Idle
            };
        }
    }

    fn step_data<const MAX_LEDS: usize>(
        &mut self,
        store: &LedStore<MAX_LEDS>,
        table: &ColorTable,
        half: &mut HalfBuffer,
    ) {
        self.stats.data_callbacks = self.stats.data_callbacks.wrapping_add(1);

        let Some(led) = store.front_led(self.cursor) else {
            // cursor is kept below the store length; recover by latching
            self.begin_reset();
            return;
        };

        let channels = match self.order {
            ChannelOrder::Grb => [led.g, led.r, led.b],
            ChannelOrder::Rgb => [led.r, led.g, led.b],
        };
        for (bits, value) in half.chunks_exact_mut(8).zip(channels) {
            bits.copy_from_slice(table.lookup(value));
        }

        if self.cursor + 1 >= store.len() {
            self.stats.frames = self.stats.frames.wrapping_add(1);
            self.begin_reset();
        } else {
            self.cursor += 1;
        }
    }

    fn begin_reset(&mut self) {
        self.cursor = 0;
        self.zero_halves_written = 0;
        self.reset_count = 0;
        self.state = EncoderState::Reset;
    }

    pub const fn state(&self) -> EncoderState {
        self.state
    }

    /// LED the next DATA step will encode.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn reset_cycles(&self) -> u8 {
        self.reset_cycles
    }

    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    pub const fn stats(&self) -> EncoderStats {
        self.stats
    }
}
