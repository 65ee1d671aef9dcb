#![no_std]

pub mod color_table;
pub mod demo;
pub mod double_buffer;
pub mod encoder;
pub mod error;
pub mod gamma;
pub mod layout;
pub mod shared;
pub mod store;
pub mod strip;

pub use color_table::{ColorTable, CompareValue, PwmTiming};
pub use demo::{DemoMode, Demos, LineDemo};
pub use double_buffer::{DoubleBuffer, Half, HalfBuffer};
pub use encoder::{ChannelOrder, EncoderState, EncoderStats, FrameEncoder, RESET_CYCLES};
pub use error::{Error, Result};
pub use gamma::{gamma_lut, ws2812_lut};
pub use layout::{GridLayout, Wiring};
pub use shared::SharedLedStrip;
pub use store::{ColorChannel, LedStore};
pub use strip::{LedStrip, StripConfig};

pub use embassy_time::{Duration, Instant};

/// RGB color of one LED
pub type Rgb = smart_leds::RGB8;

/// PWM timer channel fed by a circular DMA transfer
///
/// Implement this trait for the platform's timer and DMA peripherals.
/// The strip only starts the stream; it is then driven by the
/// half-transfer and transfer-complete interrupts.
pub trait PwmDmaOutput {
    /// Begin replaying `buffer` to the compare register, wrapping forever
    ///
    /// Must raise the half-transfer and transfer-complete interrupts.
    fn start_continuous(&mut self, buffer: &[CompareValue]);
}
