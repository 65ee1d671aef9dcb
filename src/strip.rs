//! LED strip: value store, frame encoder and DMA buffer in one handle.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::SmartLedsWrite;

use crate::PwmDmaOutput;
use crate::Rgb;
use crate::color_table::ColorTable;
use crate::double_buffer::{DoubleBuffer, Half};
use crate::encoder::{ChannelOrder, EncoderState, EncoderStats, FrameEncoder, RESET_CYCLES};
use crate::error::{Error, Result};
use crate::layout::GridLayout;
use crate::store::{ColorChannel, LedStore};

/// Configuration for a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Zero half-buffers in the latch; raised to `MIN_RESET_CYCLES` if lower
    pub reset_cycles: u8,
    /// Channel order on the wire
    pub order: ChannelOrder,
}

impl StripConfig {
    pub const DEFAULT: Self = Self {
        reset_cycles: RESET_CYCLES,
        order: ChannelOrder::Grb,
    };
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A WS2812 strip driven by a PWM channel and circular DMA.
///
/// Client calls mutate the LED values from foreground code. The two
/// completion callbacks run the encoder against the half that was just
/// released. Once [`LedStrip::start`] has handed the buffer to the
/// hardware the strip must stay where it is, which is why it is usually
/// kept inside a [`SharedLedStrip`](crate::SharedLedStrip) static.
#[derive(Debug)]
pub struct LedStrip<'a, const MAX_LEDS: usize> {
    table: &'a ColorTable,
    store: LedStore<MAX_LEDS>,
    encoder: FrameEncoder,
    buffer: DoubleBuffer,
}

impl<'a, const MAX_LEDS: usize> LedStrip<'a, MAX_LEDS> {
    /// Size the strip for `led_count` LEDs. The output is not started.
    pub fn new(led_count: usize, config: &StripConfig, table: &'a ColorTable) -> Result<Self> {
        let store = match LedStore::new(led_count) {
            Ok(store) => store,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedStrip.new] {}", err);
                return Err(err);
            }
        };

        Ok(Self {
            table,
            store,
            encoder: FrameEncoder::new(config.reset_cycles, config.order),
            buffer: DoubleBuffer::new(),
        })
    }

    /// Hand the double buffer to the peripheral.
    ///
    /// The buffer is all zero at this point, so the line starts low.
    pub fn start<O: PwmDmaOutput>(&self, output: &mut O) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[LedStrip.start] {} LEDs, {} compare values, period {}",
            self.store.len(),
            self.buffer.as_slice().len(),
            self.table.timing().period()
        );
        output.start_continuous(self.buffer.as_slice());
    }

    /// First half consumed by DMA.
    #[inline]
    pub fn on_half_transfer(&mut self) {
        self.step(Half::First);
    }

    /// Second half consumed by DMA.
    #[inline]
    pub fn on_transfer_complete(&mut self) {
        self.step(Half::Second);
    }

    /// Run one encoder step against `half`.
    pub fn step(&mut self, half: Half) {
        self.encoder
            .step(&mut self.store, self.table, self.buffer.half_mut(half));
    }

    pub fn set_value(&mut self, index: usize, channel: ColorChannel, value: u8) -> Result<()> {
        self.store
            .set_value(index, channel, value)
            .inspect_err(log_rejected)
    }

    pub fn set_values(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        self.store
            .set_values(index, r, g, b)
            .inspect_err(log_rejected)
    }

    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.set_values(index, color.r, color.g, color.b)
    }

    /// Set one channel of the LED at column and row.
    pub fn set_grid_value(
        &mut self,
        layout: &GridLayout,
        col: u16,
        row: u16,
        channel: ColorChannel,
        value: u8,
    ) -> Result<()> {
        let index = grid_index(layout, col, row)?;
        self.set_value(index, channel, value)
    }

    /// Set one LED addressed by column and row.
    pub fn set_grid_values(
        &mut self,
        layout: &GridLayout,
        col: u16,
        row: u16,
        r: u8,
        g: u8,
        b: u8,
    ) -> Result<()> {
        let index = grid_index(layout, col, row)?;
        self.set_values(index, r, g, b)
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn led(&self, index: usize) -> Option<Rgb> {
        self.store.led(index)
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn state(&self) -> EncoderState {
        self.encoder.state()
    }

    pub fn stats(&self) -> EncoderStats {
        self.encoder.stats()
    }

    pub fn encoder(&self) -> &FrameEncoder {
        &self.encoder
    }

    /// Read-only view of what DMA is streaming.
    pub fn buffer(&self) -> &DoubleBuffer {
        &self.buffer
    }

    pub fn table(&self) -> &'a ColorTable {
        self.table
    }
}

impl<const MAX_LEDS: usize> SmartLedsWrite for LedStrip<'_, MAX_LEDS> {
    type Error = Error;
    type Color = Rgb;

    /// Write colors from LED 0 onward; the frame goes out after the next latch.
    fn write<T, I>(&mut self, iterator: T) -> core::result::Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.store.write_from(iterator).inspect_err(log_rejected)
    }
}

fn grid_index(layout: &GridLayout, col: u16, row: u16) -> Result<usize> {
    let index = layout.index(col, row).ok_or(Error::OutOfRange {
        index: layout.unchecked_index(col, row),
        len: layout.len(),
    });
    index.inspect_err(log_rejected)
}

#[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
fn log_rejected(err: &Error) {
    #[cfg(feature = "esp32-log")]
    println!("[LedStrip] rejected: {}", err);
}
