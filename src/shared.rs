//! Strip shared between foreground code and the DMA interrupts.
//!
//! A `critical_section::Mutex<RefCell<..>>` that can live in a `static`.
//! Client calls and the encoder step each take a short critical section, so
//! an interrupt never sees half of a three-byte update.

use core::cell::RefCell;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use critical_section::Mutex;

use crate::PwmDmaOutput;
use crate::color_table::ColorTable;
use crate::error::{Error, Result};
use crate::store::ColorChannel;
use crate::strip::{LedStrip, StripConfig};

/// Strip slot that is filled once by [`SharedLedStrip::init`].
pub struct SharedLedStrip<'a, const MAX_LEDS: usize> {
    inner: Mutex<RefCell<Option<LedStrip<'a, MAX_LEDS>>>>,
}

impl<'a, const MAX_LEDS: usize> SharedLedStrip<'a, MAX_LEDS> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Size the strip, place it in the slot and start the output.
    ///
    /// The output is only started when the store could be sized.
    pub fn init<O: PwmDmaOutput>(
        &self,
        led_count: usize,
        config: &StripConfig,
        table: &'a ColorTable,
        output: &mut O,
    ) -> Result<()> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            if slot.is_some() {
                #[cfg(feature = "esp32-log")]
                println!("[SharedLedStrip.init] already initialized");
                return Err(Error::AlreadyInitialized);
            }
            let strip = slot.insert(LedStrip::new(led_count, config, table)?);
            strip.start(output);
            Ok(())
        })
    }

    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }

    /// Run `f` on the strip inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut LedStrip<'a, MAX_LEDS>) -> R) -> Result<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.as_mut().map(f).ok_or(Error::NotInitialized)
        })
    }

    pub fn set_value(&self, index: usize, channel: ColorChannel, value: u8) -> Result<()> {
        self.with(|strip| strip.set_value(index, channel, value))?
    }

    pub fn set_values(&self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        self.with(|strip| strip.set_values(index, r, g, b))?
    }

    pub fn clear_all(&self) -> Result<()> {
        self.with(LedStrip::clear_all)
    }

    /// Half-transfer interrupt entry point. Does nothing before `init`.
    pub fn on_half_transfer(&self) {
        let _ = self.with(LedStrip::on_half_transfer);
    }

    /// Transfer-complete interrupt entry point. Does nothing before `init`.
    pub fn on_transfer_complete(&self) {
        let _ = self.with(LedStrip::on_transfer_complete);
    }
}

impl<const MAX_LEDS: usize> Default for SharedLedStrip<'_, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
