//! Per-LED color values and the dirty flag.
//!
//! The store is a fixed-capacity arena sized once at construction. Every
//! mutator checks its bounds before writing and only then marks the store
//! dirty, so the encoder never sees an index past the end.
//!
//! Values are kept twice. The encoder reads the front copy, client calls
//! write the back copy, and the two are flipped when the encoder picks up a
//! pending frame. A pass on the wire therefore never mixes two frames.

use heapless::Vec;

use crate::Rgb;
use crate::error::{Error, Result};

/// One of the three color channels of an LED package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

/// Owned LED values with a fixed length.
#[derive(Debug, Clone)]
pub struct LedStore<const MAX_LEDS: usize> {
    frames: [Vec<Rgb, MAX_LEDS>; 2],
    front: usize,
    // back still holds the frame before the last flip
    back_stale: bool,
    dirty: bool,
}

impl<const MAX_LEDS: usize> LedStore<MAX_LEDS> {
    /// Size the store for `led_count` LEDs, all off and clean.
    pub fn new(led_count: usize) -> Result<Self> {
        let allocation = Error::Allocation {
            requested: led_count,
            capacity: MAX_LEDS,
        };
        if led_count == 0 {
            return Err(allocation);
        }

        let mut leds = Vec::new();
        leds.resize(led_count, Rgb::default())
            .map_err(|()| allocation)?;

        Ok(Self {
            frames: [leds.clone(), leds],
            front: 0,
            back_stale: false,
            dirty: false,
        })
    }

    /// Number of LEDs. Never changes after construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames[self.front].len()
    }

    /// Always false: an empty store cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames[self.front].is_empty()
    }

    /// Set a single channel of one LED.
    pub fn set_value(&mut self, index: usize, channel: ColorChannel, value: u8) -> Result<()> {
        let led = self.led_mut(index)?;
        match channel {
            ColorChannel::Red => led.r = value,
            ColorChannel::Green => led.g = value,
            ColorChannel::Blue => led.b = value,
        }
        self.dirty = true;
        Ok(())
    }

    /// Set all three channels of one LED.
    pub fn set_values(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        *self.led_mut(index)? = Rgb { r, g, b };
        self.dirty = true;
        Ok(())
    }

    /// Turn every LED off.
    pub fn clear_all(&mut self) {
        self.back_mut().fill(Rgb::default());
        self.dirty = true;
    }

    /// Copy `colors` onto the strip starting at LED 0.
    ///
    /// Nothing is written when `colors` is longer than the strip.
    pub fn write_from<T, I>(&mut self, colors: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Rgb>,
    {
        let len = self.len();
        let mut staged = self.latest().clone();
        let mut slots = staged.iter_mut();
        for (index, color) in colors.into_iter().enumerate() {
            let Some(slot) = slots.next() else {
                return Err(Error::OutOfRange { index, len });
            };
            *slot = color.into();
        }
        self.frames[self.front ^ 1] = staged;
        self.back_stale = false;
        self.dirty = true;
        Ok(())
    }

    /// Latest value written to an LED, sent or not.
    pub fn led(&self, index: usize) -> Option<Rgb> {
        self.latest().get(index).copied()
    }

    pub fn leds(&self) -> &[Rgb] {
        self.latest()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Value of an LED in the frame currently on the wire.
    #[inline]
    pub(crate) fn front_led(&self, index: usize) -> Option<Rgb> {
        self.frames[self.front].get(index).copied()
    }

    /// Make the pending frame the front one, if there is one.
    ///
    /// Constant time: only the index flips. The back copy is brought up to
    /// date by the next client write.
    #[inline]
    pub(crate) fn take_frame(&mut self) -> bool {
        if !core::mem::replace(&mut self.dirty, false) {
            return false;
        }
        self.front ^= 1;
        self.back_stale = true;
        true
    }

    fn latest(&self) -> &Vec<Rgb, MAX_LEDS> {
        if self.back_stale {
            &self.frames[self.front]
        } else {
            &self.frames[self.front ^ 1]
        }
    }

    fn back_mut(&mut self) -> &mut Vec<Rgb, MAX_LEDS> {
        let [first, second] = &mut self.frames;
        let (front, back) = if self.front == 0 {
            (first, second)
        } else {
            (second, first)
        };
        if core::mem::take(&mut self.back_stale) {
            back.clone_from(front);
        }
        back
    }

    fn led_mut(&mut self, index: usize) -> Result<&mut Rgb> {
        let len = self.len();
        self.back_mut()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }
}
