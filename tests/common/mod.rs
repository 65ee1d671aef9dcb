#![allow(dead_code)]

use myrtio_ws2812_dma::{
    ColorTable, CompareValue, EncoderState, Half, LedStrip, PwmDmaOutput, PwmTiming,
};

pub static TABLE: ColorTable = ColorTable::build(PwmTiming::DEFAULT);

/// Records what the strip hands to the peripheral.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub starts: usize,
    pub buffer_len: usize,
    pub all_zero: bool,
}

impl PwmDmaOutput for RecordingOutput {
    fn start_continuous(&mut self, buffer: &[CompareValue]) {
        self.starts += 1;
        self.buffer_len = buffer.len();
        self.all_zero = buffer.iter().all(|&value| value == 0);
    }
}

/// Drives a strip the way the DMA interrupts would: halves strictly alternate.
pub struct Dma {
    next: Half,
}

impl Dma {
    pub fn new() -> Self {
        Self { next: Half::First }
    }

    /// Fire the next completion interrupt and return the half it released.
    pub fn step<const N: usize>(&mut self, strip: &mut LedStrip<'_, N>) -> Half {
        let half = self.next;
        match half {
            Half::First => strip.on_half_transfer(),
            Half::Second => strip.on_transfer_complete(),
        }
        self.next = half.other();
        half
    }

    pub fn steps<const N: usize>(&mut self, strip: &mut LedStrip<'_, N>, count: usize) {
        for _ in 0..count {
            self.step(strip);
        }
    }

    /// Step until the encoder leaves RESET; returns the steps taken.
    pub fn finish_reset<const N: usize>(&mut self, strip: &mut LedStrip<'_, N>) -> usize {
        let mut taken = 0;
        while strip.state() == EncoderState::Reset {
            self.step(strip);
            taken += 1;
            assert!(taken < 1000, "encoder stuck in RESET");
        }
        taken
    }
}

/// Expected half-buffer contents for one LED, channels in wire order.
pub fn encoded(table: &ColorTable, channels: [u8; 3]) -> [CompareValue; 24] {
    let mut expected = [0; 24];
    for (bits, value) in expected.chunks_exact_mut(8).zip(channels) {
        bits.copy_from_slice(table.lookup(value));
    }
    expected
}
