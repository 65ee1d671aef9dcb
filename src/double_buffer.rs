//! Circular DMA buffer split into two halves.
//!
//! DMA replays the whole buffer to the compare register forever. After it
//! finishes one half it raises an interrupt and moves on to the other, so
//! the half named by the interrupt is the only one software may write.

use crate::color_table::CompareValue;

/// Compare values in one half: 3 channels of 8 bits for a single LED.
pub const HALF_LEN: usize = 24;

/// Compare values in the whole buffer.
pub const BUFFER_LEN: usize = HALF_LEN * 2;

/// One writable half.
pub type HalfBuffer = [CompareValue; HALF_LEN];

/// Which half the hardware has just finished reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Raised by the half-transfer interrupt
    First,
    /// Raised by the transfer-complete interrupt
    Second,
}

impl Half {
    /// The half the hardware is streaming while this one is written.
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Hardware-visible double buffer. Starts all zero, i.e. a low line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct DoubleBuffer {
    halves: [HalfBuffer; 2],
}

impl DoubleBuffer {
    pub const fn new() -> Self {
        Self {
            halves: [[0; HALF_LEN]; 2],
        }
    }

    /// Writable view of a half.
    #[inline]
    pub fn half_mut(&mut self, half: Half) -> &mut HalfBuffer {
        match half {
            Half::First => &mut self.halves[0],
            Half::Second => &mut self.halves[1],
        }
    }

    pub fn half(&self, half: Half) -> &HalfBuffer {
        match half {
            Half::First => &self.halves[0],
            Half::Second => &self.halves[1],
        }
    }

    /// The whole buffer as DMA sees it, first half then second.
    pub fn as_slice(&self) -> &[CompareValue] {
        self.halves.as_flattened()
    }
}

impl Default for DoubleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
