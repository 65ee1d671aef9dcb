//! Row/column addressing over a linear strip.
//!
//! Panels are a single strip folded into rows. The layout only maps
//! `(col, row)` to the strip index; the encoder never sees coordinates.

/// How rows are chained together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wiring {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Odd rows run right to left
    Serpentine,
}

/// Grid of `cols` × `rows` LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    cols: u16,
    rows: u16,
    wiring: Wiring,
}

impl GridLayout {
    pub const fn new(cols: u16, rows: u16, wiring: Wiring) -> Self {
        Self { cols, rows, wiring }
    }

    pub const fn row_major(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows, Wiring::RowMajor)
    }

    pub const fn serpentine(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows, Wiring::Serpentine)
    }

    pub const fn cols(&self) -> u16 {
        self.cols
    }

    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// LED count the strip needs for this grid.
    pub const fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip index for a coordinate, `None` outside the grid.
    pub const fn index(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.unchecked_index(col, row))
    }

    /// Index as if the grid were unbounded; only meaningful for reporting.
    pub(crate) const fn unchecked_index(&self, col: u16, row: u16) -> usize {
        let cols = self.cols as usize;
        let col = col as usize;
        let row = row as usize;
        let offset = match self.wiring {
            Wiring::Serpentine if row % 2 == 1 && col < cols => cols - 1 - col,
            _ => col,
        };
        row * cols + offset
    }

    /// Inverse of [`GridLayout::index`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn coordinates(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.len() {
            return None;
        }
        let cols = self.cols as usize;
        let row = index / cols;
        let offset = index % cols;
        let col = match self.wiring {
            Wiring::Serpentine if row % 2 == 1 => cols - 1 - offset,
            _ => offset,
        };
        Some((col as u16, row as u16))
    }
}
