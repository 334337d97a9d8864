//! Board module - the addressable grid shared by every game
//!
//! Cells are stored in a flat row-major vector (`y * width + x`). Dimensions
//! are fixed at construction. Reads outside the grid return [`EMPTY`] and
//! writes outside the grid are ignored, so rotation and translation math may
//! query arbitrary coordinates without checking bounds first.

use crate::types::EMPTY;

/// A `width x height` grid of cell values (`0` = empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    width: u32,
    height: u32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u32>,
}

impl BoardState {
    /// Create an empty board
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![EMPTY; len],
        }
    }

    /// Wrap an already-decoded row-major cell vector.
    ///
    /// Returns None when the vector length disagrees with the dimensions.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u32>) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        if cells.len() != len {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get cell at (x, y); [`EMPTY`] when out of bounds
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.index(x, y).map_or(EMPTY, |idx| self.cells[idx])
    }

    /// Set cell at (x, y); no-op when out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: u32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = value;
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) != EMPTY
    }

    /// Check if every cell of row `y` is occupied
    pub fn is_row_full(&self, y: u32) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|&cell| cell != EMPTY)
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }
}
