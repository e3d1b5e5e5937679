use crate::Color;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Side length of a face grid.
pub const GRID_SIZE: usize = 3;

/// Number of facelets on one face.
pub const FACE_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// A full 3×3 grid of facelet colors, row-major, row 0 is the visual top.
///
/// There is no way to build a partially filled grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorGrid(pub [[Color; GRID_SIZE]; GRID_SIZE]);

impl ColorGrid {
    /// Grid with every facelet set to `color`.
    pub const fn uniform(color: Color) -> Self {
        Self([[color; GRID_SIZE]; GRID_SIZE])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }

    /// Facelets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    pub fn counts(&self) -> ColorCounts {
        let mut counts = ColorCounts::default();
        counts.add_grid(self);
        counts
    }
}

impl Index<(usize, usize)> for ColorGrid {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

/// Per-color facelet tally, indexed by [`Color::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCounts([usize; 6]);

impl ColorCounts {
    pub fn add(&mut self, color: Color) {
        self.0[color.index()] += 1;
    }

    pub fn add_grid(&mut self, grid: &ColorGrid) {
        for c in grid.cells() {
            self.add(c);
        }
    }

    #[inline]
    pub fn get(&self, color: Color) -> usize {
        self.0[color.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(color, count)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
