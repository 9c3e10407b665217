//! Falling sand core for a Mondrian-style interactive canvas.
//!
//! The grid holds occupant ids (0 = empty, `k` = grain drawn with
//! palette entry `k - 1`). Once per animation frame the host applies
//! any spawn events, runs [`Grid::tick`], then reads the grid back to
//! draw filled cells. All mutation is serialized by the frame loop, so
//! the grid has a single writer by construction.

pub mod api;
pub mod blocks;
pub mod grain;
pub mod layout;
pub mod rules;
pub mod universe;

use grain::{Grain, Palette};
use rand::Rng;

pub use grain::ConfigError;
pub use universe::Universe;

/// Spawn region: a clicked block's footprint, before the one-cell
/// padding the Cluster Spawner adds around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub col: i32,
    pub row: i32,
    pub w: i32,
    pub h: i32,
}

/// 2D occupancy grid. Out-of-bounds reads return empty, writes are
/// no-ops; those bounds checks exist to absorb cluster-spawn overflow
/// at the edges — the tick loop itself gates every access.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Grain>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Grain::EMPTY; width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Grain {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            Grain::EMPTY
        }
    }

    pub fn set(&mut self, x: i32, y: i32, grain: Grain) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize] = grain;
        }
    }

    #[must_use]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_empty()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|g| !g.is_empty()).count()
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans columns last-to-first, and within each column rows
    /// bottom-to-top. The order is load-bearing: a grain that falls
    /// straight down lands in a cell this tick already visited and
    /// moves exactly one row per tick, while a grain that slides into
    /// a not-yet-visited column is picked up again the same tick (one
    /// extra step of free-fall lookahead). Do not flip either loop.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        let w = self.width as i32;
        let h = self.height as i32;

        for x in (0..w).rev() {
            for y in (0..h).rev() {
                let grain = self.get(x, y);
                if grain.is_empty() {
                    continue;
                }
                let mut cursor = api::Cursor::new(self, x, y);
                rules::update_grain(grain, &mut cursor, rng);
            }
        }
    }

    /// Cluster Spawner: fill the region's footprint plus one cell of
    /// padding on all four sides with independently random grains drawn
    /// from the palette. Cells falling outside the grid are silently
    /// skipped — never clamped, which would pile spurious density on
    /// the edges.
    pub fn spawn_cluster(&mut self, region: Region, palette: &Palette, rng: &mut impl Rng) {
        for x in region.col - 1..=region.col + region.w {
            for y in region.row - 1..=region.row + region.h {
                if self.in_bounds(x, y) {
                    self.set(x, y, palette.random_grain(rng));
                }
            }
        }
    }
}
