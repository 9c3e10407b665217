//! Relative-offset cursor for the grain update rule.

use crate::grain::Grain;
use crate::Grid;

/// View of the grid centered on the cell being updated.
/// Out-of-bounds reads return `None`, writes are no-ops.
///
/// Writes carry no generation stamp: a grain moved into a cell the
/// traversal has not reached yet is updated again in the same tick,
/// which is the intended free-fall lookahead of the reverse column scan.
#[derive(Debug)]
pub struct Cursor<'a> {
    grid: &'a mut Grid,
    x: i32,
    y: i32,
}

impl<'a> Cursor<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Grain> {
        let (nx, ny) = (self.x + dx, self.y + dy);
        self.grid.in_bounds(nx, ny).then(|| self.grid.get(nx, ny))
    }

    pub fn set(&mut self, dx: i32, dy: i32, grain: Grain) {
        self.grid.set(self.x + dx, self.y + dy, grain);
    }

    pub fn clear(&mut self, dx: i32, dy: i32) {
        self.set(dx, dy, Grain::EMPTY);
    }
}
