//! Clickable red/blue blocks generated on the Mondrian accent lines.
//!
//! The block field is the collaborator between pointer input and the
//! Cluster Spawner: a press resolves to at most one block, which is
//! removed and handed over as a spawn region in a single operation
//! (`take_at`), so the core never sees block storage.

use rand::Rng;

use crate::grain::Rgb;
use crate::layout::{BLUE, H_LINES, RED, V_LINES};
use crate::Region;

/// Longest block edge, exclusive (`1..MAX_EXTENT` cells).
const MAX_EXTENT: i32 = 4;

/// Smallest lattice `generate` accepts per axis, so every bar fits
/// with room to place it. `Universe::try_new` rejects anything smaller
/// as a configuration error.
pub const MIN_LATTICE: usize = MAX_EXTENT as usize;

/// A clickable block: footprint plus the color it is drawn with. The
/// color is a display tag only; the sand it spawns draws fresh ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub region: Region,
    pub color: Rgb,
}

impl Block {
    /// Half-open containment: `[col, col + w) × [row, row + h)`.
    #[must_use]
    pub fn contains(&self, mx: i32, my: i32) -> bool {
        let r = self.region;
        mx >= r.col && mx < r.col + r.w && my >= r.row && my < r.row + r.h
    }
}

/// The mutable collection of clickable blocks.
#[derive(Debug, Default)]
pub struct BlockField {
    blocks: Vec<Block>,
}

impl BlockField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field with `count` fresh blocks inside a
    /// `cols × rows` lattice. Each block is a 1-cell-thick bar, either
    /// vertical on a random `V_LINES` column or horizontal on a random
    /// `H_LINES` row, colored red or blue at random. Line positions
    /// past the lattice edge are ignored, so narrow grids still place
    /// every block on a line they actually contain.
    ///
    /// The lattice must span at least [`MIN_LATTICE`] cells each way;
    /// `Universe::try_new` enforces that before blocks exist.
    pub fn generate(&mut self, count: usize, cols: usize, rows: usize, rng: &mut impl Rng) {
        debug_assert!(cols >= MIN_LATTICE && rows >= MIN_LATTICE);
        self.blocks.clear();
        let v_lines: Vec<i32> = V_LINES.iter().copied().filter(|&c| c < cols as i32).collect();
        let h_lines: Vec<i32> = H_LINES.iter().copied().filter(|&r| r < rows as i32).collect();
        for _ in 0..count {
            let color = if rng.gen_bool(0.5) { RED } else { BLUE };
            let region = if rng.gen_bool(0.5) {
                let col = v_lines[rng.gen_range(0..v_lines.len())];
                let h = rng.gen_range(1..MAX_EXTENT);
                let row = rng.gen_range(0..rows as i32 - h);
                Region { col, row, w: 1, h }
            } else {
                let row = h_lines[rng.gen_range(0..h_lines.len())];
                let w = rng.gen_range(1..MAX_EXTENT);
                let col = rng.gen_range(0..cols as i32 - w);
                Region { col, row, w, h: 1 }
            };
            self.blocks.push(Block { region, color });
        }
    }

    /// Atomic find-and-remove: the newest block containing the point
    /// is taken out of the field and returned, or `None` on a miss.
    pub fn take_at(&mut self, mx: i32, my: i32) -> Option<Block> {
        let idx = self.blocks.iter().rposition(|b| b.contains(mx, my))?;
        Some(self.blocks.remove(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a BlockField {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
