//! Frame-loop surface driven by the browser through `wasm-bindgen`.
//!
//! The `Universe` owns the grid, palette, block field, and RNG, and is
//! the single writer: the host calls `pointer_down` from input handlers
//! and `tick` once per animation frame, strictly alternating with
//! rendering, so the renderer always observes a fully applied tick.
//!
//! Rendering stays on the JS side. The renderer reads the grid through
//! `cells_ptr` (one occupant-id byte per cell, row-major) and maps
//! non-zero ids onto the RGB triples behind `palette_ptr`.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::blocks::{BlockField, MIN_LATTICE};
use crate::grain::{ConfigError, Palette};
use crate::Grid;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    palette: Palette,
    blocks: BlockField,
    rng: SmallRng,
}

impl Universe {
    /// Build a universe with a random palette of `palette_len` colors
    /// and `block_count` clickable blocks. The seed makes a run fully
    /// reproducible; the wasm host passes one in rather than relying
    /// on ambient entropy.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a zero-sized grid, a lattice too small to
    /// carry the clickable blocks, or a palette length outside
    /// `1..=255`.
    pub fn try_new(
        width: usize,
        height: usize,
        palette_len: usize,
        block_count: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if width < MIN_LATTICE || height < MIN_LATTICE {
            return Err(ConfigError::GridTooSmall { min: MIN_LATTICE });
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette = Palette::random(palette_len, &mut rng)?;
        let mut blocks = BlockField::new();
        blocks.generate(block_count, width, height, &mut rng);
        Ok(Self {
            grid: Grid::new(width, height),
            palette,
            blocks,
            rng,
        })
    }

    /// Read-only view for renderers running in the same address space.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn blocks(&self) -> &BlockField {
        &self.blocks
    }
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// See [`Universe::try_new`].
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: usize,
        height: usize,
        palette_len: usize,
        block_count: usize,
        seed: u64,
    ) -> Result<Universe, JsError> {
        Self::try_new(width, height, palette_len, block_count, seed).map_err(JsError::from)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.grid.tick(&mut self.rng);
    }

    /// Pointer press resolved to grid coordinates. If a block contains
    /// the point it is removed and its padded footprint is spawned as
    /// sand; returns whether a block was consumed. Runs to completion
    /// between ticks, so the spawn-and-remove pair is atomic from the
    /// simulation's point of view.
    pub fn pointer_down(&mut self, mx: i32, my: i32) -> bool {
        let Some(block) = self.blocks.take_at(mx, my) else {
            return false;
        };
        self.grid
            .spawn_cluster(block.region, &self.palette, &mut self.rng);
        true
    }

    /// Throw away the current blocks and generate `count` fresh ones
    /// (the up/down-arrow behavior of the canvas sketch). Sand already
    /// on the grid keeps falling.
    pub fn regenerate_blocks(&mut self, count: usize) {
        self.blocks
            .generate(count, self.grid.width, self.grid.height, &mut self.rng);
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Pointer to `width * height` occupant-id bytes, row-major. Valid
    /// until the next mutating call.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells.as_ptr().cast()
    }

    #[must_use]
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Pointer to `palette_len` tightly packed RGB byte triples.
    #[must_use]
    pub fn palette_ptr(&self) -> *const u8 {
        self.palette.colors().as_ptr().cast()
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks flattened as `[col, row, w, h, r, g, b]` septets so the
    /// JS renderer can draw them without object marshalling.
    #[must_use]
    pub fn blocks_flat(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.blocks.len() * 7);
        for b in &self.blocks {
            let r = b.region;
            out.extend_from_slice(&[
                r.col,
                r.row,
                r.w,
                r.h,
                i32::from(b.color.r),
                i32::from(b.color.g),
                i32::from(b.color.b),
            ]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn universe(seed: u64) -> Universe {
        Universe::try_new(layout::COLS, layout::ROWS, 5, 5, seed).unwrap()
    }

    #[test]
    fn try_new_rejects_bad_configuration() {
        assert_eq!(
            Universe::try_new(0, 34, 5, 5, 0).unwrap_err(),
            ConfigError::EmptyGrid
        );
        assert_eq!(
            Universe::try_new(34, 0, 5, 5, 0).unwrap_err(),
            ConfigError::EmptyGrid
        );
        assert_eq!(
            Universe::try_new(34, 34, 0, 5, 0).unwrap_err(),
            ConfigError::EmptyPalette
        );
    }

    // A tiny non-zero lattice must come back as a configuration error,
    // never reach block generation.
    #[test]
    fn try_new_rejects_lattices_too_small_for_blocks() {
        assert_eq!(
            Universe::try_new(3, 3, 5, 1, 0).unwrap_err(),
            ConfigError::GridTooSmall { min: MIN_LATTICE }
        );
        assert_eq!(
            Universe::try_new(34, 3, 5, 1, 0).unwrap_err(),
            ConfigError::GridTooSmall { min: MIN_LATTICE }
        );
        assert!(Universe::try_new(MIN_LATTICE, MIN_LATTICE, 5, 1, 0).is_ok());
    }

    #[test]
    fn construction_is_deterministic_per_seed() {
        let a = universe(42);
        let b = universe(42);
        assert_eq!(a.palette(), b.palette());
        assert_eq!(a.blocks_flat(), b.blocks_flat());
    }

    #[test]
    fn pointer_down_on_a_block_spawns_sand_and_removes_it() {
        let mut u = universe(7);
        let flat = u.blocks_flat();
        let (col, row) = (flat[0], flat[1]);
        let blocks_before = u.block_count();

        assert!(u.pointer_down(col, row));

        assert_eq!(u.block_count(), blocks_before - 1);
        assert!(u.grid().occupied() > 0, "cluster lands on the grid");
        // The block's own footprint is inside the padded cluster.
        assert!(!u.grid().is_empty(col, row));
    }

    #[test]
    fn pointer_down_on_empty_canvas_is_a_miss() {
        let mut u = Universe::try_new(34, 34, 5, 0, 7).unwrap();
        assert!(!u.pointer_down(10, 10));
        assert_eq!(u.grid().occupied(), 0);
    }

    #[test]
    fn regenerate_blocks_replaces_the_field() {
        let mut u = universe(3);
        u.regenerate_blocks(9);
        assert_eq!(u.block_count(), 9);
        u.regenerate_blocks(0);
        assert_eq!(u.block_count(), 0);
    }

    #[test]
    fn ticks_only_shed_population_in_pairs() {
        let mut u = universe(11);
        let flat = u.blocks_flat();
        assert!(u.pointer_down(flat[0], flat[1]));

        let before = u.grid().occupied();
        for _ in 0..layout::ROWS {
            u.tick();
        }
        let after = u.grid().occupied();
        assert!(after <= before);
        assert_eq!((before - after) % 2, 0, "losses come only from same-id pairs");
    }

    #[test]
    fn blocks_flat_is_seven_values_per_block() {
        let u = universe(1);
        assert_eq!(u.blocks_flat().len(), u.block_count() * 7);
    }
}
