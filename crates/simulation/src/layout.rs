//! Static Mondrian structure consumed by block generation.
//!
//! The composition is a fixed lattice crossed by yellow accent lines;
//! clickable blocks are generated sitting on those lines. Everything
//! here is immutable layout data, chosen once at startup.

use crate::grain::Rgb;

/// Default lattice extent of the composition, in cells.
pub const COLS: usize = 34;
pub const ROWS: usize = 34;

/// Columns carrying vertical accent lines. Vertical blocks spawn on
/// one of these.
pub const V_LINES: [i32; 7] = [1, 3, 7, 12, 21, 29, 32];

/// Rows carrying horizontal accent lines. Horizontal blocks spawn on
/// one of these.
pub const H_LINES: [i32; 8] = [1, 5, 11, 13, 16, 19, 27, 32];

/// Mondrian red, for clickable blocks.
pub const RED: Rgb = Rgb {
    r: 0xb3,
    g: 0x30,
    b: 0x25,
};

/// Mondrian blue, for clickable blocks.
pub const BLUE: Rgb = Rgb {
    r: 0x2d,
    g: 0x59,
    b: 0xb5,
};
