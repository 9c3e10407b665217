//! Grain and palette types for the simulation grid.

use std::error::Error;
use std::fmt;

use rand::Rng;

/// One cell's occupant id: `0` is empty, `k > 0` is a grain drawn with
/// palette entry `k - 1`.
///
/// `#[repr(transparent)]` over `u8` so the grid maps directly to the
/// byte buffer handed to the JS renderer — do not add fields.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grain(pub u8);

impl Grain {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Palette entry this grain is drawn with, or `None` for empty.
    #[must_use]
    pub fn palette_index(self) -> Option<usize> {
        (self.0 > 0).then(|| usize::from(self.0) - 1)
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// 3-byte color triple: `#[repr(C)]` so the palette maps directly to
/// the byte buffer handed to the JS renderer.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Ordered, immutable list of grain colors. Occupant id `k` renders as
/// entry `k - 1`, so the length is capped at 255 to keep ids in a byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Validates the color list at construction; the simulation assumes
    /// every non-zero occupant id indexes this palette.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `colors` is empty or holds more than 255 entries.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if colors.len() > usize::from(u8::MAX) {
            return Err(ConfigError::PaletteTooLarge { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Build a palette of `len` bright random colors (each channel in
    /// `50..=255`, as the original canvas sketch draws them).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `len` is 0 or exceeds 255.
    pub fn random(len: usize, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let colors = (0..len)
            .map(|_| Rgb {
                r: rng.gen_range(50..=255),
                g: rng.gen_range(50..=255),
                b: rng.gen_range(50..=255),
            })
            .collect();
        Self::new(colors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color a grain renders with, or `None` for empty or an id past
    /// the end of the palette.
    #[must_use]
    pub fn color_of(&self, grain: Grain) -> Option<Rgb> {
        grain
            .palette_index()
            .and_then(|i| self.colors.get(i).copied())
    }

    /// Draw an occupant id uniformly from `1..=len`. Each call is an
    /// independent draw; cluster cells do not share a color.
    pub fn random_grain(&self, rng: &mut impl Rng) -> Grain {
        Grain(rng.gen_range(1..=self.colors.len() as u8))
    }
}

/// Init-time configuration errors. The simulation itself is total: once
/// a `Palette` and `Grid` exist, no per-tick operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A palette with no entries leaves no valid occupant id to draw.
    EmptyPalette,
    /// Occupant ids are bytes, so at most 255 palette entries.
    PaletteTooLarge { len: usize },
    /// A zero-width or zero-height grid has no cells to simulate.
    EmptyGrid,
    /// The lattice is too small to place the clickable blocks.
    GridTooSmall { min: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "palette must hold at least one color"),
            Self::PaletteTooLarge { len } => {
                write!(f, "palette holds {len} colors but occupant ids cap it at 255")
            }
            Self::EmptyGrid => write!(f, "grid dimensions must be non-zero"),
            Self::GridTooSmall { min } => {
                write!(f, "grid must span at least {min} cells on each axis")
            }
        }
    }
}

impl Error for ConfigError {}
