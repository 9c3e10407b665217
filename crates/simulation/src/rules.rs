//! Movement and annihilation rule for one grain, applied per occupied
//! cell by the tick loop.
//!
//! Strict priority: fall straight down, annihilate on same-id contact
//! below, then try a single random diagonal. Same-id contact destroys
//! both grains; the test is id equality, never displayed color.

use rand::Rng;

use crate::api::Cursor;
use crate::grain::Grain;

pub fn update_grain(grain: Grain, api: &mut Cursor<'_>, rng: &mut impl Rng) {
    if let Some(below) = api.get(0, 1) {
        if below.is_empty() {
            // Fall straight down
            api.clear(0, 0);
            api.set(0, 1, grain);
            return;
        }
        if below == grain {
            // Same id on contact: both grains vanish
            api.clear(0, 0);
            api.clear(0, 1);
            return;
        }
    }

    // Blocked below (or resting on the bottom row): pick one diagonal
    // at random. A blocked or out-of-bounds target means the grain
    // stays put this tick; the other diagonal is not consulted.
    let dx = if rng.gen_bool(0.5) { -1 } else { 1 };
    match api.get(dx, 1) {
        Some(diag) if diag == grain => {
            api.clear(0, 0);
            api.clear(dx, 1);
        }
        Some(diag) if diag.is_empty() => {
            api.clear(0, 0);
            api.set(dx, 1, grain);
        }
        _ => {}
    }
}
