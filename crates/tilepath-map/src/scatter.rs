//! Random obstacle placement.

use rand::{Rng, RngExt};
use tilepath_core::Point;

use crate::grid::{Terrain, TileGrid};

/// Set each tile to `terrain` with probability `density` (0.0 to 1.0),
/// leaving the points in `keep` untouched.
///
/// Returns the number of tiles changed.
pub fn scatter(
    grid: &mut TileGrid,
    rng: &mut impl Rng,
    density: f64,
    terrain: Terrain,
    keep: &[Point],
) -> usize {
    let mut changed = 0;
    for p in grid.bounds() {
        let roll: f64 = rng.random();
        if roll >= density || keep.contains(&p) {
            continue;
        }
        if grid.at(p) != Some(terrain) {
            grid.set(p, terrain);
            changed += 1;
        }
    }
    changed
}
