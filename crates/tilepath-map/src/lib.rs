//! Terrain grids that plug into [`tilepath::PathFinder`].
//!
//! A [`TileGrid`] stores one [`Terrain`] value per tile. Requests carry a
//! [`TerrainMask`] naming the terrain kinds the mover may enter, which is
//! what the grid checks when the finder asks about a tile.

pub mod ascii;
pub mod grid;
pub mod scatter;

pub use ascii::MapError;
pub use grid::{SWIMMERS, TerrainMask, Terrain, TileGrid, WALKERS};
pub use scatter::scatter;
