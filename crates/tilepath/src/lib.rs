//! Tick-budgeted pathfinding on tile grids.
//!
//! [`PathFinder`] answers "route from A to B" requests without blocking:
//! requests are queued, and each [`PathFinder::tick`] (typically once per
//! frame) spends a fixed number of expansion steps on the current search.
//! A finished route is handed to the request's callback.
//!
//! Maps may be treated as bounded or as a torus. Every request is first
//! searched on the bounded map; when that fails, or the route it finds is
//! long, the search is repeated with the edges wrapped and the better of
//! the two routes is delivered.
//!
//! The map is supplied by the caller through the [`TileMap`] trait.

mod config;
mod distance;
mod error;
mod finder;
mod neighbors;
mod nodes;
mod search;
#[cfg(test)]
mod testing;
mod traits;

pub use config::{DEFAULT_STEP_BUDGET, FinderConfig};
pub use distance::{chebyshev, manhattan};
pub use error::FinderError;
pub use finder::{PathCallback, PathFinder, TickStats};
pub use neighbors::Neighbors;
pub use traits::TileMap;
