//! **tilepath-core**: geometry shared by the tilepath crates.
//!
//! A [`Point`] names a tile, a [`Range`] names a half-open rectangle of
//! tiles. Map collaborators receive single-tile ranges when asked whether
//! a tile can be entered.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
