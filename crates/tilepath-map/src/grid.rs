//! Terrain cells and the grid holding them.

use tilepath::TileMap;
use tilepath_core::{Point, Range};

/// Terrain kind of a tile.
///
/// Values 0 to 31 can be named in a [`TerrainMask`]; anything higher is
/// never enterable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain(pub u8);

impl Terrain {
    pub const FLOOR: Terrain = Terrain(0);
    pub const WALL: Terrain = Terrain(1);
    pub const WATER: Terrain = Terrain(2);
}

/// Set of terrain kinds a mover may enter, one bit per [`Terrain`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainMask(pub u32);

impl TerrainMask {
    pub const NONE: TerrainMask = TerrainMask(0);

    /// Mask containing exactly `t`.
    pub const fn only(t: Terrain) -> Self {
        if t.0 < 32 { Self(1 << t.0) } else { Self::NONE }
    }

    /// This mask with `t` added.
    pub const fn with(self, t: Terrain) -> Self {
        Self(self.0 | Self::only(t).0)
    }

    pub const fn contains(self, t: Terrain) -> bool {
        t.0 < 32 && self.0 & (1 << t.0) != 0
    }
}

/// Movers restricted to dry floor.
pub const WALKERS: TerrainMask = TerrainMask::only(Terrain::FLOOR);

/// Movers that cross floor and water alike.
pub const SWIMMERS: TerrainMask = TerrainMask::only(Terrain::FLOOR).with(Terrain::WATER);

/// A fixed-size grid of [`Terrain`] anchored at the origin.
///
/// Tiles can be changed at any time between finder ticks, which is how
/// doors and other dynamic obstacles are modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Terrain>,
    width: i32,
    height: i32,
}

// Multiplied in usize: two in-range i32 sides can overflow i32.
fn cell_count(width: i32, height: i32) -> usize {
    (width.max(0) as usize) * (height.max(0) as usize)
}

impl TileGrid {
    /// Create a grid filled with [`Terrain::FLOOR`].
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![Terrain::FLOOR; cell_count(width, height)],
            width,
            height,
        }
    }

    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<Terrain>) -> Self {
        debug_assert_eq!(cells.len(), cell_count(width, height));
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// Terrain at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the terrain at `p`. Does nothing outside the grid.
    pub fn set(&mut self, p: Point, t: Terrain) {
        if let Some(i) = self.index(p) {
            self.cells[i] = t;
        }
    }

    /// Set every tile of `rng` that lies inside the grid.
    pub fn fill(&mut self, rng: Range, t: Terrain) {
        for p in rng.intersect(self.bounds()) {
            self.set(p, t);
        }
    }

    /// Number of tiles holding `t`.
    pub fn count(&self, t: Terrain) -> usize {
        self.cells.iter().filter(|&&c| c == t).count()
    }

    /// `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Whether a mover with `mask` may stand on `p`.
    pub fn passable(&self, p: Point, mask: TerrainMask) -> bool {
        self.at(p).is_some_and(|t| mask.contains(t))
    }
}

impl TileMap for TileGrid {
    type Conditions = TerrainMask;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn accept_rect(&self, rect: Range, mask: &TerrainMask) -> bool {
        !rect.is_empty() && rect.iter().all(|p| self.passable(p, *mask))
    }
}
