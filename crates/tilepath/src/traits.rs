use tilepath_core::Range;

/// The map a [`PathFinder`](crate::PathFinder) searches.
///
/// The finder never owns the map: it reads the dimensions once when it is
/// built and borrows the map on every [`tick`](crate::PathFinder::tick).
/// Tile acceptance may change between searches (doors, units standing on
/// tiles) but must stay fixed while a tick runs.
pub trait TileMap {
    /// Opaque token describing who is moving (a unit's movement class, for
    /// instance). Stored with each request and handed back unchanged.
    type Conditions;

    /// Number of tile columns. Must be positive.
    fn width(&self) -> i32;

    /// Number of tile rows. Must be positive.
    fn height(&self) -> i32;

    /// Whether every tile in `rect` can be entered under `conditions`.
    ///
    /// The finder only ever asks about single tiles inside the map.
    fn accept_rect(&self, rect: Range, conditions: &Self::Conditions) -> bool;
}
