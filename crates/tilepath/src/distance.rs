use tilepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is both the step cost and the heuristic of the search, diagonal
/// steps included.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points: the fewest 8-connected
/// steps between them on an open grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
