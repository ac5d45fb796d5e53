use tilepath_core::{Point, Range};

use crate::traits::TileMap;

/// Reusable neighbor buffer.
///
/// Holds at most eight entries and is overwritten by every call to
/// [`collect`](Self::collect); a returned slice is only meaningful until
/// the next call.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: [Point; 8],
    len: usize,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: [Point::ZERO; 8],
            len: 0,
        }
    }

    /// Enumerate the enterable neighbors of `p`.
    ///
    /// Order is west, east, north, north-east, north-west, south,
    /// south-east, south-west. A diagonal is only offered when both
    /// orthogonal tiles it touches are enterable, so routes never squeeze
    /// between two blocked corners.
    ///
    /// With `wrap` set, coordinates past an edge continue on the opposite
    /// edge and every returned point lies inside the map. Without it,
    /// tiles outside the map are never offered.
    pub fn collect<M: TileMap>(
        &mut self,
        p: Point,
        wrap: bool,
        map: &M,
        conditions: &M::Conditions,
    ) -> &[Point] {
        self.len = 0;
        let (w, h) = (map.width(), map.height());
        let accept = |x: i32, y: i32| map.accept_rect(Range::cell(Point::new(x, y)), conditions);

        let (x1, x2, y1, y2) = if wrap {
            (
                (p.x - 1).rem_euclid(w),
                (p.x + 1).rem_euclid(w),
                (p.y - 1).rem_euclid(h),
                (p.y + 1).rem_euclid(h),
            )
        } else {
            (p.x - 1, p.x + 1, p.y - 1, p.y + 1)
        };
        // Bounds only matter without wrap; wrapped coordinates are always inside.
        let west = (wrap || x1 >= 0) && accept(x1, p.y);
        let east = (wrap || x2 < w) && accept(x2, p.y);
        let north = (wrap || y1 >= 0) && accept(p.x, y1);
        let south = (wrap || y2 < h) && accept(p.x, y2);

        if west {
            self.push(x1, p.y);
        }
        if east {
            self.push(x2, p.y);
        }
        if north {
            self.push(p.x, y1);
            if east && accept(x2, y1) {
                self.push(x2, y1);
            }
            if west && accept(x1, y1) {
                self.push(x1, y1);
            }
        }
        if south {
            self.push(p.x, y2);
            if east && accept(x2, y2) {
                self.push(x2, y2);
            }
            if west && accept(x1, y2) {
                self.push(x1, y2);
            }
        }

        &self.buf[..self.len]
    }

    #[inline]
    fn push(&mut self, x: i32, y: i32) {
        self.buf[self.len] = Point::new(x, y);
        self.len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{from_fn, open, with_conditions};

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn interior_tile_order() {
        let map = open(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.collect(Point::new(1, 1), false, &map, &()).to_vec();
        assert_eq!(
            got,
            pts(&[(0, 1), (2, 1), (1, 0), (2, 0), (0, 0), (1, 2), (2, 2), (0, 2)])
        );
    }

    #[test]
    fn bounded_corner_drops_outside_tiles() {
        let map = open(4, 4);
        let mut nb = Neighbors::new();
        let got = nb.collect(Point::new(0, 0), false, &map, &()).to_vec();
        assert_eq!(got, pts(&[(1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn wrapped_corner_reaches_opposite_edges() {
        let map = open(4, 4);
        let mut nb = Neighbors::new();
        let got = nb.collect(Point::new(0, 0), true, &map, &()).to_vec();
        assert_eq!(
            got,
            pts(&[(3, 0), (1, 0), (0, 3), (1, 3), (3, 3), (0, 1), (1, 1), (3, 1)])
        );
    }

    #[test]
    fn blocked_orthogonal_hides_diagonals() {
        // East of (1, 1) is blocked: neither north-east nor south-east may
        // be offered even though both tiles are open.
        let map = from_fn(3, 3, |p| p != Point::new(2, 1));
        let mut nb = Neighbors::new();
        let got = nb.collect(Point::new(1, 1), false, &map, &()).to_vec();
        assert_eq!(got, pts(&[(0, 1), (1, 0), (0, 0), (1, 2), (0, 2)]));
    }

    #[test]
    fn blocked_diagonal_is_skipped() {
        let map = from_fn(3, 3, |p| p != Point::new(0, 0));
        let mut nb = Neighbors::new();
        let got = nb.collect(Point::new(1, 1), false, &map, &()).to_vec();
        assert_eq!(got.len(), 7);
        assert!(!got.contains(&Point::new(0, 0)));
    }

    #[test]
    fn conditions_reach_the_map() {
        // Conditions name the one column that may not be entered.
        let map = with_conditions(5, 1, |p, banned: &i32| p.x != *banned);
        let mut nb = Neighbors::new();
        assert_eq!(nb.collect(Point::new(2, 0), false, &map, &1).to_vec(), pts(&[(3, 0)]));
        assert_eq!(nb.collect(Point::new(2, 0), false, &map, &3).to_vec(), pts(&[(1, 0)]));
    }

    #[test]
    fn buffer_is_overwritten() {
        let map = open(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(nb.collect(Point::new(1, 1), false, &map, &()).len(), 8);
        assert_eq!(nb.collect(Point::new(2, 2), false, &map, &()).len(), 3);
    }
}
