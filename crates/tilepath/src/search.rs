use tilepath_core::Point;

use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::nodes::{NO_PARENT, NodeGrid};
use crate::traits::TileMap;

/// State of one search attempt, expanded a step at a time.
///
/// The buffers are kept between attempts so a warmed-up finder does not
/// allocate per search, apart from the delivered path itself.
#[derive(Debug, Default)]
pub(crate) struct Session {
    start: usize,
    goal: usize,
    goal_point: Point,
    open: Vec<usize>,
    result: Vec<Point>,
    wrap: bool,
}

impl Session {
    /// Reset the session for a search from `start` to `end`, opening a new
    /// node generation.
    ///
    /// In wrap mode both endpoints are folded onto the map first. In bounded
    /// mode an endpoint outside the map leaves the open set empty, so the
    /// attempt finishes on the next step with no route.
    pub(crate) fn begin(&mut self, grid: &mut NodeGrid, start: Point, end: Point, wrap: bool) {
        grid.next_generation();
        self.open.clear();
        self.result = Vec::new();
        self.wrap = wrap;

        let (start, end) = if wrap {
            let (w, h) = (grid.width(), grid.height());
            (start.wrap_in(w, h), end.wrap_in(w, h))
        } else {
            (start, end)
        };

        let (Some(si), Some(gi)) = (grid.idx(start), grid.idx(end)) else {
            log::debug!("bounded search {start} -> {end} leaves the map");
            self.start = NO_PARENT;
            self.goal = NO_PARENT;
            return;
        };

        self.start = si;
        self.goal = gi;
        self.goal_point = end;
        grid.tile(si);
        grid.mark_queued(si);
        self.open.push(si);
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    #[inline]
    pub(crate) fn wrap(&self) -> bool {
        self.wrap
    }

    /// Route found so far, goal first and start excluded.
    #[cfg(test)]
    pub(crate) fn result(&self) -> &[Point] {
        &self.result
    }

    pub(crate) fn take_result(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.result)
    }

    /// Pop the cheapest open node and expand it. No-op once exhausted.
    ///
    /// Popping the goal records the route by walking parent links back to
    /// the start. The open set keeps draining afterwards; the attempt only
    /// ends when it is empty.
    pub(crate) fn step<M: TileMap>(
        &mut self,
        grid: &mut NodeGrid,
        neighbors: &mut Neighbors,
        map: &M,
        conditions: &M::Conditions,
    ) {
        let Some(ci) = self.pop_cheapest(grid) else {
            return;
        };

        if ci == self.goal {
            self.result.clear();
            let mut i = ci;
            while i != self.start && i != NO_PARENT {
                self.result.push(grid.point(i));
                i = grid.get(i).parent;
            }
            return;
        }

        let cp = grid.point(ci);
        let current_g = grid.tile(ci).g;

        // Last enumerated neighbor is queued first.
        for &np in neighbors.collect(cp, self.wrap, map, conditions).iter().rev() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if grid.is_queued(ni) {
                continue;
            }
            grid.mark_queued(ni);

            let g = manhattan(np, cp) + current_g;
            let n = grid.tile(ni);
            n.parent = ci;
            n.g = g;
            n.f = manhattan(np, self.goal_point) + g;
            self.open.push(ni);
        }
    }

    /// Remove the open entry with the lowest `f`.
    ///
    /// Linear scan in insertion order: only a strictly lower `f` displaces
    /// the current pick, so the earliest of several equal entries wins.
    /// Removal keeps the remaining entries in order.
    fn pop_cheapest(&mut self, grid: &NodeGrid) -> Option<usize> {
        let first = *self.open.first()?;
        let mut best = 0;
        let mut best_f = grid.f(first);
        for (i, &idx) in self.open.iter().enumerate().skip(1) {
            let f = grid.f(idx);
            if f < best_f {
                best = i;
                best_f = f;
            }
        }
        Some(self.open.remove(best))
    }
}
