//! A simulated frame loop feeding route requests to a [`PathFinder`].
//!
//! Units on a wrap-around island map ask for routes; the loop calls
//! [`PathFinder::tick`] once per frame and records when each route
//! arrives.

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, RngExt};
use tilepath::{FinderConfig, FinderError, PathFinder, TickStats};
use tilepath_core::Point;
use tilepath_map::{Terrain, TerrainMask, TileGrid, scatter};

/// Island split by a wall; the sea wraps around the map edges.
pub const ISLAND: &str = "
    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    ~~~~......~~~~~~~~~.....~~~~
    ~~~........~~~~~~~.......~~~
    ~~.....#.......#.........~~~
    ~~.....#.......#..........~~
    ~~.....#########..........~~
    ~~.........................~
    ~~~.......~~~~.....###.....~
    ~~~~......~~~~.....#.......~
    ~~~~~....~~~~~~....#......~~
    ~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

/// A route handed back by the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub label: String,
    pub from: Point,
    pub to: Point,
    /// Goal first, start excluded.
    pub path: Vec<Point>,
    /// Frame on which the callback fired, counting from 1.
    pub frame: usize,
}

/// A map, a finder, and a frame counter.
pub struct FrameLoop {
    pub grid: TileGrid,
    finder: PathFinder<TerrainMask>,
    frame: Rc<RefCell<usize>>,
    deliveries: Rc<RefCell<Vec<Delivery>>>,
    expansions: usize,
}

impl FrameLoop {
    pub fn new(grid: TileGrid, config: FinderConfig) -> Result<Self, FinderError> {
        let finder = PathFinder::with_config(&grid, config)?;
        Ok(Self {
            grid,
            finder,
            frame: Rc::new(RefCell::new(0)),
            deliveries: Rc::new(RefCell::new(Vec::new())),
            expansions: 0,
        })
    }

    /// Queue a route request for a mover restricted to `mask`.
    pub fn request(&mut self, label: &str, from: Point, to: Point, mask: TerrainMask) {
        let label = label.to_string();
        let frame = Rc::clone(&self.frame);
        let deliveries = Rc::clone(&self.deliveries);
        self.finder.submit(from, to, mask, move |path| {
            let frame = *frame.borrow();
            deliveries.borrow_mut().push(Delivery {
                label,
                from,
                to,
                path,
                frame,
            });
        });
    }

    /// Advance one frame.
    pub fn frame(&mut self) -> TickStats {
        *self.frame.borrow_mut() += 1;
        let stats = self.finder.tick(&self.grid);
        self.expansions += stats.expansions;
        stats
    }

    /// Run frames until every request is answered or `max_frames` pass.
    /// Returns the number of frames run.
    pub fn run(&mut self, max_frames: usize) -> usize {
        let mut n = 0;
        while self.finder.is_busy() && n < max_frames {
            self.frame();
            n += 1;
        }
        if self.finder.is_busy() {
            log::warn!("{} requests still queued after {max_frames} frames", self.finder.pending() + 1);
        }
        n
    }

    /// Drop every outstanding request, as when the map is torn down.
    pub fn abandon(&mut self) {
        self.finder.reset();
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.borrow().clone()
    }

    /// Total expansion steps across all frames.
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

/// Pick a random tile that `mask` may stand on.
pub fn random_spot(grid: &TileGrid, rng: &mut impl Rng, mask: TerrainMask) -> Option<Point> {
    let spots: Vec<Point> = grid
        .iter()
        .filter(|&(_, t)| mask.contains(t))
        .map(|(p, _)| p)
        .collect();
    if spots.is_empty() {
        return None;
    }
    Some(spots[rng.random_range(0..spots.len())])
}

/// Sprinkle rocks over an island copy, leaving `keep` clear.
pub fn rocky(grid: &TileGrid, rng: &mut impl Rng, density: f64, keep: &[Point]) -> TileGrid {
    let mut g = grid.clone();
    scatter(&mut g, rng, density, Terrain::WALL, keep);
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilepath_map::{SWIMMERS, WALKERS};

    fn island() -> TileGrid {
        TileGrid::parse(ISLAND).unwrap()
    }

    #[test]
    fn island_parses() {
        let g = island();
        assert_eq!((g.width(), g.height()), (28, 11));
    }

    #[test]
    fn every_request_is_answered_once() {
        let mut fl = FrameLoop::new(island(), FinderConfig::default()).unwrap();
        fl.request("walker", Point::new(5, 2), Point::new(20, 8), WALKERS);
        fl.request("swimmer", Point::new(5, 2), Point::new(20, 8), SWIMMERS);
        fl.request("idle", Point::new(9, 6), Point::new(9, 6), WALKERS);
        let frames = fl.run(1_000);
        let got = fl.deliveries();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].label, "walker");
        assert_eq!(got[2].path, Vec::<Point>::new());
        assert_eq!(got[2].frame, frames);
        assert!(fl.expansions() <= 100 * frames);
        assert!(got.windows(2).all(|w| w[0].frame < w[1].frame));
    }

    #[test]
    fn walkers_stay_on_land() {
        let mut fl = FrameLoop::new(island(), FinderConfig::default()).unwrap();
        fl.request("walker", Point::new(5, 2), Point::new(20, 8), WALKERS);
        fl.run(1_000);
        let d = &fl.deliveries()[0];
        assert!(!d.path.is_empty());
        assert!(d.path.iter().all(|&p| fl.grid.passable(p, WALKERS)));
    }

    #[test]
    fn abandoned_requests_never_arrive() {
        let mut fl = FrameLoop::new(island(), FinderConfig::default()).unwrap();
        fl.request("walker", Point::new(5, 2), Point::new(20, 8), WALKERS);
        fl.frame();
        fl.abandon();
        assert_eq!(fl.run(100), 0);
        assert!(fl.deliveries().is_empty());
    }

    #[test]
    fn random_spot_respects_mask() {
        let g = island();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let p = random_spot(&g, &mut rng, WALKERS).unwrap();
            assert!(g.passable(p, WALKERS));
        }
        assert_eq!(random_spot(&g, &mut rng, TerrainMask::NONE), None);
    }

    #[test]
    fn rocky_keeps_requested_tiles() {
        let g = island();
        let keep = [Point::new(5, 2)];
        let r = rocky(&g, &mut StdRng::seed_from_u64(1), 1.0, &keep);
        assert_eq!(r.at(Point::new(5, 2)), Some(Terrain::FLOOR));
        assert_eq!(r.count(Terrain::WALL), 28 * 11 - 1);
    }
}
