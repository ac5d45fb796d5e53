use std::collections::VecDeque;
use std::fmt;

use tilepath_core::Point;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::neighbors::Neighbors;
use crate::nodes::NodeGrid;
use crate::search::Session;
use crate::traits::TileMap;

/// Completion callback: receives the route goal-first, start excluded, or
/// an empty route when the goal cannot be reached.
pub type PathCallback = Box<dyn FnOnce(Vec<Point>)>;

struct Request<C> {
    start: Point,
    end: Point,
    conditions: C,
    callback: PathCallback,
    /// Set once the bounded attempt has been retried on the torus.
    wrap: bool,
}

struct Active<C> {
    request: Request<C>,
    /// Route from the bounded attempt, kept for comparison after a retry.
    baseline: Vec<Point>,
}

/// What a single [`PathFinder::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Expansion steps performed, never more than the step budget.
    pub expansions: usize,
    /// Whether a callback fired during the tick.
    pub delivered: bool,
}

/// Incremental pathfinder spreading each search over many ticks.
///
/// Requests are served one at a time in submission order. Each
/// [`tick`](Self::tick) expands at most `step_budget` nodes of the current
/// search. A search first runs on the bounded map; if it finds nothing, or
/// a route at least [`accept_length`](Self::accept_length) long, it runs
/// once more with the map edges wrapped and the shorter non-empty route of
/// the two is delivered.
///
/// Routes are not guaranteed shortest. Diagonal steps cost the same as
/// the Manhattan distance they cover, and a tile is never re-parented once
/// discovered.
///
/// Callbacks run inside `tick`, so they cannot borrow the finder that
/// invokes them.
///
/// ```
/// use tilepath::{PathFinder, TileMap};
/// use tilepath_core::{Point, Range};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Field;
/// impl TileMap for Field {
///     type Conditions = ();
///     fn width(&self) -> i32 { 8 }
///     fn height(&self) -> i32 { 8 }
///     fn accept_rect(&self, _: Range, _: &()) -> bool { true }
/// }
///
/// let mut finder = PathFinder::new(&Field).unwrap();
/// let route = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&route);
/// finder.submit(Point::new(1, 1), Point::new(3, 2), (), move |path| {
///     *sink.borrow_mut() = Some(path);
/// });
/// while finder.is_busy() {
///     finder.tick(&Field);
/// }
/// assert_eq!(
///     route.borrow().as_deref(),
///     Some(&[Point::new(3, 2), Point::new(2, 2)][..])
/// );
/// ```
pub struct PathFinder<C> {
    config: FinderConfig,
    accept_length: usize,
    grid: NodeGrid,
    neighbors: Neighbors,
    session: Session,
    queue: VecDeque<Request<C>>,
    current: Option<Active<C>>,
}

impl<C> PathFinder<C> {
    /// Build a finder sized for `map` with the default configuration.
    pub fn new<M: TileMap<Conditions = C>>(map: &M) -> Result<Self, FinderError> {
        Self::with_config(map, FinderConfig::default())
    }

    /// Build a finder sized for `map`.
    pub fn with_config<M: TileMap<Conditions = C>>(
        map: &M,
        config: FinderConfig,
    ) -> Result<Self, FinderError> {
        let (width, height) = (map.width(), map.height());
        if width <= 0 || height <= 0 {
            return Err(FinderError::EmptyMap { width, height });
        }
        config.validate()?;
        let accept_length = config.accept_length_for(width, height);
        log::debug!(
            "pathfinder for {width}x{height} map: {} steps per tick, routes under {accept_length} accepted unwrapped",
            config.step_budget
        );
        Ok(Self {
            config,
            accept_length,
            grid: NodeGrid::new(width, height),
            neighbors: Neighbors::new(),
            session: Session::default(),
            queue: VecDeque::new(),
            current: None,
        })
    }

    /// Queue a route request. Returns immediately.
    ///
    /// `callback` fires exactly once from a later [`tick`](Self::tick),
    /// unless [`reset`](Self::reset) discards the request first.
    pub fn submit(
        &mut self,
        start: Point,
        end: Point,
        conditions: C,
        callback: impl FnOnce(Vec<Point>) + 'static,
    ) {
        self.queue.push_back(Request {
            start,
            end,
            conditions,
            callback: Box::new(callback),
            wrap: false,
        });
    }

    /// Advance the current search by at most one step budget.
    ///
    /// Starts the next queued request when no search is active. Does
    /// nothing when idle. `map` must be the map the finder was built for,
    /// or one with the same dimensions.
    pub fn tick<M: TileMap<Conditions = C>>(&mut self, map: &M) -> TickStats {
        debug_assert_eq!(
            (map.width(), map.height()),
            (self.grid.width(), self.grid.height()),
            "map dimensions changed under the pathfinder"
        );
        let mut stats = TickStats::default();

        if self.current.is_none() {
            let Some(request) = self.queue.pop_front() else {
                return stats;
            };
            log::debug!(
                "route {} -> {} started, {} queued behind it",
                request.start,
                request.end,
                self.queue.len()
            );
            if request.start == request.end {
                (request.callback)(Vec::new());
                stats.delivered = true;
                return stats;
            }
            self.session
                .begin(&mut self.grid, request.start, request.end, false);
            self.current = Some(Active {
                request,
                baseline: Vec::new(),
            });
        }

        let Some(active) = self.current.as_ref() else {
            return stats;
        };
        let conditions = &active.request.conditions;
        while stats.expansions < self.config.step_budget && !self.session.is_exhausted() {
            self.session
                .step(&mut self.grid, &mut self.neighbors, map, conditions);
            stats.expansions += 1;
        }
        log::trace!(
            "tick expanded {} nodes (wrap: {})",
            stats.expansions,
            self.session.wrap()
        );

        if self.session.is_exhausted() {
            stats.delivered = self.resolve();
        }
        stats
    }

    /// Drop every queued request and abandon the current search.
    ///
    /// None of the discarded callbacks will ever fire.
    pub fn reset(&mut self) {
        let dropped = self.queue.len() + usize::from(self.current.is_some());
        if dropped > 0 {
            log::debug!("pathfinder reset, {dropped} requests discarded");
        }
        self.queue.clear();
        self.current = None;
    }

    /// Number of requests waiting behind the current search.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether a search is running or requests are waiting.
    pub fn is_busy(&self) -> bool {
        self.current.is_some() || !self.queue.is_empty()
    }

    /// Current node generation. Every search attempt opens a new one.
    pub fn generation(&self) -> u32 {
        self.grid.generation()
    }

    /// Bounded routes shorter than this are delivered without a wrapped
    /// retry.
    pub fn accept_length(&self) -> usize {
        self.accept_length
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Finish the exhausted attempt: deliver, or restart it in wrap mode.
    /// Returns whether a callback fired.
    fn resolve(&mut self) -> bool {
        let Some(mut active) = self.current.take() else {
            return false;
        };
        let result = self.session.take_result();

        if active.request.wrap {
            let baseline = std::mem::take(&mut active.baseline);
            log::debug!(
                "route {} -> {}: bounded {} steps, wrapped {} steps",
                active.request.start,
                active.request.end,
                baseline.len(),
                result.len()
            );
            (active.request.callback)(pick_route(baseline, result));
            return true;
        }

        if !result.is_empty() && result.len() < self.accept_length {
            log::debug!(
                "route {} -> {} delivered unwrapped, {} steps",
                active.request.start,
                active.request.end,
                result.len()
            );
            (active.request.callback)(result);
            return true;
        }

        log::debug!(
            "route {} -> {} retried wrapped (bounded found {} steps)",
            active.request.start,
            active.request.end,
            result.len()
        );
        active.request.wrap = true;
        active.baseline = result;
        self.session.begin(
            &mut self.grid,
            active.request.start,
            active.request.end,
            true,
        );
        self.current = Some(active);
        false
    }
}

impl<C> fmt::Debug for PathFinder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFinder")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("config", &self.config)
            .field("generation", &self.grid.generation())
            .field("pending", &self.queue.len())
            .field("searching", &self.current.is_some())
            .finish()
    }
}

/// Choose between the bounded and the wrapped route.
///
/// A non-empty route beats an empty one; between two routes the bounded
/// one is kept only when strictly shorter.
fn pick_route(bounded: Vec<Point>, wrapped: Vec<Point>) -> Vec<Point> {
    if bounded.is_empty() {
        wrapped
    } else if wrapped.is_empty() || bounded.len() < wrapped.len() {
        bounded
    } else {
        wrapped
    }
}
