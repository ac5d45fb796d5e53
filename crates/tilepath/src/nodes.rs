use tilepath_core::Point;

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-tile search record, one per map tile for the finder's lifetime.
///
/// `f` and `g` belong to the generation stored in `generation`; a node
/// stamped with an older generation reads as zero-cost. `queued` is the
/// generation in which the node was last pushed on the open set.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) queued: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            queued: 0,
        }
    }
}

/// Node arena covering a `width` x `height` map.
///
/// Nodes are addressed by their linear index `y * width + x`, and parent
/// links are indices into the same arena, so a finished search needs no
/// teardown: bumping the generation makes every node stale at once.
#[derive(Debug)]
pub(crate) struct NodeGrid {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    generation: u32,
}

impl NodeGrid {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a new generation, invalidating every node's transient fields.
    ///
    /// On counter overflow all stamps are cleared so that no stale node can
    /// collide with the restarted counter.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = match self.generation.checked_add(1) {
            Some(g) => g,
            None => {
                log::debug!(
                    "generation counter exhausted, clearing {} nodes",
                    self.nodes.len()
                );
                for n in &mut self.nodes {
                    n.generation = 0;
                    n.queued = 0;
                }
                1
            }
        };
        self.generation
    }

    /// Linear index of `p`, or `None` outside the map.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a linear index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The node at `idx`, with `f`/`g` reset first if it is stale.
    #[inline]
    pub(crate) fn tile(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[idx];
        if node.generation != generation {
            node.f = 0;
            node.g = 0;
            node.generation = generation;
        }
        node
    }

    /// Read-only view of the node at `idx`, valid for the current generation.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Cost estimate `f` of `idx` as seen by the current generation.
    #[inline]
    pub(crate) fn f(&self, idx: usize) -> i32 {
        let n = &self.nodes[idx];
        if n.generation == self.generation { n.f } else { 0 }
    }

    /// Whether `idx` was already pushed on the open set this generation.
    #[inline]
    pub(crate) fn is_queued(&self, idx: usize) -> bool {
        self.nodes[idx].queued == self.generation
    }

    #[inline]
    pub(crate) fn mark_queued(&mut self, idx: usize) {
        self.nodes[idx].queued = self.generation;
    }
}
