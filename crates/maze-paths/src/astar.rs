//! Incremental A* search.
//!
//! [`AstarSearch`] performs one node expansion per call to
//! [`step`](AstarSearch::step), so a driver can interleave the search with
//! rendering. The open list is kept in insertion order and scanned linearly:
//! among several nodes with the lowest `f`, the one inserted first wins.

use maze_core::{Point, Range};

use crate::traits::AstarPather;

/// Sentinel parent handle for the start node.
pub const NO_PARENT: usize = usize::MAX;

/// Set membership of a cell during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Membership {
    /// Never reached.
    #[default]
    Unseen,
    /// On the frontier.
    Open,
    /// Expanded; its cost is final.
    Closed,
}

/// Outcome of a single [`AstarSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// The given cell was moved to the closed set and its neighbours relaxed.
    Expanded(Point),
    /// The target was selected from the open set.
    Found,
    /// The open set is empty; the target cannot be reached.
    Exhausted,
}

/// Progress of a whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    Running,
    Found,
    Exhausted,
}

/// Cost bookkeeping for a cell that has entered the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// Cost from the start.
    pub g: i32,
    /// Heuristic estimate to the target.
    pub h: i32,
    /// `g + h`.
    pub f: i32,
    /// Predecessor on the best known path, `None` for the start.
    pub previous: Option<Point>,
}

#[derive(Clone, Default)]
struct Node {
    g: i32,
    h: i32,
    f: i32,
    parent: usize,
    membership: Membership,
}

/// A* search state that advances one expansion at a time.
pub struct AstarSearch {
    rng: Range,
    width: usize,
    from: Point,
    to: Point,
    goal: usize,
    nodes: Vec<Node>,
    open: Vec<usize>,
    closed: usize,
    status: SearchStatus,
    nbuf: Vec<Point>,
}

impl AstarSearch {
    /// Start a search from `from` to `to` over the cells of `rng`.
    ///
    /// The open set is seeded with `from`. Returns `None` if either endpoint
    /// lies outside `rng`.
    pub fn new<P: AstarPather>(pather: &P, rng: Range, from: Point, to: Point) -> Option<Self> {
        if !rng.contains(from) || !rng.contains(to) {
            return None;
        }
        let mut search = Self {
            rng,
            width: rng.width() as usize,
            from,
            to,
            goal: 0,
            nodes: vec![Node::default(); rng.len()],
            open: Vec::new(),
            closed: 0,
            status: SearchStatus::Running,
            nbuf: Vec::with_capacity(4),
        };
        search.goal = search.idx(to)?;
        let start = search.idx(from)?;
        let h = pather.estimate(from, to);
        search.nodes[start] = Node {
            g: 0,
            h,
            f: h,
            parent: NO_PARENT,
            membership: Membership::Open,
        };
        search.open.push(start);
        Some(search)
    }

    /// Perform one expansion.
    ///
    /// Once the search has finished, further calls return the same terminal
    /// result without touching any state.
    pub fn step<P: AstarPather>(&mut self, pather: &P) -> SearchStep {
        match self.status {
            SearchStatus::Found => return SearchStep::Found,
            SearchStatus::Exhausted => return SearchStep::Exhausted,
            SearchStatus::Running => {}
        }

        let Some(winner) = self.best_open() else {
            self.status = SearchStatus::Exhausted;
            return SearchStep::Exhausted;
        };

        let ci = self.open[winner];
        if ci == self.goal {
            self.status = SearchStatus::Found;
            return SearchStep::Found;
        }

        self.open.remove(winner);
        self.nodes[ci].membership = Membership::Closed;
        self.closed += 1;

        let current = self.point(ci);
        let current_g = self.nodes[ci].g;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            let tentative_g = current_g + pather.cost(current, np);
            let n = &mut self.nodes[ni];
            match n.membership {
                Membership::Closed => continue,
                Membership::Open if tentative_g >= n.g => continue,
                Membership::Open => {}
                Membership::Unseen => {
                    n.membership = Membership::Open;
                    self.open.push(ni);
                }
            }
            n.g = tentative_g;
            n.h = pather.estimate(np, self.to);
            n.f = n.g + n.h;
            n.parent = ci;
        }

        self.nbuf = nbuf;
        log::trace!("expanded {current}, {} open", self.open.len());
        SearchStep::Expanded(current)
    }

    /// Index into `open` of the entry with the smallest `f`, keeping the
    /// earliest on ties.
    fn best_open(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (i, &ni) in self.open.iter().enumerate() {
            let f = self.nodes[ni].f;
            match best {
                Some((_, bf)) if f >= bf => {}
                _ => best = Some((i, f)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Current progress.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.to
    }

    /// Number of cells on the frontier.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of expanded cells.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed
    }

    /// Open-set members in insertion order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.open.iter().map(|&i| self.point(i))
    }

    /// Set membership of `p`. Points outside the range are `Unseen`.
    pub fn membership(&self, p: Point) -> Membership {
        self.idx(p)
            .map_or(Membership::Unseen, |i| self.nodes[i].membership)
    }

    /// Cost bookkeeping for `p`, or `None` if it never entered the open set.
    pub fn node(&self, p: Point) -> Option<SearchNode> {
        let i = self.idx(p)?;
        let n = &self.nodes[i];
        if n.membership == Membership::Unseen {
            return None;
        }
        Some(SearchNode {
            g: n.g,
            h: n.h,
            f: n.f,
            previous: (n.parent != NO_PARENT).then(|| self.point(n.parent)),
        })
    }

    /// The path found, from start to target inclusive.
    ///
    /// Returns `None` unless the search finished with
    /// [`SearchStatus::Found`].
    pub fn path(&self) -> Option<Vec<Point>> {
        if self.status != SearchStatus::Found {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = self.goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Number of cells on the found path, counting both endpoints.
    pub fn path_len(&self) -> Option<usize> {
        if self.status != SearchStatus::Found {
            return None;
        }
        let mut len = 0;
        let mut ci = self.goal;
        while ci != NO_PARENT {
            len += 1;
            ci = self.nodes[ci].parent;
        }
        Some(len)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use maze_core::MazeGrid;

    /// Open 4-connected field with optional blocked cells.
    struct Field {
        rng: Range,
        blocked: Vec<Point>,
    }

    impl Pather for Field {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for d in [
                Point::new(0, -1),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(-1, 0),
            ] {
                let n = p + d;
                if self.rng.contains(n) && !self.blocked.contains(&n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Field {
        fn cost(&self, _: Point, _: Point) -> i32 {
            1
        }
    }

    impl AstarPather for Field {
        fn estimate(&self, a: Point, b: Point) -> i32 {
            crate::manhattan(a, b)
        }
    }

    /// Explicit weighted edges with a per-point heuristic table (0 when
    /// absent). Neighbours come out in edge order.
    struct Graph {
        edges: Vec<(Point, Point, i32)>,
        h: Vec<(Point, i32)>,
    }

    impl Pather for Graph {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for &(a, b, _) in &self.edges {
                if a == p {
                    buf.push(b);
                } else if b == p {
                    buf.push(a);
                }
            }
        }
    }

    impl WeightedPather for Graph {
        fn cost(&self, from: Point, to: Point) -> i32 {
            self.edges
                .iter()
                .find(|&&(a, b, _)| (a, b) == (from, to) || (a, b) == (to, from))
                .map_or(i32::MAX / 2, |e| e.2)
        }
    }

    impl AstarPather for Graph {
        fn estimate(&self, from: Point, _to: Point) -> i32 {
            self.h
                .iter()
                .find(|e| e.0 == from)
                .map_or(0, |e| e.1)
        }
    }

    fn run<P: AstarPather>(search: &mut AstarSearch, pather: &P) -> SearchStep {
        loop {
            match search.step(pather) {
                SearchStep::Expanded(_) => continue,
                done => return done,
            }
        }
    }

    #[test]
    fn start_is_seeded_open() {
        let f = Field {
            rng: Range::new(0, 0, 5, 5),
            blocked: vec![],
        };
        let s = AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(s.open_len(), 1);
        assert_eq!(s.membership(Point::new(0, 0)), Membership::Open);
        let n = s.node(Point::new(0, 0)).unwrap();
        assert_eq!((n.g, n.h, n.f, n.previous), (0, 8, 8, None));
        assert_eq!(s.node(Point::new(1, 0)), None);
    }

    #[test]
    fn endpoints_out_of_range() {
        let f = Field {
            rng: Range::new(0, 0, 3, 3),
            blocked: vec![],
        };
        assert!(AstarSearch::new(&f, f.rng, Point::new(-1, 0), Point::new(2, 2)).is_none());
        assert!(AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(3, 2)).is_none());
    }

    #[test]
    fn one_expansion_per_step() {
        let f = Field {
            rng: Range::new(0, 0, 3, 3),
            blocked: vec![],
        };
        let mut s = AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(s.step(&f), SearchStep::Expanded(Point::new(0, 0)));
        assert_eq!(s.closed_len(), 1);
        assert_eq!(s.membership(Point::new(0, 0)), Membership::Closed);
        // East then south were appended in neighbour order.
        let open: Vec<_> = s.open_cells().collect();
        assert_eq!(open, vec![Point::new(1, 0), Point::new(0, 1)]);
        let e = s.node(Point::new(1, 0)).unwrap();
        assert_eq!((e.g, e.h, e.f), (1, 3, 4));
        assert_eq!(e.previous, Some(Point::new(0, 0)));
    }

    #[test]
    fn ties_keep_earliest_inserted() {
        let f = Field {
            rng: Range::new(0, 0, 3, 3),
            blocked: vec![],
        };
        let mut s = AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(2, 2)).unwrap();
        s.step(&f);
        // (1,0) and (0,1) both have f = 4; (1,0) was inserted first.
        assert_eq!(s.step(&f), SearchStep::Expanded(Point::new(1, 0)));
    }

    #[test]
    fn cheaper_route_updates_open_node_in_place() {
        let s0 = Point::new(0, 0);
        let a = Point::new(1, 0);
        let b = Point::new(2, 0);
        let t = Point::new(3, 0);
        let c = Point::new(0, 1);
        let g = Graph {
            edges: vec![(s0, b, 5), (s0, a, 1), (s0, c, 3), (a, b, 1), (b, t, 1)],
            h: vec![],
        };
        let mut s = AstarSearch::new(&g, Range::new(0, 0, 4, 2), s0, t).unwrap();

        assert_eq!(s.step(&g), SearchStep::Expanded(s0));
        assert_eq!(s.open_cells().collect::<Vec<_>>(), vec![b, a, c]);
        assert_eq!(s.node(b).unwrap().g, 5);

        // Through `a`, `b` costs 2 instead of 5.
        assert_eq!(s.step(&g), SearchStep::Expanded(a));
        let nb = s.node(b).unwrap();
        assert_eq!((nb.g, nb.f, nb.previous), (2, 2, Some(a)));
        assert_eq!(s.membership(b), Membership::Open);
        assert_eq!(s.open_cells().collect::<Vec<_>>(), vec![b, c]);

        assert_eq!(s.step(&g), SearchStep::Expanded(b));
        assert_eq!(run(&mut s, &g), SearchStep::Found);
        assert_eq!(s.path().unwrap(), vec![s0, a, b, t]);
    }

    #[test]
    fn ties_ignore_heuristic_and_coordinates() {
        let s0 = Point::new(0, 0);
        let early = Point::new(2, 0);
        let late = Point::new(1, 0);
        let t = Point::new(3, 0);
        // Both end up with f = 4; the later one has the smaller h and the
        // smaller coordinate.
        let g = Graph {
            edges: vec![(s0, early, 1), (s0, late, 3), (early, t, 9), (late, t, 9)],
            h: vec![(early, 3), (late, 1), (s0, 0)],
        };
        let mut s = AstarSearch::new(&g, Range::new(0, 0, 4, 1), s0, t).unwrap();
        s.step(&g);
        assert_eq!(s.open_cells().collect::<Vec<_>>(), vec![early, late]);
        assert_eq!(s.node(early).unwrap().f, s.node(late).unwrap().f);
        assert_eq!(s.step(&g), SearchStep::Expanded(early));
    }

    #[test]
    fn finds_shortest_path_around_obstacle() {
        let f = Field {
            rng: Range::new(0, 0, 5, 5),
            blocked: vec![Point::new(2, 0), Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)],
        };
        let from = Point::new(0, 0);
        let to = Point::new(4, 0);
        let mut s = AstarSearch::new(&f, f.rng, from, to).unwrap();
        assert_eq!(run(&mut s, &f), SearchStep::Found);
        let path = s.path().unwrap();
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        // Down 4, across 4, up 4.
        assert_eq!(path.len(), 13);
        assert_eq!(s.path_len(), Some(13));
        for w in path.windows(2) {
            assert_eq!(crate::manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn unreachable_target_exhausts() {
        let f = Field {
            rng: Range::new(0, 0, 3, 3),
            blocked: vec![Point::new(1, 0), Point::new(0, 1)],
        };
        let mut s = AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(s.step(&f), SearchStep::Expanded(Point::new(0, 0)));
        assert_eq!(s.step(&f), SearchStep::Exhausted);
        assert_eq!(s.status(), SearchStatus::Exhausted);
        assert_eq!(s.path(), None);
        assert_eq!(s.step(&f), SearchStep::Exhausted);
    }

    #[test]
    fn start_equals_target() {
        let g = MazeGrid::new(1, 1);
        let p = Point::new(0, 0);
        let mut s = AstarSearch::new(&g, g.bounds(), p, p).unwrap();
        assert_eq!(s.step(&g), SearchStep::Found);
        assert_eq!(s.path(), Some(vec![p]));
        assert_eq!(s.closed_len(), 0);
    }

    #[test]
    fn terminal_steps_leave_state_alone() {
        let f = Field {
            rng: Range::new(0, 0, 4, 4),
            blocked: vec![],
        };
        let mut s = AstarSearch::new(&f, f.rng, Point::new(0, 0), Point::new(3, 3)).unwrap();
        run(&mut s, &f);
        let path = s.path();
        let closed = s.closed_len();
        let open = s.open_len();
        for _ in 0..5 {
            assert_eq!(s.step(&f), SearchStep::Found);
        }
        assert_eq!(s.path(), path);
        assert_eq!(s.closed_len(), closed);
        assert_eq!(s.open_len(), open);
    }

    #[test]
    fn walks_a_carved_corridor() {
        let mut g = MazeGrid::new(3, 1);
        g.carve(Point::new(0, 0), Point::new(1, 0));
        g.carve(Point::new(1, 0), Point::new(2, 0));
        let mut s = AstarSearch::new(&g, g.bounds(), Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(run(&mut s, &g), SearchStep::Found);
        assert_eq!(
            s.path().unwrap(),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_serde() {
        let n = SearchNode {
            g: 3,
            h: 4,
            f: 7,
            previous: Some(Point::new(2, 1)),
        };
        let json = serde_json::to_string(&n).unwrap();
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);

        let m: Membership = serde_json::from_str(&serde_json::to_string(&Membership::Closed).unwrap()).unwrap();
        assert_eq!(m, Membership::Closed);
    }
}
