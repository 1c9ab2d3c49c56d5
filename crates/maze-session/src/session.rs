//! The generate-then-solve state machine.
//!
//! A [`Session`] owns its grid and search state outright. The caller owns
//! the clock: each [`Session::step`] performs exactly one unit of work,
//! either the whole carving pass or a single A* expansion.

use std::fmt;

use maze_core::{MazeGrid, Point};
use maze_gen::{CarveStats, FirstChooser, MazeGen, NeighborChooser, RandomChooser};
use maze_paths::{AstarSearch, Membership, SearchNode, SearchStep};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::view::CellView;

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// Grid allocated, not carved yet.
    Building,
    /// Maze carved and the open set seeded with the start cell.
    Ready,
    /// At least one expansion done, target not reached yet.
    Solving,
    /// Target reached; the path is available.
    Solved,
    /// Open set ran dry without reaching the target.
    Exhausted,
}

impl SessionState {
    /// Whether no further step changes anything.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Building => "building",
            Self::Ready => "ready",
            Self::Solving => "solving",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// One maze: its grid, the carving strategy while building, and the search
/// once carved.
pub struct Session {
    state: SessionState,
    grid: MazeGrid,
    start: Point,
    target: Point,
    seed: Option<u64>,
    chooser: Box<dyn NeighborChooser>,
    search: Option<AstarSearch>,
    carve_stats: CarveStats,
    ticks: usize,
}

impl Session {
    /// Build a `rows × cols` maze with a random seed and seed the solver.
    ///
    /// The returned session is [`SessionState::Ready`].
    pub fn initialize(rows: i32, cols: i32) -> Result<Self, SessionError> {
        Self::with_config(&SessionConfig::default().with_size(rows, cols))
    }

    /// Build and carve a maze from `config`. The session is returned
    /// [`SessionState::Ready`].
    pub fn with_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let mut session = Self::building(config)?;
        session.step();
        Ok(session)
    }

    /// Build and carve a maze, picking neighbours with `chooser` instead of
    /// a seeded RNG.
    pub fn with_chooser<C>(config: &SessionConfig, chooser: C) -> Result<Self, SessionError>
    where
        C: NeighborChooser + 'static,
    {
        let mut session = Self::building_with_chooser(config, chooser)?;
        session.step();
        Ok(session)
    }

    /// Allocate the grid but leave carving to the first [`step`](Self::step).
    pub fn building(config: &SessionConfig) -> Result<Self, SessionError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let chooser = RandomChooser(StdRng::seed_from_u64(seed));
        let mut session = Self::building_with_chooser(config, chooser)?;
        session.seed = Some(seed);
        Ok(session)
    }

    /// Like [`building`](Self::building), carving with `chooser`.
    pub fn building_with_chooser<C>(
        config: &SessionConfig,
        chooser: C,
    ) -> Result<Self, SessionError>
    where
        C: NeighborChooser + 'static,
    {
        let (start, target) = config.endpoints()?;
        Ok(Self {
            state: SessionState::Building,
            grid: MazeGrid::new(config.rows, config.cols),
            start,
            target,
            seed: None,
            chooser: Box::new(chooser),
            search: None,
            carve_stats: CarveStats::default(),
            ticks: 0,
        })
    }

    /// Solve an already carved grid. The session starts
    /// [`SessionState::Ready`].
    pub fn from_grid(grid: MazeGrid, start: Point, target: Point) -> Result<Self, SessionError> {
        if grid.is_empty() {
            return Err(SessionError::InvalidDimensions {
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        let search = AstarSearch::new(&grid, grid.bounds(), start, target).ok_or_else(|| {
            let bad = if grid.contains(start) { target } else { start };
            SessionError::InvalidEndpoint(bad)
        })?;
        Ok(Self {
            state: SessionState::Ready,
            grid,
            start,
            target,
            seed: None,
            chooser: Box::new(FirstChooser),
            search: Some(search),
            carve_stats: CarveStats::default(),
            ticks: 0,
        })
    }

    /// Advance by one unit of work and return the resulting state.
    ///
    /// Does nothing once the session is terminal.
    pub fn step(&mut self) -> SessionState {
        match self.state {
            SessionState::Building => self.generate(),
            SessionState::Ready | SessionState::Solving => self.expand(),
            SessionState::Solved | SessionState::Exhausted => return self.state,
        }
        self.ticks += 1;
        self.state
    }

    /// Step until terminal, or until `max_ticks` steps have been taken in
    /// this call.
    pub fn run_to_end(&mut self, max_ticks: Option<usize>) -> SessionState {
        let mut taken = 0;
        while !self.state.is_terminal() && max_ticks.is_none_or(|m| taken < m) {
            self.step();
            taken += 1;
        }
        self.state
    }

    fn generate(&mut self) {
        let grid = std::mem::replace(&mut self.grid, MazeGrid::new(0, 0));
        let mut mg = MazeGen::with_grid(grid, &mut *self.chooser);
        self.carve_stats = mg.carve_backtracker();
        self.grid = mg.into_grid();
        if let Some(seed) = self.seed {
            log::debug!("maze generated from seed {seed}");
        }

        let search = AstarSearch::new(&self.grid, self.grid.bounds(), self.start, self.target);
        debug_assert!(search.is_some(), "endpoints are validated on construction");
        self.search = search;
        self.state = SessionState::Ready;
    }

    fn expand(&mut self) {
        let Some(search) = self.search.as_mut() else {
            self.state = SessionState::Exhausted;
            return;
        };
        self.state = match search.step(&self.grid) {
            SearchStep::Expanded(_) => SessionState::Solving,
            SearchStep::Found => {
                let len = search.path_len().unwrap_or(0);
                log::info!("shortest path length: {len}");
                SessionState::Solved
            }
            SearchStep::Exhausted => {
                log::warn!("no solution found from {} to {}", self.start, self.target);
                SessionState::Exhausted
            }
        };
    }

    /// Snapshot of the cell at `(x, y)` for rendering.
    pub fn cell_view(&self, x: i32, y: i32) -> Result<CellView, SessionError> {
        let p = Point::new(x, y);
        let cell = self.grid.at(p).ok_or(SessionError::OutOfBounds(p))?;
        let membership = self.membership(p);
        Ok(CellView {
            walls: cell.walls.to_array(),
            in_open_set: membership == Membership::Open,
            in_closed_set: membership == Membership::Closed,
            visited: cell.visited,
        })
    }

    /// Open/closed membership of `p` in the current search.
    pub fn membership(&self, p: Point) -> Membership {
        self.search
            .as_ref()
            .map_or(Membership::Unseen, |s| s.membership(p))
    }

    /// `g`, `h`, `f` and predecessor of `p`, once it has entered the open
    /// set.
    pub fn search_node(&self, p: Point) -> Option<SearchNode> {
        self.search.as_ref()?.node(p)
    }

    /// The shortest path from start to target, inclusive.
    pub fn reconstruct_path(&self) -> Result<Vec<Point>, SessionError> {
        if self.state != SessionState::Solved {
            return Err(SessionError::PathRequestedBeforeSolved(self.state));
        }
        self.search
            .as_ref()
            .and_then(AstarSearch::path)
            .ok_or(SessionError::PathRequestedBeforeSolved(self.state))
    }

    /// Number of cells on the path once solved.
    pub fn path_len(&self) -> Option<usize> {
        self.search.as_ref()?.path_len()
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Seed the maze was carved from, if it was carved from a seeded RNG.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Steps taken that did work.
    #[inline]
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    #[inline]
    pub fn carve_stats(&self) -> CarveStats {
        self.carve_stats
    }

    /// Cells moved to the closed set so far.
    pub fn expanded(&self) -> usize {
        self.search.as_ref().map_or(0, AstarSearch::closed_len)
    }

    /// Cells currently in the open set.
    pub fn frontier(&self) -> usize {
        self.search.as_ref().map_or(0, AstarSearch::open_len)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("start", &self.start)
            .field("target", &self.target)
            .field("seed", &self.seed)
            .field("ticks", &self.ticks)
            .finish()
    }
}
