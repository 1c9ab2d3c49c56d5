//! Strategies for picking the next cell while carving.

use maze_core::Point;
use rand::{Rng, RngExt};

/// Picks one of the unvisited neighbours offered by the generator.
pub trait NeighborChooser {
    /// Return an index into `candidates`, which is never empty and is
    /// ordered north, east, south, west.
    fn choose(&mut self, candidates: &[Point]) -> usize;
}

impl<C: NeighborChooser + ?Sized> NeighborChooser for Box<C> {
    fn choose(&mut self, candidates: &[Point]) -> usize {
        (**self).choose(candidates)
    }
}

impl<C: NeighborChooser + ?Sized> NeighborChooser for &mut C {
    fn choose(&mut self, candidates: &[Point]) -> usize {
        (**self).choose(candidates)
    }
}

/// Uniformly random choice.
pub struct RandomChooser<R: Rng>(pub R);

impl<R: Rng> NeighborChooser for RandomChooser<R> {
    fn choose(&mut self, candidates: &[Point]) -> usize {
        self.0.random_range(0..candidates.len())
    }
}

/// Always takes the first candidate, i.e. prefers north, then east, south,
/// west.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl NeighborChooser for FirstChooser {
    fn choose(&mut self, _candidates: &[Point]) -> usize {
        0
    }
}

/// Replays a recorded sequence of choices. Out-of-range entries wrap, and
/// once the sequence runs out the first candidate is taken.
#[derive(Debug, Clone, Default)]
pub struct ReplayChooser {
    choices: Vec<usize>,
    pos: usize,
}

impl ReplayChooser {
    pub fn new(choices: Vec<usize>) -> Self {
        Self { choices, pos: 0 }
    }
}

impl NeighborChooser for ReplayChooser {
    fn choose(&mut self, candidates: &[Point]) -> usize {
        let Some(&c) = self.choices.get(self.pos) else {
            return 0;
        };
        self.pos += 1;
        c % candidates.len()
    }
}

/// Wraps another chooser and records every index it returns.
pub struct Recorder<C: NeighborChooser> {
    inner: C,
    choices: Vec<usize>,
}

impl<C: NeighborChooser> Recorder<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            choices: Vec::new(),
        }
    }

    /// The recorded choices, ready for a [`ReplayChooser`].
    pub fn into_choices(self) -> Vec<usize> {
        self.choices
    }
}

impl<C: NeighborChooser> NeighborChooser for Recorder<C> {
    fn choose(&mut self, candidates: &[Point]) -> usize {
        let c = self.inner.choose(candidates);
        self.choices.push(c);
        c
    }
}
