//! Connected-component labelling.

use maze_core::Point;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Label every cell in the range with a connected-component ID and
    /// return the number of components.
    ///
    /// Two cells share a component if a chain of neighbours (as defined by
    /// `pather`) joins them.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) -> usize {
        self.cc_labels.fill(-1);

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..self.rng.len() {
            if self.cc_labels[start] >= 0 {
                continue;
            }

            // Iterative DFS from `start`.
            self.cc_stack.clear();
            self.cc_stack.push(start);
            self.cc_labels[start] = label;

            while let Some(ci) = self.cc_stack.pop() {
                nbuf.clear();
                pather.neighbors(self.point(ci), &mut nbuf);
                for &np in nbuf.iter() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.cc_labels[ni] < 0 {
                        self.cc_labels[ni] = label;
                        self.cc_stack.push(ni);
                    }
                }
            }

            label += 1;
        }

        self.nbuf = nbuf;
        self.cc_count = label as usize;
        self.cc_count
    }

    /// Number of components found by the last [`cc_map_all`](Self::cc_map_all).
    #[inline]
    pub fn cc_count(&self) -> usize {
        self.cc_count
    }

    /// Component label of `p`, or `None` if it is outside the range or was
    /// not labelled yet.
    pub fn cc_at(&self, p: Point) -> Option<usize> {
        let label = self.cc_labels[self.idx(p)?];
        (label >= 0).then_some(label as usize)
    }
}

#[cfg(test)]
mod tests {
    use maze_core::MazeGrid;

    use super::*;

    #[test]
    fn uncarved_cells_are_isolated() {
        let g = MazeGrid::new(3, 2);
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.cc_map_all(&g), 6);
        assert_ne!(pr.cc_at(Point::new(0, 0)), pr.cc_at(Point::new(1, 0)));
    }

    #[test]
    fn carving_merges_components() {
        let mut g = MazeGrid::new(3, 1);
        g.carve(Point::new(0, 0), Point::new(1, 0));
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.cc_at(Point::new(0, 0)), None);
        assert_eq!(pr.cc_map_all(&g), 2);
        assert_eq!(pr.cc_count(), 2);
        assert_eq!(pr.cc_at(Point::new(0, 0)), pr.cc_at(Point::new(1, 0)));
        assert_ne!(pr.cc_at(Point::new(1, 0)), pr.cc_at(Point::new(2, 0)));
        assert_eq!(pr.cc_at(Point::new(3, 0)), None);
    }
}
