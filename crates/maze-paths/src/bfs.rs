use std::collections::VecDeque;

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns all reached nodes in visiting order.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, sources: &[Point], max_dist: i32) -> &[PathNode] {
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();

        let mut queue: VecDeque<usize> = VecDeque::new();
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.bfs_map[si] == UNREACHABLE {
                self.bfs_map[si] = 0;
                queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let nd = self.bfs_map[ci] + 1;
            if nd > max_dist {
                continue;
            }
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                match self.idx(np) {
                    Some(ni) if self.bfs_map[ni] == UNREACHABLE => {
                        self.bfs_map[ni] = nd;
                        queue.push_back(ni);
                        self.bfs_results.push(PathNode { pos: np, cost: nd });
                    }
                    _ => {}
                }
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// BFS distance at `p` from the last [`bfs_map`](Self::bfs_map) call.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached.
    pub fn bfs_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.bfs_map[i])
    }
}
