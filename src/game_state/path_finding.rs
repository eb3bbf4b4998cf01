//! Shortest-path queries over the wall-constrained movement graph.
//!
//! Breadth-first search is the reference implementation. The A* variants use
//! `h(cell) = min |row - goal_row|`, which never overestimates because walls
//! only lengthen paths, so both families return identical distances. Pawns are
//! not obstacles here; only walls shape the graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::game_state::board::Board;
use crate::game_state::quoridor_types::Cell;

/// Distance to the nearest goal cell plus the first cell stepped onto.
///
/// `next` is `None` when the start cell already lies on a goal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub distance: u32,
    pub next: Option<Cell>,
}

const NO_PARENT: u16 = u16::MAX;

impl Board {
    #[inline]
    fn cell_index(&self, cell: Cell) -> usize {
        usize::from(cell.row) * usize::from(self.size()) + usize::from(cell.col)
    }

    #[inline]
    fn cell_at(&self, index: usize) -> Cell {
        let n = usize::from(self.size());
        Cell::new((index / n) as u8, (index % n) as u8)
    }

    pub fn bfs_dist_to_goal(&self, start: Cell, goal_rows: &[u8]) -> Option<u32> {
        self.bfs_next_step_to_goal(start, goal_rows)
            .map(|step| step.distance)
    }

    pub fn bfs_next_step_to_goal(&self, start: Cell, goal_rows: &[u8]) -> Option<PathStep> {
        if !self.in_bounds(start) {
            return None;
        }
        let cells = usize::from(self.size()).pow(2);
        let mut parent = vec![NO_PARENT; cells];
        let mut dist = vec![u32::MAX; cells];
        let mut queue = VecDeque::with_capacity(cells);

        let start_idx = self.cell_index(start);
        dist[start_idx] = 0;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            let idx = self.cell_index(cell);
            if goal_rows.contains(&cell.row) {
                return Some(PathStep {
                    distance: dist[idx],
                    next: self.first_step(&parent, start_idx, idx),
                });
            }
            let next_dist = dist[idx] + 1;
            self.for_each_neighbor(cell, |next| {
                let n_idx = self.cell_index(next);
                if dist[n_idx] == u32::MAX {
                    dist[n_idx] = next_dist;
                    parent[n_idx] = idx as u16;
                    queue.push_back(next);
                }
            });
        }
        None
    }

    pub fn astar_dist_to_goal(&self, start: Cell, goal_rows: &[u8]) -> Option<u32> {
        self.astar_next_step_to_goal(start, goal_rows)
            .map(|step| step.distance)
    }

    pub fn astar_next_step_to_goal(&self, start: Cell, goal_rows: &[u8]) -> Option<PathStep> {
        if !self.in_bounds(start) || goal_rows.is_empty() {
            return None;
        }
        let heuristic = |cell: Cell| -> u32 {
            goal_rows
                .iter()
                .map(|row| u32::from(cell.row.abs_diff(*row)))
                .min()
                .unwrap_or(0)
        };

        let cells = usize::from(self.size()).pow(2);
        let mut parent = vec![NO_PARENT; cells];
        let mut best_g = vec![u32::MAX; cells];
        let mut closed = vec![false; cells];
        let mut open = BinaryHeap::new();

        let start_idx = self.cell_index(start);
        best_g[start_idx] = 0;
        open.push(Reverse((heuristic(start), 0u32, start_idx)));

        while let Some(Reverse((_, g, idx))) = open.pop() {
            if closed[idx] {
                continue;
            }
            let cell = self.cell_at(idx);
            if goal_rows.contains(&cell.row) {
                return Some(PathStep {
                    distance: g,
                    next: self.first_step(&parent, start_idx, idx),
                });
            }
            closed[idx] = true;
            let next_g = g + 1;
            self.for_each_neighbor(cell, |next| {
                let n_idx = self.cell_index(next);
                if next_g < best_g[n_idx] {
                    best_g[n_idx] = next_g;
                    parent[n_idx] = idx as u16;
                    open.push(Reverse((next_g + heuristic(next), next_g, n_idx)));
                }
            });
        }
        None
    }

    #[inline]
    pub fn path_exists_for(&self, start: Cell, goal_rows: &[u8]) -> bool {
        self.astar_dist_to_goal(start, goal_rows).is_some()
    }

    /// Walk parents back from `goal_idx` to the cell adjacent to the start.
    fn first_step(&self, parent: &[u16], start_idx: usize, goal_idx: usize) -> Option<Cell> {
        if goal_idx == start_idx {
            return None;
        }
        let mut idx = goal_idx;
        while usize::from(parent[idx]) != start_idx {
            idx = usize::from(parent[idx]);
        }
        Some(self.cell_at(idx))
    }
}
