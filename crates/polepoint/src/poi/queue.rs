//! Array-backed binary max-heap of cells keyed on `bound`.
//!
//! A child only moves above its parent when its bound is strictly greater, and
//! the right child only beats the left when strictly greater. That makes the
//! pop order for equal bounds a fixed function of the push sequence, which in
//! turn keeps the search result bit-identical across runs.

use super::types::Cell;

#[derive(Clone, Debug, Default)]
pub struct CellQueue {
    data: Vec<Cell>,
}

/// Negative when `a` must pop before `b`. NaN compares as "not after".
#[inline]
fn priority_gap(a: &Cell, b: &Cell) -> f64 {
    b.bound - a.bound
}

impl CellQueue {
    /// Heapify `cells` bottom-up.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let mut q = Self { data: cells };
        for pos in (0..q.data.len() / 2).rev() {
            q.sift_down(pos);
        }
        q
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Highest-bound cell without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&Cell> {
        self.data.first()
    }

    pub fn push(&mut self, cell: Cell) {
        self.data.push(cell);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove the highest-bound cell; the last cell moves to the root and sinks.
    pub fn pop(&mut self) -> Option<Cell> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(top)
    }

    fn sift_up(&mut self, mut pos: usize) {
        let item = self.data[pos];
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if priority_gap(&item, &self.data[parent]) >= 0.0 {
                break;
            }
            self.data[pos] = self.data[parent];
            pos = parent;
        }
        self.data[pos] = item;
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        let half = len / 2;
        let item = self.data[pos];
        while pos < half {
            let mut child = 2 * pos + 1;
            let right = child + 1;
            if right < len && priority_gap(&self.data[right], &self.data[child]) < 0.0 {
                child = right;
            }
            if priority_gap(&self.data[child], &item) >= 0.0 {
                break;
            }
            self.data[pos] = self.data[child];
            pos = child;
        }
        self.data[pos] = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn cell(bound: f64, tag: f64) -> Cell {
        Cell {
            center: Point::new(tag, 0.0),
            half: 0.0,
            distance: bound,
            bound,
        }
    }

    #[test]
    fn pops_in_descending_bound_order() {
        let mut q = CellQueue::from_cells(vec![cell(1.0, 0.0), cell(5.0, 1.0), cell(3.0, 2.0)]);
        q.push(cell(4.0, 3.0));
        q.push(cell(-2.0, 4.0));
        let order: Vec<f64> = std::iter::from_fn(|| q.pop()).map(|c| c.bound).collect();
        assert_eq!(order, vec![5.0, 4.0, 3.0, 1.0, -2.0]);
        assert!(q.is_empty());
        assert!(q.pop().is_none());
    }

    #[test]
    fn equal_bounds_pop_in_a_fixed_order() {
        let build = || {
            let mut q = CellQueue::from_cells((0..6).map(|k| cell(1.0, k as f64)).collect());
            for k in 6..10 {
                q.push(cell(1.0, k as f64));
            }
            std::iter::from_fn(move || q.pop())
                .map(|c| c.center.x)
                .collect::<Vec<_>>()
        };
        let first = build();
        assert_eq!(first.len(), 10);
        assert_eq!(first, build());
        // root stays put; the last element fills the root after each pop
        assert_eq!(first[0], 0.0);
        assert_eq!(first[1], 9.0);
    }

    #[test]
    fn peek_and_len_track_contents() {
        let mut q = CellQueue::default();
        assert!(q.peek().is_none());
        q.push(cell(2.0, 0.0));
        q.push(cell(7.0, 1.0));
        assert_eq!(q.len(), 2);
        assert_eq!(q.peek().map(|c| c.bound), Some(7.0));
    }
}
