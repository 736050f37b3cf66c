// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::PlanNumeric;
use greenpack_core::num::ops::{CheckedAddVal, CheckedMulVal};

#[inline(always)]
fn flatten_index(width: usize, row: usize, col: usize) -> usize {
    row * width + col
}

/// The dynamic-programming value table.
///
/// Row `i` holds the best value achievable using only the first `i` items,
/// one cell per budget level `0..=capacity`. Stored as a single row-major
/// vector; row 0 is all zeros by construction.
#[derive(Clone, Debug)]
pub(crate) struct DpTable<T> {
    cells: Vec<T>,
    width: usize, // capacity + 1
}

impl<T> DpTable<T>
where
    T: PlanNumeric,
{
    /// Allocates a zeroed `(num_items + 1) x (capacity + 1)` table.
    ///
    /// Returns `None` when the cell count overflows `usize`.
    pub(crate) fn new(num_items: usize, capacity: usize) -> Option<Self> {
        let rows = num_items.checked_add_val(1)?;
        let width = capacity.checked_add_val(1)?;
        let size = rows.checked_mul_val(width)?;

        Some(Self {
            cells: vec![T::ZERO; size],
            width,
        })
    }

    /// Returns the number of budget levels per row.
    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Returns the value at (`row`, `col`).
    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        let index = flatten_index(self.width, row, col);
        debug_assert!(
            col < self.width && index < self.cells.len(),
            "called `DpTable::get` with cell out of bounds: ({}, {}) in a {}-wide table of {} cells",
            row,
            col,
            self.width,
            self.cells.len()
        );

        self.cells[index]
    }

    /// Writes the value at (`row`, `col`).
    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        let index = flatten_index(self.width, row, col);
        debug_assert!(
            col < self.width && index < self.cells.len(),
            "called `DpTable::set` with cell out of bounds: ({}, {}) in a {}-wide table of {} cells",
            row,
            col,
            self.width,
            self.cells.len()
        );

        self.cells[index] = value;
    }

    /// Returns the total number of cells.
    #[inline]
    pub(crate) fn num_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroes_all_cells() {
        let table = DpTable::<i64>::new(2, 3).unwrap();
        assert_eq!(table.width(), 4);
        assert_eq!(table.num_cells(), 12);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(table.get(row, col), 0);
            }
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut table = DpTable::<i64>::new(1, 2).unwrap();
        table.set(1, 2, 42);
        assert_eq!(table.get(1, 2), 42);
        // Neighbors stay untouched.
        assert_eq!(table.get(1, 1), 0);
        assert_eq!(table.get(0, 2), 0);
    }

    #[test]
    fn test_new_fails_on_overflowing_size() {
        assert!(DpTable::<i64>::new(usize::MAX, 1).is_none());
        assert!(DpTable::<i64>::new(2, usize::MAX).is_none());
    }
}
