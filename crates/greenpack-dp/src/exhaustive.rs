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

//! Brute-force reference strategy.
//!
//! Enumerates every subset of the items and keeps the best feasible one.
//! Exponential, so it is hard-capped at a small item count; its purpose is
//! to cross-check the DP engine on small instances, not to be fast.

use crate::num::PlanNumeric;
use greenpack_core::num::ops::{CheckedAddVal, SaturatingAddVal};
use greenpack_model::{index::ItemIndex, model::Model, selection::Selection};

/// The largest item count the exhaustive enumeration accepts (2^24 subsets).
pub const MAX_EXHAUSTIVE_ITEMS: usize = 24;

/// A subset-enumeration solver for small instances.
///
/// Returns an optimal selection, but not necessarily the same one as the DP
/// engine: among equally optimal subsets, this solver keeps the first one in
/// mask enumeration order. Cross-checks should therefore compare the optimal
/// *value* only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new `ExhaustiveSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model by enumerating all subsets.
    ///
    /// # Panics
    ///
    /// Panics if the model has more than `MAX_EXHAUSTIVE_ITEMS` items.
    pub fn solve<T>(&self, model: &Model<T>) -> Selection<T>
    where
        T: PlanNumeric,
    {
        let num_items = model.num_items();
        assert!(
            num_items <= MAX_EXHAUSTIVE_ITEMS,
            "called `ExhaustiveSolver::solve` with {} items: exhaustive enumeration is capped at {}",
            num_items,
            MAX_EXHAUSTIVE_ITEMS
        );

        let budget = model.budget();

        let mut best_value = T::zero();
        let mut best_cost = T::zero();
        let mut best_mask: u32 = 0;

        for mask in 0u32..(1u32 << num_items) {
            let mut cost = T::zero();
            let mut value = T::zero();
            let mut feasible = true;

            for i in 0..num_items {
                if mask & (1 << i) == 0 {
                    continue;
                }

                let item = ItemIndex::new(i);

                // SAFETY: `i` is below `num_items` by loop bounds.
                let item_cost = unsafe { model.item_cost_unchecked(item) };
                let item_value = unsafe { model.item_value_unchecked(item) };

                // A cost sum that overflows `T` certainly exceeds the budget.
                match cost.checked_add_val(item_cost) {
                    Some(c) if c <= budget => cost = c,
                    _ => {
                        feasible = false;
                        break;
                    }
                }

                value = value.saturating_add_val(item_value);
            }

            if feasible && value > best_value {
                best_value = value;
                best_cost = cost;
                best_mask = mask;
            }
        }

        let items = (0..num_items)
            .filter(|&i| best_mask & (1 << i) != 0)
            .map(ItemIndex::new)
            .collect();

        Selection::new(best_value, best_cost, items)
    }
}
