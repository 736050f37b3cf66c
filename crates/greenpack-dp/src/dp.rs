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

//! # Exact DP Solver
//!
//! The table-based 0/1 knapsack engine. `DpSolver` sweeps a
//! `(n + 1) x (budget + 1)` value table bottom-up, then reconstructs the
//! chosen item set by walking the finished table downward.
//!
//! ## Determinism
//!
//! Several distinct selections can achieve the same optimal value. The solver
//! resolves every such tie the same way: an item is only taken when taking it
//! *strictly* improves the value (exclude-preferred). The reconstruction walk
//! reads the same table, so identical inputs always yield the identical
//! selection.
//!
//! ## Arithmetic
//!
//! Value accumulation saturates at `T::MAX` instead of wrapping; instances
//! whose optimal value does not fit `T` degrade to a clamped value rather
//! than a corrupted table. Costs never need saturation: every selected cost
//! is bounded by the budget, which fits `T` by construction.

use crate::{
    error::SolveError, num::PlanNumeric, result::DpSolverOutcome, stats::DpSolverStatisticsBuilder,
    table::DpTable,
};
use greenpack_core::num::ops::SaturatingAddVal;
use greenpack_model::{index::ItemIndex, model::Model, selection::Selection};

/// The exact dynamic-programming solver.
///
/// The solver is stateless: each call to `solve` owns its table, so a single
/// instance may be shared freely across threads and repeated calls with the
/// same model return the same outcome.
///
/// ## Usage
///
/// ```rust
/// use greenpack_dp::dp::DpSolver;
/// use greenpack_model::model::Model;
///
/// let model = Model::from_parts(vec![60i64, 100, 120], vec![10, 20, 30], 50).unwrap();
/// let outcome = DpSolver::new().solve(&model).unwrap();
///
/// assert_eq!(outcome.selection().total_value(), 220);
/// assert_eq!(
///     outcome.selection().items().iter().map(|i| i.get()).collect::<Vec<_>>(),
///     vec![1, 2]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DpSolver;

impl DpSolver {
    /// Creates a new `DpSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given model to proven optimality.
    ///
    /// Runs in `O(n * budget)` time and space. The caller is responsible for
    /// bounding that product to something it is willing to pay for (see
    /// `Model::complexity`); the only internal guard is against a cell count
    /// that does not fit the address space.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::TableTooLarge` if `(n + 1) * (budget + 1)`
    /// overflows `usize`.
    pub fn solve<T>(&self, model: &Model<T>) -> Result<DpSolverOutcome<T>, SolveError>
    where
        T: PlanNumeric,
    {
        let start_time = std::time::Instant::now();

        let num_items = model.num_items();
        let too_large = || SolveError::TableTooLarge {
            cells: model.complexity().cells(),
        };

        // The budget is non-negative by model construction; a failed cast
        // means it exceeds the address space outright.
        let capacity = model.budget().to_usize().ok_or_else(too_large)?;

        let mut table = DpTable::<T>::new(num_items, capacity).ok_or_else(too_large)?;

        self.sweep(model, &mut table);
        let selection = self.reconstruct(model, &table);

        let statistics = DpSolverStatisticsBuilder::new()
            .items(num_items)
            .capacity(capacity)
            .cells_filled(table.num_cells() as u64)
            .table_bytes(table.num_cells() * std::mem::size_of::<T>())
            .solve_duration(start_time.elapsed())
            .build();

        Ok(DpSolverOutcome::new(selection, statistics))
    }

    /// Fills rows `1..=n`, reading exactly one row behind the one written.
    fn sweep<T>(&self, model: &Model<T>, table: &mut DpTable<T>)
    where
        T: PlanNumeric,
    {
        let capacity = table.width() - 1;

        for i in 1..=model.num_items() {
            let item = ItemIndex::new(i - 1);

            // SAFETY: `i - 1` is below `num_items` by loop bounds.
            let value = unsafe { model.item_value_unchecked(item) };
            let cost = unsafe { model.item_cost_unchecked(item) };

            // A cost that does not even fit `usize` can never be affordable.
            let cost_cells = cost.to_usize();

            for b in 0..=capacity {
                let exclude = table.get(i - 1, b);

                let best = match cost_cells {
                    Some(c) if c <= b => {
                        let include = table.get(i - 1, b - c).saturating_add_val(value);
                        // Ties go to the exclude branch.
                        if include > exclude { include } else { exclude }
                    }
                    _ => exclude,
                };

                table.set(i, b, best);
            }
        }
    }

    /// Walks the finished table downward from the full budget, collecting
    /// every item whose row changed the value, then restores ascending order.
    fn reconstruct<T>(&self, model: &Model<T>, table: &DpTable<T>) -> Selection<T>
    where
        T: PlanNumeric,
    {
        let num_items = model.num_items();
        let mut b = table.width() - 1;

        let mut items = Vec::new();
        let mut total_cost = T::zero();

        for i in (1..=num_items).rev() {
            if table.get(i, b) != table.get(i - 1, b) {
                let item = ItemIndex::new(i - 1);

                // SAFETY: `i - 1` is below `num_items` by loop bounds.
                let cost = unsafe { model.item_cost_unchecked(item) };

                items.push(item);
                total_cost = total_cost + cost;
                b -= cost
                    .to_usize()
                    .expect("selected item cost exceeds the remaining budget");
            }
        }

        items.reverse();

        Selection::new(table.get(num_items, table.width() - 1), total_cost, items)
    }
}

/// Solves a raw value/cost/budget triple to proven optimality.
///
/// This is the validating convenience entry: it builds a model from the
/// slices (rejecting mismatched lengths, negative costs, and a negative
/// budget) and returns only the selection.
///
/// # Examples
///
/// ```rust
/// use greenpack_dp::dp::solve;
///
/// let selection = solve(&[60i64, 100, 120], &[10, 20, 30], 50).unwrap();
/// assert_eq!(selection.total_value(), 220);
/// ```
pub fn solve<T>(values: &[T], costs: &[T], budget: T) -> Result<Selection<T>, SolveError>
where
    T: PlanNumeric,
{
    let model = Model::from_parts(values.to_vec(), costs.to_vec(), budget)?;
    Ok(DpSolver::new().solve(&model)?.into_selection())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveSolver;
    use greenpack_model::error::ModelError;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn indices(selection: &Selection<i64>) -> Vec<usize> {
        selection.items().iter().map(|i| i.get()).collect()
    }

    fn assert_selection_consistent(model: &Model<i64>, selection: &Selection<i64>) {
        // Strictly increasing, duplicate-free.
        assert!(selection.items().windows(2).all(|w| w[0] < w[1]));

        let cost: i64 = selection.items().iter().map(|&i| model.item_cost(i)).sum();
        let value: i64 = selection.items().iter().map(|&i| model.item_value(i)).sum();

        assert!(cost <= model.budget(), "selection exceeds the budget");
        assert_eq!(cost, selection.total_cost());
        assert_eq!(value, selection.total_value());
    }

    #[test]
    fn test_textbook_scenario() {
        let selection = solve(&[60i64, 100, 120], &[10, 20, 30], 50).unwrap();
        assert_eq!(selection.total_value(), 220);
        assert_eq!(selection.total_cost(), 50);
        assert_eq!(indices(&selection), vec![1, 2]);
    }

    #[test]
    fn test_tie_break_prefers_earlier_items() {
        // All three selections of two items are optimal. Including item 2 is
        // no strict improvement over rows 1+2, so its row equals the previous
        // one, the walk skips it, and the first two items are reported.
        let selection = solve(&[1i64, 1, 1], &[1, 1, 1], 2).unwrap();
        assert_eq!(selection.total_value(), 2);
        assert_eq!(indices(&selection), vec![0, 1]);
    }

    #[test]
    fn test_empty_model() {
        let selection = solve::<i64>(&[], &[], 100).unwrap();
        assert_eq!(selection.total_value(), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_budget_with_positive_costs() {
        let selection = solve(&[5i64, 7], &[1, 2], 0).unwrap();
        assert_eq!(selection.total_value(), 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_cost_items_are_taken_at_zero_budget() {
        let selection = solve(&[5i64, 7], &[0, 2], 0).unwrap();
        assert_eq!(selection.total_value(), 5);
        assert_eq!(indices(&selection), vec![0]);
    }

    #[test]
    fn test_zero_value_items_are_never_reported() {
        let selection = solve(&[0i64, 3], &[1, 1], 10).unwrap();
        assert_eq!(selection.total_value(), 3);
        assert_eq!(indices(&selection), vec![1]);
    }

    #[test]
    fn test_negative_value_items_are_never_taken() {
        let selection = solve(&[-5i64, 3], &[1, 1], 10).unwrap();
        assert_eq!(selection.total_value(), 3);
        assert_eq!(indices(&selection), vec![1]);
    }

    #[test]
    fn test_unaffordable_item_is_skipped() {
        let selection = solve(&[1000i64, 3], &[99, 1], 10).unwrap();
        assert_eq!(selection.total_value(), 3);
        assert_eq!(indices(&selection), vec![1]);
    }

    #[test]
    fn test_budget_larger_than_total_cost_takes_everything_profitable() {
        let selection = solve(&[60i64, 100, 120], &[10, 20, 30], 1_000).unwrap();
        assert_eq!(selection.total_value(), 280);
        assert_eq!(indices(&selection), vec![0, 1, 2]);
    }

    #[test]
    fn test_idempotence() {
        let model = Model::from_parts(vec![8i64, 4, 0, 5, 3], vec![3, 2, 1, 4, 2], 6).unwrap();
        let solver = DpSolver::new();

        let first = solver.solve(&model).unwrap().into_selection();
        let second = solver.solve(&model).unwrap().into_selection();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let res = solve(&[1i64, 2], &[1], 10);
        assert!(matches!(
            res,
            Err(SolveError::Model(ModelError::LengthMismatch { .. }))
        ));

        let res = solve(&[1i64], &[1], -1);
        assert!(matches!(
            res,
            Err(SolveError::Model(ModelError::NegativeBudget))
        ));
    }

    #[test]
    fn test_statistics_report_table_dimensions() {
        let model = Model::from_parts(vec![60i64, 100, 120], vec![10, 20, 30], 50).unwrap();
        let outcome = DpSolver::new().solve(&model).unwrap();
        let stats = outcome.statistics();

        assert_eq!(stats.items, 3);
        assert_eq!(stats.capacity, 50);
        assert_eq!(stats.cells_filled, 4 * 51);
        assert_eq!(stats.table_bytes, 4 * 51 * std::mem::size_of::<i64>());
    }

    #[test]
    fn test_cross_check_against_exhaustive_enumeration() {
        let mut rng = StdRng::seed_from_u64(0x6EE7);
        let solver = DpSolver::new();
        let reference = ExhaustiveSolver::new();

        for _ in 0..200 {
            let n = rng.gen_range(0..=12);
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=30)).collect();
            let costs: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=15)).collect();
            let budget = rng.gen_range(0..=40);

            let model = Model::from_parts(values, costs, budget).unwrap();
            let selection = solver.solve(&model).unwrap().into_selection();

            assert_selection_consistent(&model, &selection);

            // The reference may report a different but equally optimal set;
            // only the value is compared.
            let reference_selection = reference.solve(&model);
            assert_eq!(
                selection.total_value(),
                reference_selection.total_value(),
                "DP and exhaustive optima differ on {:?}",
                model
            );
        }
    }

    #[test]
    fn test_selection_matches_exclude_preferred_walk() {
        // Two optimal selections exist: {0, 1} and {2}. Item 2 alone ties the
        // value already reachable without it, so the tie goes to exclusion
        // and the walk reports {0, 1}.
        let selection = solve(&[3i64, 4, 7], &[1, 2, 3], 3).unwrap();
        assert_eq!(selection.total_value(), 7);
        assert_eq!(indices(&selection), vec![0, 1]);
    }

    #[test]
    fn test_solver_is_reusable_across_models() {
        let solver = DpSolver::new();

        let a = Model::from_parts(vec![1i64], vec![1], 1).unwrap();
        let b = Model::from_parts(vec![9i64, 9], vec![1, 1], 2).unwrap();

        assert_eq!(solver.solve(&a).unwrap().selection().total_value(), 1);
        assert_eq!(solver.solve(&b).unwrap().selection().total_value(), 18);
        // The first model's answer is unchanged by the second solve.
        assert_eq!(solver.solve(&a).unwrap().selection().total_value(), 1);
    }
}
