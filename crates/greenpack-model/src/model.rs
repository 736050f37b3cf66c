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

use crate::{action::ActionKind, error::ModelError, index::ItemIndex, scoring::compute_points};
use num_traits::{FromPrimitive, PrimInt, Signed};

/// Represents the size of the dynamic-programming table a model induces.
///
/// The table has `(num_items + 1) * (budget + 1)` cells. Since the budget is
/// a data value rather than a structural dimension, the cell count can grow
/// far beyond what a caller is willing to pay for; this struct gives callers
/// the numbers to bound `n * budget` *before* invoking the solver.
///
/// The count is held in a `u128` so that no realistic instance overflows the
/// report itself.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Complexity {
    cells: u128,
}

impl Complexity {
    /// Calculates the table size for a given item count and budget.
    pub fn new(num_items: usize, budget: u128) -> Self {
        let rows = num_items as u128 + 1;
        let width = budget + 1;
        Complexity {
            cells: rows * width,
        }
    }

    /// Returns the total number of table cells.
    #[inline]
    pub fn cells(&self) -> u128 {
        self.cells
    }

    /// Returns the approximate table memory in bytes for the given cell width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::Complexity;
    ///
    /// let complexity = Complexity::new(3, 50);
    /// assert_eq!(complexity.cells(), 4 * 51);
    /// assert_eq!(complexity.table_bytes(8), 4 * 51 * 8);
    /// ```
    #[inline]
    pub fn table_bytes(&self, bytes_per_cell: usize) -> u128 {
        self.cells * bytes_per_cell as u128
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cells", self.cells)
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(cells={})", self.cells)
    }
}

/// The immutable data model describing a budgeted action-selection instance.
///
/// This struct holds all pre-validated, queryable data:
/// - `values[item]`: the point value awarded for taking each item.
/// - `costs[item]`: the non-negative cost each item charges against the budget.
/// - `budget`: the non-negative upper bound on the total cost of a selection.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build`, or `Model::from_parts`
///   for ready-made arrays. Both validate, so a `Model` in hand is always
///   sound input for the solver.
#[derive(Clone, PartialEq, Eq)]
pub struct Model<T>
where
    T: PrimInt + Signed,
{
    values: Vec<T>, // len = num_items
    costs: Vec<T>,  // len = num_items
    budget: T,
}

#[inline(always)]
fn validate_parts<T>(costs: &[T], budget: T) -> Result<(), ModelError>
where
    T: PrimInt + Signed,
{
    if budget < T::zero() {
        return Err(ModelError::NegativeBudget);
    }

    for (i, &cost) in costs.iter().enumerate() {
        if cost < T::zero() {
            return Err(ModelError::NegativeCost {
                item: ItemIndex::new(i),
            });
        }
    }

    Ok(())
}

impl<T> Model<T>
where
    T: PrimInt + Signed,
{
    /// Builds a validated model from parallel value/cost arrays and a budget.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::LengthMismatch` if the arrays differ in length,
    /// `ModelError::NegativeCost` if any item cost is negative, and
    /// `ModelError::NegativeBudget` if the budget is negative. Negative
    /// *values* are allowed; the solver simply never profits from them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::Model;
    ///
    /// let model = Model::from_parts(vec![60i64, 100, 120], vec![10, 20, 30], 50).unwrap();
    /// assert_eq!(model.num_items(), 3);
    /// assert_eq!(model.budget(), 50);
    /// ```
    pub fn from_parts(values: Vec<T>, costs: Vec<T>, budget: T) -> Result<Self, ModelError> {
        if values.len() != costs.len() {
            return Err(ModelError::LengthMismatch {
                values_len: values.len(),
                costs_len: costs.len(),
            });
        }

        validate_parts(&costs, budget)?;

        Ok(Self {
            values,
            costs,
            budget,
        })
    }

    /// Returns the number of items in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::ModelBuilder;
    ///
    /// let builder = ModelBuilder::<i64>::new(3);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_items(), 3);
    /// ```
    #[inline]
    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the model has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the budget.
    #[inline]
    pub fn budget(&self) -> T {
        self.budget
    }

    /// Returns a slice of all item values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns a slice of all item costs.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the size of the dynamic-programming table this model induces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::Model;
    ///
    /// let model = Model::from_parts(vec![1i64, 2], vec![1, 1], 10).unwrap();
    /// assert_eq!(model.complexity().cells(), 3 * 11);
    /// ```
    #[inline]
    pub fn complexity(&self) -> Complexity {
        // The budget was validated non-negative, so the cast cannot fail.
        let budget = self.budget.to_u128().unwrap_or(0);
        Complexity::new(self.num_items(), budget)
    }

    /// Returns the value of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::{index::ItemIndex, model::Model};
    ///
    /// let model = Model::from_parts(vec![60i64, 100], vec![10, 20], 50).unwrap();
    /// assert_eq!(model.item_value(ItemIndex::new(1)), 100);
    /// ```
    #[inline]
    pub fn item_value(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Model::item_value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[index]
    }

    /// Returns the value of the specified item without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `item_index`. The caller must ensure that `item_index` is in
    /// `0..num_items()`. Undefined behavior may occur if this precondition is
    /// violated.
    #[inline]
    pub unsafe fn item_value_unchecked(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Model::item_value_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        unsafe { *self.values.get_unchecked(index) }
    }

    /// Returns the cost of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::{index::ItemIndex, model::Model};
    ///
    /// let model = Model::from_parts(vec![60i64, 100], vec![10, 20], 50).unwrap();
    /// assert_eq!(model.item_cost(ItemIndex::new(0)), 10);
    /// ```
    #[inline]
    pub fn item_cost(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Model::item_cost` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.costs[index]
    }

    /// Returns the cost of the specified item without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `item_index`. The caller must ensure that `item_index` is in
    /// `0..num_items()`. Undefined behavior may occur if this precondition is
    /// violated.
    #[inline]
    pub unsafe fn item_cost_unchecked(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `Model::item_cost_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        unsafe { *self.costs.get_unchecked(index) }
    }
}

impl<T> std::fmt::Debug for Model<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("values", &self.values)
            .field("costs", &self.costs)
            .field("budget", &self.budget)
            .finish()
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_items: {}, budget: {})",
            self.num_items(),
            self.budget
        )
    }
}

/// A mutable builder for planning models.
///
/// The builder starts with a fixed number of zero-valued, zero-cost items and
/// a zero budget. Constraints are added by setting values, costs, and the
/// budget; additional items can be appended with `push_item` or priced from
/// the action catalog with `push_action`. `build` validates and produces the
/// immutable `Model`.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    values: Vec<T>,
    costs: Vec<T>,
    budget: T,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `ModelBuilder` with `num_items` zero-valued, zero-cost
    /// items and a zero budget.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::ModelBuilder;
    ///
    /// let builder = ModelBuilder::<i64>::new(5);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.num_items(), 5);
    /// assert_eq!(model.budget(), 0);
    /// ```
    pub fn new(num_items: usize) -> Self {
        ModelBuilder {
            values: vec![T::zero(); num_items],
            costs: vec![T::zero(); num_items],
            budget: T::zero(),
        }
    }

    /// Returns the current number of items in the builder.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    /// Sets the value of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::{index::ItemIndex, model::ModelBuilder};
    ///
    /// let mut builder = ModelBuilder::<i64>::new(2);
    /// builder.set_item_value(ItemIndex::new(0), 60);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.item_value(ItemIndex::new(0)), 60);
    /// ```
    #[inline]
    pub fn set_item_value(&mut self, item_index: ItemIndex, value: T) -> &mut Self {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `ModelBuilder::set_item_value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[index] = value;
        self
    }

    /// Sets the cost of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::{index::ItemIndex, model::ModelBuilder};
    ///
    /// let mut builder = ModelBuilder::<i64>::new(2);
    /// builder.set_item_cost(ItemIndex::new(1), 20);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.item_cost(ItemIndex::new(1)), 20);
    /// ```
    #[inline]
    pub fn set_item_cost(&mut self, item_index: ItemIndex, cost: T) -> &mut Self {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `ModelBuilder::set_item_cost` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.costs[index] = cost;
        self
    }

    /// Sets the budget.
    #[inline]
    pub fn set_budget(&mut self, budget: T) -> &mut Self {
        self.budget = budget;
        self
    }

    /// Appends a new item and returns its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::model::ModelBuilder;
    ///
    /// let mut builder = ModelBuilder::<i64>::new(0);
    /// let first = builder.push_item(60, 10);
    /// let second = builder.push_item(100, 20);
    /// assert_eq!(first.get(), 0);
    /// assert_eq!(second.get(), 1);
    /// ```
    #[inline]
    pub fn push_item(&mut self, value: T, cost: T) -> ItemIndex {
        let index = ItemIndex::new(self.values.len());
        self.values.push(value);
        self.costs.push(cost);
        index
    }

    /// Appends an item priced from the action catalog and returns its index.
    ///
    /// The item's value is `compute_points(kind, distance_km)`; the cost is
    /// whatever budget units the caller charges for performing the action.
    /// Values that do not fit `T` are clamped to `T::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::{action::ActionKind, model::ModelBuilder};
    ///
    /// let mut builder = ModelBuilder::<i64>::new(0);
    /// let tree = builder.push_action(ActionKind::TreePlanting, None, 3);
    /// let model = builder.build().unwrap();
    /// // 20 base points + 10 planting bonus
    /// assert_eq!(model.item_value(tree), 30);
    /// ```
    #[inline]
    pub fn push_action(&mut self, kind: ActionKind, distance_km: Option<f64>, cost: T) -> ItemIndex
    where
        T: FromPrimitive,
    {
        let points = compute_points(kind, distance_km);
        let value = T::from_i64(points).unwrap_or_else(T::max_value);
        self.push_item(value, cost)
    }

    /// Validates the configured data and builds the immutable `Model`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NegativeCost` or `ModelError::NegativeBudget` if
    /// the configured data violates the planner's input contract.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        validate_parts(&self.costs, self.budget)?;

        Ok(Model {
            values: self.values,
            costs: self.costs,
            budget: self.budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_builder_defaults() {
        let model = ModelBuilder::<i64>::new(4).build().unwrap();
        assert_eq!(model.num_items(), 4);
        assert_eq!(model.budget(), 0);
        assert!(model.values().iter().all(|&v| v == 0));
        assert!(model.costs().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_builder_setters_and_accessors() {
        let mut builder = ModelBuilder::<i64>::new(2);
        builder
            .set_item_value(ii(0), 60)
            .set_item_cost(ii(0), 10)
            .set_item_value(ii(1), 100)
            .set_item_cost(ii(1), 20)
            .set_budget(50);
        let model = builder.build().unwrap();

        assert_eq!(model.item_value(ii(0)), 60);
        assert_eq!(model.item_cost(ii(0)), 10);
        assert_eq!(model.item_value(ii(1)), 100);
        assert_eq!(model.item_cost(ii(1)), 20);
        assert_eq!(model.budget(), 50);

        unsafe {
            assert_eq!(model.item_value_unchecked(ii(1)), 100);
            assert_eq!(model.item_cost_unchecked(ii(1)), 20);
        }
    }

    #[test]
    fn test_push_item_grows_the_model() {
        let mut builder = ModelBuilder::<i64>::new(0);
        assert_eq!(builder.push_item(1, 2).get(), 0);
        assert_eq!(builder.push_item(3, 4).get(), 1);
        assert_eq!(builder.num_items(), 2);

        let model = builder.build().unwrap();
        assert_eq!(model.values(), &[1, 3]);
        assert_eq!(model.costs(), &[2, 4]);
    }

    #[test]
    fn test_from_parts_rejects_length_mismatch() {
        let res = Model::from_parts(vec![1i64, 2, 3], vec![1, 2], 10);
        assert_eq!(
            res.unwrap_err(),
            ModelError::LengthMismatch {
                values_len: 3,
                costs_len: 2,
            }
        );
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let res = Model::from_parts(vec![1i64, 2], vec![1, -2], 10);
        assert_eq!(res.unwrap_err(), ModelError::NegativeCost { item: ii(1) });

        let mut builder = ModelBuilder::<i64>::new(1);
        builder.set_item_cost(ii(0), -1);
        assert!(matches!(
            builder.build(),
            Err(ModelError::NegativeCost { .. })
        ));
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let res = Model::from_parts(vec![1i64], vec![1], -1);
        assert_eq!(res.unwrap_err(), ModelError::NegativeBudget);
    }

    #[test]
    fn test_negative_values_are_allowed() {
        let model = Model::from_parts(vec![-5i64, 3], vec![1, 1], 2).unwrap();
        assert_eq!(model.item_value(ii(0)), -5);
    }

    #[test]
    fn test_complexity_reports_table_size() {
        let model = Model::from_parts(vec![1i64, 2, 3], vec![1, 1, 1], 50).unwrap();
        let complexity = model.complexity();
        assert_eq!(complexity.cells(), 4 * 51);
        assert_eq!(complexity.table_bytes(8), 4 * 51 * 8);
        assert_eq!(format!("{}", complexity), "204 cells");
    }

    #[test]
    fn test_display_formats_summary() {
        let model = Model::from_parts(vec![1i64, 2], vec![1, 1], 7).unwrap();
        assert_eq!(format!("{}", model), "Model(num_items: 2, budget: 7)");
    }
}
