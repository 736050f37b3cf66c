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

use crate::index::ItemIndex;
use num_traits::{PrimInt, Signed};

/// The final answer to a budgeted action-selection instance.
///
/// Holds the achieved total value, the total cost charged against the budget,
/// and the chosen items as a strictly increasing index list. A `Selection`
/// is produced fresh per solve; it shares no state with the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    /// The total value of the selected items.
    total_value: T,

    /// The total cost of the selected items.
    total_cost: T,

    /// The selected items, in strictly increasing index order.
    items: Vec<ItemIndex>,
}

impl<T> Selection<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Constructs a new `Selection`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is not strictly increasing (which also rules out
    /// duplicates).
    pub fn new(total_value: T, total_cost: T, items: Vec<ItemIndex>) -> Self {
        assert!(
            items.windows(2).all(|w| w[0] < w[1]),
            "called Selection::new with items out of order: indices must be strictly increasing"
        );

        Self {
            total_value,
            total_cost,
            items,
        }
    }

    /// Constructs the empty selection with zero value and cost.
    #[inline]
    pub fn empty() -> Self {
        Self {
            total_value: T::zero(),
            total_cost: T::zero(),
            items: Vec::new(),
        }
    }

    /// Returns the total value of the selected items.
    #[inline]
    pub fn total_value(&self) -> T {
        self.total_value
    }

    /// Returns the total cost of the selected items.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the selected items in ascending index order.
    #[inline]
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_selected(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items were selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the specified item is part of the selection.
    #[inline]
    pub fn contains(&self, item_index: ItemIndex) -> bool {
        // The items are sorted by construction.
        self.items.binary_search(&item_index).is_ok()
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Selection Summary")?;
        writeln!(f, "   Total Value: {}", self.total_value)?;
        writeln!(f, "   Total Cost:  {}", self.total_cost)?;

        if self.is_empty() {
            writeln!(f, "   (No items selected)")?;
            return Ok(());
        }

        write!(f, "   Items:")?;
        for item in &self.items {
            write!(f, " {}", item.get())?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let sel = Selection::new(220i64, 50i64, vec![ii(1), ii(2)]);

        assert_eq!(sel.total_value(), 220);
        assert_eq!(sel.total_cost(), 50);
        assert_eq!(sel.num_selected(), 2);
        assert_eq!(sel.items(), &[ii(1), ii(2)]);
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_contains() {
        let sel = Selection::new(10i64, 5i64, vec![ii(0), ii(2), ii(5)]);
        assert!(sel.contains(ii(0)));
        assert!(sel.contains(ii(5)));
        assert!(!sel.contains(ii(1)));
        assert!(!sel.contains(ii(6)));
    }

    #[test]
    #[should_panic(expected = "called Selection::new with items out of order")]
    fn test_new_panics_on_unsorted_items() {
        let _ = Selection::new(0i64, 0i64, vec![ii(2), ii(1)]);
    }

    #[test]
    #[should_panic(expected = "called Selection::new with items out of order")]
    fn test_new_panics_on_duplicate_items() {
        let _ = Selection::new(0i64, 0i64, vec![ii(1), ii(1)]);
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let sel = Selection::<i64>::empty();
        assert_eq!(sel.total_value(), 0);
        assert_eq!(sel.total_cost(), 0);
        assert_eq!(sel.num_selected(), 0);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_display_formatting_example() {
        let sel = Selection::new(220i64, 50i64, vec![ii(1), ii(2)]);
        let displayed = format!("{}", sel);

        let mut expected = String::new();
        expected.push_str("Selection Summary\n");
        expected.push_str("   Total Value: 220\n");
        expected.push_str("   Total Cost:  50\n");
        expected.push_str("   Items: 1 2\n");

        assert_eq!(displayed, expected);
    }

    #[test]
    fn test_display_empty() {
        let displayed = format!("{}", Selection::<i64>::empty());
        assert!(displayed.contains("(No items selected)"));
    }
}
