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

//! Validation errors for planning models.
//!
//! A `Model` can only be obtained through a constructor that runs these
//! checks, so the solver never has to re-validate its input. The variants
//! map one-to-one onto the ways a caller can hand over inconsistent data:
//! parallel arrays of different lengths, a negatively priced item, or a
//! negative budget.

use crate::index::ItemIndex;

/// The error type for model construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The `values` and `costs` arrays have different lengths.
    LengthMismatch {
        /// Number of item values provided.
        values_len: usize,
        /// Number of item costs provided.
        costs_len: usize,
    },
    /// An item carries a negative cost, which the planner does not support.
    NegativeCost {
        /// The offending item.
        item: ItemIndex,
    },
    /// The budget is negative.
    NegativeBudget,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                values_len,
                costs_len,
            } => write!(
                f,
                "values and costs must have the same length: got {} values and {} costs",
                values_len, costs_len
            ),
            Self::NegativeCost { item } => {
                write!(f, "Item {} has a negative cost", item.get())
            }
            Self::NegativeBudget => write!(f, "The budget must be non-negative"),
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = ModelError::LengthMismatch {
            values_len: 3,
            costs_len: 2,
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("3 values"));
        assert!(rendered.contains("2 costs"));

        let err = ModelError::NegativeCost {
            item: ItemIndex::new(4),
        };
        assert!(format!("{}", err).contains("Item 4"));
    }
}
