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

use crate::stats::DpSolverStatistics;
use greenpack_model::selection::Selection;
use num_traits::{PrimInt, Signed};

/// Result of the solver after a successful run.
///
/// The DP method proves optimality on every valid instance, so the outcome
/// always carries a selection; the statistics describe what the proof cost.
#[derive(Debug, Clone)]
pub struct DpSolverOutcome<T> {
    selection: Selection<T>,
    statistics: DpSolverStatistics,
}

impl<T> DpSolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(selection: Selection<T>, statistics: DpSolverStatistics) -> Self {
        Self {
            selection,
            statistics,
        }
    }

    /// Returns the optimal selection.
    #[inline]
    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &DpSolverStatistics {
        &self.statistics
    }

    /// Consumes the outcome, returning only the selection.
    #[inline]
    pub fn into_selection(self) -> Selection<T> {
        self.selection
    }
}

impl<T> std::fmt::Display for DpSolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.selection, self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DpSolverStatisticsBuilder;
    use greenpack_model::index::ItemIndex;

    #[test]
    fn test_accessors_and_into_selection() {
        let selection = Selection::new(220i64, 50i64, vec![ItemIndex::new(1), ItemIndex::new(2)]);
        let stats = DpSolverStatisticsBuilder::new().items(3).capacity(50).build();
        let outcome = DpSolverOutcome::new(selection.clone(), stats.clone());

        assert_eq!(outcome.selection(), &selection);
        assert_eq!(outcome.statistics(), &stats);
        assert_eq!(outcome.into_selection(), selection);
    }

    #[test]
    fn test_display_includes_selection_and_stats() {
        let selection = Selection::new(5i64, 1i64, vec![ItemIndex::new(0)]);
        let stats = DpSolverStatisticsBuilder::new().items(1).capacity(1).build();
        let rendered = format!("{}", DpSolverOutcome::new(selection, stats));

        assert!(rendered.contains("Selection Summary"));
        assert!(rendered.contains("DP Solver Statistics:"));
    }
}
