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

/// Statistics collected during a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpSolverStatistics {
    /// Number of items in the solved instance.
    pub items: usize,
    /// The budget, i.e. the table width minus one.
    pub capacity: usize,
    /// Total table cells written during the sweep (including the zero row).
    pub cells_filled: u64,
    /// Approximate table memory in bytes.
    pub table_bytes: usize,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for DpSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DP Solver Statistics:")?;
        writeln!(f, "  Items: {}", self.items)?;
        writeln!(f, "  Capacity: {}", self.capacity)?;
        writeln!(f, "  Cells Filled: {}", self.cells_filled)?;
        writeln!(f, "  Table Memory (bytes): {}", self.table_bytes)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `DpSolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpSolverStatisticsBuilder {
    items: usize,
    capacity: usize,
    cells_filled: u64,
    table_bytes: usize,
    solve_duration: std::time::Duration,
}

impl Default for DpSolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DpSolverStatisticsBuilder {
    /// Creates a new `DpSolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: 0,
            capacity: 0,
            cells_filled: 0,
            table_bytes: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of items.
    #[inline]
    pub fn items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    /// Sets the capacity (budget).
    #[inline]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of cells filled.
    #[inline]
    pub fn cells_filled(mut self, cells_filled: u64) -> Self {
        self.cells_filled = cells_filled;
        self
    }

    /// Sets the approximate table memory in bytes.
    #[inline]
    pub fn table_bytes(mut self, table_bytes: usize) -> Self {
        self.table_bytes = table_bytes;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `DpSolverStatistics` instance.
    #[inline]
    pub fn build(self) -> DpSolverStatistics {
        DpSolverStatistics {
            items: self.items,
            capacity: self.capacity,
            cells_filled: self.cells_filled,
            table_bytes: self.table_bytes,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DpSolverStatistics, DpSolverStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = DpSolverStatisticsBuilder::new()
            .items(3)
            .capacity(50)
            .cells_filled(204)
            .table_bytes(1_632)
            .solve_duration(Duration::from_millis(12))
            .build();

        assert_eq!(stats.items, 3);
        assert_eq!(stats.capacity, 50);
        assert_eq!(stats.cells_filled, 204);
        assert_eq!(stats.table_bytes, 1_632);
        assert_eq!(stats.solve_duration, Duration::from_millis(12));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = DpSolverStatistics {
            items: 4,
            capacity: 9,
            cells_filled: 50,
            table_bytes: 400,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("DP Solver Statistics:"), "missing header");
        assert!(rendered.contains("Items: 4"), "missing items");
        assert!(rendered.contains("Capacity: 9"), "missing capacity");
        assert!(rendered.contains("Cells Filled: 50"), "missing cells_filled");
        assert!(
            rendered.contains("Table Memory (bytes): 400"),
            "missing table_bytes"
        );

        // Duration line should be formatted to three decimals
        assert!(
            rendered.contains("Solve Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
