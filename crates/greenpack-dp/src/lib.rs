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

//! Greenpack-DP: exact dynamic programming for budgeted action selection
//!
//! High-level crate that implements a deterministic, exact 0/1 knapsack
//! solver over `greenpack_model::model::Model<T>` instances. The solver
//! separates the table sweep, solution reconstruction, and statistics so the
//! answer always comes with the numbers describing what it cost to compute.
//!
//! Core flow
//! - Provide a `greenpack_model::model::Model<T>` (validated by construction).
//! - Run `dp::DpSolver::solve`, or the `dp::solve` convenience entry for raw
//!   value/cost slices.
//! - Read the `Selection<T>` and `DpSolverStatistics` off the outcome.
//!
//! Design highlights
//! - Deterministic output: on ties between including and excluding an item,
//!   the solver prefers excluding, so equally optimal instances always
//!   reproduce the same selection.
//! - Tight inner loop: the table is a single flat vector, row-major, and the
//!   sweep reads exactly one row behind the one it writes.
//! - Pure computation: each call owns its table; no shared state across
//!   calls, safe to invoke concurrently from independent call sites.
//!
//! Assumptions and guarantees
//! - The model guarantees non-negative costs and budget; the solver returns
//!   the true optimum within `T`'s range (value sums saturate at `T::MAX`).
//! - Time and space are `O(n * budget)`; callers bound the product via
//!   `Model::complexity` before solving. The solver fails fast only when the
//!   cell count does not fit the address space.
//!
//! Module map
//! - `dp`: the solver engine and the slice-based convenience entry.
//! - `exhaustive`: a brute-force reference strategy for small instances.
//! - `num`: the `PlanNumeric` trait alias collecting the integer bounds.
//! - `result`: solver outcome carrying the selection and statistics.
//! - `stats`: lightweight counters/timing.
//! - `error`: fail-fast error taxonomy.

pub mod dp;
pub mod error;
pub mod exhaustive;
pub mod num;
pub mod result;
pub mod stats;
mod table;
