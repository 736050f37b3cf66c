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

//! # Greenpack Model
//!
//! **The Core Domain Model for the Greenpack Action Planner.**
//!
//! This crate defines the fundamental data structures used to represent a
//! **budgeted action-selection problem** (0/1 knapsack): a set of candidate
//! eco actions, each with a point value and an effort cost, and a budget the
//! chosen subset must not exceed. It serves as the data interchange layer
//! between the problem definition (user input) and the solving engine
//! (`greenpack_dp`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides the strongly-typed `ItemIndex` to prevent logical indexing errors.
//! * **`model`**: Contains the `Model` (immutable, validated) and `ModelBuilder` (mutable, optimized for configuration).
//! * **`selection`**: Defines the output format: the achieved value and the chosen item set.
//! * **`action`** / **`scoring`**: The catalog of loggable eco actions and the point formula that prices them.
//! * **`loading`**: A whitespace-token instance parser for tests, benchmarks, and tooling.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Item positions are a distinct index type; they cannot be confused with raw table offsets.
//! 2.  **Memory Layout**: Values and costs are stored as parallel flat vectors for cache locality during the table sweep.
//! 3.  **Fail-Fast**: `ModelBuilder::build` validates eagerly so the solver never encounters a negative cost or budget.

pub mod action;
pub mod error;
pub mod index;
pub mod loading;
pub mod model;
pub mod scoring;
pub mod selection;
