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

//! # Plan Numeric Trait
//!
//! Unified numeric bounds for the planning solver. `PlanNumeric` specifies
//! the integer capabilities the solver requires, including intrinsic traits
//! (`PrimInt`, `Signed`), conversions, and by-value checked/saturating
//! arithmetic traits from `greenpack_core`.
//!
//! ## Motivation
//!
//! The solver should remain generic over integer types while retaining
//! predictable arithmetic semantics. This trait collects the necessary
//! bounds into a single alias, simplifying generic signatures and ensuring
//! consistent overflow handling and conversions.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed + FromPrimitive` for numeric fundamentals.
//! - Includes the `Zero` constant trait for table initialization.
//! - Adds by-value arithmetic traits: checked add/mul (`Option<T>`) and
//!   saturating add (clamping to type bounds).
//! - Send + Sync so independent solves may run on separate threads.
//!
//! Note: `i128` is intentionally excluded for performance reasons.

use std::hash::Hash;

use greenpack_core::num::{
    constants::Zero,
    ops::{CheckedAddVal, CheckedMulVal, SaturatingAddVal},
};
use num_traits::{FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types that can be used in the solver.
/// This includes integer types that support various arithmetic operations
/// with both saturating and checked semantics.
/// These are usually all signed integer types `i8`, `i16`, `i32`, `i64` and `isize`.
///
/// # Note
///
/// `i128` is intentionally excluded due to performance reasons, as it is
/// significantly slower on many platforms.
pub trait PlanNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + CheckedAddVal
    + CheckedMulVal
    + SaturatingAddVal
    + Send
    + Sync
    + Hash
{
}

impl<T> PlanNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + CheckedAddVal
        + CheckedMulVal
        + SaturatingAddVal
        + Send
        + Sync
        + Hash
{
}
