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

//! Point scoring for logged actions.
//!
//! The formula is `base_points + floor(distance_km * DISTANCE_FACTOR) + bonus`:
//! distance contributes only when positive, and tree planting earns a flat
//! high-impact bonus on top of its base award. The result of this formula is
//! what the planner uses as an item's value.

use crate::action::ActionKind;

/// Points awarded per kilometer of logged distance.
pub const DISTANCE_FACTOR: f64 = 1.0;

/// Flat bonus for high-impact actions (currently only tree planting).
pub const TREE_PLANTING_BONUS: i64 = 10;

/// Computes the points awarded for logging one action.
///
/// `distance_km` only applies to actions where a distance makes sense
/// (e.g., cycling); zero, negative, or absent distances contribute nothing.
/// The distance contribution is floored, so partial kilometers never award
/// partial points.
///
/// # Examples
///
/// ```rust
/// # use greenpack_model::{action::ActionKind, scoring::compute_points};
///
/// // 10 base points + floor(4.7 km)
/// assert_eq!(compute_points(ActionKind::Cycling, Some(4.7)), 14);
///
/// // 20 base points + 10 planting bonus
/// assert_eq!(compute_points(ActionKind::TreePlanting, None), 30);
/// ```
pub fn compute_points(kind: ActionKind, distance_km: Option<f64>) -> i64 {
    let mut points = kind.base_points();

    if let Some(distance) = distance_km {
        if distance > 0.0 {
            points += (distance * DISTANCE_FACTOR).floor() as i64;
        }
    }

    if kind == ActionKind::TreePlanting {
        points += TREE_PLANTING_BONUS;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points_without_distance() {
        assert_eq!(compute_points(ActionKind::Cycling, None), 10);
        assert_eq!(compute_points(ActionKind::Recycling, None), 15);
        assert_eq!(compute_points(ActionKind::ReusableBag, None), 5);
    }

    #[test]
    fn test_distance_is_floored() {
        assert_eq!(compute_points(ActionKind::Cycling, Some(4.0)), 14);
        assert_eq!(compute_points(ActionKind::Cycling, Some(4.99)), 14);
        assert_eq!(compute_points(ActionKind::Cycling, Some(5.0)), 15);
    }

    #[test]
    fn test_zero_or_negative_distance_contributes_nothing() {
        assert_eq!(compute_points(ActionKind::Cycling, Some(0.0)), 10);
        assert_eq!(compute_points(ActionKind::Cycling, Some(-3.2)), 10);
    }

    #[test]
    fn test_tree_planting_bonus() {
        assert_eq!(compute_points(ActionKind::TreePlanting, None), 30);
        // The bonus stacks with a logged distance (e.g., a planting hike).
        assert_eq!(compute_points(ActionKind::TreePlanting, Some(2.5)), 32);
    }
}
