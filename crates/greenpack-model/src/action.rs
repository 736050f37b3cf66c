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

//! The catalog of loggable eco actions.
//!
//! Each kind carries a stable string code (used by clients and persisted
//! records) and the base point award it earns when logged. The scoring
//! formula in `scoring` builds on these base awards.

/// A kind of eco-friendly action a user can log.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ActionKind {
    /// Riding a bike instead of driving.
    Cycling,
    /// Planting a tree.
    TreePlanting,
    /// Recycling plastic waste.
    Recycling,
    /// Using a reusable bag instead of a disposable one.
    ReusableBag,
}

impl ActionKind {
    /// All action kinds, in catalog order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Cycling,
        ActionKind::TreePlanting,
        ActionKind::Recycling,
        ActionKind::ReusableBag,
    ];

    /// Returns the stable string code for this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::action::ActionKind;
    ///
    /// assert_eq!(ActionKind::TreePlanting.code(), "plant_tree");
    /// ```
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ActionKind::Cycling => "ride_bike",
            ActionKind::TreePlanting => "plant_tree",
            ActionKind::Recycling => "recycle_plastic",
            ActionKind::ReusableBag => "reusable_bag",
        }
    }

    /// Returns the base point award for logging one action of this kind.
    #[inline]
    pub const fn base_points(&self) -> i64 {
        match self {
            ActionKind::Cycling => 10,
            ActionKind::TreePlanting => 20,
            ActionKind::Recycling => 15,
            ActionKind::ReusableBag => 5,
        }
    }

    /// Looks a kind up by its stable string code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use greenpack_model::action::ActionKind;
    ///
    /// assert_eq!(ActionKind::from_code("ride_bike"), Some(ActionKind::Cycling));
    /// assert_eq!(ActionKind::from_code("teleport"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<ActionKind> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
