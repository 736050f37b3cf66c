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

use greenpack_model::error::ModelError;

/// The error type for a solve attempt.
///
/// Either the input never made it into a valid model, or the instance
/// induces a table whose cell count cannot be addressed on this platform.
/// There are no partial results: on error, no selection is produced.
#[derive(Debug)]
pub enum SolveError {
    /// The input data failed model validation.
    Model(ModelError),
    /// The DP table of `cells` cells does not fit the address space.
    ///
    /// This is a fail-fast bound only; instances below it can still exhaust
    /// memory, and bounding `n * budget` remains the caller's job (see
    /// `greenpack_model::model::Complexity`).
    TableTooLarge {
        /// The number of cells the instance would require.
        cells: u128,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(e) => write!(f, "Invalid model: {}", e),
            Self::TableTooLarge { cells } => write!(
                f,
                "DP table of {} cells does not fit the address space",
                cells
            ),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<ModelError> for SolveError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_converts_and_displays() {
        let err: SolveError = ModelError::NegativeBudget.into();
        assert!(matches!(err, SolveError::Model(ModelError::NegativeBudget)));
        assert!(format!("{}", err).contains("budget"));
    }

    #[test]
    fn test_table_too_large_displays_cell_count() {
        let err = SolveError::TableTooLarge { cells: 12345 };
        assert!(format!("{}", err).contains("12345"));
    }
}
