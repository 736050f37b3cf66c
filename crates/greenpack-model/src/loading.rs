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

//! Instance loader for the budgeted action-selection domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Model`, mapping an item count, a budget, and parallel value/cost rows
//! into the compact layout consumed by the solver.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//! Lines may contain comments introduced by `#`, which are ignored during
//! tokenization. Model-level validation (negative costs, negative budget) is
//! delegated to `Model::from_parts`, so the loader reports exactly the same
//! errors a programmatic caller would see.

use crate::{error::ModelError, model::Model};
use num_traits::{PrimInt, Signed};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The item count could not be represented as a `usize`.
    InvalidDimensions,
    /// The parsed data failed model validation.
    Model(ModelError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidDimensions => {
                write!(f, "The item count must fit into a usize")
            }
            Self::Model(e) => write!(f, "Invalid instance: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelError> for InstanceLoadError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// A configurable loader for planning instances.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// N            # number of items
/// B            # budget
/// v_1 ... v_N  # item values
/// c_1 ... c_N  # item costs
/// ```
///
/// # Configuration
/// * `fail_on_empty`: If true, the loader rejects instances with `N == 0`.
///   Empty instances are legal input for the solver (the answer is the empty
///   selection), so this defaults to false; it exists for callers that treat
///   an empty instance as a data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstanceLoader {
    fail_on_empty: bool,
}

impl InstanceLoader {
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether to return an error for instances with no items.
    #[inline]
    pub fn fail_on_empty(mut self, yes: bool) -> Self {
        self.fail_on_empty = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        R: BufRead,
    {
        let mut sc = Scanner::new(rdr);

        let n_val: T = sc.next()?;
        let n = n_val
            .to_usize()
            .ok_or(InstanceLoadError::InvalidDimensions)?;

        if self.fail_on_empty && n == 0 {
            return Err(InstanceLoadError::InvalidDimensions);
        }

        let budget: T = sc.next()?;

        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(sc.next()?);
        }

        let mut costs = Vec::with_capacity(n);
        for _ in 0..n {
            costs.push(sc.next()?);
        }

        Ok(Model::from_parts(values, costs, budget)?)
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Model<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
    {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Refills the token queue from the next non-blank line.
    /// Returns `Ok(false)` on EOF.
    fn fill_tokens(&mut self) -> Result<bool, InstanceLoadError> {
        while self.tokens.is_empty() {
            self.line.clear();
            let n = self.rdr.read_line(&mut self.line)?;
            if n == 0 {
                return Ok(false);
            }

            // Everything after '#' is a comment.
            let content = match self.line.find('#') {
                Some(pos) => &self.line[..pos],
                None => self.line.as_str(),
            };

            self.tokens
                .extend(content.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, InstanceLoadError>
    where
        T: FromStr,
    {
        if !self.fill_tokens()? {
            return Err(InstanceLoadError::UnexpectedEof);
        }

        // fill_tokens only returns true with at least one token queued.
        let token = self.tokens.pop_front().expect("token queue is empty");

        token.parse::<T>().map_err(|_| {
            InstanceLoadError::Parse(ParseTokenError {
                token,
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ItemIndex;

    const SMALL_INSTANCE: &str = r#"
        3           # N=3 items
        50          # budget
        60 100 120  # values
        10 20 30    # costs
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = InstanceLoader::new();
        let model: Model<i64> = loader.from_str(SMALL_INSTANCE).expect("Failed to load");

        assert_eq!(model.num_items(), 3);
        assert_eq!(model.budget(), 50);
        assert_eq!(model.values(), &[60, 100, 120]);
        assert_eq!(model.costs(), &[10, 20, 30]);
    }

    #[test]
    fn test_empty_instance_is_legal_by_default() {
        let model: Model<i64> = InstanceLoader::new().from_str("0 10").expect("Failed to load");
        assert_eq!(model.num_items(), 0);
        assert_eq!(model.budget(), 10);
    }

    #[test]
    fn test_fail_on_empty() {
        let loader = InstanceLoader::new().fail_on_empty(true);
        let res: Result<Model<i64>, _> = loader.from_str("0 10");
        assert!(matches!(res, Err(InstanceLoadError::InvalidDimensions)));
    }

    #[test]
    fn test_parse_error_structure() {
        let data = "2 10 garbage 2 1 1";
        let res: Result<Model<i64>, _> = InstanceLoader::new().from_str(data);

        match res {
            Err(InstanceLoadError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_truncated_input_is_an_eof_error() {
        let data = "3 50 60 100"; // two of three values, no costs
        let res: Result<Model<i64>, _> = InstanceLoader::new().from_str(data);
        assert!(matches!(res, Err(InstanceLoadError::UnexpectedEof)));
    }

    #[test]
    fn test_model_validation_passes_through() {
        let data = "2 10  1 2  1 -3";
        let res: Result<Model<i64>, _> = InstanceLoader::new().from_str(data);

        match res {
            Err(InstanceLoadError::Model(ModelError::NegativeCost { item })) => {
                assert_eq!(item, ItemIndex::new(1));
            }
            _ => panic!("Expected NegativeCost model error"),
        }
    }
}
