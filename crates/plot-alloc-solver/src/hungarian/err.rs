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

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoAugmentingPathError {
    row: usize,
}

impl NoAugmentingPathError {
    #[inline]
    pub fn new(row: usize) -> Self {
        Self { row }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }
}

impl std::fmt::Display for NoAugmentingPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No augmenting path found for row {}", self.row)
    }
}

impl std::error::Error for NoAugmentingPathError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostOverflowError {
    row: usize,
    col: usize,
}

impl CostOverflowError {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for CostOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arithmetic overflow while reducing cell ({}, {})",
            self.row, self.col
        )
    }
}

impl std::error::Error for CostOverflowError {}

/// Both variants mean the input broke the solver's assumptions; a square
/// matrix of finite costs in range always has a perfect matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SolveError {
    NoAugmentingPath(NoAugmentingPathError),
    Overflow(CostOverflowError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NoAugmentingPath(e) => write!(f, "{e}"),
            SolveError::Overflow(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<NoAugmentingPathError> for SolveError {
    fn from(e: NoAugmentingPathError) -> Self {
        Self::NoAugmentingPath(e)
    }
}

impl From<CostOverflowError> for SolveError {
    fn from(e: CostOverflowError) -> Self {
        Self::Overflow(e)
    }
}
