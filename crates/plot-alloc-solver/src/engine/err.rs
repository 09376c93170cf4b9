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

use crate::hungarian::err::SolveError;
use plot_alloc_model::prelude::{AssignmentValidationError, IngestError};

#[derive(Debug)]
pub enum OptimizeError {
    Ingest(IngestError),
    Solve(SolveError),
    InvalidAssignment(AssignmentValidationError),
}

impl std::fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizeError::Ingest(e) => write!(f, "Failed to ingest roster: {e}"),
            OptimizeError::Solve(e) => write!(f, "Assignment solver failed: {e}"),
            OptimizeError::InvalidAssignment(e) => {
                write!(f, "Solver produced an invalid assignment: {e}")
            }
        }
    }
}

impl std::error::Error for OptimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptimizeError::Ingest(e) => Some(e),
            OptimizeError::Solve(e) => Some(e),
            OptimizeError::InvalidAssignment(e) => Some(e),
        }
    }
}

impl From<IngestError> for OptimizeError {
    fn from(e: IngestError) -> Self {
        Self::Ingest(e)
    }
}

impl From<SolveError> for OptimizeError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl From<AssignmentValidationError> for OptimizeError {
    fn from(e: AssignmentValidationError) -> Self {
        Self::InvalidAssignment(e)
    }
}
