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

pub mod err;
pub mod structured;
pub mod tabular;

use crate::{
    ingest::{err::IngestError, structured::RosterConfig, tabular::TabularIngestor},
    problem::roster::Roster,
};

/// Raw preference data as handed over by the roster owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Pre-parsed plot to weight maps. Trusted, never flagged.
    Structured(RosterConfig),
    /// Row 0 is the header, column 0 the participant name.
    Grid(Vec<Vec<String>>),
    /// CSV text with the same layout as [`RosterSource::Grid`].
    Csv(String),
}

impl RosterSource {
    #[inline]
    pub fn is_trusted(&self) -> bool {
        matches!(self, RosterSource::Structured(_))
    }

    pub fn ingest(&self, tabular: &TabularIngestor) -> Result<Roster, IngestError> {
        match self {
            RosterSource::Structured(cfg) => cfg.to_roster(),
            RosterSource::Grid(grid) => tabular.from_grid(grid),
            RosterSource::Csv(text) => tabular.from_csv_str(text),
        }
    }
}

impl From<RosterConfig> for RosterSource {
    fn from(cfg: RosterConfig) -> Self {
        RosterSource::Structured(cfg)
    }
}

impl From<Vec<Vec<String>>> for RosterSource {
    fn from(grid: Vec<Vec<String>>) -> Self {
        RosterSource::Grid(grid)
    }
}
