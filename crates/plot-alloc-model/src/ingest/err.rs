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

use crate::problem::{err::RosterError, plot::PlotIdentifier};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicatePlotColumnError {
    plot: PlotIdentifier,
    column: usize,
}

impl DuplicatePlotColumnError {
    #[inline]
    pub fn new(plot: PlotIdentifier, column: usize) -> Self {
        Self { plot, column }
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for DuplicatePlotColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Header column {} repeats {} declared by an earlier column",
            self.column, self.plot
        )
    }
}

impl std::error::Error for DuplicatePlotColumnError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlotColumnOutOfRangeError {
    plot: PlotIdentifier,
    column: usize,
    plot_count: usize,
}

impl PlotColumnOutOfRangeError {
    #[inline]
    pub fn new(plot: PlotIdentifier, column: usize, plot_count: usize) -> Self {
        Self {
            plot,
            column,
            plot_count,
        }
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn plot_count(&self) -> usize {
        self.plot_count
    }
}

impl std::fmt::Display for PlotColumnOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Header column {} declares {} but the sheet only has {} plot columns",
            self.column, self.plot, self.plot_count
        )
    }
}

impl std::error::Error for PlotColumnOutOfRangeError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidPlotKeyError {
    participant: String,
    key: String,
}

impl InvalidPlotKeyError {
    #[inline]
    pub fn new(participant: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            key: key.into(),
        }
    }

    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for InvalidPlotKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Participant {} uses {:?} as a plot number",
            self.participant, self.key
        )
    }
}

impl std::error::Error for InvalidPlotKeyError {}

#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    TomlSerialize(toml::ser::Error),
    UnsupportedFormat(PathBuf),
    EmptySource,
    NoPlotColumns,
    MissingParticipantRows,
    DuplicatePlotColumn(DuplicatePlotColumnError),
    PlotColumnOutOfRange(PlotColumnOutOfRangeError),
    InvalidPlotKey(InvalidPlotKeyError),
    Roster(RosterError),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "I/O error: {}", e),
            IngestError::Csv(e) => write!(f, "CSV error: {}", e),
            IngestError::Json(e) => write!(f, "JSON error: {}", e),
            IngestError::Toml(e) => write!(f, "TOML error: {}", e),
            IngestError::TomlSerialize(e) => write!(f, "TOML error: {}", e),
            IngestError::UnsupportedFormat(p) => write!(
                f,
                "Unsupported roster format for {} (expected .json or .toml)",
                p.display()
            ),
            IngestError::EmptySource => write!(f, "The tabular source is empty."),
            IngestError::NoPlotColumns => {
                write!(f, "The header row does not declare any plot columns.")
            }
            IngestError::MissingParticipantRows => {
                write!(f, "The tabular source has a header row but no participant rows.")
            }
            IngestError::DuplicatePlotColumn(e) => write!(f, "{}", e),
            IngestError::PlotColumnOutOfRange(e) => write!(f, "{}", e),
            IngestError::InvalidPlotKey(e) => write!(f, "{}", e),
            IngestError::Roster(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(e) => Some(e),
            IngestError::Csv(e) => Some(e),
            IngestError::Json(e) => Some(e),
            IngestError::Toml(e) => Some(e),
            IngestError::TomlSerialize(e) => Some(e),
            IngestError::Roster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err)
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::Csv(err)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Json(err)
    }
}

impl From<toml::de::Error> for IngestError {
    fn from(err: toml::de::Error) -> Self {
        IngestError::Toml(err)
    }
}

impl From<toml::ser::Error> for IngestError {
    fn from(err: toml::ser::Error) -> Self {
        IngestError::TomlSerialize(err)
    }
}

impl From<DuplicatePlotColumnError> for IngestError {
    fn from(err: DuplicatePlotColumnError) -> Self {
        IngestError::DuplicatePlotColumn(err)
    }
}

impl From<PlotColumnOutOfRangeError> for IngestError {
    fn from(err: PlotColumnOutOfRangeError) -> Self {
        IngestError::PlotColumnOutOfRange(err)
    }
}

impl From<InvalidPlotKeyError> for IngestError {
    fn from(err: InvalidPlotKeyError) -> Self {
        IngestError::InvalidPlotKey(err)
    }
}

impl From<RosterError> for IngestError {
    fn from(err: RosterError) -> Self {
        IngestError::Roster(err)
    }
}
