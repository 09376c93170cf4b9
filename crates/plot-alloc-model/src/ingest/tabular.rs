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

use crate::{
    ingest::err::{DuplicatePlotColumnError, IngestError, PlotColumnOutOfRangeError},
    problem::{
        participant::{FlagReason, Participant},
        plot::{PlotIdentifier, Weight},
        pref::PreferenceSet,
        roster::Roster,
    },
};
use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// A header column that names a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotColumn {
    index: usize,
    plot: PlotIdentifier,
}

impl PlotColumn {
    #[inline]
    pub fn new(index: usize, plot: PlotIdentifier) -> Self {
        Self { index, plot }
    }

    /// Position of the column in the row, column 0 being the participant name.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }
}

/// Reads preferences from an untrusted sheet export.
///
/// Row 0 is the header: column 0 is ignored, every other column whose header
/// parses as a positive integer is a plot column. Each following row is one
/// participant with the name in column 0. The number of plot columns is the
/// plot count `P`, which is also the "no preference" sentinel weight.
///
/// A row is thrown out as a whole (the participant is flagged and keeps no
/// preferences) as soon as it contains a weight outside
/// `[min_weight, max_weight]` or repeats a weight. The sentinel is exempt from
/// both checks, and blank or unparseable cells count as the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularIngestor {
    min_weight: Weight,
    max_weight: Weight,
}

impl Default for TabularIngestor {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 50,
        }
    }
}

impl TabularIngestor {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights start at 1; smaller values are raised to 1.
    #[inline]
    pub fn min_weight(mut self, v: Weight) -> Self {
        self.min_weight = v.max(1);
        self
    }

    #[inline]
    pub fn max_weight(mut self, v: Weight) -> Self {
        self.max_weight = v;
        self
    }

    #[inline]
    pub fn weight_range(&self) -> (Weight, Weight) {
        (self.min_weight, self.max_weight)
    }

    pub fn parse_header<C: AsRef<str>>(&self, header: &[C]) -> Result<Vec<PlotColumn>, IngestError> {
        let columns: Vec<PlotColumn> = header
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, cell)| match cell.as_ref().trim().parse::<u32>() {
                Ok(n) if n > 0 => Some(PlotColumn::new(i, PlotIdentifier::new(n))),
                _ => None,
            })
            .collect();

        if columns.is_empty() {
            return Err(IngestError::NoPlotColumns);
        }

        let plot_count = columns.len();
        let mut seen = HashSet::with_capacity(plot_count);
        for c in columns.iter() {
            if !c.plot.is_within(plot_count) {
                return Err(PlotColumnOutOfRangeError::new(c.plot, c.index, plot_count))?;
            }
            if !seen.insert(c.plot) {
                return Err(DuplicatePlotColumnError::new(c.plot, c.index))?;
            }
        }

        Ok(columns)
    }

    /// Turns one data row into a participant, applying the validation policy.
    pub fn ingest_row<C: AsRef<str>>(
        &self,
        name: &str,
        cells: &[C],
        columns: &[PlotColumn],
        plot_count: usize,
    ) -> Participant {
        let sentinel = plot_count as i64;
        let (lo, hi) = (self.min_weight as i64, self.max_weight as i64);

        let mut seen: HashSet<i64> = HashSet::with_capacity(columns.len());
        let mut preferences = PreferenceSet::new();

        for column in columns {
            // Short rows: trailing cells that are not there express nothing.
            let Some(cell) = cells.get(column.index) else {
                continue;
            };
            let weight = cell.as_ref().trim().parse::<i64>().unwrap_or(sentinel);

            if weight != sentinel {
                let reason = if weight < lo || weight > hi {
                    Some(FlagReason::WeightOutOfRange {
                        plot: column.plot,
                        weight,
                    })
                } else if !seen.insert(weight) {
                    Some(FlagReason::DuplicateWeight {
                        plot: column.plot,
                        weight,
                    })
                } else {
                    None
                };

                if let Some(reason) = reason {
                    tracing::warn!(
                        participant = name,
                        plot = %column.plot,
                        weight,
                        "Discarding preferences: {}",
                        reason
                    );
                    return Participant::flagged(name, reason);
                }
            }

            preferences.insert(column.plot, weight as Weight);
        }

        Participant::new(name, preferences)
    }

    pub fn from_grid<R, C>(&self, grid: &[R]) -> Result<Roster, IngestError>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let Some((header, rows)) = grid.split_first() else {
            return Err(IngestError::EmptySource);
        };

        let columns = self.parse_header(header.as_ref())?;
        if rows.is_empty() {
            return Err(IngestError::MissingParticipantRows);
        }

        let plot_count = columns.len();
        let mut participants = Vec::with_capacity(rows.len());
        for row in rows {
            let cells = row.as_ref();
            let name = cells.first().map(|c| c.as_ref().trim()).unwrap_or("");
            if name.is_empty() {
                continue;
            }
            participants.push(self.ingest_row(name, cells, &columns, plot_count));
        }

        let flagged = participants.iter().filter(|p| p.is_flagged()).count();
        tracing::debug!(
            plots = plot_count,
            participants = participants.len(),
            flagged,
            "Ingested tabular roster"
        );

        Ok(Roster::new(plot_count, participants)?)
    }

    pub fn from_reader<R: Read>(&self, r: R) -> Result<Roster, IngestError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(r);

        let mut grid: Vec<Vec<String>> = Vec::new();
        for record in rdr.records() {
            let record = record?;
            grid.push(record.iter().map(|c| c.to_string()).collect());
        }
        self.from_grid(&grid)
    }

    #[inline]
    pub fn from_csv_str(&self, s: &str) -> Result<Roster, IngestError> {
        self.from_reader(s.as_bytes())
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Roster, IngestError> {
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[inline]
    fn pid(n: u32) -> PlotIdentifier {
        PlotIdentifier::new(n)
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_clean_rows_are_passed_through() {
        let g = grid(&[
            &["Name", "1", "2", "3"],
            &["A", "1", "2", "3"],
            &["B", "2", "1", "3"],
        ]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        assert_eq!(r.plot_count(), 3);
        assert_eq!(r.len(), 2);
        let a = r.participant(0).unwrap();
        assert_eq!(a.name(), "A");
        assert!(!a.is_flagged());
        assert_eq!(a.weight_for(pid(2)), Some(2));
        assert_eq!(r.participant(1).unwrap().weight_for(pid(2)), Some(1));
    }

    #[test]
    fn test_duplicate_weight_flags_participant() {
        let g = grid(&[&["", "1", "2", "3"], &["D", "2", "2", "1"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        let d = r.participant(0).unwrap();
        assert!(d.is_flagged());
        assert!(d.preferences().is_empty());
        assert_eq!(
            d.flag_reason(),
            Some(FlagReason::DuplicateWeight {
                plot: pid(2),
                weight: 2
            })
        );
    }

    #[test]
    fn test_sentinel_may_repeat() {
        let g = grid(&[&["", "1", "2", "3"], &["A", "3", "3", "1"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        let a = r.participant(0).unwrap();
        assert!(!a.is_flagged());
        assert_eq!(a.weight_for(pid(1)), Some(3));
        assert_eq!(a.weight_for(pid(3)), Some(1));
    }

    #[test]
    fn test_blank_and_garbage_cells_default_to_sentinel() {
        let g = grid(&[&["", "1", "2", "3", "4"], &["A", "", "x", "1", " "]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        let a = r.participant(0).unwrap();
        assert!(!a.is_flagged());
        assert_eq!(a.weight_for(pid(1)), Some(4));
        assert_eq!(a.weight_for(pid(2)), Some(4));
        assert_eq!(a.weight_for(pid(3)), Some(1));
        assert_eq!(a.weight_for(pid(4)), Some(4));
    }

    #[test]
    fn test_out_of_range_weights_flag_participant() {
        let g = grid(&[&["", "1", "2", "3"], &["Hi", "51", "1", "2"], &["Lo", "1", "0", "2"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        assert_eq!(
            r.participant(0).unwrap().flag_reason(),
            Some(FlagReason::WeightOutOfRange {
                plot: pid(1),
                weight: 51
            })
        );
        assert_eq!(
            r.participant(1).unwrap().flag_reason(),
            Some(FlagReason::WeightOutOfRange {
                plot: pid(2),
                weight: 0
            })
        );
    }

    #[test]
    fn test_custom_weight_range() {
        let g = grid(&[&["", "1", "2", "3"], &["A", "5", "1", "3"]]);
        let r = TabularIngestor::new().max_weight(4).from_grid(&g).unwrap();
        assert!(r.participant(0).unwrap().is_flagged());
        assert_eq!(TabularIngestor::new().min_weight(0).weight_range(), (1, 50));
    }

    #[test]
    fn test_blank_name_rows_are_skipped() {
        let g = grid(&[&["", "1", "2"], &["", "1", "2"], &["  ", "1"], &["B", "1", "2"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.participant(0).unwrap().name(), "B");
    }

    #[test]
    fn test_non_numeric_headers_are_not_plot_columns() {
        let g = grid(&[&["Name", "1", "notes", "2", "0"], &["A", "2", "whatever", "1", "9"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        assert_eq!(r.plot_count(), 2);
        let a = r.participant(0).unwrap();
        assert_eq!(a.preferences().len(), 2);
        assert_eq!(a.weight_for(pid(2)), Some(1));
    }

    #[test]
    fn test_short_row_leaves_trailing_plots_unranked() {
        let g = grid(&[&["", "1", "2", "3"], &["A", "1"]]);
        let r = TabularIngestor::new().from_grid(&g).unwrap();
        let a = r.participant(0).unwrap();
        assert_eq!(a.preferences().len(), 1);
        assert_eq!(a.weight_for(pid(3)), None);
    }

    #[test]
    fn test_sentinel_above_max_weight_is_not_flagged() {
        let header: Vec<String> = std::iter::once(String::new())
            .chain((1..=52).map(|i| i.to_string()))
            .collect();
        let mut row = vec!["A".to_string(), "1".to_string()];
        row.extend(std::iter::repeat_n(String::new(), 51));
        let r = TabularIngestor::new().from_grid(&[header, row]).unwrap();
        let a = r.participant(0).unwrap();
        assert!(!a.is_flagged());
        assert_eq!(a.weight_for(pid(52)), Some(52));
    }

    #[test]
    fn test_structural_errors() {
        let ing = TabularIngestor::new();
        let empty: Vec<Vec<String>> = Vec::new();
        assert!(matches!(ing.from_grid(&empty), Err(IngestError::EmptySource)));
        assert!(matches!(
            ing.from_grid(&grid(&[&["Name", "x"], &["A", "1"]])),
            Err(IngestError::NoPlotColumns)
        ));
        assert!(matches!(
            ing.from_grid(&grid(&[&["Name", "1", "2"]])),
            Err(IngestError::MissingParticipantRows)
        ));
    }

    #[test]
    fn test_inconsistent_headers_are_rejected() {
        let ing = TabularIngestor::new();
        match ing.from_grid(&grid(&[&["", "1", "1"], &["A", "1", "2"]])) {
            Err(IngestError::DuplicatePlotColumn(e)) => {
                assert_eq!(e.plot(), pid(1));
                assert_eq!(e.column(), 2);
            }
            other => panic!("expected DuplicatePlotColumn, got {other:?}"),
        }
        match ing.from_grid(&grid(&[&["", "1", "5"], &["A", "1", "2"]])) {
            Err(IngestError::PlotColumnOutOfRange(e)) => {
                assert_eq!(e.plot(), pid(5));
                assert_eq!(e.plot_count(), 2);
            }
            other => panic!("expected PlotColumnOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_participant_names_fail_the_run() {
        let g = grid(&[&["", "1", "2"], &["A", "1", "2"], &["A", "2", "1"]]);
        assert!(matches!(
            TabularIngestor::new().from_grid(&g),
            Err(IngestError::Roster(_))
        ));
    }

    #[test]
    fn test_from_csv_str_handles_quotes_and_ragged_rows() {
        let csv = "Name,1,2,3\n\"Doe, J\",1,2\nB,3,1,2\n";
        let r = TabularIngestor::new().from_csv_str(csv).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.participant(0).unwrap().name(), "Doe, J");
        assert_eq!(r.participant(0).unwrap().weight_for(pid(3)), None);
        assert_eq!(r.participant(1).unwrap().weight_for(pid(2)), Some(1));
    }

    #[test]
    fn test_empty_csv_is_structural_error() {
        assert!(matches!(
            TabularIngestor::new().from_csv_str(""),
            Err(IngestError::EmptySource)
        ));
    }

    #[test]
    fn test_from_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "Name,1,2").unwrap();
        writeln!(f, "A,2,1").unwrap();
        let r = TabularIngestor::new().from_path(f.path()).unwrap();
        assert_eq!(r.plot_count(), 2);
        assert_eq!(r.participant(0).unwrap().weight_for(pid(2)), Some(1));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            TabularIngestor::new().from_path("/definitely/not/here.csv"),
            Err(IngestError::Io(_))
        ));
    }
}
