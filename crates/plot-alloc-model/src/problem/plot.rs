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

use crate::common::{Identifier, IdentifierMarkerName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotIdentifierMarker;

impl IdentifierMarkerName for PlotIdentifierMarker {
    const NAME: &'static str = "PlotId";
}

/// 1-based plot number, valid range `[1, P]`.
pub type PlotIdentifier = Identifier<u32, PlotIdentifierMarker>;

/// Rank a participant gives a plot. Lower is more desired.
pub type Weight = u32;

impl Identifier<u32, PlotIdentifierMarker> {
    /// The plot that sits in matrix column `col`.
    #[inline]
    pub fn from_column(col: usize) -> Self {
        Self::new(col as u32 + 1)
    }

    /// Matrix column of this plot. Plot ids start at 1, columns at 0.
    #[inline]
    pub fn column(&self) -> Option<usize> {
        (*self.value() as usize).checked_sub(1)
    }

    #[inline]
    pub fn is_within(&self, plot_count: usize) -> bool {
        let v = *self.value() as usize;
        v >= 1 && v <= plot_count
    }

    #[inline]
    pub fn iter_all(plot_count: usize) -> impl Iterator<Item = PlotIdentifier> {
        (0..plot_count).map(PlotIdentifier::from_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_roundtrip() {
        let p = PlotIdentifier::from_column(0);
        assert_eq!(*p.value(), 1);
        assert_eq!(p.column(), Some(0));
        assert_eq!(PlotIdentifier::new(0).column(), None);
    }

    #[test]
    fn test_is_within_bounds() {
        assert!(PlotIdentifier::new(1).is_within(3));
        assert!(PlotIdentifier::new(3).is_within(3));
        assert!(!PlotIdentifier::new(4).is_within(3));
        assert!(!PlotIdentifier::new(0).is_within(3));
    }

    #[test]
    fn test_iter_all_yields_one_based_ids() {
        let ids: Vec<u32> = PlotIdentifier::iter_all(3).map(|p| p.into_inner()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlotIdentifier::new(5).to_string(), "PlotId(5)");
    }
}
