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

use crate::problem::plot::{PlotIdentifier, Weight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse plot -> weight map. A plot without an entry means "no opinion".
#[repr(transparent)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferenceSet(BTreeMap<PlotIdentifier, Weight>);

impl PreferenceSet {
    #[inline]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the previous weight if the plot was already ranked.
    #[inline]
    pub fn insert(&mut self, plot: PlotIdentifier, weight: Weight) -> Option<Weight> {
        self.0.insert(plot, weight)
    }

    #[inline]
    pub fn weight_for(&self, plot: PlotIdentifier) -> Option<Weight> {
        self.0.get(&plot).copied()
    }

    /// Weight for `plot`, or the no-preference sentinel `plot_count`.
    #[inline]
    pub fn weight_or_sentinel(&self, plot: PlotIdentifier, plot_count: usize) -> Weight {
        self.weight_for(plot).unwrap_or(plot_count as Weight)
    }

    #[inline]
    pub fn contains(&self, plot: PlotIdentifier) -> bool {
        self.0.contains_key(&plot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (PlotIdentifier, Weight)> + '_ {
        self.0.iter().map(|(p, w)| (*p, *w))
    }

    #[inline]
    pub fn plots(&self) -> impl Iterator<Item = PlotIdentifier> + '_ {
        self.0.keys().copied()
    }

    /// Number of entries that actually express a preference, i.e. are not the sentinel.
    #[inline]
    pub fn ranked_len(&self, plot_count: usize) -> usize {
        self.0
            .values()
            .filter(|&&w| w as usize != plot_count)
            .count()
    }
}

impl FromIterator<(PlotIdentifier, Weight)> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = (PlotIdentifier, Weight)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(PlotIdentifier, Weight)> for PreferenceSet {
    fn extend<I: IntoIterator<Item = (PlotIdentifier, Weight)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl std::fmt::Display for PreferenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(p, w)| format!("{}: {}", p, w)).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
