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

/// One real participant placed on one real plot.
///
/// `score` is the weight the participant gave the plot, or the plot count
/// when they expressed nothing for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    participant: String,
    plot: PlotIdentifier,
    score: Weight,
    #[serde(default)]
    flagged: bool,
}

impl Assignment {
    #[inline]
    pub fn new(participant: impl Into<String>, plot: PlotIdentifier, score: Weight) -> Self {
        Self {
            participant: participant.into(),
            plot,
            score,
            flagged: false,
        }
    }

    #[inline]
    pub fn with_flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }

    #[inline]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        self.plot
    }

    #[inline]
    pub fn score(&self) -> Weight {
        self.score
    }

    #[inline]
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment {} -> {} (score {}{})",
            self.participant,
            self.plot,
            self.score,
            if self.flagged { ", flagged" } else { "" }
        )
    }
}
