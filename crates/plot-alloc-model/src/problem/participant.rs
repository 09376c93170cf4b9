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

use crate::problem::{
    plot::{PlotIdentifier, Weight},
    pref::PreferenceSet,
};
use serde::{Deserialize, Serialize};

/// Why a submission was thrown out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagReason {
    /// A non-sentinel weight appeared twice in the same row.
    DuplicateWeight { plot: PlotIdentifier, weight: i64 },
    /// A weight outside the accepted range.
    WeightOutOfRange { plot: PlotIdentifier, weight: i64 },
}

impl FlagReason {
    #[inline]
    pub fn plot(&self) -> PlotIdentifier {
        match self {
            FlagReason::DuplicateWeight { plot, .. } => *plot,
            FlagReason::WeightOutOfRange { plot, .. } => *plot,
        }
    }

    #[inline]
    pub fn weight(&self) -> i64 {
        match self {
            FlagReason::DuplicateWeight { weight, .. } => *weight,
            FlagReason::WeightOutOfRange { weight, .. } => *weight,
        }
    }
}

impl std::fmt::Display for FlagReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagReason::DuplicateWeight { plot, weight } => {
                write!(f, "duplicate weight {} at {}", weight, plot)
            }
            FlagReason::WeightOutOfRange { plot, weight } => {
                write!(f, "weight {} out of range at {}", weight, plot)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    preferences: PreferenceSet,
    flag: Option<FlagReason>,
}

impl Participant {
    #[inline]
    pub fn new(name: impl Into<String>, preferences: PreferenceSet) -> Self {
        Self {
            name: name.into(),
            preferences,
            flag: None,
        }
    }

    /// A participant whose submission failed validation. Their preferences are
    /// discarded, so every plot costs them the sentinel.
    #[inline]
    pub fn flagged(name: impl Into<String>, reason: FlagReason) -> Self {
        Self {
            name: name.into(),
            preferences: PreferenceSet::new(),
            flag: Some(reason),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    #[inline]
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    #[inline]
    pub fn flag_reason(&self) -> Option<FlagReason> {
        self.flag
    }

    #[inline]
    pub fn weight_for(&self, plot: PlotIdentifier) -> Option<Weight> {
        self.preferences.weight_for(plot)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.flag {
            Some(reason) => write!(f, "Participant {} (flagged: {})", self.name, reason),
            None => write!(f, "Participant {} {}", self.name, self.preferences),
        }
    }
}
