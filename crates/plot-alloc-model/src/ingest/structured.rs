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
    ingest::err::{IngestError, InvalidPlotKeyError},
    problem::{
        participant::Participant,
        plot::{PlotIdentifier, Weight},
        pref::PreferenceSet,
        roster::Roster,
    },
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

/// Trusted participant entry. Keys of `weights` are plot numbers; they are kept
/// as strings because TOML tables only have string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub name: String,
    #[serde(default)]
    pub weights: BTreeMap<String, Weight>,
}

impl ParticipantConfig {
    pub fn to_participant(&self) -> Result<Participant, IngestError> {
        let mut prefs = PreferenceSet::new();
        for (key, &weight) in self.weights.iter() {
            let plot = key
                .trim()
                .parse::<u32>()
                .map_err(|_| InvalidPlotKeyError::new(&self.name, key))?;
            prefs.insert(PlotIdentifier::new(plot), weight);
        }
        Ok(Participant::new(self.name.clone(), prefs))
    }
}

/// Trusted roster document: `{ plots, participants: [{ name, weights }] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub plots: usize,
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

impl RosterConfig {
    /// Preferences are taken as-is; nobody is flagged.
    pub fn to_roster(&self) -> Result<Roster, IngestError> {
        let participants = self
            .participants
            .iter()
            .map(ParticipantConfig::to_participant)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Roster::new(self.plots, participants)?)
    }

    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            plots: roster.plot_count(),
            participants: roster
                .iter()
                .map(|p| ParticipantConfig {
                    name: p.name().to_string(),
                    weights: p
                        .preferences()
                        .iter()
                        .map(|(plot, w)| (plot.into_inner().to_string(), w))
                        .collect(),
                })
                .collect(),
        }
    }

    #[inline]
    pub fn to_json_string(&self) -> Result<String, IngestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[inline]
    pub fn to_toml_string(&self) -> Result<String, IngestError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredLoader;

impl StructuredLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn from_json_str(&self, s: &str) -> Result<Roster, IngestError> {
        let cfg: RosterConfig = serde_json::from_str(s)?;
        cfg.to_roster()
    }

    #[inline]
    pub fn from_toml_str(&self, s: &str) -> Result<Roster, IngestError> {
        let cfg: RosterConfig = toml::from_str(s)?;
        cfg.to_roster()
    }

    /// Picks the format from the file extension (`.json` or `.toml`).
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Roster, IngestError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => self.from_json_str(&fs::read_to_string(path)?),
            Some("toml") => self.from_toml_str(&fs::read_to_string(path)?),
            _ => Err(IngestError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
