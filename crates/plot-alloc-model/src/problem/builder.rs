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

use crate::problem::{err::RosterError, participant::Participant, roster::Roster};

#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    plot_count: usize,
    participants: Vec<Participant>,
}

impl RosterBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(participants: usize) -> Self {
        Self {
            plot_count: 0,
            participants: Vec::with_capacity(participants),
        }
    }

    #[inline]
    pub fn with_plot_count(mut self, plot_count: usize) -> Self {
        self.plot_count = plot_count;
        self
    }

    #[inline]
    pub fn with_participants<I>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = Participant>,
    {
        self.participants.clear();
        self.participants.extend(participants);
        self
    }

    #[inline]
    pub fn set_plot_count(&mut self, plot_count: usize) -> &mut Self {
        self.plot_count = plot_count;
        self
    }

    #[inline]
    pub fn add_participant(&mut self, participant: Participant) -> &mut Self {
        self.participants.push(participant);
        self
    }

    #[inline]
    pub fn extend_participants<I>(&mut self, it: I) -> &mut Self
    where
        I: IntoIterator<Item = Participant>,
    {
        self.participants.extend(it);
        self
    }

    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    #[inline]
    pub fn build(self) -> Result<Roster, RosterError> {
        Roster::new(self.plot_count, self.participants)
    }
}
