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

use plot_alloc_model::prelude::{Assignment, Score, Weight};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 24-bit ANSI foreground escape.
    #[inline]
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Green for a first choice, through yellow to orange at `happy_range`, red
/// for anything ranked worse.
pub fn colour_for_score(score: Weight, happy_range: usize) -> Rgb {
    let score = score.max(1) as usize;
    let happy_range = happy_range.max(1);

    if score > happy_range {
        return Rgb::new(255, 0, 0);
    }

    let t = if happy_range == 1 {
        0.0
    } else {
        (score - 1) as f64 / (happy_range - 1) as f64
    };

    if t < 0.5 {
        let f = t / 0.5;
        Rgb::new((255.0 * f) as u8, 255, 0)
    } else {
        let f = (t - 0.5) / 0.5;
        Rgb::new(255, (255.0 - 127.0 * f) as u8, 0)
    }
}

fn boxed(lines: &[String]) -> String {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(width));
    out.push_str("┐\n");
    for l in lines {
        out.push('│');
        out.push_str(l);
        out.push_str(&" ".repeat(width - l.chars().count()));
        out.push_str("│\n");
    }
    out.push('└');
    out.push_str(&"─".repeat(width));
    out.push_str("┘\n");
    out
}

pub fn render_summary(score: &Score) -> String {
    boxed(&[
        " Optimized for: Plot Priority ".to_string(),
        format!(" Total Score: {} ", score.total()),
        format!(" Happy Players: {} ", score.best()),
        format!(" Pleased Players: {} ", score.mid()),
        format!(" Sad Players: {} ", score.worst()),
    ])
}

pub fn render_cheaters(cheaters: &[String]) -> String {
    if cheaters.is_empty() {
        return "No cheaters detected.\n".to_string();
    }
    let mut lines = vec![" Cheaters ".to_string()];
    lines.extend(cheaters.iter().map(|c| format!(" - {c} ")));
    boxed(&lines)
}

/// Marker shown instead of the score when a participant got a plot they
/// expressed nothing for.
pub const NO_PREFERENCE_MARKER: &str = "none";

/// Assignment table sorted by plot. Colour codes are only emitted when
/// `colour` is set.
pub fn render_table(
    assignments: &[Assignment],
    plot_count: usize,
    happy_range: usize,
    colour: bool,
) -> String {
    let mut rows: Vec<&Assignment> = assignments.iter().collect();
    rows.sort_by_key(|a| a.plot());

    let player_w = rows
        .iter()
        .map(|a| a.participant().chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());
    let plot_w = rows
        .iter()
        .map(|a| a.plot().into_inner().to_string().len())
        .max()
        .unwrap_or(0)
        .max("Plot".len());
    let prio_w = "Priority".len();
    let inner = player_w + plot_w + prio_w + 8;

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(inner)));
    out.push_str(&format!(
        "│ {:<player_w$} │ {:<plot_w$} │ {:<prio_w$} │\n",
        "Player", "Plot", "Priority"
    ));
    out.push_str(&format!(
        "├{}┼{}┼{}┤\n",
        "─".repeat(player_w + 2),
        "─".repeat(plot_w + 2),
        "─".repeat(prio_w + 2)
    ));

    for a in rows {
        let label = if a.score() as usize == plot_count {
            NO_PREFERENCE_MARKER.to_string()
        } else {
            a.score().to_string()
        };
        let cell = format!("{:<prio_w$}", label);
        let cell = if colour {
            format!(
                "{}{}{}",
                colour_for_score(a.score(), happy_range).ansi_fg(),
                cell,
                RESET
            )
        } else {
            cell
        };
        let pad = player_w - a.participant().chars().count();
        out.push_str(&format!(
            "│ {}{} │ {:<plot_w$} │ {} │\n",
            a.participant(),
            " ".repeat(pad),
            a.plot().into_inner(),
            cell
        ));
    }

    out.push_str(&format!("└{}┘\n", "─".repeat(inner)));
    out
}
