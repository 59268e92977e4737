//! Text rendering of pipeline views.
//!
//! The pipeline never draws pixels. Finished series go to a [`PlotSurface`]
//! (named histograms and scatter series), and tabular previews come back as
//! plain strings. [`TextSurface`] is the in-repo surface: ASCII bar charts
//! rendered into a `String` buffer.
//!
//! # Examples
//!
//! ```
//! use afinidad::report::{PlotSurface, TextSurface};
//! use afinidad::stats::Histogram;
//!
//! let hist = Histogram {
//!     bins: vec![0.0, 1.0, 2.0],
//!     counts: vec![3, 7],
//! };
//!
//! let mut surface = TextSurface::new();
//! surface.histogram("rating counts", &hist);
//! let out = surface.render();
//! assert!(out.contains("rating counts"));
//! ```

use std::fmt::Write;

use crate::dataset::TitledRating;
use crate::ranking::RankedCorrelation;
use crate::stats::Histogram;
use crate::summary::SummaryTable;

/// External collaborator seam for finished plot series.
///
/// The pipeline hands over complete, named series; what a surface does with
/// them (ASCII art, a GUI widget, a file) is its own business.
pub trait PlotSurface {
    /// Receive a named single-column distribution.
    fn histogram(&mut self, label: &str, histogram: &Histogram);

    /// Receive a named (x, y) series.
    fn scatter(&mut self, label: &str, points: &[(f32, f32)]);
}

/// ASCII bar-chart surface accumulating into a `String` buffer.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: usize,
    output: String,
}

impl TextSurface {
    /// Default bar width of 40 characters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_width(40)
    }

    /// Surface with a custom maximum bar width.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(1),
            output: String::new(),
        }
    }

    /// Everything rendered so far.
    #[must_use]
    pub fn render(&self) -> String {
        self.output.clone()
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotSurface for TextSurface {
    fn histogram(&mut self, label: &str, histogram: &Histogram) {
        let _ = writeln!(self.output, "{label}");
        let max_count = histogram.counts.iter().copied().max().unwrap_or(0);

        for (i, &count) in histogram.counts.iter().enumerate() {
            let lo = histogram.bins[i];
            let hi = histogram.bins[i + 1];
            let close = if i + 1 == histogram.counts.len() {
                ']'
            } else {
                ')'
            };
            let filled = if max_count > 0 {
                (((count as f64 / max_count as f64) * self.width as f64) as usize).min(self.width)
            } else {
                0
            };
            let _ = writeln!(
                self.output,
                "  [{lo:>8.2}, {hi:>8.2}{close} {}{} {count}",
                "█".repeat(filled),
                "░".repeat(self.width - filled),
            );
        }
        self.output.push('\n');
    }

    fn scatter(&mut self, label: &str, points: &[(f32, f32)]) {
        if points.is_empty() {
            let _ = writeln!(self.output, "{label}: 0 points\n");
            return;
        }

        let x_min = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let x_max = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let _ = writeln!(
            self.output,
            "{label}: {} points, x in [{x_min:.2}, {x_max:.2}], y in [{y_min:.2}, {y_max:.2}]\n",
            points.len()
        );
    }
}

/// Renders the first `limit` joined records as a fixed-width table.
#[must_use]
pub fn records_head(records: &[TitledRating], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>7}  {:>7}  {:>6}  {:>10}  title",
        "user_id", "item_id", "rating", "timestamp"
    );
    let _ = writeln!(out, "{}", "─".repeat(56));
    for record in records.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:>7}  {:>7}  {:>6.1}  {:>10}  {}",
            record.user_id, record.item_id, record.rating, record.timestamp, record.title
        );
    }
    out
}

fn summary_rows(rows: &[(&str, &crate::summary::RatingSummary)], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<40}  {:>5}  {:>6}", "title", "mean", "count");
    let _ = writeln!(out, "{}", "─".repeat(56));
    for (title, summary) in rows.iter().take(limit) {
        let _ = writeln!(
            out,
            "{title:<40}  {:>5.2}  {:>6}",
            summary.mean_rating, summary.num_ratings
        );
    }
    out
}

/// Renders the first `limit` summary rows in alphabetical title order.
#[must_use]
pub fn summary_head(summaries: &SummaryTable, limit: usize) -> String {
    let rows: Vec<_> = summaries.iter().collect();
    summary_rows(&rows, limit)
}

/// Renders the `limit` best-rated titles, highest mean first.
#[must_use]
pub fn summary_by_mean(summaries: &SummaryTable, limit: usize) -> String {
    summary_rows(&summaries.sorted_by_mean(), limit)
}

/// Renders the `limit` most-rated titles, highest count first.
#[must_use]
pub fn summary_by_count(summaries: &SummaryTable, limit: usize) -> String {
    summary_rows(&summaries.sorted_by_count(), limit)
}

/// Renders the first `limit` ranked correlations.
#[must_use]
pub fn ranked_head(ranked: &[RankedCorrelation], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<40}  {:>11}  {:>6}",
        "title", "correlation", "count"
    );
    let _ = writeln!(out, "{}", "─".repeat(62));
    for row in ranked.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:<40}  {:>11.4}  {:>6}",
            row.title, row.correlation, row.num_ratings
        );
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
