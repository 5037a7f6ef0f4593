//! SVG timeline rendering of weighted intervals.
//!
//! Bars are packed into rows first-fit in `(start, finish)` order, so
//! overlapping intervals land on different rows and a row never holds two
//! bars that share time. Highlighted bars (usually a solved schedule) get a
//! distinct fill.

use crate::config::PlotConfig;
use crate::models::{Interval, Schedule, WeightedInterval};

/// A timeline diagram under construction.
#[derive(Clone, Debug, Default)]
pub struct TimelinePlot {
    bars: Vec<(WeightedInterval, bool)>,
    config: PlotConfig,
}

impl TimelinePlot {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            bars: Vec::new(),
            config,
        }
    }

    /// Add a bar for `weighted`.
    pub fn add(&mut self, weighted: WeightedInterval, highlighted: bool) {
        self.bars.push((weighted, highlighted));
    }

    /// Number of bars added so far.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Render the diagram as a standalone SVG document.
    pub fn plot(&self) -> String {
        let cfg = &self.config;

        let mut order: Vec<usize> = (0..self.bars.len()).collect();
        order.sort_by(|&a, &b| self.bars[a].0.interval().cmp(&self.bars[b].0.interval()));
        let sorted: Vec<Interval> = order
            .iter()
            .map(|&index| self.bars[index].0.interval())
            .collect();
        let rows = pack_rows(&sorted);
        let row_count = rows.iter().max().map_or(0, |&row| row + 1);

        let origin = sorted.first().map_or(0.0, Interval::start);
        let end = sorted
            .iter()
            .map(Interval::finish)
            .fold(origin, f64::max);

        let width = 2.0 * cfg.margin + (end - origin) * cfg.scale;
        let height = 2.0 * cfg.margin + row_count as f64 * cfg.row_height
            + row_count.saturating_sub(1) as f64 * cfg.row_gap;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n"
        ));

        for (&index, &row) in order.iter().zip(&rows) {
            let (weighted, highlighted) = &self.bars[index];
            let x = cfg.margin + (weighted.start() - origin) * cfg.scale;
            let y = cfg.margin + row as f64 * (cfg.row_height + cfg.row_gap);
            let bar_width = weighted.interval().duration() * cfg.scale;
            let fill = if *highlighted {
                &cfg.highlight_fill
            } else {
                &cfg.fill
            };

            svg.push_str(&format!(
                "  <rect x=\"{x}\" y=\"{y}\" width=\"{bar_width}\" height=\"{}\" \
                 fill=\"{}\" stroke=\"{}\"><title>{}</title></rect>\n",
                cfg.row_height,
                escape(fill),
                escape(&cfg.stroke),
                weighted
            ));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" \
                 dominant-baseline=\"central\">{}</text>\n",
                x + bar_width / 2.0,
                y + cfg.row_height / 2.0,
                cfg.font_size,
                weighted.weight()
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Assign each interval a row, first-fit in the given order.
///
/// A row accepts an interval when the row's last interval finishes no later
/// than the new one starts. Callers should pass intervals sorted by start for
/// a compact packing.
pub fn pack_rows(intervals: &[Interval]) -> Vec<usize> {
    let mut row_ends: Vec<f64> = Vec::new();

    intervals
        .iter()
        .map(|interval| {
            match row_ends.iter().position(|&end| end <= interval.start()) {
                Some(row) => {
                    row_ends[row] = interval.finish();
                    row
                }
                None => {
                    row_ends.push(interval.finish());
                    row_ends.len() - 1
                }
            }
        })
        .collect()
}

/// Plot every interval, highlighting the ones chosen by `schedule`.
pub fn plot_schedule<I>(intervals: I, schedule: &Schedule, config: PlotConfig) -> String
where
    I: IntoIterator<Item = WeightedInterval>,
{
    let mut plot = TimelinePlot::new(config);
    for weighted in intervals {
        let highlighted = schedule.contains(&weighted.interval());
        plot.add(weighted, highlighted);
    }
    plot.plot()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
