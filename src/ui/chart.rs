use ratatui::{
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType},
};

use crate::config::MAX_X_LABELS;
use crate::data::SeriesPoint;

/// Retained line-chart state: points plotted by position with dates as
/// category labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateChart {
    points: Vec<(f64, f64)>,
    x_labels: Vec<String>,
    y_bounds: [f64; 2],
    revision: usize,
}

impl RateChart {
    fn new(series: &[SeriesPoint]) -> Self {
        let mut chart = Self::default();
        chart.load(series);
        chart
    }

    fn load(&mut self, series: &[SeriesPoint]) {
        self.points.clear();
        self.points
            .extend(series.iter().enumerate().map(|(i, p)| (i as f64, p.rate)));
        self.x_labels = category_labels(series, MAX_X_LABELS);
        self.y_bounds = value_bounds(&self.points);
        self.revision += 1;
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of times data was loaded into this chart.
    pub fn revision(&self) -> usize {
        self.revision
    }

    pub fn widget<'a>(&'a self, block: Block<'a>, line_color: Color, axis_color: Color) -> Chart<'a> {
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&self.points);

        let [low, high] = self.y_bounds;
        let y_labels = [low, (low + high) / 2.0, high].map(|v| Line::from(format!("{v:.2}")));

        Chart::new(vec![dataset])
            .block(block)
            .legend_position(None)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(axis_color))
                    .bounds(x_bounds(&self.points))
                    .labels(self.x_labels.iter().map(|l| Line::from(l.as_str()))),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(axis_color))
                    .bounds(self.y_bounds)
                    .labels(y_labels),
            )
    }
}

/// Owns the main chart across selection changes: the first call creates it,
/// later calls replace its data in place.
#[derive(Debug, Default)]
pub struct ChartHandle {
    chart: Option<RateChart>,
    created: usize,
}

impl ChartHandle {
    pub fn create_or_update(&mut self, series: &[SeriesPoint]) {
        match self.chart.as_mut() {
            Some(chart) => chart.load(series),
            None => {
                self.chart = Some(RateChart::new(series));
                self.created += 1;
            }
        }
    }

    pub fn chart(&self) -> Option<&RateChart> {
        self.chart.as_ref()
    }

    pub fn times_created(&self) -> usize {
        self.created
    }
}

/// Axis-less, legend-less thin line for a summary card.
pub fn sparkline<'a>(points: &'a [(f64, f64)], color: Color) -> Chart<'a> {
    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    Chart::new(vec![dataset])
        .legend_position(None)
        .x_axis(Axis::default().bounds(x_bounds(points)))
        .y_axis(Axis::default().bounds(value_bounds(points)))
}

pub fn spark_points(series: &[SeriesPoint]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.rate))
        .collect()
}

fn x_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    [0.0, (points.len().saturating_sub(1) as f64).max(1.0)]
}

/// Min/max of the y values with a small margin; never starts at zero.
fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (low, high) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    if !low.is_finite() || !high.is_finite() {
        return [0.0, 1.0];
    }

    let pad = match (high - low) * 0.05 {
        p if p > 0.0 => p,
        _ => (high.abs() * 0.01).max(0.01),
    };
    [low - pad, high + pad]
}

/// Evenly spaced date labels, always including the first and last.
fn category_labels(series: &[SeriesPoint], max: usize) -> Vec<String> {
    let n = series.len();
    if n == 0 || max == 0 {
        return Vec::new();
    }
    if n <= max {
        return series.iter().map(|p| p.date.to_string()).collect();
    }

    let steps = max.max(2) - 1;
    (0..=steps)
        .map(|k| series[k * (n - 1) / steps].date.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(rates: &[f64]) -> Vec<SeriesPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| SeriesPoint {
                date: start + chrono::Days::new(i as u64),
                rate,
            })
            .collect()
    }

    #[test]
    fn handle_creates_once_then_updates_in_place() {
        let mut handle = ChartHandle::default();
        assert!(handle.chart().is_none());

        handle.create_or_update(&series(&[1.0, 1.1]));
        handle.create_or_update(&series(&[2.0, 2.1, 2.2]));
        handle.create_or_update(&series(&[2.0, 2.1, 2.2]));

        let chart = handle.chart().unwrap();
        assert_eq!(handle.times_created(), 1);
        assert_eq!(chart.revision(), 3);
        assert_eq!(chart.points(), [(0.0, 2.0), (1.0, 2.1), (2.0, 2.2)]);
    }

    #[test]
    fn updating_with_same_series_does_not_accumulate() {
        let mut handle = ChartHandle::default();
        let data = series(&[1.0, 1.2, 0.9]);
        handle.create_or_update(&data);
        let first = handle.chart().unwrap().points().to_vec();
        handle.create_or_update(&data);
        assert_eq!(handle.chart().unwrap().points(), first.as_slice());
    }

    #[test]
    fn labels_are_capped_and_keep_ends() {
        let data = series(&[1.0; 20]);
        let labels = category_labels(&data, 6);
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "2024-01-01");
        assert_eq!(labels[5], "2024-01-20");
    }

    #[test]
    fn flat_series_still_has_a_range() {
        let [low, high] = value_bounds(&[(0.0, 1.5), (1.0, 1.5)]);
        assert!(low < 1.5 && high > 1.5);
    }

    #[test]
    fn empty_series_has_default_bounds() {
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
        assert!(category_labels(&[], 6).is_empty());
    }
}
