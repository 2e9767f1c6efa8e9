use chrono::NaiveDate;

use crate::config::CHANGE_DECIMALS;
use crate::data::ExchangeRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

/// Formats to [`CHANGE_DECIMALS`] places, rounding halves away from zero.
/// `{:.2}` alone rounds exact ties like 0.125 to even.
pub fn format_rate(value: f64) -> String {
    let scale = 10f64.powi(CHANGE_DECIMALS as i32);
    format!("{:.*}", CHANGE_DECIMALS, (value * scale).round() / scale)
}

/// A rate compared against the one before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeAnnotation {
    pub current: f64,
    pub previous: f64,
}

impl ChangeAnnotation {
    pub fn new(current: f64, previous: f64) -> Self {
        Self { current, previous }
    }

    pub fn delta(&self) -> f64 {
        self.current - self.previous
    }

    /// Only a strictly positive delta counts as up; no change reads as down.
    pub fn direction(&self) -> Direction {
        if self.delta() > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn magnitude_text(&self) -> String {
        format_rate(self.delta().abs())
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.direction().arrow(), self.magnitude_text())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub date: NaiveDate,
    pub rate_text: String,
    /// `None` for the earliest record of the series.
    pub change: Option<ChangeAnnotation>,
}

/// Detail-table rows, newest first, for a series sorted ascending by date.
pub fn table_rows(series: &[ExchangeRecord]) -> Vec<TableRow> {
    series
        .iter()
        .enumerate()
        .rev()
        .map(|(i, record)| TableRow {
            date: record.date,
            rate_text: record.rate_text.clone(),
            change: i
                .checked_sub(1)
                .map(|prev| ChangeAnnotation::new(record.rate, series[prev].rate)),
        })
        .collect()
}
