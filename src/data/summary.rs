use chrono::NaiveDate;
use log::debug;

use crate::data::{ChangeAnnotation, Dataset, SeriesPoint};

/// Digest of one currency shown on a summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryEntry {
    pub currency: String,
    pub latest_rate: f64,
    pub previous_rate: f64,
    pub as_of: NaiveDate,
    /// Full series in chronological order.
    pub spark: Vec<SeriesPoint>,
}

impl SummaryEntry {
    pub fn change(&self) -> ChangeAnnotation {
        ChangeAnnotation::new(self.latest_rate, self.previous_rate)
    }
}

/// Ranks every currency with at least two records by its latest rate,
/// highest first, and keeps the first `top`. Ties keep directory order.
pub fn rank_summaries(dataset: &Dataset, top: usize) -> Vec<SummaryEntry> {
    let mut entries = dataset
        .currencies()
        .iter()
        .filter_map(|currency| {
            // Newest first; records sharing a date keep feed order, so the
            // first one in the feed wins as "latest".
            let mut series = dataset
                .records()
                .iter()
                .filter(|r| &r.currency == currency)
                .collect::<Vec<_>>();
            series.sort_by(|a, b| b.date.cmp(&a.date));

            match series.as_slice() {
                [latest, previous, ..] => Some(SummaryEntry {
                    currency: currency.clone(),
                    latest_rate: latest.rate,
                    previous_rate: previous.rate,
                    as_of: latest.date,
                    spark: series.iter().rev().map(|r| r.point()).collect(),
                }),
                _ => {
                    debug!(
                        "{} has {} record(s), excluded from summary ranking",
                        currency,
                        series.len()
                    );
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    entries.sort_by(|a, b| b.latest_rate.total_cmp(&a.latest_rate));
    entries.truncate(top);
    entries
}
