use itertools::Itertools;

use crate::data::ExchangeRecord;

/// The records of a single load, plus the currency directory derived from them.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<ExchangeRecord>,
    currencies: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<ExchangeRecord>) -> Self {
        let currencies = records
            .iter()
            .map(|r| r.currency.clone())
            .unique()
            .collect::<Vec<_>>();

        Self {
            records,
            currencies,
        }
    }

    pub fn records(&self) -> &[ExchangeRecord] {
        &self.records
    }

    /// Distinct labels in the order they first appear in the feed.
    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    /// Case-insensitive substring filter over the directory. An empty query
    /// yields the whole directory.
    pub fn filter_currencies(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.currencies.clone();
        }

        self.currencies
            .iter()
            .filter(|c| c.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records for `currency` sorted ascending by date. Records sharing a date
    /// keep their feed order.
    pub fn series(&self, currency: &str) -> Vec<ExchangeRecord> {
        let mut series = self
            .records
            .iter()
            .filter(|r| r.currency == currency)
            .cloned()
            .collect::<Vec<_>>();
        series.sort_by_key(|r| r.date);
        series
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn record(currency: &str, date: &str, rate: &str) -> ExchangeRecord {
        ExchangeRecord::parse(currency, rate, date).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("Euro Zone-Euro", "2024-03-31", "0.926"),
            record("Canada-Dollar", "2024-03-31", "1.354"),
            record("Euro Zone-Euro", "2023-12-31", "0.905"),
            record("Japan-Yen", "2024-03-31", "151.25"),
            record("Canada-Dollar", "2023-12-31", "1.326"),
            record("Euro Zone-Euro", "2024-06-30", "0.934"),
        ])
    }

    #[test]
    fn directory_keeps_first_seen_order() {
        assert_eq!(
            sample().currencies(),
            ["Euro Zone-Euro", "Canada-Dollar", "Japan-Yen"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let dataset = sample();
        assert_eq!(dataset.filter_currencies("EURO"), ["Euro Zone-Euro"]);
        assert_eq!(
            dataset.filter_currencies("a"),
            ["Canada-Dollar", "Japan-Yen"]
        );
    }

    #[test]
    fn empty_query_returns_full_directory() {
        let dataset = sample();
        assert_eq!(dataset.filter_currencies(""), dataset.currencies());
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(sample().filter_currencies("peso").is_empty());
    }

    #[test]
    fn series_is_single_label_and_ascending() {
        let series = sample().series("Euro Zone-Euro");
        let dates = series
            .iter()
            .map(|r| r.date.to_string())
            .collect::<Vec<_>>();

        assert_eq!(dates, ["2023-12-31", "2024-03-31", "2024-06-30"]);
        assert!(series.iter().all(|r| r.currency == "Euro Zone-Euro"));
    }

    #[test]
    fn series_of_unknown_label_is_empty() {
        assert!(sample().series("Mars-Credit").is_empty());
    }

    fn arb_records() -> impl Strategy<Value = Vec<ExchangeRecord>> {
        proptest::collection::vec(
            (prop_oneof![Just("A-a"), Just("B-b"), Just("C-c"), Just("D-d")], 1u32..28),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(currency, day)| record(currency, &format!("2024-02-{day:02}"), "1.0"))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_directory_is_unique_first_seen(records in arb_records()) {
            let dataset = Dataset::new(records.clone());
            let directory = dataset.currencies();

            let mut expected: Vec<String> = Vec::new();
            for r in &records {
                if !expected.contains(&r.currency) {
                    expected.push(r.currency.clone());
                }
            }
            prop_assert_eq!(directory, expected.as_slice());
        }

        #[test]
        fn prop_filter_preserves_relative_order(records in arb_records(), query in "[a-dA-D-]{0,2}") {
            let dataset = Dataset::new(records);
            let filtered = dataset.filter_currencies(&query);
            let positions = filtered
                .iter()
                .map(|c| dataset.currencies().iter().position(|d| d == c))
                .collect::<Option<Vec<_>>>();

            prop_assert!(positions.is_some());
            let positions = positions.unwrap_or_default();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
