use crate::data::{Dataset, SeriesPoint, TableRow, table_rows};

/// Everything the selector, table and chart need for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
    /// Directory filtered by the search query.
    pub labels: Vec<String>,
    pub selected: Option<String>,
    /// Newest first.
    pub table: Vec<TableRow>,
    /// Oldest first.
    pub series: Vec<SeriesPoint>,
}

pub fn build_view(dataset: &Dataset, selection: Option<&str>, query: &str) -> ViewModel {
    let labels = dataset.filter_currencies(query);

    let Some(selected) = selection else {
        return ViewModel {
            labels,
            ..ViewModel::default()
        };
    };

    let series = dataset.series(selected);
    ViewModel {
        labels,
        selected: Some(selected.to_string()),
        table: table_rows(&series),
        series: series.iter().map(|r| r.point()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Direction;
    use crate::data::dataset::tests::record;

    fn euro_only() -> Dataset {
        Dataset::new(vec![
            record("Euro", "2024-03-01", "1.00"),
            record("Euro", "2024-03-02", "1.05"),
            record("Euro", "2024-03-03", "0.95"),
        ])
    }

    #[test]
    fn selecting_euro_builds_annotated_table() {
        let view = build_view(&euro_only(), Some("Euro"), "");
        assert_eq!(view.table.len(), 3);

        let newest = &view.table[0];
        assert_eq!(newest.date.to_string(), "2024-03-03");
        let change = newest.change.unwrap();
        assert!((change.delta() + 0.10).abs() < 1e-9);
        assert_eq!(change.direction(), Direction::Down);
        assert_eq!(change.magnitude_text(), "0.10");

        let middle = &view.table[1];
        assert_eq!(middle.date.to_string(), "2024-03-02");
        let change = middle.change.unwrap();
        assert!((change.delta() - 0.05).abs() < 1e-9);
        assert_eq!(change.direction(), Direction::Up);
        assert_eq!(change.magnitude_text(), "0.05");

        let oldest = &view.table[2];
        assert_eq!(oldest.date.to_string(), "2024-03-01");
        assert_eq!(oldest.change, None);
    }

    #[test]
    fn chart_series_is_chronological() {
        let view = build_view(&euro_only(), Some("Euro"), "");
        let rates = view.series.iter().map(|p| p.rate).collect::<Vec<_>>();
        assert_eq!(rates, [1.00, 1.05, 0.95]);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let dataset = euro_only();
        let first = build_view(&dataset, Some("Euro"), "eu");
        let second = build_view(&dataset, Some("Euro"), "eu");
        assert_eq!(first, second);
        assert_eq!(second.table.len(), 3);
        assert_eq!(second.series.len(), 3);
    }

    #[test]
    fn no_selection_only_lists_labels() {
        let view = build_view(&euro_only(), None, "");
        assert_eq!(view.labels, ["Euro"]);
        assert!(view.table.is_empty());
        assert!(view.series.is_empty());
    }

    #[test]
    fn query_filters_labels_but_keeps_selection() {
        let view = build_view(&euro_only(), Some("Euro"), "yen");
        assert!(view.labels.is_empty());
        assert_eq!(view.selected.as_deref(), Some("Euro"));
        assert_eq!(view.table.len(), 3);
    }
}
