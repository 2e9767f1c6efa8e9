use log::{info, warn};

use crate::app::view::{ViewModel, build_view};
use crate::config::TOP_CURRENCIES;
use crate::data::{Dataset, ExchangeRecord, SummaryEntry, rank_summaries};
use crate::request::LoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    /// The last load failed; the dashboard waits for a manual retry.
    Failed(String),
    Loaded,
    CurrencySelected(String),
}

/// Session state: the one dataset, its summary cards, the search query and
/// the selection.
#[derive(Debug)]
pub struct Dashboard {
    phase: Phase,
    dataset: Dataset,
    summaries: Vec<SummaryEntry>,
    query: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            dataset: Dataset::default(),
            summaries: Vec::new(),
            query: String::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Summary cards, computed once per successful load.
    pub fn summaries(&self) -> &[SummaryEntry] {
        &self.summaries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> Option<&str> {
        match &self.phase {
            Phase::CurrencySelected(label) => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Loaded | Phase::CurrencySelected(_))
    }

    pub fn apply_load(&mut self, outcome: Result<Vec<ExchangeRecord>, LoadError>) {
        match outcome {
            Ok(records) => self.on_loaded(records),
            Err(e) => self.on_load_failed(&e),
        }
    }

    /// Stores the dataset, ranks the summary cards and selects the first
    /// currency of the directory.
    pub fn on_loaded(&mut self, records: Vec<ExchangeRecord>) {
        self.dataset = Dataset::new(records);
        self.summaries = rank_summaries(&self.dataset, TOP_CURRENCIES);
        self.phase = Phase::Loaded;
        info!(
            "Dataset ready: {} records, {} currencies, {} summary cards",
            self.dataset.records().len(),
            self.dataset.currencies().len(),
            self.summaries.len()
        );

        if let Some(first) = self.dataset.currencies().first().cloned() {
            self.select(&first);
        }
    }

    pub fn on_load_failed(&mut self, error: &LoadError) {
        warn!("Load failed: {}", error);
        self.phase = Phase::Failed(error.to_string());
    }

    /// Whether a retry may be issued; only a failed load can be retried.
    pub fn begin_retry(&mut self) -> bool {
        if matches!(self.phase, Phase::Failed(_)) {
            self.phase = Phase::Uninitialized;
            true
        } else {
            false
        }
    }

    /// Selects `label` if it is in the directory. Unknown labels are ignored.
    pub fn select(&mut self, label: &str) -> bool {
        if !self.is_ready() || !self.dataset.currencies().iter().any(|c| c == label) {
            return false;
        }
        self.phase = Phase::CurrencySelected(label.to_string());
        true
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn view(&self) -> ViewModel {
        build_view(&self.dataset, self.selection(), &self.query)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::tests::record;

    fn records() -> Vec<ExchangeRecord> {
        vec![
            record("Euro Zone-Euro", "2024-03-31", "0.926"),
            record("Canada-Dollar", "2024-03-31", "1.354"),
            record("Euro Zone-Euro", "2023-12-31", "0.905"),
            record("Canada-Dollar", "2023-12-31", "1.326"),
            record("Japan-Yen", "2024-03-31", "151.25"),
        ]
    }

    fn decode_failure() -> LoadError {
        LoadError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
    }

    #[test]
    fn starts_uninitialized() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.phase(), &Phase::Uninitialized);
        assert_eq!(dashboard.view(), ViewModel::default());
    }

    #[test]
    fn load_auto_selects_first_currency() {
        let mut dashboard = Dashboard::new();
        dashboard.on_loaded(records());

        assert_eq!(
            dashboard.phase(),
            &Phase::CurrencySelected("Euro Zone-Euro".to_string())
        );
        assert_eq!(dashboard.view().table.len(), 2);
    }

    #[test]
    fn empty_load_stays_loaded() {
        let mut dashboard = Dashboard::new();
        dashboard.on_loaded(Vec::new());
        assert_eq!(dashboard.phase(), &Phase::Loaded);
        assert!(dashboard.view().labels.is_empty());
    }

    #[test]
    fn summaries_survive_selection_changes() {
        let mut dashboard = Dashboard::new();
        dashboard.on_loaded(records());
        let before = dashboard.summaries().to_vec();

        assert!(dashboard.select("Canada-Dollar"));
        assert_eq!(dashboard.summaries(), before.as_slice());

        let names = before.iter().map(|e| e.currency.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Canada-Dollar", "Euro Zone-Euro"]);
    }

    #[test]
    fn selecting_unknown_or_before_load_is_ignored() {
        let mut dashboard = Dashboard::new();
        assert!(!dashboard.select("Euro Zone-Euro"));

        dashboard.on_loaded(records());
        assert!(!dashboard.select("Mars-Credit"));
        assert_eq!(dashboard.selection(), Some("Euro Zone-Euro"));
    }

    #[test]
    fn query_narrows_labels_only() {
        let mut dashboard = Dashboard::new();
        dashboard.on_loaded(records());
        dashboard.set_query("DOLLAR");

        let view = dashboard.view();
        assert_eq!(view.labels, ["Canada-Dollar"]);
        assert_eq!(view.selected.as_deref(), Some("Euro Zone-Euro"));
    }

    #[test]
    fn failure_is_visible_and_retryable() {
        let mut dashboard = Dashboard::new();
        dashboard.apply_load(Err(decode_failure()));
        assert!(matches!(dashboard.phase(), Phase::Failed(_)));

        assert!(dashboard.begin_retry());
        assert_eq!(dashboard.phase(), &Phase::Uninitialized);
        assert!(!dashboard.begin_retry());

        dashboard.apply_load(Ok(records()));
        assert!(dashboard.is_ready());
    }

    #[test]
    fn retry_is_refused_once_loaded() {
        let mut dashboard = Dashboard::new();
        dashboard.on_loaded(records());
        assert!(!dashboard.begin_retry());
    }
}
