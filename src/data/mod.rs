pub mod change;
pub mod dataset;
pub mod record;
pub mod summary;

pub use change::{ChangeAnnotation, Direction, TableRow, format_rate, table_rows};
pub use dataset::Dataset;
pub use record::{ExchangeRecord, RecordError, SeriesPoint};
pub use summary::{SummaryEntry, rank_summaries};
