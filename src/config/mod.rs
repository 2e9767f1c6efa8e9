use ratatui::style::palette::tailwind;

pub const PALETTES: [tailwind::Palette; 4] = [
    tailwind::EMERALD,
    tailwind::BLUE,
    tailwind::INDIGO,
    tailwind::RED,
];

pub const INFO_TEXT: [&str; 2] = [
    "(q/Esc) quit | (↑/↓) move | (Enter) select currency | (/) search",
    "(PgUp/PgDn) scroll table | (Shift + →/←) cycle color | (r) retry failed load",
];

pub const POLL_DURATION_MS: u64 = 50;
pub const CARD_HEIGHT: u16 = 7;
pub const SELECTOR_WIDTH: u16 = 34;
/// Most date labels drawn under the main chart.
pub const MAX_X_LABELS: usize = 6;

/// Earliest `record_date` requested from the feed.
pub const START_DATE: &str = "2024-01-01";
pub const PAGE_SIZE: u32 = 1000;
/// Whole-request timeout for the feed; a hung connection ends as a failed load.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Number of summary cards shown above the detail view.
pub const TOP_CURRENCIES: usize = 5;

pub const CHANGE_DECIMALS: usize = 2;

pub const LOG_FILE: &str = "/tmp/fxdash_debug.log";
