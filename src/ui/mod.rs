pub mod app;
pub mod chart;
pub mod colors;

pub use app::TuiApp;
pub use chart::{ChartHandle, RateChart};
pub use colors::DashboardColors;
