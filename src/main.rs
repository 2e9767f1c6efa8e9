//! Treasury exchange-rate dashboard
//!
//! Currency selector, rate history table, line chart and top-5 summary
//! cards over a single fetch of the Treasury rates-of-exchange feed.

pub mod app;
pub mod config;
pub mod data;
pub mod logging;
pub mod request;
pub mod third_party;
pub mod ui;

use crate::app::App;
use color_eyre::Result;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let app = App::new();
    app.run().await
}
