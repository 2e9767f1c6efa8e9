pub mod state;
pub mod view;

pub use state::{Dashboard, Phase};
pub use view::{ViewModel, build_view};

use crate::data::ExchangeRecord;
use crate::request::{LoadError, RatesQuery, fetch_exchange_records};
use crate::ui::TuiApp;
use color_eyre::Result;
use log::{debug, error, info};
use tokio::sync::mpsc;

pub type LoadOutcome = std::result::Result<Vec<ExchangeRecord>, LoadError>;

#[derive(Debug, Clone)]
pub struct App {
    query: RatesQuery,
}

impl App {
    pub fn new() -> Self {
        Self {
            query: RatesQuery::dashboard(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Load outcomes to the UI
        let (load_tx, load_rx) = mpsc::unbounded_channel::<LoadOutcome>();

        // Reload requests from the UI
        let (reload_tx, mut reload_rx) = mpsc::unbounded_channel::<()>();

        let query = self.query.clone();
        let loader = tokio::spawn(async move {
            info!("Starting initial load");
            let outcome = fetch_exchange_records(&query).await;
            if load_tx.send(outcome).is_err() {
                return;
            }

            while let Some(()) = reload_rx.recv().await {
                info!("Reload requested");
                let outcome = fetch_exchange_records(&query).await;
                if load_tx.send(outcome).is_err() {
                    debug!("UI gone, loader stopping");
                    break;
                }
            }
        });

        let ui_task = tokio::spawn(async move {
            let terminal = ratatui::init();
            let app = TuiApp::new(reload_tx);
            let app_result = app.run(terminal, load_rx);
            ratatui::restore();
            app_result
        });

        // Wait for UI to finish (user quits)
        let ui_result = ui_task.await;

        // A slow fetch must not keep the process alive
        loader.abort();

        match ui_result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!("UI exited with error: {:?}", e);
                Err(e)
            }
            Err(e) => {
                error!("UI task panicked or was cancelled: {}", e);
                Err(e.into())
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
