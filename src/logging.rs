use std::fs::OpenOptions;
use std::io::Write;

use color_eyre::Result;
use env_logger::{Builder, Env, Target};

use crate::config::LOG_FILE;

/// Routes `log` output to [`LOG_FILE`] so it never lands on the alternate
/// screen. `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}
