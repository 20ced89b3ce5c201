mod app;
mod repl;
mod state;

use crate::app::App;
use crate::repl::Console;
use crate::state::app_settings::AppSettings;
use anyhow::Context;
use log::debug;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = AppSettings::load();

    better_panic::install();
    init_logging(&settings);
    debug!("settings: {settings:?}");

    let data = fwc_api::loader::load_from_path(&settings.data_path).with_context(|| {
        format!("failed to load tournament data from {}", settings.data_path.display())
    })?;

    let mut app = App::new(settings, data);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    app.run(&mut console).context("terminal i/o failed")?;

    Ok(())
}

/// Log records go to stderr so report output on stdout stays clean.
fn init_logging(settings: &AppSettings) {
    let filter = EnvFilter::try_new(settings.log_directive()).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
