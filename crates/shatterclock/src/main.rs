use std::io::{self, BufWriter};

use shatter_config::Settings;
use tracing::info;

mod app;
mod logging;
mod signals;
mod terminal;

use app::{App, ThreadPacer};
use signals::InterruptHandler;
use terminal::CursorGuard;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    terminal::install_panic_hook();

    let log_path = logging::init()?;
    let config_path = Settings::config_path().ok();
    let config_found = config_path.as_ref().is_some_and(|path| path.exists());
    let settings = Settings::load()?;
    info!(?log_path, ?config_path, config_found, ?settings, "starting");

    let _interrupts = InterruptHandler::install()?;
    let out = CursorGuard::new(BufWriter::new(io::stdout()))?;
    App::new(out, ThreadPacer, settings).run()
}
