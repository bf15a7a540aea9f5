//! rtx-helper CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rtx_helper::cli::{Cli, CommandDispatcher};
use rtx_helper::ui::Theme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN (advisory subprocess exits land there)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rtx_helper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rtx_helper=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rtx-helper starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let theme = Theme::new();
            eprintln!("{} {}", theme.error.apply_to("Error:"), e);
            ExitCode::from(1)
        }
    }
}
