use clap::Parser as _;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::command::CommandArgs;

mod command;
mod model;
mod util;

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    setup_tracing_subscriber(args.verbose());
    command::run(args)
}

/// Logs go to stderr so that JSON written to stdout stays machine readable.
///
/// `RUST_LOG` wins over `--verbose` when it is set.
fn setup_tracing_subscriber(verbose: bool) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false);
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}
