//! # Command Line
//!
//! `lists` takes no subcommands. Flags only tweak where and how the server runs:
//!
//! ```text
//! lists [--config FILE] [--bind ADDR] [--port N] [--data-dir DIR] [-v]
//! ```
//!
//! Flags win over every other configuration source (see [`listsapp::config`]).

pub mod setup;

use anyhow::Context;
use listsapp::config::ListsConfig;
use setup::Cli;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub async fn run() -> anyhow::Result<()> {
    let cli = setup::parse_cli();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    info!(
        address = %config.address(),
        data_dir = ?config.data_dir,
        "starting lists"
    );
    crate::server::serve(config).await
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ListsConfig> {
    let mut config =
        ListsConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    Ok(config)
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(fmt::layer().with_target(true).with_line_number(verbose))
        .init();
}
