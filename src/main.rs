use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_analyze, handle_assets, handle_build, resolve_vars};
use domain::models::{BuildError, SourceLayout};
use services::config::{ensure_supported, load_config, TOOL_VERSION};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::error!(error = %format!("{e:#}"), "build failed");
        return Err(e);
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_analyze(cli)? {
        return Ok(());
    }

    if !cli.root.is_dir() {
        return Err(BuildError::MissingRoot(cli.root.display().to_string()).into());
    }
    let config = load_config(&cli.config_path())?;
    ensure_supported(&config, TOOL_VERSION)?;

    let layout = SourceLayout::new(&cli.root);
    let vars = resolve_vars(cli, &config);
    if handle_assets(cli, &layout, &vars)? {
        return Ok(());
    }
    handle_build(cli, &config, layout, vars)
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
