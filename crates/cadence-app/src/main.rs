use cadence_app::cli::Cli;
use cadence_app::{commands, logging};
use cadence_core::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    let config = load_config()?;
    logging::apply_level(&filter_handle, &config.logging.level, cli.verbose);

    let output = commands::run(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}
