mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    let config = platform::config::load(&cli)?;
    launchpad_logging::initialize(&config.log, log::LevelFilter::Info);
    platform::run_app(config)
}
