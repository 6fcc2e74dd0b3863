mod config;
mod menu;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{Config, get_config};
use index_lab_engine::{DedupSink, OutputLayout};
use index_lab_model::load_records;

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse()?)
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = get_config()?;
    setup_tracing(&config.logging.level)?;
    tracing::debug!(?config, "Full application configuration");

    if let Err(e) = run(&config) {
        tracing::error!("Application finished with an error: {:?}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let records = load_records(&config.paths.data_file)?;
    tracing::info!(
        "Loaded {} records from {}",
        records.len(),
        config.paths.data_file.display()
    );

    let layout = OutputLayout::new(&config.paths.output_dir);
    let mut sink = DedupSink::create(&layout)?;

    menu::run_menu(&records, &layout, &mut sink)
}
