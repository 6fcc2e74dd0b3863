use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let parent = config.data_file.parent();
    if let Some(parent) = parent.filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    index_lab_model::generate_data(&config.data_file, config.count, config.seed)?;
    println!(
        "Wrote {} records to {}",
        config.count,
        config.data_file.display()
    );
    Ok(())
}

#[derive(Clone, Debug, Parser)]
#[command()]
struct Config {
    #[arg()]
    data_file: Box<std::path::Path>,
    #[arg(default_value_t = 50)]
    count: usize,
    /// Seed for a reproducible dataset.
    #[arg(short, long)]
    seed: Option<u64>,
}
