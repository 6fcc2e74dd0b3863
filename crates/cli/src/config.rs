use clap::Parser;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};

use std::path::PathBuf;

/// A single, unified struct holding all application settings.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct PathsConfig {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig {
                level: "info".into(),
            },
            paths: PathsConfig {
                data_file: PathBuf::from("data.txt"),
                output_dir: PathBuf::from("output"),
            },
        }
    }
}

/// Command-line overrides, parsed with the clap derive macro.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Settings file; missing files are simply skipped.
    #[arg(short, long, default_value = "config/settings.toml")]
    config: PathBuf,

    /// Input dataset, one `id,name,salary` row per line.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Root of the generated output tree.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Loads configuration defaults, then merges the TOML file and CLI arguments.
pub fn get_config() -> anyhow::Result<Config> {
    let cli = Cli::parse();

    let mut figment =
        Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(cli.config));

    if let Some(data_file) = cli.data_file {
        figment = figment.merge(("paths.data_file", data_file));
    }
    if let Some(output_dir) = cli.output_dir {
        figment = figment.merge(("paths.output_dir", output_dir));
    }

    let config: Config = figment.extract()?;
    Ok(config)
}
