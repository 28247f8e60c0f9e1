// File: ./src/cli.rs
use crate::config::Config;
use crate::model::SortBy;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "farpack", version, about = "Packing list for your next trip")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty list
    #[arg(long)]
    pub empty: bool,

    /// Initial sort order
    #[arg(long, value_enum, value_name = "CRITERION")]
    pub sort: Option<SortBy>,

    /// Where to write the log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if self.empty {
            config.start_empty = true;
        }
        if let Some(sort) = self.sort {
            config.sort_by = sort;
        }
    }
}
