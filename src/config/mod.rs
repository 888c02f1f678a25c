pub mod scenario_config;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "apparkala")]
#[command(about = "Parking facility console: slots, payments and debtor reports")]
pub struct CliConfig {
    /// Facility TOML file (capacities, rates, logging)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<String>,

    #[arg(long, help = "Pretty-print JSON replies")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(script) = &self.script {
            validate_path("script", script)?;
        }
        Ok(())
    }
}
