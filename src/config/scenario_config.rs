use crate::config::toml_config::{substitute_env_vars, CapacityConfig, RatesConfig};
use crate::core::command::Command;
use crate::domain::model::FacilityLayout;
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    #[serde(default)]
    pub capacity: CapacityConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub steps: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
    pub continue_on_error: Option<bool>, // 失敗後是否繼續執行
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ParkingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn layout(&self) -> FacilityLayout {
        FacilityLayout {
            car_capacity: self.capacity.cars,
            motorcycle_capacity: self.capacity.motorcycles,
            car_rate: self.rates.car,
            motorcycle_rate: self.rates.motorcycle,
        }
    }

    pub fn continue_on_error(&self) -> bool {
        self.scenario.continue_on_error.unwrap_or(false)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("scenario.name", &self.scenario.name)?;
        self.capacity.validate()?;
        self.rates.validate()?;

        if self.steps.is_empty() {
            return Err(ParkingError::MissingConfigError {
                field: "steps".to_string(),
            });
        }
        Ok(())
    }
}
