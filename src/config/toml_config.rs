use crate::domain::model::{
    FacilityLayout, DEFAULT_CAR_CAPACITY, DEFAULT_CAR_RATE, DEFAULT_MOTORCYCLE_CAPACITY,
    DEFAULT_MOTORCYCLE_RATE,
};
use crate::domain::ports::LayoutProvider;
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    pub facility: FacilityInfo,
    #[serde(default)]
    pub capacity: CapacityConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapacityConfig {
    #[serde(default = "default_car_capacity")]
    pub cars: usize,
    #[serde(default = "default_motorcycle_capacity")]
    pub motorcycles: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatesConfig {
    #[serde(default = "default_car_rate")]
    pub car: f64,
    #[serde(default = "default_motorcycle_rate")]
    pub motorcycle: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn default_car_capacity() -> usize {
    DEFAULT_CAR_CAPACITY
}

fn default_motorcycle_capacity() -> usize {
    DEFAULT_MOTORCYCLE_CAPACITY
}

fn default_car_rate() -> f64 {
    DEFAULT_CAR_RATE
}

fn default_motorcycle_rate() -> f64 {
    DEFAULT_MOTORCYCLE_RATE
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            cars: DEFAULT_CAR_CAPACITY,
            motorcycles: DEFAULT_MOTORCYCLE_CAPACITY,
        }
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            car: DEFAULT_CAR_RATE,
            motorcycle: DEFAULT_MOTORCYCLE_RATE,
        }
    }
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            facility: FacilityInfo {
                name: "Apparkala".to_string(),
                description: None,
            },
            capacity: CapacityConfig::default(),
            rates: RatesConfig::default(),
            logging: None,
        }
    }
}

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 替換環境變數 (例如 ${CAR_RATE})；未設定的變數保持原樣
pub(crate) fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

impl FacilityConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ParkingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("facility.name", &self.facility.name)?;
        self.capacity.validate()?;
        self.rates.validate()?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            if !VALID_LOG_LEVELS.contains(&level) {
                return Err(ParkingError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn layout(&self) -> FacilityLayout {
        FacilityLayout {
            car_capacity: self.capacity.cars,
            motorcycle_capacity: self.capacity.motorcycles,
            car_rate: self.rates.car,
            motorcycle_rate: self.rates.motorcycle,
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for CapacityConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("capacity.cars", self.cars, 1)?;
        validation::validate_positive_number("capacity.motorcycles", self.motorcycles, 1)
    }
}

impl Validate for RatesConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_rate("rates.car", self.car)?;
        validation::validate_rate("rates.motorcycle", self.motorcycle)
    }
}

impl Validate for FacilityConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl LayoutProvider for FacilityConfig {
    fn car_capacity(&self) -> usize {
        self.capacity.cars
    }

    fn motorcycle_capacity(&self) -> usize {
        self.capacity.motorcycles
    }

    fn car_rate(&self) -> f64 {
        self.rates.car
    }

    fn motorcycle_rate(&self) -> f64 {
        self.rates.motorcycle
    }
}
