use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Invalid vehicle category: {value} (expected CARRO or MOTO)")]
    InvalidCategory { value: String },

    #[error("A vehicle with plate {plate} is already registered")]
    DuplicatePlate { plate: String },

    #[error("No free slots left for {category}")]
    NoSlotAvailable { category: String },

    #[error("No vehicle found with plate {plate}")]
    NotFound { plate: String },

    #[error("Unknown sort method: {method}")]
    UnknownSortMethod { method: String },

    #[error("Unknown sort field: {field}")]
    UnknownSortField { field: String },

    #[error("Unknown search method: {method}")]
    UnknownSearchMethod { method: String },

    #[error("Invalid input for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Command error: {message}")]
    CommandError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 登記簿規則被拒絕 (車位、車牌)
    Registry,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ParkingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCategory { .. }
            | Self::DuplicatePlate { .. }
            | Self::NoSlotAvailable { .. }
            | Self::NotFound { .. } => ErrorCategory::Registry,
            Self::UnknownSortMethod { .. }
            | Self::UnknownSortField { .. }
            | Self::UnknownSearchMethod { .. }
            | Self::ValidationError { .. }
            | Self::CommandError { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Registry | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                Self::CsvError(_) => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    /// Short message suitable for an operator console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidCategory { .. } => {
                "Tipo de vehículo inválido. Debe ser 'CARRO' o 'MOTO'".to_string()
            }
            Self::DuplicatePlate { .. } => "Ya existe un vehículo con esa placa".to_string(),
            Self::NoSlotAvailable { category } => {
                format!("No hay casillas libres para {}s", category.to_lowercase())
            }
            Self::NotFound { .. } => "No se encontró vehículo con esa placa".to_string(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::IoError(e) => format!("File system problem: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidCategory { .. } => "Use CARRO or MOTO as the category".to_string(),
            Self::DuplicatePlate { .. } => {
                "Remove the existing registration first or check the plate".to_string()
            }
            Self::NoSlotAvailable { .. } => {
                "Wait for a slot to be released or use the other category".to_string()
            }
            Self::NotFound { .. } => "Check the plate with the `find` command".to_string(),
            Self::UnknownSortMethod { .. } => {
                "Valid methods: insercion, seleccion, burbuja, quicksort".to_string()
            }
            Self::UnknownSortField { .. } => {
                "Valid fields: placa, dueno, dni, telefono, marca, modelo, tipo, \
                 casilla_numero, mes_pagado, anio_pagado, tarifa_mensual"
                    .to_string()
            }
            Self::UnknownSearchMethod { .. } => {
                "Valid methods: secuencial, binaria, indexada".to_string()
            }
            Self::ValidationError { .. } | Self::CommandError { .. } => {
                "Type `help` to see the command syntax".to_string()
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the configuration file and restart".to_string()
            }
            Self::IoError(_) => "Check that the path exists and is writable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Retry the command; report the issue if it persists".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;
