pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::FacilityConfig, CliConfig};
pub use core::{
    facility::Facility,
    session::{Reply, Session},
    shared::SharedFacility,
};
pub use utils::error::{ParkingError, Result};
