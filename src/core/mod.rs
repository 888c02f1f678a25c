pub mod command;
pub mod export;
pub mod facility;
pub mod scenario;
pub mod search;
pub mod session;
pub mod shared;
pub mod sorting;

pub use crate::domain::model::{Category, Plate, SortField, Vehicle, VehicleRequest};
pub use crate::domain::ports::{LayoutProvider, PlateLookup, SortAlgorithm};
pub use crate::utils::error::Result;
