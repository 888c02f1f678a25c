use crate::core::sorting::SortMethod;
use crate::domain::model::{Plate, SortField, Vehicle};
use crate::domain::ports::PlateLookup;
use crate::utils::error::ParkingError;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

fn sorted_by_plate(vehicles: &[Vehicle]) -> Vec<Vehicle> {
    SortMethod::default().sorted(vehicles, SortField::Plate)
}

/// Linear scan of a plate-sorted copy, stopping once plates pass the target.
pub struct SequentialSearch;

/// Halving search over a plate-sorted copy.
pub struct BinarySearch;

/// One-level index keyed by the first character of the plate.
pub struct IndexedSearch;

impl PlateLookup for SequentialSearch {
    fn name(&self) -> &'static str {
        "secuencial"
    }

    fn lookup(&self, vehicles: &[Vehicle], plate: &Plate) -> Option<Vehicle> {
        for vehicle in sorted_by_plate(vehicles) {
            match vehicle.plate.cmp(plate) {
                Ordering::Equal => return Some(vehicle),
                // 已排序：後面不可能再出現
                Ordering::Greater => break,
                Ordering::Less => {}
            }
        }
        None
    }
}

impl PlateLookup for BinarySearch {
    fn name(&self) -> &'static str {
        "binaria"
    }

    fn lookup(&self, vehicles: &[Vehicle], plate: &Plate) -> Option<Vehicle> {
        let sorted = sorted_by_plate(vehicles);
        let mut low = 0usize;
        let mut high = sorted.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match sorted[mid].plate.cmp(plate) {
                Ordering::Equal => return Some(sorted[mid].clone()),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }
}

impl PlateLookup for IndexedSearch {
    fn name(&self) -> &'static str {
        "indexada"
    }

    fn lookup(&self, vehicles: &[Vehicle], plate: &Plate) -> Option<Vehicle> {
        let mut index: HashMap<Option<char>, Vec<&Vehicle>> = HashMap::new();
        for vehicle in vehicles {
            index.entry(vehicle.plate.first_char()).or_default().push(vehicle);
        }

        index
            .get(&plate.first_char())
            .and_then(|bucket| bucket.iter().find(|v| v.plate == *plate))
            .map(|v| (*v).clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Sequential,
    Binary,
    Indexed,
}

impl SearchMethod {
    pub const ALL: [SearchMethod; 3] = [
        SearchMethod::Sequential,
        SearchMethod::Binary,
        SearchMethod::Indexed,
    ];

    pub fn strategy(&self) -> &'static dyn PlateLookup {
        match self {
            SearchMethod::Sequential => &SequentialSearch,
            SearchMethod::Binary => &BinarySearch,
            SearchMethod::Indexed => &IndexedSearch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.strategy().name()
    }
}

impl FromStr for SearchMethod {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "secuencial" | "sequential" => Ok(SearchMethod::Sequential),
            "binaria" | "binary" => Ok(SearchMethod::Binary),
            "indexada" | "indexed" => Ok(SearchMethod::Indexed),
            _ => Err(ParkingError::UnknownSearchMethod {
                method: s.to_string(),
            }),
        }
    }
}
