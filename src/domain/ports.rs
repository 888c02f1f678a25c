use crate::domain::model::{FacilityLayout, Plate, SortField, Vehicle};

/// Source of capacities and base rates for a facility.
pub trait LayoutProvider {
    fn car_capacity(&self) -> usize;
    fn motorcycle_capacity(&self) -> usize;
    fn car_rate(&self) -> f64;
    fn motorcycle_rate(&self) -> f64;
}

impl LayoutProvider for FacilityLayout {
    fn car_capacity(&self) -> usize {
        self.car_capacity
    }

    fn motorcycle_capacity(&self) -> usize {
        self.motorcycle_capacity
    }

    fn car_rate(&self) -> f64 {
        self.car_rate
    }

    fn motorcycle_rate(&self) -> f64 {
        self.motorcycle_rate
    }
}

/// In-place ordering of a vehicle snapshot by one field.
pub trait SortAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;
    fn sort(&self, vehicles: &mut [Vehicle], field: SortField);
}

/// Plate lookup over a vehicle snapshot (cars first, then motorcycles).
pub trait PlateLookup: Send + Sync {
    fn name(&self) -> &'static str;
    fn lookup(&self, vehicles: &[Vehicle], plate: &Plate) -> Option<Vehicle>;
}
