use crate::core::facility::Facility;
use crate::core::search::SearchMethod;
use crate::core::sorting::SortMethod;
use crate::domain::model::{Category, SortField, Vehicle, VehicleRequest};
use crate::domain::report::{DebtorReport, FreeSlots, SlotBoard, Summary};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one facility. Every mutation runs under the write
/// lock, so concurrent callers never race for the same slot.
#[derive(Debug, Clone, Default)]
pub struct SharedFacility {
    inner: Arc<RwLock<Facility>>,
}

impl SharedFacility {
    pub fn new(facility: Facility) -> Self {
        Self {
            inner: Arc::new(RwLock::new(facility)),
        }
    }

    pub fn register(&self, request: &VehicleRequest) -> Result<Vehicle> {
        self.inner.write().register(request)
    }

    pub fn find_by_plate(&self, plate: &str) -> Result<Vehicle> {
        self.inner.read().find_by_plate(plate).cloned()
    }

    pub fn pay_installment(&self, plate: &str, month: u32, year: i32) -> Result<()> {
        self.inner.write().pay_installment(plate, month, year)
    }

    pub fn remove(&self, plate: &str) -> Result<Vehicle> {
        self.inner.write().remove(plate)
    }

    pub fn set_rate(&self, category: Category, rate: f64) {
        self.inner.write().set_rate(category, rate);
    }

    pub fn list_slots(&self) -> SlotBoard {
        self.inner.read().list_slots()
    }

    pub fn list_free_slots(&self) -> FreeSlots {
        self.inner.read().list_free_slots()
    }

    pub fn list_debtors(&self, current_month: u32, current_year: i32) -> DebtorReport {
        self.inner.read().list_debtors(current_month, current_year)
    }

    pub fn summary(&self) -> Summary {
        self.inner.read().summary()
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.read().history()
    }

    pub fn sorted_vehicles(&self, field: SortField, method: SortMethod) -> Vec<Vehicle> {
        self.inner.read().sorted_vehicles(field, method)
    }

    pub fn search(&self, plate: &str, method: SearchMethod) -> Option<Vehicle> {
        self.inner.read().search(plate, method)
    }
}
