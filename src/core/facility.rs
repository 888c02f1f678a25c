use crate::core::search::SearchMethod;
use crate::core::sorting::SortMethod;
use crate::domain::model::{
    Category, FacilityEvent, FacilityLayout, Plate, SortField, Vehicle, VehicleRequest,
};
use crate::domain::ports::LayoutProvider;
use crate::domain::report::{
    ByCategory, CategoryOccupancy, DebtorEntry, DebtorReport, FreeSlots, SlotBoard, SlotState,
    SlotView, Summary,
};
use crate::utils::error::{ParkingError, Result};

/// In-memory registry of a parking facility: one fixed-size slot array per
/// category plus an append-only event log.
#[derive(Debug, Clone)]
pub struct Facility {
    car_slots: Vec<Option<Vehicle>>,
    motorcycle_slots: Vec<Option<Vehicle>>,
    car_rate: f64,
    motorcycle_rate: f64,
    events: Vec<FacilityEvent>,
}

impl Default for Facility {
    fn default() -> Self {
        Self::new()
    }
}

impl Facility {
    pub fn new() -> Self {
        Self::from_layout(&FacilityLayout::default())
    }

    pub fn from_layout<L: LayoutProvider + ?Sized>(layout: &L) -> Self {
        tracing::debug!(
            car_capacity = layout.car_capacity(),
            motorcycle_capacity = layout.motorcycle_capacity(),
            "Creating facility"
        );
        Self {
            car_slots: vec![None; layout.car_capacity()],
            motorcycle_slots: vec![None; layout.motorcycle_capacity()],
            car_rate: layout.car_rate(),
            motorcycle_rate: layout.motorcycle_rate(),
            events: Vec::new(),
        }
    }

    fn slots(&self, category: Category) -> &[Option<Vehicle>] {
        match category {
            Category::Car => &self.car_slots,
            Category::Motorcycle => &self.motorcycle_slots,
        }
    }

    fn slots_mut(&mut self, category: Category) -> &mut Vec<Option<Vehicle>> {
        match category {
            Category::Car => &mut self.car_slots,
            Category::Motorcycle => &mut self.motorcycle_slots,
        }
    }

    pub fn capacity(&self, category: Category) -> usize {
        self.slots(category).len()
    }

    pub fn rate(&self, category: Category) -> f64 {
        match category {
            Category::Car => self.car_rate,
            Category::Motorcycle => self.motorcycle_rate,
        }
    }

    /// Changes the base rate for future registrations only.
    pub fn set_rate(&mut self, category: Category, rate: f64) {
        tracing::info!(category = %category, rate, "Base rate changed");
        match category {
            Category::Car => self.car_rate = rate,
            Category::Motorcycle => self.motorcycle_rate = rate,
        }
    }

    /// Cars first, then motorcycles, each by ascending slot index.
    fn locate(&self, plate: &Plate) -> Option<(Category, usize)> {
        Category::ALL.into_iter().find_map(|category| {
            self.slots(category)
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|v| v.plate == *plate))
                .map(|index| (category, index))
        })
    }

    fn first_free_index(&self, category: Category) -> Option<usize> {
        self.slots(category).iter().position(Option::is_none)
    }

    pub fn register(&mut self, request: &VehicleRequest) -> Result<Vehicle> {
        let category: Category = request.category.parse()?;
        let plate = Plate::new(&request.plate);

        if self.locate(&plate).is_some() {
            tracing::warn!(plate = %plate, "Rejected duplicate plate");
            return Err(ParkingError::DuplicatePlate {
                plate: plate.to_string(),
            });
        }

        let index = self.first_free_index(category).ok_or_else(|| {
            tracing::warn!(category = %category, "No free slot");
            ParkingError::NoSlotAvailable {
                category: category.to_string(),
            }
        })?;

        let vehicle = Vehicle::from_request(request, category, index + 1, self.rate(category));
        self.slots_mut(category)[index] = Some(vehicle.clone());
        self.events.push(FacilityEvent::Registered {
            category,
            plate: vehicle.plate.clone(),
            slot: vehicle.slot_name.clone(),
        });

        tracing::info!(plate = %vehicle.plate, slot = %vehicle.slot_name, "Vehicle registered");
        Ok(vehicle)
    }

    pub fn find_by_plate(&self, plate: &str) -> Result<&Vehicle> {
        let plate = Plate::new(plate);
        self.locate(&plate)
            .and_then(|(category, index)| self.slots(category)[index].as_ref())
            .ok_or_else(|| ParkingError::NotFound {
                plate: plate.to_string(),
            })
    }

    /// Overwrites the paid-through period; an earlier period is accepted too.
    pub fn pay_installment(&mut self, plate: &str, month: u32, year: i32) -> Result<()> {
        let plate = Plate::new(plate);
        let (category, index) = self.locate(&plate).ok_or_else(|| ParkingError::NotFound {
            plate: plate.to_string(),
        })?;

        let event = match self.slots_mut(category)[index].as_mut() {
            Some(vehicle) => {
                vehicle.paid_month = month;
                vehicle.paid_year = year;
                FacilityEvent::Paid {
                    category: vehicle.category,
                    plate: vehicle.plate.clone(),
                    month,
                    year,
                    slot: category.slot_name(index + 1),
                }
            }
            None => {
                return Err(ParkingError::NotFound {
                    plate: plate.to_string(),
                })
            }
        };
        self.events.push(event);

        tracing::info!(plate = %plate, month, year, "Installment recorded");
        Ok(())
    }

    pub fn remove(&mut self, plate: &str) -> Result<Vehicle> {
        let plate = Plate::new(plate);
        let (category, index) = self.locate(&plate).ok_or_else(|| ParkingError::NotFound {
            plate: plate.to_string(),
        })?;

        let vehicle = self.slots_mut(category)[index]
            .take()
            .ok_or_else(|| ParkingError::NotFound {
                plate: plate.to_string(),
            })?;
        self.events.push(FacilityEvent::Removed {
            category: vehicle.category,
            plate: vehicle.plate.clone(),
            slot: category.slot_name(index + 1),
        });

        tracing::info!(plate = %vehicle.plate, slot = %vehicle.slot_name, "Vehicle removed");
        Ok(vehicle)
    }

    fn slot_views(&self, category: Category) -> Vec<SlotView> {
        self.slots(category)
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotView {
                name: category.slot_name(index + 1),
                state: if slot.is_some() {
                    SlotState::Occupied
                } else {
                    SlotState::Free
                },
                plate: slot.as_ref().map(|v| v.plate.clone()),
                owner: slot.as_ref().map(|v| v.owner.clone()),
            })
            .collect()
    }

    pub fn list_slots(&self) -> SlotBoard {
        ByCategory {
            cars: self.slot_views(Category::Car),
            motorcycles: self.slot_views(Category::Motorcycle),
        }
    }

    fn free_names(&self, category: Category) -> Vec<String> {
        self.slots(category)
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| category.slot_name(index + 1))
            .collect()
    }

    pub fn list_free_slots(&self) -> FreeSlots {
        ByCategory {
            cars: self.free_names(Category::Car),
            motorcycles: self.free_names(Category::Motorcycle),
        }
    }

    fn debtors_in(&self, category: Category, month: u32, year: i32) -> Vec<DebtorEntry> {
        self.slots(category)
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|v| (index, v)))
            .filter(|(_, vehicle)| !vehicle.is_current(month, year))
            .map(|(index, vehicle)| DebtorEntry {
                plate: vehicle.plate.clone(),
                owner: vehicle.owner.clone(),
                slot: category.slot_name(index + 1),
                rate: vehicle.monthly_rate,
                paid_month: vehicle.paid_month,
                paid_year: vehicle.paid_year,
            })
            .collect()
    }

    pub fn list_debtors(&self, current_month: u32, current_year: i32) -> DebtorReport {
        ByCategory {
            cars: self.debtors_in(Category::Car, current_month, current_year),
            motorcycles: self.debtors_in(Category::Motorcycle, current_month, current_year),
        }
    }

    fn occupancy(&self, category: Category) -> CategoryOccupancy {
        let slots = self.slots(category);
        let occupied = slots.iter().filter(|slot| slot.is_some()).count();
        CategoryOccupancy {
            occupied,
            free: slots.len() - occupied,
            total: slots.len(),
        }
    }

    pub fn summary(&self) -> Summary {
        let theoretical_monthly_revenue: f64 = self.vehicles().iter().map(|v| v.monthly_rate).sum();
        Summary {
            cars: self.occupancy(Category::Car),
            motorcycles: self.occupancy(Category::Motorcycle),
            theoretical_monthly_revenue,
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Snapshot of every registered vehicle: cars, then motorcycles.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        Category::ALL
            .into_iter()
            .flat_map(|category| self.slots(category).iter().flatten().cloned())
            .collect()
    }

    pub fn sorted_vehicles(&self, field: SortField, method: SortMethod) -> Vec<Vehicle> {
        tracing::debug!(?field, method = method.as_str(), "Sorting vehicle snapshot");
        method.sorted(&self.vehicles(), field)
    }

    pub fn search(&self, plate: &str, method: SearchMethod) -> Option<Vehicle> {
        tracing::debug!(method = method.as_str(), "Searching by plate");
        method.strategy().lookup(&self.vehicles(), &Plate::new(plate))
    }
}
