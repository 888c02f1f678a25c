use crate::utils::error::ParkingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CAR_CAPACITY: usize = 40;
pub const DEFAULT_MOTORCYCLE_CAPACITY: usize = 10;
pub const DEFAULT_CAR_RATE: f64 = 250.0;
pub const DEFAULT_MOTORCYCLE_RATE: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CARRO")]
    Car,
    #[serde(rename = "MOTO")]
    Motorcycle,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Car, Category::Motorcycle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Car => "CARRO",
            Category::Motorcycle => "MOTO",
        }
    }

    pub fn prefix(&self) -> char {
        match self {
            Category::Car => 'C',
            Category::Motorcycle => 'M',
        }
    }

    /// Display name of a 1-based slot number, e.g. `C7`.
    pub fn slot_name(&self, number: usize) -> String {
        format!("{}{}", self.prefix(), number)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CARRO" | "CAR" => Ok(Category::Car),
            "MOTO" | "MOTORCYCLE" => Ok(Category::Motorcycle),
            _ => Err(ParkingError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// License plate in canonical (upper-case) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn first_char(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl From<String> for Plate {
    fn from(raw: String) -> Self {
        Plate::new(raw)
    }
}

impl From<&str> for Plate {
    fn from(raw: &str) -> Self {
        Plate::new(raw)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registration data as handed over by a front-end. The category is kept as
/// raw text so an unknown value is rejected by the registry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRequest {
    #[serde(rename = "tipo")]
    pub category: String,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "dueno")]
    pub owner: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "mes_pagado", default)]
    pub paid_month: u32,
    #[serde(rename = "anio_pagado", default)]
    pub paid_year: i32,
}

impl VehicleRequest {
    pub fn new(
        category: impl Into<String>,
        plate: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            plate: plate.into(),
            owner: owner.into(),
            national_id: String::new(),
            phone: String::new(),
            make: String::new(),
            model: String::new(),
            paid_month: 0,
            paid_year: 0,
        }
    }

    pub fn with_contact(
        mut self,
        national_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.national_id = national_id.into();
        self.phone = phone.into();
        self
    }

    pub fn with_vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    pub fn paid_through(mut self, month: u32, year: i32) -> Self {
        self.paid_month = month;
        self.paid_year = year;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    #[serde(rename = "tipo")]
    pub category: Category,
    #[serde(rename = "placa")]
    pub plate: Plate,
    #[serde(rename = "dueno")]
    pub owner: String,
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "casilla_tipo")]
    pub slot_category: Category,
    #[serde(rename = "casilla_numero")]
    pub slot_number: usize,
    #[serde(rename = "mes_pagado")]
    pub paid_month: u32,
    #[serde(rename = "anio_pagado")]
    pub paid_year: i32,
    #[serde(rename = "tarifa_mensual")]
    pub monthly_rate: f64,
    #[serde(rename = "nombre_casilla")]
    pub slot_name: String,
}

impl Vehicle {
    pub(crate) fn from_request(
        request: &VehicleRequest,
        category: Category,
        slot_number: usize,
        monthly_rate: f64,
    ) -> Self {
        Self {
            category,
            plate: Plate::new(&request.plate),
            owner: request.owner.clone(),
            national_id: request.national_id.clone(),
            phone: request.phone.clone(),
            make: request.make.clone(),
            model: request.model.clone(),
            slot_category: category,
            slot_number,
            paid_month: request.paid_month,
            paid_year: request.paid_year,
            monthly_rate,
            slot_name: category.slot_name(slot_number),
        }
    }

    /// Paid-through period is at or after the given one (year first).
    pub fn is_current(&self, current_month: u32, current_year: i32) -> bool {
        if self.paid_year > current_year {
            return true;
        }
        self.paid_year == current_year && self.paid_month >= current_month
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FacilityEvent {
    Registered {
        category: Category,
        plate: Plate,
        slot: String,
    },
    Paid {
        category: Category,
        plate: Plate,
        month: u32,
        year: i32,
        slot: String,
    },
    Removed {
        category: Category,
        plate: Plate,
        slot: String,
    },
}

impl fmt::Display for FacilityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityEvent::Registered {
                category,
                plate,
                slot,
            } => write!(f, "Registro: {} {} asignado a casilla {}.", category, plate, slot),
            FacilityEvent::Paid {
                category,
                plate,
                month,
                year,
                slot,
            } => write!(
                f,
                "Pago: {} {} pagó mes {}/{} - casilla {}.",
                category, plate, month, year, slot
            ),
            FacilityEvent::Removed {
                category,
                plate,
                slot,
            } => write!(
                f,
                "Salida: {} {} retirado, se libera casilla {}.",
                category, plate, slot
            ),
        }
    }
}

/// Capacities and base rates a facility is built with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacilityLayout {
    pub car_capacity: usize,
    pub motorcycle_capacity: usize,
    pub car_rate: f64,
    pub motorcycle_rate: f64,
}

impl Default for FacilityLayout {
    fn default() -> Self {
        Self {
            car_capacity: DEFAULT_CAR_CAPACITY,
            motorcycle_capacity: DEFAULT_MOTORCYCLE_CAPACITY,
            car_rate: DEFAULT_CAR_RATE,
            motorcycle_rate: DEFAULT_MOTORCYCLE_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Plate,
    Owner,
    NationalId,
    Phone,
    Make,
    Model,
    Category,
    SlotNumber,
    PaidMonth,
    PaidYear,
    MonthlyRate,
}

impl FromStr for SortField {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placa" | "plate" => Ok(SortField::Plate),
            "dueno" | "owner" => Ok(SortField::Owner),
            "dni" | "national_id" => Ok(SortField::NationalId),
            "telefono" | "phone" => Ok(SortField::Phone),
            "marca" | "make" => Ok(SortField::Make),
            "modelo" | "model" => Ok(SortField::Model),
            "tipo" | "category" => Ok(SortField::Category),
            "casilla_numero" | "slot_number" => Ok(SortField::SlotNumber),
            "mes_pagado" | "paid_month" => Ok(SortField::PaidMonth),
            "anio_pagado" | "paid_year" => Ok(SortField::PaidYear),
            "tarifa_mensual" | "monthly_rate" => Ok(SortField::MonthlyRate),
            _ => Err(ParkingError::UnknownSortField {
                field: s.to_string(),
            }),
        }
    }
}
