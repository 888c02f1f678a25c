use crate::domain::model::{Category, Plate};
use serde::Serialize;

/// One value per slot category, keyed the way front-ends expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ByCategory<T> {
    #[serde(rename = "carros")]
    pub cars: T,
    #[serde(rename = "motos")]
    pub motorcycles: T,
}

impl<T> ByCategory<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Car => &self.cars,
            Category::Motorcycle => &self.motorcycles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotState {
    #[serde(rename = "LIBRE")]
    Free,
    #[serde(rename = "OCUPADA")]
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub state: SlotState,
    #[serde(rename = "placa")]
    pub plate: Option<Plate>,
    #[serde(rename = "dueno")]
    pub owner: Option<String>,
}

pub type SlotBoard = ByCategory<Vec<SlotView>>;

pub type FreeSlots = ByCategory<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorEntry {
    #[serde(rename = "placa")]
    pub plate: Plate,
    #[serde(rename = "dueno")]
    pub owner: String,
    #[serde(rename = "casilla")]
    pub slot: String,
    #[serde(rename = "tarifa")]
    pub rate: f64,
    #[serde(rename = "mes_pagado")]
    pub paid_month: u32,
    #[serde(rename = "anio_pagado")]
    pub paid_year: i32,
}

pub type DebtorReport = ByCategory<Vec<DebtorEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOccupancy {
    #[serde(rename = "ocupadas")]
    pub occupied: usize,
    #[serde(rename = "libres")]
    pub free: usize,
    pub total: usize,
}

/// Occupancy per category plus the theoretical monthly revenue, i.e. the sum
/// of frozen rates over occupied slots. Not a record of collected payments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "carros")]
    pub cars: CategoryOccupancy,
    #[serde(rename = "motos")]
    pub motorcycles: CategoryOccupancy,
    #[serde(rename = "recaudacion_mensual_teorica")]
    pub theoretical_monthly_revenue: f64,
}
