use crate::core::command::Command;
use crate::core::export::write_vehicles_csv;
use crate::core::search::SearchMethod;
use crate::core::shared::SharedFacility;
use crate::core::sorting::SortMethod;
use crate::domain::model::{Category, SortField, Vehicle, VehicleRequest};
use crate::domain::report::{DebtorReport, FreeSlots, SlotBoard, Summary};
use crate::utils::error::{ErrorSeverity, ParkingError, Result};
use crate::utils::validation::{validate_input_not_blank, validate_input_range, validate_path};
use chrono::Datelike;
use serde::Serialize;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    #[serde(rename = "metodo")]
    pub method: &'static str,
    #[serde(rename = "vehiculo")]
    pub vehicle: Option<Vehicle>,
}

/// Response to one command, serialized as JSON by the front-ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Vehicle(Vehicle),
    Vehicles(Vec<Vehicle>),
    Message {
        message: String,
        state: bool,
    },
    Slots(SlotBoard),
    FreeSlots(FreeSlots),
    Debtors(DebtorReport),
    Summary(Summary),
    History {
        historial: Vec<String>,
    },
    Search(Vec<SearchHit>),
    Exported {
        message: String,
        path: String,
        rows: usize,
    },
    Rejected {
        detail: String,
        state: bool,
    },
}

impl Reply {
    fn message(message: String) -> Self {
        Reply::Message {
            message,
            state: true,
        }
    }
}

/// Request/response layer over one shared facility: validates transport
/// level input, then calls into the registry.
#[derive(Debug, Clone, Default)]
pub struct Session {
    facility: SharedFacility,
}

impl Session {
    pub fn new(facility: SharedFacility) -> Self {
        Self { facility }
    }

    pub fn facility(&self) -> &SharedFacility {
        &self.facility
    }

    /// Current (month, year) from the local clock.
    pub fn current_period() -> (u32, i32) {
        let today = chrono::Local::now().date_naive();
        (today.month(), today.year())
    }

    fn validate_period(month: u32, year: i32) -> Result<()> {
        validate_input_range("mes", month, 1, 12, "El mes debe estar entre 1 y 12")?;
        validate_input_range("anio", year, MIN_YEAR, MAX_YEAR, "Año inválido")
    }

    fn sort_options(
        field: Option<&str>,
        method: Option<&str>,
    ) -> Result<(SortField, SortMethod)> {
        let field = field
            .map(str::parse::<SortField>)
            .transpose()?
            .unwrap_or_default();
        let method = method
            .map(str::parse::<SortMethod>)
            .transpose()?
            .unwrap_or_default();
        Ok((field, method))
    }

    /// Like [`Session::execute`], but a failed command becomes a rejected
    /// reply so the registry outlives any single bad command.
    pub fn respond(&self, command: Command) -> Reply {
        let name = command.name();
        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                if e.severity() == ErrorSeverity::Low {
                    tracing::debug!("{} rejected: {}", name, e);
                } else {
                    tracing::error!(
                        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
                        name,
                        e,
                        e.category(),
                        e.severity()
                    );
                }
                Reply::Rejected {
                    detail: e.user_friendly_message(),
                    state: false,
                }
            }
        }
    }

    pub fn execute(&self, command: Command) -> Result<Reply> {
        if command.is_mutation() {
            tracing::info!("Executing {}", command.name());
        } else {
            tracing::debug!("Executing {}", command.name());
        }

        match command {
            Command::Register {
                category,
                plate,
                owner,
                national_id,
                phone,
                make,
                model,
                paid_month,
                paid_year,
            } => {
                validate_input_not_blank("placa", &plate)?;
                let request = VehicleRequest::new(category, plate, owner)
                    .with_contact(national_id, phone)
                    .with_vehicle(make, model)
                    .paid_through(paid_month, paid_year);
                self.facility.register(&request).map(Reply::Vehicle)
            }
            Command::Find { plate } => self.facility.find_by_plate(&plate).map(Reply::Vehicle),
            Command::Pay { plate, month, year } => {
                Self::validate_period(month, year)?;
                self.facility.pay_installment(&plate, month, year)?;
                Ok(Reply::message(format!(
                    "Pago registrado correctamente para {}",
                    plate
                )))
            }
            Command::Remove { plate } => {
                self.facility.remove(&plate)?;
                Ok(Reply::message(format!("Vehículo {} eliminado del sistema", plate)))
            }
            Command::Slots => Ok(Reply::Slots(self.facility.list_slots())),
            Command::FreeSlots => Ok(Reply::FreeSlots(self.facility.list_free_slots())),
            Command::Debtors { month, year } => {
                let (now_month, now_year) = Self::current_period();
                let month = month.unwrap_or(now_month);
                let year = year.unwrap_or(now_year);
                Self::validate_period(month, year)?;
                Ok(Reply::Debtors(self.facility.list_debtors(month, year)))
            }
            Command::Summary => Ok(Reply::Summary(self.facility.summary())),
            Command::History => Ok(Reply::History {
                historial: self.facility.history(),
            }),
            Command::Sorted { field, method } => {
                let (field, method) = Self::sort_options(field.as_deref(), method.as_deref())?;
                Ok(Reply::Vehicles(self.facility.sorted_vehicles(field, method)))
            }
            Command::Search { plate, method } => {
                let methods = match method {
                    Some(name) => vec![name.parse::<SearchMethod>()?],
                    None => SearchMethod::ALL.to_vec(),
                };
                let hits = methods
                    .into_iter()
                    .map(|m| SearchHit {
                        method: m.as_str(),
                        vehicle: self.facility.search(&plate, m),
                    })
                    .collect();
                Ok(Reply::Search(hits))
            }
            Command::Export {
                path,
                field,
                method,
            } => {
                validate_path("path", &path)?;
                let (field, method) = Self::sort_options(field.as_deref(), method.as_deref())?;
                let vehicles = self.facility.sorted_vehicles(field, method);
                let rows = write_vehicles_csv(&path, &vehicles)?;
                Ok(Reply::Exported {
                    message: format!("Exportados {} vehículos", rows),
                    path,
                    rows,
                })
            }
            Command::SetRate { category, rate } => {
                let category: Category = category.parse()?;
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(ParkingError::ValidationError {
                        field: "tarifa".to_string(),
                        message: "La tarifa debe ser un monto positivo".to_string(),
                    });
                }
                self.facility.set_rate(category, rate);
                Ok(Reply::message(format!(
                    "Tarifa de {} actualizada a {:.2}",
                    category, rate
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(plate: &str, category: &str) -> Command {
        Command::Register {
            category: category.to_string(),
            plate: plate.to_string(),
            owner: "Owner".to_string(),
            national_id: String::new(),
            phone: String::new(),
            make: String::new(),
            model: String::new(),
            paid_month: 0,
            paid_year: 0,
        }
    }

    #[test]
    fn test_pay_validates_month_and_year() {
        let session = Session::default();
        session.execute(register("ABC123", "CARRO")).unwrap();

        for (month, year) in [(0, 2024), (13, 2024), (5, 1999), (5, 2101)] {
            let result = session.execute(Command::Pay {
                plate: "ABC123".to_string(),
                month,
                year,
            });
            assert!(matches!(result, Err(ParkingError::ValidationError { .. })));
        }
        assert_eq!(session.facility().history().len(), 1);
    }

    #[test]
    fn test_blank_plate_rejected() {
        let session = Session::default();
        assert!(matches!(
            session.execute(register("  ", "CARRO")),
            Err(ParkingError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_debtors_default_to_current_period() {
        let session = Session::default();
        session.execute(register("NEW1", "MOTO")).unwrap();
        let (month, year) = Session::current_period();

        let explicit = session
            .execute(Command::Debtors {
                month: Some(month),
                year: Some(year),
            })
            .unwrap();
        let implicit = session
            .execute(Command::Debtors {
                month: None,
                year: None,
            })
            .unwrap();
        assert_eq!(explicit, implicit);

        match implicit {
            Reply::Debtors(report) => assert_eq!(report.motorcycles.len(), 1),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_sort_method() {
        let session = Session::default();
        assert!(matches!(
            session.execute(Command::Sorted {
                field: None,
                method: Some("shell".to_string()),
            }),
            Err(ParkingError::UnknownSortMethod { .. })
        ));
    }

    #[test]
    fn test_set_rate_rejects_non_positive() {
        let session = Session::default();
        assert!(matches!(
            session.execute(Command::SetRate {
                category: "CARRO".to_string(),
                rate: 0.0,
            }),
            Err(ParkingError::ValidationError { .. })
        ));
        assert!(matches!(
            session.execute(Command::SetRate {
                category: "BUS".to_string(),
                rate: 10.0,
            }),
            Err(ParkingError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_respond_turns_errors_into_rejections() {
        let session = Session::default();
        let reply = session.respond(Command::Find {
            plate: "GHOST".to_string(),
        });
        assert_eq!(
            reply,
            Reply::Rejected {
                detail: "No se encontró vehículo con esa placa".to_string(),
                state: false,
            }
        );

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["state"], false);
        assert!(matches!(session.respond(Command::Summary), Reply::Summary(_)));
    }

    #[test]
    fn test_reply_json_shape() {
        let session = Session::default();
        session.execute(register("abc123", "CARRO")).unwrap();
        let reply = session
            .execute(Command::Pay {
                plate: "abc123".to_string(),
                month: 5,
                year: 2024,
            })
            .unwrap();
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["message"], "Pago registrado correctamente para abc123");
        assert_eq!(json["state"], true);

        let history = serde_json::to_value(session.execute(Command::History).unwrap()).unwrap();
        assert_eq!(history["historial"].as_array().unwrap().len(), 2);
    }
}
