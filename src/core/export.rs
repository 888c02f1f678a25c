use crate::domain::model::Vehicle;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes one CSV row per vehicle (header taken from the wire field names)
/// and returns the number of rows written.
pub fn write_vehicles_csv<P: AsRef<Path>>(path: P, vehicles: &[Vehicle]) -> Result<usize> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for vehicle in vehicles {
        writer.serialize(vehicle)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} vehicles to {}", vehicles.len(), path.display());
    Ok(vehicles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::facility::Facility;
    use crate::domain::model::VehicleRequest;
    use tempfile::TempDir;

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut facility = Facility::new();
        facility
            .register(&VehicleRequest::new("CARRO", "zz1", "Zoe").with_vehicle("Kia", "Rio"))
            .unwrap();
        facility
            .register(&VehicleRequest::new("MOTO", "aa1", "Abel"))
            .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("vehicles.csv");
        let rows = write_vehicles_csv(&path, &facility.vehicles()).unwrap();
        assert_eq!(rows, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tipo,placa,dueno,dni,telefono,marca,modelo"));
        assert!(lines[1].starts_with("CARRO,ZZ1,Zoe,,,Kia,Rio,CARRO,1,0,0,250"));
        assert!(lines[2].contains("M1"));
    }
}
