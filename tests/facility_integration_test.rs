use apparkala::core::search::SearchMethod;
use apparkala::core::sorting::SortMethod;
use apparkala::domain::model::{Category, FacilityLayout, SortField, VehicleRequest};
use apparkala::domain::report::SlotState;
use apparkala::{Facility, ParkingError};

fn car(plate: &str) -> VehicleRequest {
    VehicleRequest::new("CARRO", plate, "Owner")
}

fn moto(plate: &str) -> VehicleRequest {
    VehicleRequest::new("MOTO", plate, "Rider")
}

#[test]
fn test_full_car_section_then_reuse_vacated_slot() {
    let mut facility = Facility::new();

    for i in 1..=40 {
        let vehicle = facility.register(&car(&format!("CAR{:02}", i))).unwrap();
        assert_eq!(vehicle.slot_name, format!("C{}", i));
    }

    let before = facility.list_slots();
    let history_len = facility.history().len();
    let result = facility.register(&car("EXTRA1"));
    assert!(matches!(result, Err(ParkingError::NoSlotAvailable { .. })));
    assert_eq!(facility.list_slots(), before);
    assert_eq!(facility.history().len(), history_len);

    // 摩托車區不受影響
    assert_eq!(facility.register(&moto("BIKE1")).unwrap().slot_name, "M1");

    facility.remove("CAR05").unwrap();
    let reused = facility.register(&car("NEW005")).unwrap();
    assert_eq!(reused.slot_name, "C5");
    assert_eq!(reused.slot_number, 5);
}

#[test]
fn test_register_remove_register_round_trip() {
    let mut facility = Facility::new();
    facility.register(&car("A1")).unwrap();
    facility.register(&car("B2")).unwrap();

    facility.remove("a1").unwrap();
    let again = facility.register(&car("a1")).unwrap();
    assert_eq!(again.slot_name, "C1");
    assert_eq!(facility.find_by_plate("B2").unwrap().slot_name, "C2");
}

#[test]
fn test_duplicate_plate_any_case_any_category() {
    let mut facility = Facility::new();
    facility.register(&car("XyZ789")).unwrap();

    for request in [car("xyz789"), moto("XYZ789"), moto("xYz789")] {
        assert!(matches!(
            facility.register(&request),
            Err(ParkingError::DuplicatePlate { .. })
        ));
    }
    assert_eq!(facility.summary().motorcycles.occupied, 0);
}

#[test]
fn test_duplicate_wins_over_full_category() {
    let mut facility = Facility::from_layout(&FacilityLayout {
        car_capacity: 2,
        motorcycle_capacity: 1,
        car_rate: 250.0,
        motorcycle_rate: 150.0,
    });
    facility.register(&moto("Solo1")).unwrap();
    facility.register(&car("CAR1")).unwrap();

    let before_slots = facility.list_slots();
    let before_history = facility.history();

    for request in [moto("solo1"), moto("SOLO1"), car("sOlO1")] {
        assert!(matches!(
            facility.register(&request),
            Err(ParkingError::DuplicatePlate { .. })
        ));
    }
    // 新車牌才會看到沒有空位
    assert!(matches!(
        facility.register(&moto("OTHER1")),
        Err(ParkingError::NoSlotAvailable { .. })
    ));

    assert_eq!(facility.list_slots(), before_slots);
    assert_eq!(facility.history(), before_history);
}

#[test]
fn test_is_current_concrete_periods() {
    let mut facility = Facility::new();
    facility
        .register(&car("ABC123").paid_through(5, 2024))
        .unwrap();
    let vehicle = facility.find_by_plate("abc123").unwrap();

    assert!(vehicle.is_current(5, 2024));
    assert!(!vehicle.is_current(6, 2024));
    assert!(!vehicle.is_current(1, 2025));
    assert!(vehicle.is_current(1, 2023));
}

#[test]
fn test_summary_counts_and_theoretical_revenue() {
    let mut facility = Facility::new();
    facility.register(&car("C-1")).unwrap();
    facility.register(&car("C-2")).unwrap();
    facility.register(&moto("M-1")).unwrap();

    let summary = facility.summary();
    assert_eq!(summary.cars.occupied, 2);
    assert_eq!(summary.cars.free, 38);
    assert_eq!(summary.cars.total, 40);
    assert_eq!(summary.motorcycles.occupied, 1);
    assert_eq!(summary.motorcycles.free, 9);
    assert_eq!(summary.theoretical_monthly_revenue, 650.0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["carros"]["ocupadas"], 2);
    assert_eq!(json["motos"]["ocupadas"], 1);
    assert_eq!(json["recaudacion_mensual_teorica"], 650.0);
}

#[test]
fn test_new_registration_is_debtor_until_paid() {
    let mut facility = Facility::new();
    facility.register(&car("FRESH1")).unwrap();
    facility.register(&moto("PAID1").paid_through(12, 2030)).unwrap();

    let debtors = facility.list_debtors(3, 2025);
    assert_eq!(debtors.cars.len(), 1);
    assert_eq!(debtors.cars[0].plate.as_str(), "FRESH1");
    assert_eq!(debtors.cars[0].paid_month, 0);
    assert_eq!(debtors.cars[0].paid_year, 0);
    assert_eq!(debtors.cars[0].slot, "C1");
    assert_eq!(debtors.cars[0].rate, 250.0);
    assert!(debtors.motorcycles.is_empty());

    facility.pay_installment("fresh1", 3, 2025).unwrap();
    assert!(facility.list_debtors(3, 2025).cars.is_empty());
}

#[test]
fn test_pay_overwrites_even_with_earlier_period() {
    // An earlier payment replaces a later one ("un-paying"); kept as observed behavior.
    let mut facility = Facility::new();
    facility.register(&car("LATE1").paid_through(12, 2025)).unwrap();
    facility.pay_installment("LATE1", 1, 2024).unwrap();

    let vehicle = facility.find_by_plate("LATE1").unwrap();
    assert_eq!((vehicle.paid_month, vehicle.paid_year), (1, 2024));
    assert!(!vehicle.is_current(6, 2025));
}

#[test]
fn test_debtors_ordered_by_slot_per_category() {
    let mut facility = Facility::new();
    for plate in ["D3", "D1", "D2"] {
        facility.register(&car(plate)).unwrap();
    }
    facility.register(&moto("MD1")).unwrap();

    let debtors = facility.list_debtors(1, 2025);
    let slots: Vec<&str> = debtors.cars.iter().map(|d| d.slot.as_str()).collect();
    assert_eq!(slots, vec!["C1", "C2", "C3"]);
    assert_eq!(debtors.motorcycles[0].slot, "M1");
    assert_eq!(debtors.motorcycles[0].rate, 150.0);
}

#[test]
fn test_slot_board_and_free_slots() {
    let mut facility = Facility::new();
    facility.register(&car("S1")).unwrap();
    facility.register(&car("S2")).unwrap();
    facility.register(&moto("S3")).unwrap();
    facility.remove("S1").unwrap();

    let board = facility.list_slots();
    assert_eq!(board.cars.len(), 40);
    assert_eq!(board.motorcycles.len(), 10);
    assert_eq!(board.cars[0].state, SlotState::Free);
    assert!(board.cars[0].plate.is_none());
    assert_eq!(board.cars[1].name, "C2");
    assert_eq!(board.cars[1].state, SlotState::Occupied);
    assert_eq!(board.cars[1].owner.as_deref(), Some("Owner"));
    assert_eq!(board.get(Category::Motorcycle)[0].state, SlotState::Occupied);

    let free = facility.list_free_slots();
    assert_eq!(free.cars.len(), 39);
    assert_eq!(free.cars[0], "C1");
    assert_eq!(free.cars[1], "C3");
    assert_eq!(free.motorcycles.first().map(String::as_str), Some("M2"));

    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["carros"][0]["estado"], "LIBRE");
    assert_eq!(json["carros"][1]["estado"], "OCUPADA");
    assert_eq!(json["carros"][1]["placa"], "S2");
}

#[test]
fn test_history_is_append_only() {
    let mut facility = Facility::new();
    facility.register(&moto("h1")).unwrap();
    let _ = facility.register(&moto("H1"));
    let _ = facility.remove("missing");
    facility.pay_installment("H1", 2, 2026).unwrap();
    facility.remove("h1").unwrap();
    facility.register(&moto("h1")).unwrap();

    assert_eq!(
        facility.history(),
        vec![
            "Registro: MOTO H1 asignado a casilla M1.",
            "Pago: MOTO H1 pagó mes 2/2026 - casilla M1.",
            "Salida: MOTO H1 retirado, se libera casilla M1.",
            "Registro: MOTO H1 asignado a casilla M1.",
        ]
    );
}

#[test]
fn test_sorted_and_search_do_not_mutate_registry() {
    let mut facility = Facility::new();
    for plate in ["QQ1", "AA1", "MM1"] {
        facility.register(&car(plate)).unwrap();
    }
    let before = facility.list_slots();

    let sorted = facility.sorted_vehicles(SortField::Plate, SortMethod::Quick);
    let plates: Vec<&str> = sorted.iter().map(|v| v.plate.as_str()).collect();
    assert_eq!(plates, vec!["AA1", "MM1", "QQ1"]);

    for method in SearchMethod::ALL {
        assert_eq!(facility.search("mm1", method).unwrap().slot_name, "C3");
    }
    assert_eq!(facility.list_slots(), before);
}
