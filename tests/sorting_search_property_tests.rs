use apparkala::core::search::SearchMethod;
use apparkala::core::sorting::{compare_by, SortMethod};
use apparkala::domain::model::{FacilityLayout, SortField, Vehicle, VehicleRequest};
use apparkala::Facility;
use proptest::prelude::*;
use std::cmp::Ordering;

const FIELDS: [SortField; 11] = [
    SortField::Plate,
    SortField::Owner,
    SortField::NationalId,
    SortField::Phone,
    SortField::Make,
    SortField::Model,
    SortField::Category,
    SortField::SlotNumber,
    SortField::PaidMonth,
    SortField::PaidYear,
    SortField::MonthlyRate,
];

fn arb_request() -> impl Strategy<Value = VehicleRequest> {
    (
        prop_oneof![Just("CARRO"), Just("MOTO")],
        "[A-Za-z0-9]{1,6}",
        "[a-z]{0,4}",
        "[A-Z]{0,3}",
        0u32..=12,
        prop_oneof![Just(0i32), 2020i32..=2026],
    )
        .prop_map(|(category, plate, owner, make, month, year)| {
            VehicleRequest::new(category, plate, owner)
                .with_vehicle(make, "")
                .paid_through(month, year)
        })
}

/// Registers what fits; duplicates and overflow are skipped by the registry.
fn facility_with(requests: &[VehicleRequest]) -> Facility {
    let mut facility = Facility::from_layout(&FacilityLayout {
        car_capacity: 20,
        motorcycle_capacity: 8,
        car_rate: 250.0,
        motorcycle_rate: 150.0,
    });
    for request in requests {
        let _ = facility.register(request);
    }
    facility
}

fn plates(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles.iter().map(|v| v.plate.to_string()).collect()
}

proptest! {
    #[test]
    fn prop_every_sort_method_agrees(
        requests in prop::collection::vec(arb_request(), 0..30),
        field_index in 0usize..FIELDS.len(),
    ) {
        let facility = facility_with(&requests);
        let field = FIELDS[field_index];

        let mut expected = facility.vehicles();
        expected.sort_by(|a, b| compare_by(field, a, b));

        for method in SortMethod::ALL {
            let sorted = facility.sorted_vehicles(field, method);
            prop_assert_eq!(plates(&sorted), plates(&expected));
        }
    }

    #[test]
    fn prop_sorted_output_is_ordered_permutation(
        requests in prop::collection::vec(arb_request(), 0..30),
        field_index in 0usize..FIELDS.len(),
    ) {
        let facility = facility_with(&requests);
        let field = FIELDS[field_index];
        let sorted = facility.sorted_vehicles(field, SortMethod::Quick);

        prop_assert_eq!(sorted.len(), facility.vehicles().len());
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_by(field, &pair[0], &pair[1]), Ordering::Greater);
        }

        let mut original = plates(&facility.vehicles());
        let mut after = plates(&sorted);
        original.sort();
        after.sort();
        prop_assert_eq!(original, after);
    }

    #[test]
    fn prop_search_agrees_with_find_by_plate(
        requests in prop::collection::vec(arb_request(), 0..30),
        probe in "[A-Za-z0-9]{1,6}",
    ) {
        let facility = facility_with(&requests);
        let expected = facility.find_by_plate(&probe).ok().map(|v| v.slot_name.clone());

        for method in SearchMethod::ALL {
            let found = facility.search(&probe, method).map(|v| v.slot_name);
            prop_assert_eq!(&found, &expected);
        }
    }

    #[test]
    fn prop_search_finds_every_registered_plate(
        requests in prop::collection::vec(arb_request(), 1..30),
    ) {
        let facility = facility_with(&requests);

        for vehicle in facility.vehicles() {
            let lower = vehicle.plate.as_str().to_lowercase();
            for method in SearchMethod::ALL {
                let found = facility.search(&lower, method);
                prop_assert_eq!(found.map(|v| v.slot_name), Some(vehicle.slot_name.clone()));
            }
        }
    }
}
