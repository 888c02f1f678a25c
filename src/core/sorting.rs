use crate::domain::model::{SortField, Vehicle};
use crate::domain::ports::SortAlgorithm;
use crate::utils::error::ParkingError;
use std::cmp::Ordering;
use std::str::FromStr;

/// Total order used by every algorithm: the chosen field (text compared
/// case-insensitively), then the canonical plate, which is unique.
pub fn compare_by(field: SortField, a: &Vehicle, b: &Vehicle) -> Ordering {
    let primary = match field {
        SortField::Plate => a.plate.cmp(&b.plate),
        SortField::Owner => compare_text(&a.owner, &b.owner),
        SortField::NationalId => compare_text(&a.national_id, &b.national_id),
        SortField::Phone => compare_text(&a.phone, &b.phone),
        SortField::Make => compare_text(&a.make, &b.make),
        SortField::Model => compare_text(&a.model, &b.model),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
        SortField::SlotNumber => a.slot_number.cmp(&b.slot_number),
        SortField::PaidMonth => a.paid_month.cmp(&b.paid_month),
        SortField::PaidYear => a.paid_year.cmp(&b.paid_year),
        SortField::MonthlyRate => a.monthly_rate.total_cmp(&b.monthly_rate),
    };
    primary.then_with(|| a.plate.cmp(&b.plate))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_uppercase().cmp(&b.to_uppercase())
}

pub fn insertion_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        // 逐格往左移，直到前一個不再比較大
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub fn selection_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if cmp(&items[j], &items[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        if min_index != i {
            items.swap(i, min_index);
        }
    }
}

pub fn bubble_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..(n - 1 - i) {
            if cmp(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

pub fn quicksort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_range(items, &mut cmp);
}

fn quicksort_range<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items, cmp);
    let (left, right) = items.split_at_mut(pivot);
    quicksort_range(left, cmp);
    quicksort_range(&mut right[1..], cmp);
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T, F>(items: &mut [T], cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = items.len() - 1;
    let mut store = 0;
    for j in 0..last {
        if cmp(&items[j], &items[last]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}

pub struct InsertionSort;
pub struct SelectionSort;
pub struct BubbleSort;
pub struct QuickSort;

impl SortAlgorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "insercion"
    }

    fn sort(&self, vehicles: &mut [Vehicle], field: SortField) {
        insertion_sort(vehicles, |a, b| compare_by(field, a, b));
    }
}

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "seleccion"
    }

    fn sort(&self, vehicles: &mut [Vehicle], field: SortField) {
        selection_sort(vehicles, |a, b| compare_by(field, a, b));
    }
}

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "burbuja"
    }

    fn sort(&self, vehicles: &mut [Vehicle], field: SortField) {
        bubble_sort(vehicles, |a, b| compare_by(field, a, b));
    }
}

impl SortAlgorithm for QuickSort {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort(&self, vehicles: &mut [Vehicle], field: SortField) {
        quicksort(vehicles, |a, b| compare_by(field, a, b));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    #[default]
    Insertion,
    Selection,
    Bubble,
    Quick,
}

impl SortMethod {
    pub const ALL: [SortMethod; 4] = [
        SortMethod::Insertion,
        SortMethod::Selection,
        SortMethod::Bubble,
        SortMethod::Quick,
    ];

    pub fn algorithm(&self) -> &'static dyn SortAlgorithm {
        match self {
            SortMethod::Insertion => &InsertionSort,
            SortMethod::Selection => &SelectionSort,
            SortMethod::Bubble => &BubbleSort,
            SortMethod::Quick => &QuickSort,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Sorted copy of `vehicles`; the input slice is left as is.
    pub fn sorted(&self, vehicles: &[Vehicle], field: SortField) -> Vec<Vehicle> {
        let mut copy = vehicles.to_vec();
        self.algorithm().sort(&mut copy, field);
        copy
    }
}

impl FromStr for SortMethod {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insercion" | "insertion" => Ok(SortMethod::Insertion),
            "seleccion" | "selection" => Ok(SortMethod::Selection),
            "burbuja" | "bubble" => Ok(SortMethod::Bubble),
            "quicksort" | "quick" => Ok(SortMethod::Quick),
            _ => Err(ParkingError::UnknownSortMethod {
                method: s.to_string(),
            }),
        }
    }
}
