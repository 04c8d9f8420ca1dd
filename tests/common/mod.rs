use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use data_encoding::HEXLOWER;

use ship_sort::ship::Ship;
use ship_sort::ship_class::ShipClass;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    } else {
        println!("Results directory exists at {:?}", results_dir_path);
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Three ships with distinct years, listed out of year order.
#[allow(dead_code)]
pub fn scenario_fleet() -> Vec<Ship> {
    vec![
        Ship::new("A".to_string(), 1990, "X".to_string(), ShipClass::Tanker, "C1".to_string()),
        Ship::new("B".to_string(), 1980, "Y".to_string(), ShipClass::BulkCarrier, "C2".to_string()),
        Ship::new("C".to_string(), 2000, "Z".to_string(), ShipClass::Passenger, "C3".to_string()),
    ]
}

#[allow(dead_code)]
pub fn is_sorted_by_year(ships: &[Ship]) -> bool {
    ships.windows(2).all(|w| w[0].year() <= w[1].year())
}

/// Serialized field multiset, for permutation checks that ignore order.
#[allow(dead_code)]
pub fn field_multiset(ships: &[Ship]) -> Vec<String> {
    let mut records: Vec<String> = ships.iter().map(|ship| ship.to_delimited(',')).collect();
    records.sort();
    records
}
