//! This crate benchmarks three classic comparison sorts - insertion sort,
//! heap sort and merge sort - over a fleet of ship records loaded from a
//! CSV file.
//!
//! A fleet file is a comma separated text file with a `Name,Year,Country,Type,Captain`
//! header followed by one record per line. Records are parsed into [ship::Ship]
//! values, sorted in place ascending by construction year with the selected
//! algorithm, and written back out as CSV together with the measured
//! wall-clock duration. Lines that fail to parse, including records with a
//! ship class outside the recognized set, are logged and skipped.
//!
//! # Examples
//! ```
//! use ship_sort::algorithm::Algorithm;
//! use ship_sort::generator::FleetGenerator;
//! use ship_sort::timing::measure_sort;
//!
//! // generate a random fleet and time a merge sort over it
//! let mut fleet = FleetGenerator::new(1000).generate();
//! let elapsed = measure_sort(Algorithm::Merge, &mut fleet);
//! assert!(fleet.windows(2).all(|w| w[0].year() <= w[1].year()));
//! assert!(elapsed >= 0.0);
//! ```

pub mod algorithm;
pub mod error;
pub mod fleet_reader;
pub mod fleet_writer;
pub mod generator;
pub mod ship;
pub mod ship_class;
pub mod sorts;
pub mod timing;
