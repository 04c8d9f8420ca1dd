use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;
use clap::Parser;
use simple_logger::SimpleLogger;

use ship_sort::algorithm::Algorithm;
use ship_sort::fleet_reader::FleetReader;
use ship_sort::fleet_writer::FleetWriter;
use ship_sort::timing::measure_sort;

/// Directory the sorted output files are written to.
const OUTPUT_DIR: &str = "data/sorted";

#[derive(Parser)]
#[command(name = "ship-sort", about = "Benchmark classic comparison sorts over ship records loaded from CSV")]
struct Args {
    /// Path to the input CSV file
    csv_filename: PathBuf,
    /// Sort algorithm, one of: insertion, heap, merge
    algorithm: String,
}

fn run(args: &Args) -> Result<(), anyhow::Error> {
    let algorithm = Algorithm::from_str(&args.algorithm)?;

    let mut ships = FleetReader::new().read(&args.csv_filename)?;
    if ships.is_empty() {
        return Err(anyhow!("no records loaded from {}", args.csv_filename.to_string_lossy()));
    }

    let elapsed = measure_sort(algorithm, &mut ships);

    let output_path = PathBuf::from(OUTPUT_DIR)
        .join(format!("sorted_ships_by_{}_{}.csv", ships.len(), algorithm));
    if let Err(e) = FleetWriter::new().write(&output_path, &ships) {
        // not surfaced to the exit code - the timing result still stands
        log::warn!("Failed to write {}: {:#}", output_path.to_string_lossy(), e);
    }

    println!("Sorting algorithm: {}", algorithm);
    println!("Sorting time: {} seconds", elapsed);
    Ok(())
}

fn main() {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init().unwrap();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
