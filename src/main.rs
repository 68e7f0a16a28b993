mod archive;
mod cli;
mod error;
mod filter;
mod gpx;
mod merge;
mod series;

use crate::archive::{SourceArchive, REQUIRED_ENTRIES};
use crate::error::Error;
use crate::filter::Filter;

/// Main entry point of the application.
///
/// Delegates to `run` and maps its error to a process exit code:
/// 0 success, 1 usage, 2 archive, 3 parse, 4 empty track.
fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::ExitCode::from(e.exit_code())
        }
    }
}

/// Runs the whole conversion workflow:
/// 1. Parses command-line arguments and resolves the time filter.
/// 2. Opens the archive and checks the three required CSV entries.
/// 3. Parses each metric CSV into a raw series.
/// 4. Applies the same filter to all three series.
/// 5. Merges them by timestamp and renders the GPX document.
/// 6. Writes `<output>.gpx` in one shot once rendering succeeded.
///
/// The document is rendered fully in memory before the output file is
/// touched, so a failure in any earlier stage leaves no partial file behind.
///
/// # Returns
///
/// * `Result<(), Error>` - Success or the first failure of any stage.
fn run() -> Result<(), Error> {
    let total_start = std::time::Instant::now();
    let args = cli::Args::parse();

    // Usage mistakes fail before any archive I/O.
    let filter = Filter::resolve(&args)?;

    let mut source = SourceArchive::open(&args.archive)?;
    source.ensure_entries(&REQUIRED_ENTRIES)?;
    println!("✅ Archive validated");

    let [longitude_csv, latitude_csv, altitude_csv] = REQUIRED_ENTRIES;
    let longitude = series::parse_series(&source.read_entry(longitude_csv)?[..])?;
    let latitude = series::parse_series(&source.read_entry(latitude_csv)?[..])?;
    let altitude = series::parse_series(&source.read_entry(altitude_csv)?[..])?;
    println!(
        "✅ Extraction completed ({} longitude, {} latitude, {} altitude samples)",
        longitude.len(),
        latitude.len(),
        altitude.len()
    );

    let longitude = filter.apply(&longitude);
    let latitude = filter.apply(&latitude);
    let altitude = filter.apply(&altitude);
    println!("✅ Filtering completed");

    let merged = merge::merge(&longitude, &latitude, &altitude);
    println!("✅ Data merged ({} track points)", merged.len());

    let document = gpx::render(gpx::ACTIVITY_NAME, &merged)?;
    println!("✅ GPX text generated");

    let output_file_name = format!("{}.gpx", args.output);
    std::fs::write(&output_file_name, document)?;
    println!(
        "✅ GPX file '{}' generated in {:?} seconds",
        output_file_name,
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
