/// Structure representing command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub archive: std::path::PathBuf,
    pub output: String,
    pub filter_date: Option<String>,
    pub filter_start: Option<String>,
    pub filter_end: Option<String>,
}

/// Command-line arguments parser using Clap.
///
/// Filter flags stay raw strings here; `filter::Filter::resolve` turns them
/// into a concrete filter and owns the validation, so bad values surface as
/// the pipeline's own diagnostics with the pipeline's exit codes.
impl Args {
    /// Parses command-line arguments using `clap`.
    ///
    /// # Returns
    /// * `Args` - Struct containing parsed arguments.
    ///
    /// # Errors
    /// * If the required archive argument is missing (clap exits with usage).
    pub fn parse() -> Self {
        let matches = clap::Command::new("withings-to-gpx")
            .version("0.2.0")
            .about(
                "Reads GPS data from a Withings data export archive, extracts \
                 the samples of a specific timelapse and generates a GPX file \
                 compatible with Strava",
            )
            .arg(
                clap::Arg::new("archive_file_name")
                    .help("Name of the archive downloaded from the Withings website")
                    .required(true)
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("output-file")
                    .short('o')
                    .long("output-file")
                    .help("Name of the gpx file to generate, without extension")
                    .default_value("out")
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("filter-date")
                    .short('d')
                    .long("filter-date")
                    .help("Extract all the coordinates of a specific day. Date must be in ISO format")
                    .required(false)
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("filter-starting-datetime")
                    .short('s')
                    .long("filter-starting-datetime")
                    .help("Extract based on an interval. Starting datetime must be in ISO format")
                    .required(false)
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("filter-ending-datetime")
                    .short('e')
                    .long("filter-ending-datetime")
                    .help("Extract based on an interval. Ending datetime must be in ISO format")
                    .required(false)
                    .num_args(1),
            )
            .get_matches();

        Args {
            archive: std::path::PathBuf::from(
                matches.get_one::<String>("archive_file_name").unwrap(),
            ),
            output: matches.get_one::<String>("output-file").unwrap().clone(),
            filter_date: matches.get_one::<String>("filter-date").cloned(),
            filter_start: matches
                .get_one::<String>("filter-starting-datetime")
                .cloned(),
            filter_end: matches.get_one::<String>("filter-ending-datetime").cloned(),
        }
    }
}
