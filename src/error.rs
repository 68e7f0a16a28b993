/// Error taxonomy for the whole conversion pipeline.
///
/// Every failure is fatal: errors are detected close to their source,
/// carried up unchanged and printed once by `main`, which then exits with
/// the code from [`Error::exit_code`]. Nothing is retried or recovered
/// silently. An empty filter result is not an error until the render stage
/// ([`Error::EmptyTrack`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The archive path does not resolve to a readable zip container.
    #[error("unable to open archive '{path}': {source}")]
    ArchiveUnreadable {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// One or more required CSV entries are absent from the archive.
    /// Collected in a single pass so the message lists every missing name.
    #[error("missing file(s) in the provided archive: {}", missing.join(", "))]
    MissingEntries { missing: Vec<String> },

    /// A `start` cell could not be parsed as an ISO-8601 timestamp.
    /// `row` is the 1-based data row within the offending CSV file.
    #[error("row {row}: invalid ISO-8601 timestamp '{raw}'")]
    TimestampFormat { row: usize, raw: String },

    /// Structurally malformed CSV (bad quoting, wrong field count, ...).
    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// Neither a date filter nor a complete datetime interval was given.
    #[error(
        "at least one filter must be used: a filter by date (-d) or a filter \
         on an interval with a starting (-s) and ending (-e) datetime"
    )]
    NoFilterSpecified,

    /// A filter flag value could not be parsed.
    #[error("invalid value for {flag}: '{raw}' is not a valid ISO {expected}")]
    InvalidFilterValue {
        flag: &'static str,
        raw: String,
        expected: &'static str,
    },

    /// Filtering and merging produced zero track points, so the mandatory
    /// `metadata/time` header has no timestamp to carry.
    #[error("no track points left after filtering, cannot generate a GPX file")]
    EmptyTrack,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps each failure class to a stable process exit code.
    ///
    /// 0 is reserved for success; 1 = usage/validation, 2 = archive,
    /// 3 = parse, 4 = empty track.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NoFilterSpecified | Error::InvalidFilterValue { .. } => 1,
            Error::ArchiveUnreadable { .. } | Error::MissingEntries { .. } => 2,
            Error::TimestampFormat { .. } | Error::Csv(_) => 3,
            Error::EmptyTrack => 4,
            Error::Io(_) => 2,
        }
    }
}
