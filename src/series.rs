use crate::error::Error;

/// Timestamps keep the offset the export wrote them with. Comparisons and
/// equality are instant-based, so series recorded in different offsets still
/// merge correctly.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// One sample of one metric: the parsed `start` timestamp and the raw value
/// text. The value stays an opaque string end-to-end; only the GPX writer
/// ever consumes it, as text, so no numeric round-trip can distort it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimePoint {
    pub timestamp: Timestamp,
    pub value: String,
}

/// Ordered samples for one metric, in file order. The export writes rows
/// chronologically and the pipeline never re-sorts them.
pub type Series = Vec<TimePoint>;

/// Shape of one data row in a Withings raw-metric CSV. The export carries
/// extra columns (e.g. `duration`); serde selects by header name and the
/// rest are ignored.
#[derive(Debug, serde::Deserialize)]
struct MetricRow {
    start: String,
    value: String,
}

/// Parses an ISO-8601 timestamp, with or without a UTC offset.
///
/// Offset-carrying inputs (`2023-05-01T10:00:00+02:00`) keep their offset;
/// naive inputs are interpreted as UTC.
///
/// # Returns
/// * `Option<Timestamp>` - `None` if the text is not ISO-8601.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    raw.parse::<chrono::NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Reads one raw-metric CSV into an ordered series of time points.
///
/// The header row must provide `start` and `value` columns. For each data
/// row the `start` cell is parsed as an ISO-8601 timestamp and the `value`
/// cell is unwrapped from the single-element list notation the export uses
/// (`[12.345]` becomes `12.345`).
///
/// # Arguments
/// * `input` - Byte source for one extracted CSV entry.
///
/// # Returns
/// * `Result<Series, Error>` - Samples in file order; header-only input
///   yields an empty series.
///
/// # Errors
/// * `Error::TimestampFormat` - A `start` cell is not valid ISO-8601. The
///   whole parse fails; rows are never skipped silently.
/// * `Error::Csv` - Structurally malformed CSV.
pub fn parse_series<R: std::io::Read>(input: R) -> Result<Series, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let mut series = Series::new();
    for (row_index, result) in reader.deserialize::<MetricRow>().enumerate() {
        let row: MetricRow = result?;
        let timestamp =
            parse_timestamp(&row.start).ok_or_else(|| Error::TimestampFormat {
                row: row_index + 1,
                raw: row.start.clone(),
            })?;
        series.push(TimePoint {
            timestamp,
            value: strip_list_notation(&row.value).to_string(),
        });
    }
    Ok(series)
}

/// Strips one leading `[` and one trailing `]` if present; anything else
/// passes through untouched.
fn strip_list_notation(value: &str) -> &str {
    let value = value.strip_prefix('[').unwrap_or(value);
    value.strip_suffix(']').unwrap_or(value)
}
