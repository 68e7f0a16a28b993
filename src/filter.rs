use crate::cli::Args;
use crate::error::Error;
use crate::series::{parse_timestamp, Series, Timestamp};

/// Time window the user asked for, resolved once from the CLI flags and then
/// applied identically to all three metric series.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Keep points whose calendar date equals the given day.
    ByDate(chrono::NaiveDate),
    /// Keep points inside the closed interval `[start, end]`.
    ByInterval { start: Timestamp, end: Timestamp },
}

impl Filter {
    /// Resolves the filter flags into a concrete filter.
    ///
    /// `-d` wins when present; otherwise both `-s` and `-e` are required.
    /// Validated before any archive I/O so usage mistakes fail fast.
    ///
    /// # Errors
    /// * `Error::NoFilterSpecified` - Neither mode was fully specified.
    /// * `Error::InvalidFilterValue` - A flag value is not valid ISO text.
    pub fn resolve(args: &Args) -> Result<Filter, Error> {
        if let Some(raw) = &args.filter_date {
            let date = raw.parse::<chrono::NaiveDate>().map_err(|_| {
                Error::InvalidFilterValue {
                    flag: "-d/--filter-date",
                    raw: raw.clone(),
                    expected: "date",
                }
            })?;
            return Ok(Filter::ByDate(date));
        }
        match (&args.filter_start, &args.filter_end) {
            (Some(start_raw), Some(end_raw)) => {
                let start = parse_filter_datetime("-s/--filter-starting-datetime", start_raw)?;
                let end = parse_filter_datetime("-e/--filter-ending-datetime", end_raw)?;
                Ok(Filter::ByInterval { start, end })
            }
            _ => Err(Error::NoFilterSpecified),
        }
    }

    /// Applies the filter, keeping relative order. Returns a new series;
    /// the input stays untouched. An empty result is valid output.
    pub fn apply(&self, series: &Series) -> Series {
        match self {
            Filter::ByDate(date) => filter_by_date(series, *date),
            Filter::ByInterval { start, end } => {
                filter_by_interval(series, *start, *end)
            }
        }
    }
}

fn parse_filter_datetime(flag: &'static str, raw: &str) -> Result<Timestamp, Error> {
    parse_timestamp(raw).ok_or_else(|| Error::InvalidFilterValue {
        flag,
        raw: raw.to_string(),
        expected: "datetime",
    })
}

/// Keeps every point whose timestamp's calendar date (in the timestamp's own
/// offset, ignoring time-of-day) equals `date`.
pub fn filter_by_date(series: &Series, date: chrono::NaiveDate) -> Series {
    series
        .iter()
        .filter(|point| point.timestamp.date_naive() == date)
        .cloned()
        .collect()
}

/// Keeps every point with `start <= timestamp <= end`, both ends inclusive.
pub fn filter_by_interval(series: &Series, start: Timestamp, end: Timestamp) -> Series {
    series
        .iter()
        .filter(|point| start <= point.timestamp && point.timestamp <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimePoint;

    fn point(ts: &str, value: &str) -> TimePoint {
        TimePoint {
            timestamp: parse_timestamp(ts).unwrap(),
            value: value.to_string(),
        }
    }

    #[test]
    fn date_filter_keeps_only_the_target_day() {
        let series = vec![
            point("2023-04-30T23:00:00", "a"),
            point("2023-05-01T00:30:00", "b"),
            point("2023-05-01T01:00:00", "c"),
        ];
        let date = "2023-05-01".parse().unwrap();
        let filtered = filter_by_date(&series, date);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, "b");
        assert_eq!(filtered[1].value, "c");
    }

    #[test]
    fn date_filter_is_idempotent() {
        let series = vec![
            point("2023-04-30T23:00:00", "a"),
            point("2023-05-01T01:00:00", "b"),
        ];
        let date = "2023-05-01".parse().unwrap();
        let once = filter_by_date(&series, date);
        let twice = filter_by_date(&once, date);
        assert_eq!(once, twice);
    }

    #[test]
    fn interval_filter_is_inclusive_on_both_ends() {
        let series = vec![
            point("2023-05-01T09:59:59", "before"),
            point("2023-05-01T10:00:00", "start"),
            point("2023-05-01T10:30:00", "inside"),
            point("2023-05-01T11:00:00", "end"),
            point("2023-05-01T11:00:01", "after"),
        ];
        let start = parse_timestamp("2023-05-01T10:00:00").unwrap();
        let end = parse_timestamp("2023-05-01T11:00:00").unwrap();
        let filtered = filter_by_interval(&series, start, end);
        let values: Vec<&str> = filtered.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["start", "inside", "end"]);
    }

    #[test]
    fn widening_the_interval_never_drops_points() {
        let series = vec![
            point("2023-05-01T10:00:00", "a"),
            point("2023-05-01T10:30:00", "b"),
            point("2023-05-01T11:00:00", "c"),
        ];
        let narrow = filter_by_interval(
            &series,
            parse_timestamp("2023-05-01T10:15:00").unwrap(),
            parse_timestamp("2023-05-01T10:45:00").unwrap(),
        );
        let wide = filter_by_interval(
            &series,
            parse_timestamp("2023-05-01T09:00:00").unwrap(),
            parse_timestamp("2023-05-01T12:00:00").unwrap(),
        );
        for kept in &narrow {
            assert!(wide.contains(kept));
        }
    }

    #[test]
    fn empty_result_is_valid() {
        let series = vec![point("2023-05-01T10:00:00", "a")];
        let date = "2024-01-01".parse().unwrap();
        assert!(filter_by_date(&series, date).is_empty());
    }

    #[test]
    fn resolve_prefers_date_filter_and_rejects_partial_interval() {
        let mut args = Args {
            archive: std::path::PathBuf::from("export.zip"),
            output: "out".to_string(),
            filter_date: Some("2023-05-01".to_string()),
            filter_start: Some("2023-05-01T10:00:00".to_string()),
            filter_end: None,
        };
        assert!(matches!(Filter::resolve(&args), Ok(Filter::ByDate(_))));

        args.filter_date = None;
        assert!(matches!(Filter::resolve(&args), Err(Error::NoFilterSpecified)));
    }

    #[test]
    fn resolve_rejects_malformed_date() {
        let args = Args {
            archive: std::path::PathBuf::from("export.zip"),
            output: "out".to_string(),
            filter_date: Some("yesterday".to_string()),
            filter_start: None,
            filter_end: None,
        };
        assert!(matches!(
            Filter::resolve(&args),
            Err(Error::InvalidFilterValue { .. })
        ));
    }
}
