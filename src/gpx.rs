use crate::error::Error;
use crate::merge::MergedRecord;
use crate::series::Timestamp;

/// Activity name shown by default when the track is uploaded.
pub const ACTIVITY_NAME: &str = "withings archive extractor";

/// Format used by both `metadata/time` and every `trkpt/time` element.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders merged records into a GPX 1.1 document string.
///
/// The output follows one fixed template: a Strava-compatible header with
/// the Garmin extension namespaces, `metadata/time` taken from the first
/// record, a single `trk` of type 1 and a single `trkseg` with one `trkpt`
/// per record. Records missing latitude or altitude render those spots as
/// empty strings (`lat=""`, `<ele></ele>`) rather than aborting, mirroring
/// the permissive merge semantics.
///
/// # Errors
/// * `Error::EmptyTrack` - `records` is empty; the mandatory
///   `metadata/time` header would have no timestamp to carry.
pub fn render(activity_name: &str, records: &[MergedRecord]) -> Result<String, Error> {
    let first = records.first().ok_or(Error::EmptyTrack)?;

    let mut document = String::with_capacity(256 + records.len() * 128);
    document.push_str(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <gpx creator=\"StravaGPX\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"http://www.topografix.com/GPX/1/1 \
         http://www.topografix.com/GPX/1/1/gpx.xsd \
         http://www.garmin.com/xmlschemas/GpxExtensions/v3 \
         http://www.garmin.com/xmlschemas/GpxExtensionsv3.xsd \
         http://www.garmin.com/xmlschemas/TrackPointExtension/v1 \
         http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd\" \
         version=\"1.1\" xmlns=\"http://www.topografix.com/GPX/1/1\" \
         xmlns:gpxtpx=\"http://www.garmin.com/xmlschemas/TrackPointExtension/v1\" \
         xmlns:gpxx=\"http://www.garmin.com/xmlschemas/GpxExtensions/v3\">",
    );
    document.push_str(&format!(
        "<metadata><time>{}</time></metadata>",
        format_time(&first.timestamp)
    ));
    document.push_str(&format!(
        "<trk><name>{}</name><type>1</type><trkseg>",
        activity_name
    ));

    for record in records {
        document.push_str(&format!(
            "<trkpt lat=\"{lat}\" lon=\"{lon}\"><ele>{ele}</ele><time>{time}</time></trkpt>",
            lat = record.latitude.as_deref().unwrap_or(""),
            lon = record.longitude,
            ele = record.altitude.as_deref().unwrap_or(""),
            time = format_time(&record.timestamp),
        ));
    }

    document.push_str("</trkseg></trk></gpx>");
    Ok(document)
}

/// Prints the timestamp's local fields with a literal `Z` suffix, exactly as
/// the reference template does. No conversion to UTC happens here; the
/// non-goal on timezone handling keeps whatever offset the source encoded.
fn format_time(timestamp: &Timestamp) -> String {
    timestamp.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::parse_timestamp;

    fn record(ts: &str, lon: &str, lat: Option<&str>, alt: Option<&str>) -> MergedRecord {
        MergedRecord {
            timestamp: parse_timestamp(ts).unwrap(),
            longitude: lon.to_string(),
            latitude: lat.map(str::to_string),
            altitude: alt.map(str::to_string),
        }
    }

    #[test]
    fn renders_one_trkpt_per_record_with_partial_fields_empty() {
        let records = vec![
            record("2023-05-01T10:00:00", "10.0", Some("20.0"), None),
            record("2023-05-01T10:01:00", "10.1", None, None),
        ];
        let gpx = render(ACTIVITY_NAME, &records).unwrap();

        assert_eq!(gpx.matches("<trkpt ").count(), 2);
        assert!(gpx.contains("<trkpt lat=\"20.0\" lon=\"10.0\">"));
        assert!(gpx.contains("<trkpt lat=\"\" lon=\"10.1\">"));
        assert!(gpx.contains("<ele></ele>"));
    }

    #[test]
    fn metadata_time_comes_from_the_first_record() {
        let records = vec![
            record("2023-05-01T10:00:00", "10.0", Some("20.0"), Some("35.5")),
            record("2023-05-01T10:01:00", "10.1", Some("20.1"), Some("35.6")),
        ];
        let gpx = render(ACTIVITY_NAME, &records).unwrap();
        assert!(gpx.contains("<metadata><time>2023-05-01T10:00:00Z</time></metadata>"));
        assert!(gpx.contains("<ele>35.5</ele><time>2023-05-01T10:00:00Z</time>"));
    }

    #[test]
    fn document_carries_the_fixed_gpx_11_envelope() {
        let records = vec![record("2023-05-01T10:00:00", "10.0", None, None)];
        let gpx = render(ACTIVITY_NAME, &records).unwrap();
        assert!(gpx.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(gpx.contains("version=\"1.1\""));
        assert!(gpx.contains("xmlns=\"http://www.topografix.com/GPX/1/1\""));
        assert!(gpx.contains(&format!("<trk><name>{}</name><type>1</type>", ACTIVITY_NAME)));
        assert!(gpx.ends_with("</trkseg></trk></gpx>"));
    }

    #[test]
    fn empty_record_list_is_rejected() {
        assert!(matches!(render(ACTIVITY_NAME, &[]), Err(Error::EmptyTrack)));
    }
}
