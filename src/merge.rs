use crate::series::{TimePoint, Timestamp};

/// One combined sample across the three metric series.
///
/// Longitude is always present because the longitude series seeds the merge;
/// latitude and altitude are present only when the respective series had a
/// point at this exact timestamp. Partial records are kept, never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub timestamp: Timestamp,
    pub longitude: String,
    pub latitude: Option<String>,
    pub altitude: Option<String>,
}

/// Joins the three filtered series on exact timestamp equality.
///
/// The longitude series is authoritative: it defines both the membership and
/// the ordering of the output. Every longitude point becomes a record;
/// latitude and altitude values attach to records with an identical
/// timestamp and are silently dropped when no record matches.
///
/// Two quirks are contractual:
/// * duplicate longitude timestamps each keep their own record, and a
///   matching latitude/altitude point attaches to **every** such record;
/// * when several latitude/altitude points share a timestamp, the last one
///   wins on each matching record.
///
/// No error conditions: missing matches yield partial records.
pub fn merge(
    longitude: &[TimePoint],
    latitude: &[TimePoint],
    altitude: &[TimePoint],
) -> Vec<MergedRecord> {
    let mut merged: Vec<MergedRecord> = longitude
        .iter()
        .map(|point| MergedRecord {
            timestamp: point.timestamp,
            longitude: point.value.clone(),
            latitude: None,
            altitude: None,
        })
        .collect();

    for point in latitude {
        for record in merged.iter_mut() {
            if record.timestamp == point.timestamp {
                record.latitude = Some(point.value.clone());
            }
        }
    }

    for point in altitude {
        for record in merged.iter_mut() {
            if record.timestamp == point.timestamp {
                record.altitude = Some(point.value.clone());
            }
        }
    }

    merged
}
