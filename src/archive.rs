use std::io::Read;

use crate::error::Error;

/// Entry names the converter needs inside a Withings export archive.
/// Fixed, case-sensitive, read-only process-wide configuration.
pub const REQUIRED_ENTRIES: [&str; 3] = [
    "raw_location_longitude.csv",
    "raw_location_latitude.csv",
    "raw_location_altitude.csv",
];

/// A Withings data export opened as a zip container.
///
/// Generic over the underlying reader so tests can feed an in-memory
/// archive through a `Cursor` while the binary opens a file on disk.
pub struct SourceArchive<R: Read + std::io::Seek> {
    zip: zip::ZipArchive<R>,
}

impl SourceArchive<std::fs::File> {
    /// Opens the archive at `path`.
    ///
    /// # Errors
    /// * `Error::ArchiveUnreadable` - The path does not resolve to a
    ///   readable zip container (missing file or invalid zip data).
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::ArchiveUnreadable {
            path: path.display().to_string(),
            source: zip::result::ZipError::Io(e),
        })?;
        let zip = zip::ZipArchive::new(file).map_err(|e| Error::ArchiveUnreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(SourceArchive { zip })
    }
}

impl<R: Read + std::io::Seek> SourceArchive<R> {
    /// Wraps an already-open zip reader.
    pub fn from_reader(reader: R) -> Result<Self, zip::result::ZipError> {
        Ok(SourceArchive {
            zip: zip::ZipArchive::new(reader)?,
        })
    }

    /// Verifies every required entry exists in the container.
    ///
    /// Checks the full name list in one pass so the resulting error reports
    /// **all** missing names, not just the first one.
    ///
    /// # Errors
    /// * `Error::MissingEntries` - Lists exactly the subset of `required`
    ///   absent from the archive.
    pub fn ensure_entries(&mut self, required: &[&str]) -> Result<(), Error> {
        let present: std::collections::HashSet<&str> =
            self.zip.file_names().collect();
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !present.contains(**name))
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingEntries { missing })
        }
    }

    /// Reads one entry fully into memory.
    ///
    /// The exports are small (thousands to low tens of thousands of samples
    /// per metric), so buffering beats extracting to the working directory
    /// and leaves no files behind.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, Error> {
        let mut entry = self.zip.by_name(name).map_err(|_| Error::MissingEntries {
            missing: vec![name.to_string()],
        })?;
        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
