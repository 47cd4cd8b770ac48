//! ZIP code to coordinate lookup backed by a CSV file.

use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A latitude/longitude pair, kept as the strings found in the CSV so the
/// points URL carries the same precision as the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub lat: String,
    pub long: String,
}

impl Coordinate {
    pub fn new(lat: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            long: long.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.long)
    }
}

/// Maps ZIP codes to coordinates.
///
/// Loaded once at startup and handed to whoever needs it. The file has a
/// header row followed by `zip,lat,long` rows:
/// ```text
/// zip,lat,lng
/// 63130,38.676026,-90.377994
/// ```
#[derive(Debug, Default)]
pub struct ZipCodeTable {
    entries: HashMap<String, Coordinate>,
}

impl ZipCodeTable {
    /// Loads the table from a CSV file at `path`.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;

        let table =
            Self::from_reader(file).with_context(|| format!("Could not read {}", path.display()))?;

        info!(entries = table.len(), "ZIP code table loaded");
        Ok(table)
    }

    /// Parses CSV rows from any reader. The first row is treated as a header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = HashMap::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let (zip, lat, long) = match (record.get(0), record.get(1), record.get(2)) {
                (Some(zip), Some(lat), Some(long)) => (zip, lat, long),
                _ => return Err(anyhow!("line {line}: expected zip,lat,long")),
            };

            if entries
                .insert(zip.to_string(), Coordinate::new(lat, long))
                .is_some()
            {
                debug!(zip, line, "Duplicate ZIP code, keeping the later row");
            }
        }

        Ok(Self { entries })
    }

    /// Returns the coordinate for `zip`, ignoring surrounding whitespace.
    pub fn lookup(&self, zip: &str) -> Option<&Coordinate> {
        self.entries.get(zip.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const SAMPLE: &str = "zip,lat,lng\n00601,18.180555,-66.749961\n63130,38.676026,-90.377994\n";

    #[test]
    fn test_coordinate_display() {
        let c = Coordinate::new("38.676026", "-90.377994");
        assert_eq!(c.to_string(), "38.676026,-90.377994");
    }

    #[test]
    fn test_from_reader_skips_header() {
        let table = ZipCodeTable::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.lookup("zip").is_none());
        assert_eq!(
            table.lookup("63130"),
            Some(&Coordinate::new("38.676026", "-90.377994"))
        );
    }

    #[test]
    fn test_lookup_trims_input() {
        let table = ZipCodeTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(table.lookup(" 00601\n").is_some());
    }

    #[test]
    fn test_lookup_keeps_leading_zeros() {
        let table = ZipCodeTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(table.lookup("601").is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let csv = "zip,lat,lng\n63130,1,2\n63130,3,4\n";
        let table = ZipCodeTable::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("63130"), Some(&Coordinate::new("3", "4")));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let csv = "zip,lat\n63130,38.6\n";
        let result = ZipCodeTable::from_reader(csv.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_is_empty() {
        let table = ZipCodeTable::from_reader("zip,lat,lng\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join("nws_forecast_test_zip.csv");
        fs::write(&path, SAMPLE).unwrap();

        let table = ZipCodeTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = ZipCodeTable::load("/nonexistent/zip.csv").unwrap_err();
        assert!(err.to_string().contains("Could not open"));
    }
}
