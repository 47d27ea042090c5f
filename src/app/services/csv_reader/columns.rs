//! Header-name to field-index mapping
//!
//! Vendor exports address fields by column name, and column order varies
//! between receiver firmware versions. The map is built once from the header
//! row and shared by every record lookup.

use std::collections::HashMap;

use csv::StringRecord;

/// Mapping from column names to field indices for one file
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Build the mapping from a header record
    ///
    /// Names are trimmed and the UTF-8 BOM some receivers emit on the first
    /// header cell is stripped. The first occurrence of a duplicated name
    /// wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::with_capacity(headers.len());

        for (index, name) in headers.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim();
            name_to_index.entry(name.to_string()).or_insert(index);
        }

        Self { name_to_index }
    }

    /// Whether the header row contains the column
    pub fn contains(&self, column: &str) -> bool {
        self.name_to_index.contains_key(column)
    }

    /// Field index of the column, if present
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.name_to_index.get(column).copied()
    }

    /// Raw field value of the column in a record
    ///
    /// Returns `None` when the column is absent from the header or the
    /// record is short for this row.
    pub fn value<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.index_of(column).and_then(|index| record.get(index))
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    /// Whether the header row was empty
    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_maps_names_to_indices() {
        let map = ColumnMap::from_headers(&headers(&["Name", "Easting", "Northing"]));

        assert_eq!(map.index_of("Name"), Some(0));
        assert_eq!(map.index_of("Northing"), Some(2));
        assert_eq!(map.index_of("Elevation"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_strips_bom_and_whitespace() {
        let map = ColumnMap::from_headers(&headers(&["\u{feff}Name", " PDOP "]));

        assert!(map.contains("Name"));
        assert!(map.contains("PDOP"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let map = ColumnMap::from_headers(&headers(&["Name", "Name"]));
        assert_eq!(map.index_of("Name"), Some(0));
    }

    #[test]
    fn test_value_handles_short_records() {
        let map = ColumnMap::from_headers(&headers(&["Name", "Easting"]));
        let record = StringRecord::from(vec!["A.1"]);

        assert_eq!(map.value(&record, "Name"), Some("A.1"));
        assert_eq!(map.value(&record, "Easting"), None);
    }
}
