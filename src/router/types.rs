// SPDX-License-Identifier: MIT

//! Typed view of diagnostics table records

use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::router::table::Record;

/// Counter values scraped for one interface row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub interface: String,
    pub state: String,
    pub rx_bytes: i64,
    pub tx_bytes: i64,
    pub rx_packets: i64,
    pub tx_packets: i64,
    pub rx_errors: i64,
    pub tx_errors: i64,
}

fn text<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    map.get(key)
        .ok_or_else(|| AppError::Parse(format!("record missing '{key}' column")))?
        .as_str()
        .ok_or_else(|| AppError::Parse(format!("'{key}' column is not text")))
}

fn number(map: &Map<String, Value>, key: &str) -> Result<i64> {
    let raw = text(map, key)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Value(format!("non-numeric '{key}' value: {raw:?}")))
}

impl InterfaceCounters {
    /// Builds typed counters from one keyed record.
    ///
    /// Label values are trimmed; counter cells tolerate surrounding
    /// whitespace but anything else non-numeric is a fatal value error.
    pub fn from_record(record: &Record) -> Result<Self> {
        let Record::Keyed(map) = record else {
            return Err(AppError::Parse(
                "diagnostics rows lack a header mapping".to_string(),
            ));
        };

        Ok(Self {
            interface: text(map, "interface")?.trim().to_string(),
            state: text(map, "state")?.trim().to_string(),
            rx_bytes: number(map, "rx bytes")?,
            tx_bytes: number(map, "tx bytes")?,
            rx_packets: number(map, "rx packets")?,
            tx_packets: number(map, "tx packets")?,
            rx_errors: number(map, "rx errors")?,
            tx_errors: number(map, "tx errors")?,
        })
    }

    /// Converts a whole snapshot, failing on the first bad record so no
    /// partially-typed snapshot ever reaches the gauges.
    pub fn snapshot_from_records(records: &[Record]) -> Result<Vec<Self>> {
        records.iter().map(Self::from_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(pairs: &[(&str, &str)]) -> Record {
        let mut map = Map::new();
        for (key, value) in pairs {
            map.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        Record::Keyed(map)
    }

    fn full_record() -> Record {
        keyed(&[
            ("interface", "eth0"),
            ("state", "up"),
            ("rx bytes", "100"),
            ("tx bytes", "200"),
            ("rx packets", "10"),
            ("tx packets", "20"),
            ("rx errors", "1"),
            ("tx errors", "2"),
        ])
    }

    #[test]
    fn test_from_record() {
        let counters = InterfaceCounters::from_record(&full_record()).unwrap();
        assert_eq!(counters.interface, "eth0");
        assert_eq!(counters.state, "up");
        assert_eq!(counters.rx_bytes, 100);
        assert_eq!(counters.tx_bytes, 200);
        assert_eq!(counters.rx_packets, 10);
        assert_eq!(counters.tx_packets, 20);
        assert_eq!(counters.rx_errors, 1);
        assert_eq!(counters.tx_errors, 2);
    }

    #[test]
    fn test_whitespace_around_numbers_tolerated() {
        let record = keyed(&[
            ("interface", " eth0 "),
            ("state", "up"),
            ("rx bytes", " 100\n"),
            ("tx bytes", "200"),
            ("rx packets", "10"),
            ("tx packets", "20"),
            ("rx errors", "0"),
            ("tx errors", "0"),
        ]);
        let counters = InterfaceCounters::from_record(&record).unwrap();
        assert_eq!(counters.interface, "eth0");
        assert_eq!(counters.rx_bytes, 100);
    }

    #[test]
    fn test_non_numeric_value_is_value_error() {
        let record = keyed(&[
            ("interface", "eth0"),
            ("state", "up"),
            ("rx bytes", "lots"),
            ("tx bytes", "200"),
            ("rx packets", "10"),
            ("tx packets", "20"),
            ("rx errors", "0"),
            ("tx errors", "0"),
        ]);
        let err = InterfaceCounters::from_record(&record).unwrap_err();
        assert!(matches!(err, AppError::Value(_)));
    }

    #[test]
    fn test_missing_column_is_parse_error() {
        let record = keyed(&[("interface", "eth0")]);
        let err = InterfaceCounters::from_record(&record).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(err.to_string().contains("state"));
    }

    #[test]
    fn test_bare_record_is_parse_error() {
        let record = Record::Bare(vec!["eth0".to_string()]);
        let err = InterfaceCounters::from_record(&record).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_snapshot_fails_atomically() {
        let bad = keyed(&[("interface", "eth1")]);
        let result = InterfaceCounters::snapshot_from_records(&[full_record(), bad]);
        assert!(result.is_err());
    }
}
