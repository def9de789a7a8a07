use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::types::PortRecord;

/// Destination for the finalized record sequence
pub trait PortSink {
    fn write(&mut self, records: &[PortRecord]) -> Result<()>;

    /// Human-readable location, for log lines
    fn describe(&self) -> String;
}

/// Serialize records as a pretty-printed JSON array (two-space indent).
pub fn serialize_records(records: &[PortRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the records to a single JSON file, replacing any previous content
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PortSink for JsonFileSink {
    fn write(&mut self, records: &[PortRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json_content = serialize_records(records)?;
        fs::write(&self.path, json_content)?;
        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory sink for development/testing
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub records: Vec<PortRecord>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortSink for InMemorySink {
    fn write(&mut self, records: &[PortRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortCategory;
    use serde_json::Value;

    fn record(name: &str) -> PortRecord {
        PortRecord {
            name: name.to_string(),
            lat: 50.5,
            lng: -1.25,
            port_type: PortCategory::Pier,
            status: "Open".to_string(),
            source: "OSM".to_string(),
            operator: None,
            town: None,
            city: None,
            mooring: None,
            ferry_type: Some(Value::from("yes")),
        }
    }

    #[test]
    fn test_serialize_records_layout() {
        let json = serialize_records(&[record("Ryde Pier")]).unwrap();
        let expected = r#"[
  {
    "name": "Ryde Pier",
    "lat": 50.5,
    "lng": -1.25,
    "type": "pier",
    "status": "Open",
    "source": "OSM",
    "ferry_type": "yes"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_json_file_sink_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ports.json");
        let mut sink = JsonFileSink::new(&path);

        sink.write(&[record("A"), record("B")]).unwrap();

        let written: Vec<PortRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[1].name, "B");
        assert_eq!(sink.describe(), path.display().to_string());
    }

    #[test]
    fn test_in_memory_sink() {
        let mut sink = InMemorySink::new();
        sink.write(&[record("A")]).unwrap();
        assert_eq!(sink.records, vec![record("A")]);
        assert_eq!(sink.describe(), "memory");
    }
}
