//! In-memory sink that keeps every document as a JSON value

use serde_json::Value;

use crate::events::OutputRecord;
use crate::sink::{RecordSink, SinkError};

/// A captured document pair
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// Index metadata document
    pub metadata: Value,
    /// Payload document
    pub payload: Value,
}

/// Sink collecting documents in memory, in append order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<StoredRecord>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured document pairs
    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    /// Number of captured pairs
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the captured pairs
    pub fn into_records(self) -> Vec<StoredRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &OutputRecord<'_>) -> Result<(), SinkError> {
        let metadata = serde_json::to_value(&record.metadata)?;
        let payload = serde_json::to_value(&record.payload)?;
        self.records.push(StoredRecord { metadata, payload });
        Ok(())
    }
}
