//! Bulk-ingest document pairs
//!
//! Every research event becomes two documents: an index action line
//! (`_index`, `_type`, `_id`) followed by the payload. Field order in the
//! structs is the order written to the sink.

use serde::Serialize;

use crate::events::ResearchEvent;
use crate::types::{RecordId, SessionId, UserId};

/// Index and type names stamped on every metadata document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTarget {
    /// Index name (`_index`)
    pub index_name: String,
    /// Document type (`_type`)
    pub document_type: String,
}

impl IndexTarget {
    /// Target a named index and document type
    pub fn new(index_name: impl Into<String>, document_type: impl Into<String>) -> Self {
        Self { index_name: index_name.into(), document_type: document_type.into() }
    }
}

impl Default for IndexTarget {
    fn default() -> Self {
        Self::new("usersessions", "research")
    }
}

/// Index metadata document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexMetadata<'a> {
    /// Index name
    #[serde(rename = "_index")]
    pub index_name: &'a str,
    /// Document type
    #[serde(rename = "_type")]
    pub document_type: &'a str,
    /// Document identifier
    #[serde(rename = "_id")]
    pub record_id: RecordId,
}

/// Payload document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchPayload {
    /// Currency pair label or `END`
    #[serde(rename = "majorPair")]
    pub major_pair: &'static str,
    /// Indicator label or `END`
    pub indicator: &'static str,
    /// Interval label or `END`
    pub interval: &'static str,
    /// User identifier
    pub user: UserId,
    /// Session identifier
    pub session: SessionId,
}

/// A metadata/payload pair for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    /// Index action document
    pub metadata: IndexMetadata<'a>,
    /// Event payload document
    pub payload: ResearchPayload,
}

impl<'a> OutputRecord<'a> {
    /// Build the document pair for `event`
    pub fn from_event(event: &ResearchEvent, target: &'a IndexTarget) -> Self {
        Self {
            metadata: IndexMetadata {
                index_name: &target.index_name,
                document_type: &target.document_type,
                record_id: event.record_id,
            },
            payload: ResearchPayload {
                major_pair: event.major_pair_label(),
                indicator: event.indicator_label(),
                interval: event.interval_label(),
                user: event.user_id,
                session: event.session_id,
            },
        }
    }

    /// Identifier carried by the metadata document
    pub fn record_id(&self) -> RecordId {
        self.metadata.record_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ResearchLookup, Visit};
    use crate::types::{Indicator, Interval, MajorPair};

    #[test]
    fn test_document_schemas() {
        let visit = Visit::new(UserId(1_234_567), SessionId(17_654_321), 1).unwrap();
        let event = ResearchEvent::research(
            RecordId(2),
            &visit,
            ResearchLookup {
                major_pair: MajorPair::EurUsd,
                indicator: Indicator::Macd,
                interval: Interval::FiveSeconds,
            },
        );
        let target = IndexTarget::default();
        let record = OutputRecord::from_event(&event, &target);

        assert_eq!(
            serde_json::to_string(&record.metadata).unwrap(),
            r#"{"_index":"usersessions","_type":"research","_id":2}"#
        );
        assert_eq!(
            serde_json::to_string(&record.payload).unwrap(),
            r#"{"majorPair":"EURUSD","indicator":"MACD","interval":"5s","user":1234567,"session":17654321}"#
        );
        assert_eq!(record.record_id(), RecordId(2));
    }

    #[test]
    fn test_end_payload_and_custom_target() {
        let visit = Visit::new(UserId(1_000_000), SessionId(10_000_000), 1).unwrap();
        let event = ResearchEvent::end(RecordId(9), &visit);
        let target = IndexTarget::new("sessions-v2", "doc");
        let record = OutputRecord::from_event(&event, &target);

        assert_eq!(
            serde_json::to_string(&record.metadata).unwrap(),
            r#"{"_index":"sessions-v2","_type":"doc","_id":9}"#
        );
        assert_eq!(
            serde_json::to_string(&record.payload).unwrap(),
            r#"{"majorPair":"END","indicator":"END","interval":"END","user":1000000,"session":10000000}"#
        );
    }
}
