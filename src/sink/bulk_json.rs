//! Writer-backed sink producing bulk-ingest JSON

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::OutputRecord;
use crate::sink::{RecordSink, SinkError};
use crate::types::RecordId;

/// How consecutive documents are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentLayout {
    /// Documents written back to back with no separator
    #[default]
    Concatenated,
    /// Every document terminated by `\n`
    NewlineDelimited,
}

/// Serializes document pairs into any [`Write`] destination
#[derive(Debug)]
pub struct BulkJsonSink<W: Write> {
    writer: W,
    layout: DocumentLayout,
    records_written: u64,
    last_record_id: Option<RecordId>,
}

impl<W: Write> BulkJsonSink<W> {
    /// Sink writing concatenated documents to `writer`
    pub fn new(writer: W) -> Self {
        Self::with_layout(writer, DocumentLayout::Concatenated)
    }

    /// Sink writing documents to `writer` in `layout`
    pub fn with_layout(writer: W, layout: DocumentLayout) -> Self {
        Self { writer, layout, records_written: 0, last_record_id: None }
    }

    /// Document pairs written and flushed so far
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Record identifier of the last fully written pair
    pub fn last_record_id(&self) -> Option<RecordId> {
        self.last_record_id
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_document(&mut self, document: &[u8]) -> Result<(), SinkError> {
        self.writer.write_all(document)?;
        if self.layout == DocumentLayout::NewlineDelimited {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl BulkJsonSink<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn append_to_file<P: AsRef<Path>>(path: P, layout: DocumentLayout) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Appending documents to {}", path.display());
        Ok(Self::with_layout(BufWriter::new(file), layout))
    }
}

impl<W: Write> RecordSink for BulkJsonSink<W> {
    fn append(&mut self, record: &OutputRecord<'_>) -> Result<(), SinkError> {
        // serialize both before writing either
        let metadata = serde_json::to_vec(&record.metadata)?;
        let payload = serde_json::to_vec(&record.payload)?;

        self.write_document(&metadata)?;
        self.write_document(&payload)?;
        // a pair only counts once it has left any buffer in `W`
        self.writer.flush()?;

        self.records_written += 1;
        self.last_record_id = Some(record.record_id());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{IndexTarget, ResearchEvent, ResearchLookup, Visit};
    use crate::types::{Indicator, Interval, MajorPair, SessionId, UserId};
    use std::io;

    fn events() -> Vec<ResearchEvent> {
        let visit = Visit::new(UserId(1_234_567), SessionId(11_111_111), 1).unwrap();
        vec![
            ResearchEvent::research(
                RecordId(2),
                &visit,
                ResearchLookup {
                    major_pair: MajorPair::GbpJpy,
                    indicator: Indicator::Sma,
                    interval: Interval::OneDay,
                },
            ),
            ResearchEvent::end(RecordId(2), &visit),
        ]
    }

    #[test]
    fn test_concatenated_layout() {
        let target = IndexTarget::default();
        let mut sink = BulkJsonSink::new(Vec::new());
        for event in events() {
            sink.append(&OutputRecord::from_event(&event, &target)).unwrap();
        }

        assert_eq!(sink.records_written(), 2);
        assert_eq!(sink.last_record_id(), Some(RecordId(2)));

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            written,
            concat!(
                r#"{"_index":"usersessions","_type":"research","_id":2}"#,
                r#"{"majorPair":"GBPJPY","indicator":"SMA","interval":"1d","user":1234567,"session":11111111}"#,
                r#"{"_index":"usersessions","_type":"research","_id":2}"#,
                r#"{"majorPair":"END","indicator":"END","interval":"END","user":1234567,"session":11111111}"#,
            )
        );
    }

    #[test]
    fn test_newline_delimited_layout() {
        let target = IndexTarget::default();
        let mut sink = BulkJsonSink::with_layout(Vec::new(), DocumentLayout::NewlineDelimited);
        for event in events() {
            sink.append(&OutputRecord::from_event(&event, &target)).unwrap();
        }

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(written.ends_with('\n'));
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only destination"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let target = IndexTarget::default();
        let mut sink = BulkJsonSink::new(BrokenWriter);
        let event = events()[0];

        let err = sink.append(&OutputRecord::from_event(&event, &target)).unwrap_err();
        assert!(matches!(err, SinkError::Io(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
        assert_eq!(sink.records_written(), 0);
        assert_eq!(sink.last_record_id(), None);
    }

    #[test]
    fn test_buffered_failure_is_reported_per_pair() {
        let target = IndexTarget::default();
        let mut sink = BulkJsonSink::new(BufWriter::new(BrokenWriter));
        let event = events()[0];

        // the pair fits in the buffer, so only the flush reaches the writer
        let err = sink.append(&OutputRecord::from_event(&event, &target)).unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
        assert_eq!(sink.records_written(), 0);
        assert_eq!(sink.last_record_id(), None);
    }

    #[test]
    fn test_append_to_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessioninfoES.json");
        let target = IndexTarget::default();

        for _ in 0..2 {
            let mut sink = BulkJsonSink::append_to_file(&path, DocumentLayout::Concatenated).unwrap();
            sink.append(&OutputRecord::from_event(&events()[1], &target)).unwrap();
            sink.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches(r#""_id":2"#).count(), 2);
        assert_eq!(contents.matches(r#""majorPair":"END""#).count(), 2);
    }
}
