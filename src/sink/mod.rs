//! Record sinks
//!
//! A sink receives one [`OutputRecord`] per research event and appends its
//! metadata document followed by its payload document. Appends are not
//! atomic: a failure between the two writes leaves the metadata document
//! behind.
//!
//! # Usage Example
//!
//! ```rust
//! use usersessions_generator::events::*;
//! use usersessions_generator::sink::*;
//! use usersessions_generator::types::*;
//!
//! let visit = Visit::new(UserId(1_000_000), SessionId(10_000_000), 1).unwrap();
//! let event = ResearchEvent::end(RecordId(2), &visit);
//! let target = IndexTarget::default();
//!
//! let mut sink = BulkJsonSink::new(Vec::new());
//! sink.append(&OutputRecord::from_event(&event, &target)).unwrap();
//!
//! let written = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(written.starts_with(r#"{"_index":"usersessions","_type":"research","_id":2}{"majorPair":"END""#));
//! ```

pub mod bulk_json;
pub mod memory;

pub use bulk_json::*;
pub use memory::*;

use crate::events::OutputRecord;
use thiserror::Error;

/// Errors raised while appending to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// Destination rejected the write
    #[error("write to output destination failed: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be serialized
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Destination for serialized document pairs
pub trait RecordSink {
    /// Append the metadata document then the payload document.
    ///
    /// `Ok` means the pair reached the destination, not just a buffer in
    /// front of it.
    fn append(&mut self, record: &OutputRecord<'_>) -> Result<(), SinkError>;

    /// Push buffered output to the destination
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append(&mut self, record: &OutputRecord<'_>) -> Result<(), SinkError> {
        (**self).append(record)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn append(&mut self, record: &OutputRecord<'_>) -> Result<(), SinkError> {
        (**self).append(record)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}
