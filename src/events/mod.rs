//! Visits, research events, and their bulk-ingest documents
//!
//! # Overview
//!
//! - **Visit**: one simulated user session with a bounded event count
//! - **ResearchEvent**: a research lookup or the END marker closing a visit
//! - **OutputRecord**: the index-metadata / payload document pair written per event
//!
//! # Usage Example
//!
//! ```rust
//! use usersessions_generator::events::*;
//! use usersessions_generator::types::*;
//!
//! let visit = Visit::new(UserId(1_500_000), SessionId(15_000_000), 3).unwrap();
//! let end = ResearchEvent::end(RecordId(2), &visit);
//!
//! let target = IndexTarget::default();
//! let record = OutputRecord::from_event(&end, &target);
//! assert_eq!(record.payload.major_pair, "END");
//! ```

pub mod output_record;
pub mod research_event;

// Re-export all public types for convenience
pub use output_record::*;
pub use research_event::*;
