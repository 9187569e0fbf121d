//! Random generation of identifiers and research activity
//!
//! # Overview
//!
//! - **IdentifierGenerator**: user and session identifiers (fresh or from a known pool)
//! - **RecordIdCounter**: explicit, monotonically increasing record identifier counter
//! - **WeightedChoice**: `WeightedIndex`-backed sampling over a label set
//! - **ResearchCatalog**: the currency pair, indicator, and interval tables
//! - **SessionActivityBuilder**: expands a visit into its event sequence
//!
//! # Usage Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use usersessions_generator::events::Visit;
//! use usersessions_generator::generator::*;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let identifiers = IdentifierGenerator::new();
//! let mut counter = RecordIdCounter::default();
//!
//! let visit = Visit::new(
//!     identifiers.new_user_id(&mut rng),
//!     identifiers.new_session_id(&mut rng),
//!     3,
//! )
//! .unwrap();
//!
//! let builder = SessionActivityBuilder::new(ResearchCatalog::standard().unwrap());
//! let mut ids = RecordIdAssignment::Shared(counter.next_record_id());
//! let events = builder.build_visit(&mut rng, &visit, &mut ids);
//! assert_eq!(events.len(), 4);
//! ```

pub mod activity;
pub mod catalog;
pub mod identifiers;
pub mod weighted;

// Re-export all public types for convenience
pub use activity::*;
pub use catalog::*;
pub use identifiers::*;
pub use weighted::*;
