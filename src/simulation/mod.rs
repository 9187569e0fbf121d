//! Run orchestration and control
//!
//! This module contains the bundle orchestrator, run statistics, logging
//! setup, and error handling.
//!
//! # Overview
//!
//! - **BundleOrchestrator**: drives visits from identifiers to the record sink
//! - **RunStatistics**: counts what reached the sink
//! - **LoggingConfig**: tracing subscriber setup (stderr, optional rolling file)
//! - **SimulationError**: error type shared across the crate
//!
//! # Usage Example
//!
//! ```rust
//! use usersessions_generator::simulation::*;
//! use usersessions_generator::sink::MemorySink;
//! use usersessions_generator::types::*;
//!
//! let config = GeneratorConfig { visit_count: 3, seed: Some(42), ..Default::default() };
//! let mut orchestrator = BundleOrchestrator::new(config).unwrap();
//!
//! let mut sink = MemorySink::new();
//! let stats = orchestrator.run(&mut sink).unwrap();
//! assert_eq!(stats.visits_generated, 3);
//! assert_eq!(stats.end_events, 3);
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
