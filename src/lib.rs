//! User Session Research Generator
//!
//! Generates synthetic user-session research activity for seeding an
//! analytics index, written as bulk-ingest JSON document pairs.
//!
//! # Overview
//!
//! Each simulated visit belongs to a user and a session and contains between
//! 1 and 100 research lookups (currency pair, indicator, chart interval)
//! followed by a single END marker. Every event becomes an index metadata
//! document followed by a payload document.
//!
//! ## Key Features
//!
//! - **Weighted Draws**: `WeightedIndex` sampling with an injected RNG
//! - **Explicit Record Ids**: a counter owned by the orchestrator, per visit or per event
//! - **Repeat Visitors**: optional draw of user ids from a known pool
//! - **Pluggable Sinks**: any `Write` destination, or memory for tests
//! - **Layered Configuration**: defaults, JSON file, then CLI flags
//!
//! ## Quick Start
//!
//! ```rust
//! use usersessions_generator::*;
//!
//! let config = GeneratorConfig {
//!     visit_count: 2,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = BundleOrchestrator::new(config)?;
//! let mut sink = BulkJsonSink::new(Vec::new());
//! orchestrator.run(&mut sink)?;
//!
//! let output = String::from_utf8(sink.into_inner())?;
//! assert!(output.starts_with(r#"{"_index":"usersessions","_type":"research","_id":2}"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, category labels, and configuration
//! - [`generator`]: Identifier, weighted choice, and visit expansion
//! - [`events`]: Visits, research events, and output documents
//! - [`sink`]: Record sinks
//! - [`simulation`]: Orchestration, statistics, logging, and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Simulation   │    │  Generator   │    │   Events     │
//! │              │    │              │    │              │
//! │ Orchestrator ├───►│ Identifiers  ├───►│ Visit        │
//! │ Statistics   │    │ Weighted     │    │ ResearchEvent│
//! │              │    │ Activity     │    │ OutputRecord │
//! └──────┬───────┘    └──────────────┘    └──────┬───────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌──────────────┐                       ┌──────────────┐
//! │    Types     │                       │    Sink      │
//! │ Config, Enums│                       │ BulkJson     │
//! └──────────────┘                       └──────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod generator;
pub mod simulation;
pub mod sink;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    GeneratorConfig,
    // Enums
    Indicator,
    Interval,
    MajorPair,
    RecordIdScope,
    RequestType,
    UserSource,
    // Identifiers
    RecordId,
    SessionId,
    UserId,
};

// Event types
pub use events::{IndexTarget, OutputRecord, ResearchEvent, ResearchLookup, Visit};

// Generation
pub use generator::{
    IdentifierGenerator, RecordIdCounter, ResearchCatalog, SessionActivityBuilder, WeightError,
    WeightedChoice,
};

// Sinks
pub use sink::{BulkJsonSink, DocumentLayout, MemorySink, RecordSink, SinkError};

// Simulation types and functionality
pub use simulation::{
    BundleOrchestrator, LoggingConfig, RunStatistics, SimulationError, SimulationResult,
};
