//! Core types and identifiers for the session generator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the generator.
//!
//! # Overview
//!
//! - **Identifiers**: numeric user, session, and record identifiers
//! - **Enums**: the category label sets, request type, and generator modes
//! - **Configuration**: generator configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use usersessions_generator::types::*;
//!
//! let user_id = UserId(1_234_567);
//! assert_eq!(user_id.to_string(), "1234567");
//!
//! assert_eq!(Interval::FiveSeconds.to_string(), "5s");
//!
//! let config = GeneratorConfig {
//!     visit_count: 10,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
