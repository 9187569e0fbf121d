//! Configuration structures for the session generator
//!
//! This module contains the generator configuration, the command line
//! arguments that override it, and the validation that runs before any
//! record is generated.

use super::{CategoryLabel, Indicator, Interval, MajorPair, RecordIdScope, UserSource};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bounds on the number of research events in one visit
pub mod visit_bounds {
    /// Fewest research events a visit may contain
    pub const MIN_EVENTS: u32 = 1;

    /// Most research events a visit may contain
    pub const MAX_EVENTS: u32 = 100;

    /// Visits generated when nothing else is configured
    pub const DEFAULT_VISIT_COUNT: usize = 100;
}

/// Default relative weights for the category sets
pub mod weights {
    /// Indicator weights, parallel to `Indicator::ALL` (favors MACD)
    pub const INDICATOR: [u32; 6] = [20, 12, 5, 5, 10, 12];

    /// Interval weights, parallel to `Interval::ALL` (heavily favors 5s)
    pub const INTERVAL: [u32; 6] = [100, 20, 10, 20, 20, 5];

    /// Currency pair weights observed for top traders, parallel to `MajorPair::ALL`
    pub const TOP_TRADER_MAJOR_PAIR: [u32; 10] = [50, 10, 5, 5, 40, 10, 10, 5, 25, 35];
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "usersessions-generator",
    version,
    about = "Generates synthetic user-session research activity for bulk indexing",
    long_about = "Generates simulated trading-research visits. Every visit is a run of research lookups (currency pair, indicator, interval) closed by an END record, written as alternating index-metadata and payload JSON documents ready for a bulk ingest API.

EXAMPLES:
    # Generate 100 visits to stdout
    usersessions-generator

    # Append 10000 visits to a file, newline-delimited for the bulk API
    usersessions-generator --visit-count 10000 --output sessioninfoES.json --newline-delimited

    # Simulate repeat visitors from a known pool
    usersessions-generator --user-source existing --known-user-id 1000001 --known-user-id 1000002

    # Generate configuration template
    usersessions-generator --print-config > generator.json

    # Validate configuration without running
    usersessions-generator --config generator.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)

    Category weights (indicator_weights, interval_weights, major_pair_weights)
    can only be set in the configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of visits to simulate
    #[arg(
        long,
        help = "Number of visits to simulate",
        long_help = "Number of simulated user visits. Zero produces no output. Default: 100"
    )]
    pub visit_count: Option<usize>,

    /// Fewest research events per visit
    #[arg(long, help = "Minimum research events per visit (1-100)")]
    pub min_events_per_visit: Option<u32>,

    /// Most research events per visit
    #[arg(long, help = "Maximum research events per visit (1-100)")]
    pub max_events_per_visit: Option<u32>,

    /// Counter value before the first record identifier is handed out
    #[arg(
        long,
        help = "Record id counter seed",
        long_help = "Value of the record id counter before the run. The first record id written is this value plus one. Default: 1"
    )]
    pub record_id_start: Option<u64>,

    /// Record identifier scope
    #[arg(
        long,
        value_enum,
        help = "Record id scope (visit or event)",
        long_help = "Whether all events of a visit share one record id (visit) or every event gets its own (event). Default: visit"
    )]
    pub record_id_scope: Option<RecordIdScope>,

    /// Source of user identifiers
    #[arg(
        long,
        value_enum,
        help = "User id source (new or existing); existing requires --known-user-id",
        long_help = "Generate a fresh user id per visit (new) or draw from the known user pool (existing). There is no built-in pool: existing requires at least one --known-user-id, or known_user_ids in the config file. Default: new"
    )]
    pub user_source: Option<UserSource>,

    /// Known user identifiers for the existing-user source
    #[arg(
        long = "known-user-id",
        help = "Known user id (repeatable)",
        long_help = "Known user id for --user-source existing. Repeat the flag to build the pool; at least one id is required in that mode"
    )]
    pub known_user_ids: Vec<u32>,

    /// Weight currency pairs the way top traders research them
    #[arg(long, help = "Use top-trader weights for currency pairs")]
    pub weighted_major_pairs: bool,

    /// Index name written into every metadata document
    #[arg(long, help = "Index name for metadata documents")]
    pub index_name: Option<String>,

    /// Document type written into every metadata document
    #[arg(long, help = "Document type for metadata documents")]
    pub document_type: Option<String>,

    /// Output file (appended to); stdout when omitted
    #[arg(short, long, help = "Output file to append to (default: stdout)")]
    pub output: Option<String>,

    /// Terminate every document with a newline
    #[arg(
        long,
        help = "Write one document per line",
        long_help = "Terminate every document with a newline, as the bulk API expects. By default documents are concatenated with no separator."
    )]
    pub newline_delimited: bool,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Directory for daily rolling log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without generating
    #[arg(long, help = "Validate configuration without generating records")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of visits to simulate
    pub visit_count: Option<usize>,

    /// Fewest research events per visit
    pub min_events_per_visit: Option<u32>,

    /// Most research events per visit
    pub max_events_per_visit: Option<u32>,

    /// Counter value before the first record identifier
    pub record_id_start: Option<u64>,

    /// Record identifier scope
    pub record_id_scope: Option<RecordIdScope>,

    /// Source of user identifiers
    pub user_source: Option<UserSource>,

    /// Known user identifiers
    pub known_user_ids: Option<Vec<u32>>,

    /// Currency pair weights (uniform when absent)
    pub major_pair_weights: Option<Vec<u32>>,

    /// Indicator weights
    pub indicator_weights: Option<Vec<u32>>,

    /// Interval weights
    pub interval_weights: Option<Vec<u32>>,

    /// Index name for metadata documents
    pub index_name: Option<String>,

    /// Document type for metadata documents
    pub document_type: Option<String>,

    /// Output file
    pub output_path: Option<String>,

    /// Terminate every document with a newline
    pub newline_delimited: Option<bool>,

    /// Random seed
    pub seed: Option<u64>,
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of visits to simulate
    pub visit_count: usize,

    /// Fewest research events per visit
    pub min_events_per_visit: u32,

    /// Most research events per visit
    pub max_events_per_visit: u32,

    /// Counter value before the first record identifier is handed out
    pub record_id_start: u64,

    /// Record identifier scope
    pub record_id_scope: RecordIdScope,

    /// Source of user identifiers
    pub user_source: UserSource,

    /// Pool drawn from when `user_source` is `existing`
    pub known_user_ids: Vec<u32>,

    /// Currency pair weights; `None` draws uniformly
    pub major_pair_weights: Option<Vec<u32>>,

    /// Indicator weights, parallel to `Indicator::ALL`
    pub indicator_weights: Vec<u32>,

    /// Interval weights, parallel to `Interval::ALL`
    pub interval_weights: Vec<u32>,

    /// Index name for metadata documents
    pub index_name: String,

    /// Document type for metadata documents
    pub document_type: String,

    /// Output file; `None` writes to stdout
    pub output_path: Option<String>,

    /// Terminate every document with a newline
    pub newline_delimited: bool,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Event range is outside the allowed bounds or inverted
    #[error("Invalid events-per-visit range: {min}..={max} (must lie within 1..=100 with min <= max)")]
    InvalidEventRange {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// Weight table length does not match its label set
    #[error("{category} weights have {actual} entries, expected {expected}")]
    WeightCountMismatch {
        /// Category the weights belong to
        category: String,
        /// Number of labels in the category
        expected: usize,
        /// Number of weights configured
        actual: usize,
    },

    /// A weight is zero
    #[error("{category} weight at position {index} must be positive")]
    NonPositiveWeight {
        /// Category the weights belong to
        category: String,
        /// Position of the offending weight
        index: usize,
    },

    /// Existing-user mode without a pool
    #[error("User source 'existing' requires at least one known user id (--known-user-id or known_user_ids)")]
    EmptyKnownUserPool,

    /// Metadata field is blank
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the blank field
        field: String,
    },
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            visit_count: visit_bounds::DEFAULT_VISIT_COUNT,
            min_events_per_visit: visit_bounds::MIN_EVENTS,
            max_events_per_visit: visit_bounds::MAX_EVENTS,
            record_id_start: 1,
            record_id_scope: RecordIdScope::Visit,
            user_source: UserSource::New,
            known_user_ids: Vec::new(),
            major_pair_weights: None,
            indicator_weights: weights::INDICATOR.to_vec(),
            interval_weights: weights::INTERVAL.to_vec(),
            index_name: "usersessions".to_string(),
            document_type: "research".to_string(),
            output_path: None,
            newline_delimited: false,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            visit_count: config_file.visit_count.unwrap_or(defaults.visit_count),
            min_events_per_visit: config_file
                .min_events_per_visit
                .unwrap_or(defaults.min_events_per_visit),
            max_events_per_visit: config_file
                .max_events_per_visit
                .unwrap_or(defaults.max_events_per_visit),
            record_id_start: config_file.record_id_start.unwrap_or(defaults.record_id_start),
            record_id_scope: config_file.record_id_scope.unwrap_or(defaults.record_id_scope),
            user_source: config_file.user_source.unwrap_or(defaults.user_source),
            known_user_ids: config_file.known_user_ids.unwrap_or(defaults.known_user_ids),
            major_pair_weights: config_file.major_pair_weights.or(defaults.major_pair_weights),
            indicator_weights: config_file
                .indicator_weights
                .unwrap_or(defaults.indicator_weights),
            interval_weights: config_file.interval_weights.unwrap_or(defaults.interval_weights),
            index_name: config_file.index_name.unwrap_or(defaults.index_name),
            document_type: config_file.document_type.unwrap_or(defaults.document_type),
            output_path: config_file.output_path.or(defaults.output_path),
            newline_delimited: config_file
                .newline_delimited
                .unwrap_or(defaults.newline_delimited),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.visit_count {
            config.visit_count = value;
        }
        if let Some(value) = args.min_events_per_visit {
            config.min_events_per_visit = value;
        }
        if let Some(value) = args.max_events_per_visit {
            config.max_events_per_visit = value;
        }
        if let Some(value) = args.record_id_start {
            config.record_id_start = value;
        }
        if let Some(value) = args.record_id_scope {
            config.record_id_scope = value;
        }
        if let Some(value) = args.user_source {
            config.user_source = value;
        }
        if !args.known_user_ids.is_empty() {
            config.known_user_ids = args.known_user_ids;
        }
        if args.weighted_major_pairs {
            config.major_pair_weights = Some(weights::TOP_TRADER_MAJOR_PAIR.to_vec());
        }
        if let Some(value) = args.index_name {
            config.index_name = value;
        }
        if let Some(value) = args.document_type {
            config.document_type = value;
        }
        if let Some(value) = args.output {
            config.output_path = Some(value);
        }
        if args.newline_delimited {
            config.newline_delimited = true;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let (min, max) = self.events_per_visit();
        if min < visit_bounds::MIN_EVENTS || max > visit_bounds::MAX_EVENTS || min > max {
            return Err(ConfigValidationError::InvalidEventRange { min, max });
        }

        if let Some(pair_weights) = &self.major_pair_weights {
            Self::validate_weights::<MajorPair>(pair_weights)?;
        }
        Self::validate_weights::<Indicator>(&self.indicator_weights)?;
        Self::validate_weights::<Interval>(&self.interval_weights)?;

        if self.user_source == UserSource::Existing && self.known_user_ids.is_empty() {
            return Err(ConfigValidationError::EmptyKnownUserPool);
        }

        if self.index_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField { field: "index_name".to_string() });
        }
        if self.document_type.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField { field: "document_type".to_string() });
        }

        Ok(())
    }

    /// Helper method to validate a weight table against its label count
    fn validate_weights<L: CategoryLabel>(values: &[u32]) -> Result<(), ConfigValidationError> {
        let expected = L::all().len();
        if values.len() != expected {
            return Err(ConfigValidationError::WeightCountMismatch {
                category: L::CATEGORY.to_string(),
                expected,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|&w| w == 0) {
            return Err(ConfigValidationError::NonPositiveWeight {
                category: L::CATEGORY.to_string(),
                index,
            });
        }
        Ok(())
    }

    /// Get the events-per-visit range as a tuple
    pub fn events_per_visit(&self) -> (u32, u32) {
        (self.min_events_per_visit, self.max_events_per_visit)
    }
}
