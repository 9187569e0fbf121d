//! Session bundle orchestrator
//!
//! Drives a run: for every visit it draws identifiers and an event count,
//! assigns record identifiers, expands the visit into events, and appends
//! each event's document pair to the sink.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::events::{IndexTarget, OutputRecord, Visit};
use crate::generator::{
    IdentifierGenerator, RecordIdAssignment, RecordIdCounter, ResearchCatalog,
    SessionActivityBuilder,
};
use crate::simulation::{RunStatistics, SimulationError, SimulationResult};
use crate::sink::RecordSink;
use crate::types::{GeneratorConfig, RecordId, RecordIdScope};

/// Coordinates identifier generation, activity building, and the sink
#[derive(Debug)]
pub struct BundleOrchestrator {
    /// Validated run configuration
    config: GeneratorConfig,
    /// User and session identifier source
    identifiers: IdentifierGenerator,
    /// Record identifier counter, owned for the whole run
    record_ids: RecordIdCounter,
    /// Expands visits into events
    activity_builder: SessionActivityBuilder,
    /// Index name and document type for metadata documents
    target: IndexTarget,
    /// Random number generator with optional seed
    rng: StdRng,
    /// Counters for what reached the sink
    statistics: RunStatistics,
}

impl BundleOrchestrator {
    /// Create an orchestrator, validating the configuration and building the
    /// weighted tables up front
    #[instrument(skip(config), fields(visit_count = config.visit_count, seed = ?config.seed))]
    pub fn new(config: GeneratorConfig) -> SimulationResult<Self> {
        config.validate()?;

        let catalog = ResearchCatalog::from_config(&config)?;
        let identifiers =
            IdentifierGenerator::from_source(config.user_source, &config.known_user_ids)?;

        // Initialize random number generator with optional seed
        let rng = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy()
            }
        };

        debug!(
            "Record ids start after {} with {:?} scope; users from {:?} source",
            config.record_id_start, config.record_id_scope, config.user_source
        );

        Ok(Self {
            record_ids: RecordIdCounter::new(config.record_id_start),
            activity_builder: SessionActivityBuilder::new(catalog),
            target: IndexTarget::new(config.index_name.clone(), config.document_type.clone()),
            identifiers,
            rng,
            statistics: RunStatistics::new(),
            config,
        })
    }

    /// Generate the configured number of visits into `sink`
    pub fn run<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> SimulationResult<&RunStatistics> {
        let visit_count = self.config.visit_count;
        self.create_session_bundle(visit_count, sink)?;
        Ok(&self.statistics)
    }

    /// Generate `visit_count` visits into `sink`, in order.
    ///
    /// Zero visits write nothing and leave the record counter untouched. A
    /// sink failure stops the run; the error carries the last record id whose
    /// metadata and payload were both appended, counting earlier calls.
    #[instrument(skip(self, sink))]
    pub fn create_session_bundle<S: RecordSink + ?Sized>(
        &mut self,
        visit_count: usize,
        sink: &mut S,
    ) -> SimulationResult<()> {
        let started = Instant::now();
        let (min_events, max_events) = self.config.events_per_visit();
        let mut last_written: Option<RecordId> = self.statistics.last_record_id;

        info!("Generating {} visits", visit_count);

        for visit_index in 0..visit_count {
            let user_id = self.identifiers.new_user_id(&mut self.rng);
            let session_id = self.identifiers.new_session_id(&mut self.rng);
            let event_count = self.rng.gen_range(min_events..=max_events);
            let visit = Visit::new(user_id, session_id, event_count)?;

            let events = {
                let mut assignment = match self.config.record_id_scope {
                    RecordIdScope::Visit => {
                        RecordIdAssignment::Shared(self.record_ids.next_record_id())
                    }
                    RecordIdScope::Event => RecordIdAssignment::PerEvent(&mut self.record_ids),
                };
                self.activity_builder.build_visit(&mut self.rng, &visit, &mut assignment)
            };

            for event in &events {
                let record = OutputRecord::from_event(event, &self.target);
                sink.append(&record)
                    .map_err(|source| SimulationError::sink_write(last_written, source))?;
                last_written = Some(event.record_id);
                self.statistics.record_event(event);
            }
            self.statistics.record_visit();

            debug!(
                "Visit {}/{}: user {} session {} wrote {} records",
                visit_index + 1,
                visit_count,
                user_id,
                session_id,
                events.len()
            );
        }

        sink.flush().map_err(|source| SimulationError::sink_write(last_written, source))?;

        let elapsed = self.statistics.duration + started.elapsed();
        self.statistics.set_duration(elapsed);
        info!("Session bundle complete: {}", self.statistics.compact_summary());

        Ok(())
    }

    /// Record identifier counter
    pub fn record_ids(&self) -> &RecordIdCounter {
        &self.record_ids
    }

    /// Statistics accumulated so far
    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    /// Configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Index target written into metadata documents
    pub fn target(&self) -> &IndexTarget {
        &self.target
    }
}
