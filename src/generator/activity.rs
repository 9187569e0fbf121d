//! Session activity builder
//!
//! Turns one visit into its ordered event sequence: `event_count` research
//! lookups followed by exactly one END marker.

use rand::Rng;
use tracing::{instrument, trace};

use crate::events::{ResearchEvent, Visit};
use crate::generator::{RecordIdAssignment, ResearchCatalog};

/// Builds the event sequence for a visit
#[derive(Debug, Clone)]
pub struct SessionActivityBuilder {
    catalog: ResearchCatalog,
}

impl SessionActivityBuilder {
    /// Builder drawing lookups from `catalog`
    pub fn new(catalog: ResearchCatalog) -> Self {
        Self { catalog }
    }

    /// Events for `visit`, in emission order.
    ///
    /// The returned sequence always has `visit.event_count() + 1` entries and
    /// only its last entry is an END marker.
    #[instrument(
        level = "trace",
        skip(self, rng, record_ids),
        fields(user_id = %visit.user_id(), session_id = %visit.session_id(), event_count = visit.event_count())
    )]
    pub fn build_visit<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        visit: &Visit,
        record_ids: &mut RecordIdAssignment<'_>,
    ) -> Vec<ResearchEvent> {
        let mut events = Vec::with_capacity(visit.event_count() as usize + 1);

        for _ in 0..visit.event_count() {
            let lookup = self.catalog.draw(rng);
            events.push(ResearchEvent::research(record_ids.for_event(), visit, lookup));
        }
        events.push(ResearchEvent::end(record_ids.for_event(), visit));

        trace!("Built {} events for session {}", events.len(), visit.session_id());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RecordIdCounter;
    use crate::types::{RecordId, RequestType, SessionId, UserId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builder() -> SessionActivityBuilder {
        SessionActivityBuilder::new(ResearchCatalog::standard().unwrap())
    }

    #[test]
    fn test_visit_ends_with_single_end_marker() {
        let builder = builder();
        let mut rng = StdRng::seed_from_u64(1);

        for count in [1, 2, 17, 100] {
            let visit = Visit::new(UserId(1_200_000), SessionId(12_000_000), count).unwrap();
            let mut ids = RecordIdAssignment::Shared(RecordId(2));
            let events = builder.build_visit(&mut rng, &visit, &mut ids);

            assert_eq!(events.len(), count as usize + 1);
            assert!(events.last().unwrap().is_end());
            assert_eq!(events.iter().filter(|e| e.is_end()).count(), 1);
            assert!(events[..count as usize]
                .iter()
                .all(|e| e.request_type() == RequestType::Research));
        }
    }

    #[test]
    fn test_events_inherit_visit_identifiers() {
        let builder = builder();
        let mut rng = StdRng::seed_from_u64(2);
        let visit = Visit::new(UserId(1_765_432), SessionId(19_999_999), 5).unwrap();
        let mut ids = RecordIdAssignment::Shared(RecordId(40));

        for event in builder.build_visit(&mut rng, &visit, &mut ids) {
            assert_eq!(event.user_id, UserId(1_765_432));
            assert_eq!(event.session_id, SessionId(19_999_999));
            assert_eq!(event.record_id, RecordId(40));
        }
    }

    #[test]
    fn test_per_event_record_ids() {
        let builder = builder();
        let mut rng = StdRng::seed_from_u64(3);
        let visit = Visit::new(UserId(1_000_001), SessionId(10_000_001), 3).unwrap();
        let mut counter = RecordIdCounter::new(1);

        let events = {
            let mut ids = RecordIdAssignment::PerEvent(&mut counter);
            builder.build_visit(&mut rng, &visit, &mut ids)
        };

        let ids: Vec<u64> = events.iter().map(|e| e.record_id.value()).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
        assert_eq!(counter.current(), 5);
    }
}
