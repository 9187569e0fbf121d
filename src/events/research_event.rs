//! Visits and the research events they produce

use serde::{Deserialize, Serialize};

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::config::visit_bounds;
use crate::types::{
    CategoryLabel, Indicator, Interval, MajorPair, RecordId, RequestType, SessionId, UserId,
    END_LABEL,
};

/// One simulated user visit. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    user_id: UserId,
    session_id: SessionId,
    event_count: u32,
}

impl Visit {
    /// Create a visit with `event_count` research events (1..=100)
    pub fn new(user_id: UserId, session_id: SessionId, event_count: u32) -> SimulationResult<Self> {
        if !(visit_bounds::MIN_EVENTS..=visit_bounds::MAX_EVENTS).contains(&event_count) {
            return Err(SimulationError::InvalidEventCount {
                count: event_count,
                min: visit_bounds::MIN_EVENTS,
                max: visit_bounds::MAX_EVENTS,
            });
        }
        Ok(Self { user_id, session_id, event_count })
    }

    /// User making the visit
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Session of the visit
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Number of research events, not counting the END marker
    pub fn event_count(&self) -> u32 {
        self.event_count
    }
}

/// The three labels drawn for one research action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResearchLookup {
    /// Currency pair researched
    pub major_pair: MajorPair,
    /// Indicator looked up
    pub indicator: Indicator,
    /// Chart interval
    pub interval: Interval,
}

/// What an event carries beyond its identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDetails {
    /// A research lookup
    Research(ResearchLookup),
    /// End-of-visit marker
    End,
}

/// One research action (or the END sentinel) within a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEvent {
    /// Index document identifier
    pub record_id: RecordId,
    /// User of the owning visit
    pub user_id: UserId,
    /// Session of the owning visit
    pub session_id: SessionId,
    /// Research lookup or END
    pub details: EventDetails,
}

impl ResearchEvent {
    /// A research event for `visit`
    pub fn research(record_id: RecordId, visit: &Visit, lookup: ResearchLookup) -> Self {
        Self {
            record_id,
            user_id: visit.user_id(),
            session_id: visit.session_id(),
            details: EventDetails::Research(lookup),
        }
    }

    /// The END marker closing `visit`
    pub fn end(record_id: RecordId, visit: &Visit) -> Self {
        Self {
            record_id,
            user_id: visit.user_id(),
            session_id: visit.session_id(),
            details: EventDetails::End,
        }
    }

    /// Request type tag
    pub fn request_type(&self) -> RequestType {
        match self.details {
            EventDetails::Research(_) => RequestType::Research,
            EventDetails::End => RequestType::End,
        }
    }

    /// Whether this is the END marker
    pub fn is_end(&self) -> bool {
        matches!(self.details, EventDetails::End)
    }

    /// Lookup drawn for a research event
    pub fn lookup(&self) -> Option<&ResearchLookup> {
        match &self.details {
            EventDetails::Research(lookup) => Some(lookup),
            EventDetails::End => None,
        }
    }

    /// Currency pair label, `END` for the marker
    pub fn major_pair_label(&self) -> &'static str {
        self.lookup().map_or(END_LABEL, |l| l.major_pair.label())
    }

    /// Indicator label, `END` for the marker
    pub fn indicator_label(&self) -> &'static str {
        self.lookup().map_or(END_LABEL, |l| l.indicator.label())
    }

    /// Interval label, `END` for the marker
    pub fn interval_label(&self) -> &'static str {
        self.lookup().map_or(END_LABEL, |l| l.interval.label())
    }
}
