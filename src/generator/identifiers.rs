//! Identifier generation
//!
//! User and session identifiers are drawn at random from fixed ranges with no
//! uniqueness guarantee; collisions are acceptable for seeding data. Record
//! identifiers come from an explicit counter owned by the orchestrator.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{RecordId, SessionId, UserId, UserSource};

/// Range fresh user identifiers are drawn from (7 digits)
pub const USER_ID_RANGE: Range<u32> = 1_000_000..2_000_000;

/// Range fresh session identifiers are drawn from (8 digits)
pub const SESSION_ID_RANGE: Range<u32> = 10_000_000..20_000_000;

/// Produces user and session identifiers for new visits
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    user_source: UserSource,
    known_users: Vec<UserId>,
}

impl IdentifierGenerator {
    /// Generator that mints a fresh user identifier for every visit
    pub fn new() -> Self {
        Self { user_source: UserSource::New, known_users: Vec::new() }
    }

    /// Generator that draws user identifiers from a pool of known users
    pub fn with_known_users(known_users: Vec<UserId>) -> SimulationResult<Self> {
        if known_users.is_empty() {
            return Err(SimulationError::configuration_error(
                "existing-user mode requires a non-empty pool of known user ids",
            ));
        }
        Ok(Self { user_source: UserSource::Existing, known_users })
    }

    /// Build from a configured source and pool
    pub fn from_source(source: UserSource, known_users: &[u32]) -> SimulationResult<Self> {
        match source {
            UserSource::New => Ok(Self::new()),
            UserSource::Existing => {
                Self::with_known_users(known_users.iter().copied().map(UserId).collect())
            }
        }
    }

    /// Where user identifiers come from
    pub fn user_source(&self) -> UserSource {
        self.user_source
    }

    /// User identifier for a new visit
    pub fn new_user_id<R: Rng + ?Sized>(&self, rng: &mut R) -> UserId {
        match self.user_source {
            UserSource::New => UserId(rng.gen_range(USER_ID_RANGE)),
            UserSource::Existing => match self.known_users.choose(rng) {
                Some(user) => *user,
                None => UserId(rng.gen_range(USER_ID_RANGE)),
            },
        }
    }

    /// Session identifier for a new visit
    pub fn new_session_id<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionId {
        SessionId(rng.gen_range(SESSION_ID_RANGE))
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic record identifier counter.
///
/// The counter is advanced before a value is handed out, so a counter created
/// at `1` yields `2, 3, 4, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIdCounter {
    current: u64,
}

impl RecordIdCounter {
    /// Counter whose first handed-out value is `start + 1`
    pub fn new(start: u64) -> Self {
        Self { current: start }
    }

    /// Advance and return the next identifier
    pub fn next_record_id(&mut self) -> RecordId {
        self.current += 1;
        RecordId(self.current)
    }

    /// Last value handed out (or the seed, if none has been)
    pub fn current(&self) -> u64 {
        self.current
    }
}

impl Default for RecordIdCounter {
    fn default() -> Self {
        Self::new(1)
    }
}

/// How the events of one visit obtain their record identifiers
#[derive(Debug)]
pub enum RecordIdAssignment<'a> {
    /// Every event of the visit carries the same identifier
    Shared(RecordId),
    /// Every event draws its own identifier from the counter
    PerEvent(&'a mut RecordIdCounter),
}

impl RecordIdAssignment<'_> {
    /// Identifier for the next event of the visit
    pub fn for_event(&mut self) -> RecordId {
        match self {
            RecordIdAssignment::Shared(id) => *id,
            RecordIdAssignment::PerEvent(counter) => counter.next_record_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_ids_stay_in_range() {
        let generator = IdentifierGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let user = generator.new_user_id(&mut rng);
            let session = generator.new_session_id(&mut rng);
            assert!(USER_ID_RANGE.contains(&user.0), "user id {} out of range", user);
            assert!(SESSION_ID_RANGE.contains(&session.0), "session id {} out of range", session);
        }
    }

    #[test]
    fn test_existing_users_come_from_pool() {
        let pool = vec![UserId(1_000_001), UserId(1_000_002), UserId(1_000_003)];
        let generator = IdentifierGenerator::with_known_users(pool.clone()).unwrap();
        assert_eq!(generator.user_source(), UserSource::Existing);

        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let user = generator.new_user_id(&mut rng);
            assert!(pool.contains(&user));
            seen.insert(user);
        }
        // uniform over three ids; 500 draws hit all of them
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_existing_users_need_pool() {
        assert!(IdentifierGenerator::with_known_users(Vec::new()).is_err());
        assert!(IdentifierGenerator::from_source(UserSource::Existing, &[]).is_err());
        assert_eq!(
            IdentifierGenerator::from_source(UserSource::New, &[]).unwrap().user_source(),
            UserSource::New
        );
    }

    #[test]
    fn test_record_counter_starts_above_seed() {
        let mut counter = RecordIdCounter::default();
        assert_eq!(counter.current(), 1);
        assert_eq!(counter.next_record_id(), RecordId(2));
        assert_eq!(counter.next_record_id(), RecordId(3));
        assert_eq!(counter.current(), 3);

        let mut seeded = RecordIdCounter::new(500);
        assert_eq!(seeded.next_record_id(), RecordId(501));
    }

    #[test]
    fn test_record_id_assignment() {
        let mut shared = RecordIdAssignment::Shared(RecordId(10));
        assert_eq!(shared.for_event(), RecordId(10));
        assert_eq!(shared.for_event(), RecordId(10));

        let mut counter = RecordIdCounter::new(10);
        {
            let mut per_event = RecordIdAssignment::PerEvent(&mut counter);
            assert_eq!(per_event.for_event(), RecordId(11));
            assert_eq!(per_event.for_event(), RecordId(12));
        }
        assert_eq!(counter.current(), 12);
    }
}
