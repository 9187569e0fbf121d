//! Numeric identifier types for the session generator
//!
//! This module contains the identifier newtypes for users, sessions, and
//! index records. All three serialize as bare JSON integers so they can be
//! dropped straight into the bulk-ingest documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synthetic identifier of a simulated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Synthetic identifier of a simulated visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u32);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SessionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Document identifier handed to the search index (`_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&UserId(1_234_567)).unwrap(), "1234567");
        assert_eq!(serde_json::to_string(&SessionId(12_345_678)).unwrap(), "12345678");
        assert_eq!(serde_json::to_string(&RecordId(42)).unwrap(), "42");
    }

    #[test]
    fn test_ids_deserialize_from_integers() {
        let user: UserId = serde_json::from_str("1500000").unwrap();
        assert_eq!(user, UserId(1_500_000));

        let users: Vec<UserId> = serde_json::from_str("[1000001, 1999999]").unwrap();
        assert_eq!(users, vec![UserId(1_000_001), UserId(1_999_999)]);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(1_000_000).to_string(), "1000000");
        assert_eq!(SessionId(10_000_000).to_string(), "10000000");
        assert_eq!(RecordId(7).to_string(), "7");
        assert_eq!(RecordId(7).value(), 7);
    }
}
