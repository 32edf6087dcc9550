//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an entity that components are attached to.
///
/// Entity IDs are opaque to the storage layer: a store uses them as keys
/// and never interprets the numeric value beyond ordering and hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Handle returned when a growth observer is registered.
///
/// Handles are allocated sequentially per buffer and never reused, so an
/// unsubscribe with a stale handle is a harmless no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u32);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_displays_inner_value() {
        assert_eq!(EntityId(42).to_string(), "42");
        assert_eq!(EntityId::from(7), EntityId(7));
    }

    #[test]
    fn entity_ids_order_numerically() {
        let mut ids = vec![EntityId(30), EntityId(10), EntityId(20)];
        ids.sort();
        assert_eq!(ids, vec![EntityId(10), EntityId(20), EntityId(30)]);
    }
}
