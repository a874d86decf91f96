//! Card instance identification.
//!
//! Every physical card copy in a simulation has a unique `InstanceId`.
//! Two copies built from the same template share a `CardId` but never an
//! `InstanceId`.
//!
//! ## Allocation
//!
//! IDs are handed out by an `InstanceAllocator` at deck-construction time.
//! Decks for every player of one simulation must come from the same
//! allocator so that ids stay unique across the whole game.
//!
//! ```
//! use tcg_sim::core::{InstanceAllocator, InstanceId};
//!
//! let mut ids = InstanceAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(a, InstanceId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for instance IDs.
///
/// Starts at 1 so that a zeroed id never refers to a real card.
#[derive(Clone, Debug)]
pub struct InstanceAllocator {
    next: u32,
}

impl Default for InstanceAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl InstanceAllocator {
    /// Create a new allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next instance ID.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = InstanceAllocator::new();

        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert_eq!(a, InstanceId(1));
        assert_eq!(b, InstanceId(2));
        assert_eq!(c, InstanceId(3));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "#42");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
