//! Zone system for card locations.
//!
//! Every player owns four zones: hand, deck, graveyard and board. A card
//! instance is held by exactly one zone at a time, and the zone keeps the
//! card's owner back-reference in sync.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Which of the four zones
//! - `Zone`: Ordered card container with ownership bookkeeping
//! - `ZonePosition`: Insert position (top or bottom)
//! - `DrawOutcome`: What happened when a player drew

pub mod zone;

pub use zone::{DrawOutcome, Zone, ZoneKind, ZonePosition};
