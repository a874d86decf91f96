//! Card system: properties, templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Template identifier shared by every copy
//! - `Property` / `PropertyValue`: Typed keys over an open-ended value map
//! - `CardTemplate`: Printed card data
//! - `Card`: One physical copy with runtime state
//! - `CardCatalog`: Template lookup and deck construction

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{CardType, Keyword, Properties, Property, PropertyValue};
pub use definition::{CardId, CardTemplate};
pub use instance::Card;
pub use registry::CardCatalog;
