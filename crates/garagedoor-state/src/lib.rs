//! Garage door segment state: 16-bit wire codec, per-tile field accessors,
//! and vertical-stack queries.
#![forbid(unsafe_code)]

pub mod accessor;
pub mod catalog;
pub mod segment;
pub mod stack;

pub use accessor::AUX_SFX_DOOR;
pub use catalog::StyleCatalog;
pub use segment::{DoorKind, DoorState, Segment, StateError};
