//! Sightline domain layer.
//!
//! Core entity types for the lost-pet sighting service: members file
//! reports, and sighting pins (with uploaded photos) attach to those
//! reports. This crate holds the entities, their typed ids, and the
//! domain error type - no I/O, no persistence.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Member, Pin, PinImage, Report};
pub use error::DomainError;
pub use ids::{MemberId, PinId, PinImageId, ReportId};
