//! Infrastructure: port traits and adapters.

pub mod clock;
pub mod persistence;
pub mod ports;
