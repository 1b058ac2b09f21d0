//! Use cases: pin lifecycle orchestration.

pub mod pin;

pub use pin::{PinError, PinLifecycle, PinValidator};
