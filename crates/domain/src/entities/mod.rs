//! Domain entities.

mod member;
mod pin;
mod report;

pub use member::Member;
pub use pin::{Pin, PinImage};
pub use report::Report;
