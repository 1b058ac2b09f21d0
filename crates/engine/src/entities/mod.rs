//! Entity modules wrapping repository ports.
//!
//! Use cases talk to these wrappers, never to the ports directly.

mod member;
mod pin;
mod report;

pub use member::Member;
pub use pin::Pin;
pub use report::Report;
