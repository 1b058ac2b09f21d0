//! Sightline Engine library.
//!
//! The pin lifecycle core for the sighting service.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping repository ports
//! - `use_cases/` - Pin lifecycle orchestration (validation + mutations)
//! - `infrastructure/` - Port traits and the in-memory adapter
//! - `app` - Application composition
//!
//! Transport (HTTP routing, request parsing) and real storage engines sit
//! outside this crate and talk to it through `App` and the port traits.

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
