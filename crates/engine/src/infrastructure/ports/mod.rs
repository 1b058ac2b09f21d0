//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Entity persistence (could swap the in-memory adapter for Postgres)
//! - Binary object storage for uploaded images
//! - Transaction demarcation (one unit of work per mutating operation)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;
mod tx;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{MemberRepo, PinImageRepo, PinRepo, ReportRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{FilePayload, ImageCategory, UploadPort};

// =============================================================================
// Transaction Port
// =============================================================================
pub use tx::{TxHandle, TxPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{RepoError, UploadError};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockUploadPort;
#[cfg(test)]
pub use repos::{MockMemberRepo, MockPinImageRepo, MockPinRepo, MockReportRepo};
#[cfg(test)]
pub use testing::MockClockPort;
#[cfg(test)]
pub use tx::MockTxPort;
