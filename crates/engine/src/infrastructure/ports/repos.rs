//! Repository port traits for persistent storage access.

use async_trait::async_trait;
use sightline_domain::{Member, Pin, PinId, PinImage, Report, ReportId};

use super::error::RepoError;

// =============================================================================
// Storage Ports (one per entity type)
// =============================================================================

/// Read-only access to reports. The pin core never mutates a report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepo: Send + Sync {
    async fn get(&self, id: ReportId) -> Result<Option<Report>, RepoError>;
}

/// Read-only access to members. The pin core never mutates a member;
/// callers arrive pre-authenticated, so email lookup is the only access path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PinRepo: Send + Sync {
    // CRUD
    async fn get(&self, id: PinId) -> Result<Option<Pin>, RepoError>;
    async fn save(&self, pin: &Pin) -> Result<(), RepoError>;
    /// Deleting a pin also removes its images. The cascade is a storage-layer
    /// guarantee; callers must not delete image rows themselves.
    async fn delete(&self, id: PinId) -> Result<(), RepoError>;

    // Queries
    async fn list_for_report(&self, report_id: ReportId) -> Result<Vec<Pin>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PinImageRepo: Send + Sync {
    /// Persist a batch of image rows. Insertion order is the slice order.
    async fn save_all(&self, images: &[PinImage]) -> Result<(), RepoError>;
    /// All images owned by the pin, in insertion order.
    async fn list_for_pin(&self, pin_id: PinId) -> Result<Vec<PinImage>, RepoError>;
}
