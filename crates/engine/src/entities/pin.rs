//! Pin entity operations.
//!
//! Coordinates the pin port and its image port; a pin owns its images'
//! lifecycle, so the pair lives behind one wrapper.

use std::sync::Arc;

use sightline_domain::{self as domain, PinId, ReportId};

use crate::infrastructure::ports::{PinImageRepo, PinRepo, RepoError};

/// Pin entity operations.
pub struct Pin {
    repo: Arc<dyn PinRepo>,
    image_repo: Arc<dyn PinImageRepo>,
}

impl Pin {
    pub fn new(repo: Arc<dyn PinRepo>, image_repo: Arc<dyn PinImageRepo>) -> Self {
        Self { repo, image_repo }
    }

    // CRUD operations

    pub async fn get(&self, id: PinId) -> Result<Option<domain::Pin>, RepoError> {
        self.repo.get(id).await
    }

    pub async fn save(&self, pin: &domain::Pin) -> Result<(), RepoError> {
        self.repo.save(pin).await
    }

    /// Delete the pin. Image rows go with it (storage-layer cascade).
    pub async fn delete(&self, id: PinId) -> Result<(), RepoError> {
        self.repo.delete(id).await
    }

    // Query operations

    pub async fn list_for_report(
        &self,
        report_id: ReportId,
    ) -> Result<Vec<domain::Pin>, RepoError> {
        self.repo.list_for_report(report_id).await
    }

    // Image operations

    pub async fn save_images(&self, images: &[domain::PinImage]) -> Result<(), RepoError> {
        self.image_repo.save_all(images).await
    }

    pub async fn list_images(&self, pin_id: PinId) -> Result<Vec<domain::PinImage>, RepoError> {
        self.image_repo.list_for_pin(pin_id).await
    }
}
