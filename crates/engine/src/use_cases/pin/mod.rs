//! Pin lifecycle use cases.
//!
//! Orchestrates create/update/delete/read for sighting pins. Every mutating
//! operation runs inside one unit of work: begin at entry, commit on
//! success, roll back on any failure. Reads take no transaction.
//!
//! Access control is asymmetric on purpose: mutations are gated on the
//! caller owning the pin's parent report, while reads are open to any
//! caller who can resolve the target id. That asymmetry comes from the
//! product behavior and is preserved here, not fixed.

mod projections;
mod requests;
mod validator;

use std::sync::Arc;

use sightline_domain::{self as domain, DomainError, PinId, ReportId};

use crate::entities;
use crate::infrastructure::ports::{
    ClockPort, ImageCategory, RepoError, TxHandle, TxPort, UploadError, UploadPort,
};

pub use projections::{PinDetail, PinRecord, PinSummary};
pub use requests::{CreatePinData, UpdatePinAddressData, UpdatePinDetailsData};
pub use validator::PinValidator;

/// Pin lifecycle service.
pub struct PinLifecycle {
    validator: Arc<PinValidator>,
    pin: Arc<entities::Pin>,
    upload: Arc<dyn UploadPort>,
    tx: Arc<dyn TxPort>,
    clock: Arc<dyn ClockPort>,
}

impl PinLifecycle {
    pub fn new(
        validator: Arc<PinValidator>,
        pin: Arc<entities::Pin>,
        upload: Arc<dyn UploadPort>,
        tx: Arc<dyn TxPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            validator,
            pin,
            upload,
            tx,
            clock,
        }
    }

    /// Create a pin on a report, uploading its photos.
    ///
    /// One transaction covers the pin row, the image rows, and the upload
    /// call in between: an upload failure rolls the pin insert back rather
    /// than leaving an orphaned pin with no images.
    pub async fn create_pin(
        &self,
        caller_email: &str,
        report_id: ReportId,
        data: CreatePinData,
    ) -> Result<PinDetail, PinError> {
        let tx = self.tx.begin().await?;
        match self.create_pin_in_tx(caller_email, report_id, data).await {
            Ok(detail) => {
                tx.commit().await?;
                Ok(detail)
            }
            Err(err) => {
                roll_back(tx, "create_pin").await;
                Err(err)
            }
        }
    }

    async fn create_pin_in_tx(
        &self,
        caller_email: &str,
        report_id: ReportId,
        data: CreatePinData,
    ) -> Result<PinDetail, PinError> {
        let report = self.validator.resolve_report(report_id).await?;
        let member = self.validator.resolve_member(caller_email).await?;

        let now = self.clock.now();
        let pin = domain::Pin::new(
            report.id,
            member.id,
            data.description,
            data.found_at,
            data.address,
            data.latitude,
            data.longitude,
            now,
        )?;
        self.pin.save(&pin).await?;

        // Upload order determines image row order; a failed upload is fatal
        // to the whole create
        let urls = self
            .upload
            .upload_all(&data.files, ImageCategory::Pin)
            .await?;
        let images: Vec<domain::PinImage> = urls
            .into_iter()
            .map(|url| domain::PinImage::new(pin.id, url))
            .collect();
        self.pin.save_images(&images).await?;

        tracing::debug!(pin_id = %pin.id, report_id = %report.id, images = images.len(), "pin created");
        Ok(PinDetail::from_parts(pin, images))
    }

    /// Update only the address of an owned pin.
    pub async fn update_pin_address(
        &self,
        caller_email: &str,
        pin_id: PinId,
        data: UpdatePinAddressData,
    ) -> Result<PinRecord, PinError> {
        let tx = self.tx.begin().await?;
        match self
            .update_pin_address_in_tx(caller_email, pin_id, data)
            .await
        {
            Ok(record) => {
                tx.commit().await?;
                Ok(record)
            }
            Err(err) => {
                roll_back(tx, "update_pin_address").await;
                Err(err)
            }
        }
    }

    async fn update_pin_address_in_tx(
        &self,
        caller_email: &str,
        pin_id: PinId,
        data: UpdatePinAddressData,
    ) -> Result<PinRecord, PinError> {
        let mut pin = self
            .validator
            .resolve_owned_pin_for_mutation(caller_email, pin_id)
            .await?;
        pin.set_address(data.address, self.clock.now());
        self.pin.save(&pin).await?;
        Ok(pin.into())
    }

    /// Update only the description and sighting time of an owned pin.
    pub async fn update_pin_details(
        &self,
        caller_email: &str,
        pin_id: PinId,
        data: UpdatePinDetailsData,
    ) -> Result<PinRecord, PinError> {
        let tx = self.tx.begin().await?;
        match self
            .update_pin_details_in_tx(caller_email, pin_id, data)
            .await
        {
            Ok(record) => {
                tx.commit().await?;
                Ok(record)
            }
            Err(err) => {
                roll_back(tx, "update_pin_details").await;
                Err(err)
            }
        }
    }

    async fn update_pin_details_in_tx(
        &self,
        caller_email: &str,
        pin_id: PinId,
        data: UpdatePinDetailsData,
    ) -> Result<PinRecord, PinError> {
        let mut pin = self
            .validator
            .resolve_owned_pin_for_mutation(caller_email, pin_id)
            .await?;
        let now = self.clock.now();
        pin.set_description(data.description, now);
        pin.set_found_at(data.found_at, now);
        self.pin.save(&pin).await?;
        Ok(pin.into())
    }

    /// Delete an owned pin. Image rows cascade away in the store.
    ///
    /// Not idempotent: a second delete of the same id fails `PinNotFound`
    /// because resolution fails once the row is gone.
    pub async fn delete_pin(&self, caller_email: &str, pin_id: PinId) -> Result<(), PinError> {
        let tx = self.tx.begin().await?;
        match self.delete_pin_in_tx(caller_email, pin_id).await {
            Ok(()) => {
                tx.commit().await?;
                Ok(())
            }
            Err(err) => {
                roll_back(tx, "delete_pin").await;
                Err(err)
            }
        }
    }

    async fn delete_pin_in_tx(&self, caller_email: &str, pin_id: PinId) -> Result<(), PinError> {
        let pin = self
            .validator
            .resolve_owned_pin_for_mutation(caller_email, pin_id)
            .await?;
        self.pin.delete(pin.id).await?;
        tracing::debug!(pin_id = %pin.id, "pin deleted");
        Ok(())
    }

    /// All pins on a report. Reads are not ownership-gated; the caller
    /// identity is accepted but unused.
    pub async fn get_pin_list(
        &self,
        _caller_email: &str,
        report_id: ReportId,
    ) -> Result<Vec<PinSummary>, PinError> {
        let report = self.validator.resolve_report(report_id).await?;
        let pins = self.pin.list_for_report(report.id).await?;
        Ok(pins.into_iter().map(PinSummary::from).collect())
    }

    /// One pin plus its images. Reads are not ownership-gated.
    pub async fn get_pin(&self, _caller_email: &str, pin_id: PinId) -> Result<PinDetail, PinError> {
        let pin = self.validator.resolve_pin(pin_id).await?;
        let images = self.validator.list_images_for_pin(pin.id).await?;
        Ok(PinDetail::from_parts(pin, images))
    }
}

/// Best-effort rollback on the failure path; the original error wins, a
/// rollback failure is only logged.
async fn roll_back(tx: Box<dyn TxHandle>, operation: &'static str) {
    if let Err(err) = tx.rollback().await {
        tracing::warn!(operation, error = %err, "transaction rollback failed");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PinError {
    #[error("Report not found")]
    ReportNotFound,
    #[error("Member not found")]
    MemberNotFound,
    #[error("Pin not found")]
    PinNotFound,
    #[error("Caller does not own the pin's parent report")]
    Forbidden,
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
