//! Pin entity - a geotagged sighting marker attached to a report.
//!
//! A pin belongs to exactly one report and was created by exactly one
//! member; both references are fixed at construction. Descriptive fields
//! (address, description, found_at) mutate independently through the
//! setters below; the parent and creator references never do.
//!
//! `PinImage` is a child of exactly one pin. Images are created only in
//! bulk alongside pin creation, one per uploaded file in upload order,
//! and are removed when the owning pin is removed (a cascade the
//! persistence layer guarantees).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{MemberId, PinId, PinImageId, ReportId};

/// A sighting marker on a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: PinId,
    /// Parent report; immutable after creation
    pub report_id: ReportId,
    /// Creating member; immutable after creation
    pub member_id: MemberId,
    /// Free-text sighting description
    pub description: String,
    /// When the sighting happened (not when the pin was filed)
    pub found_at: DateTime<Utc>,
    /// Free-text location label
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pin {
    /// All invariant-bearing fields are required up front; a partially
    /// initialized pin is never observable. Coordinates outside the WGS84
    /// range are rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        report_id: ReportId,
        member_id: MemberId,
        description: impl Into<String>,
        found_at: DateTime<Utc>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "longitude out of range: {longitude}"
            )));
        }
        Ok(Self {
            id: PinId::new(),
            report_id,
            member_id,
            description: description.into(),
            found_at,
            address: address.into(),
            latitude,
            longitude,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_address(&mut self, address: impl Into<String>, now: DateTime<Utc>) {
        self.address = address.into();
        self.updated_at = now;
    }

    pub fn set_description(&mut self, description: impl Into<String>, now: DateTime<Utc>) {
        self.description = description.into();
        self.updated_at = now;
    }

    pub fn set_found_at(&mut self, found_at: DateTime<Utc>, now: DateTime<Utc>) {
        self.found_at = found_at;
        self.updated_at = now;
    }
}

/// An uploaded photo owned by exactly one pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinImage {
    pub id: PinImageId,
    /// Owning pin
    pub pin_id: PinId,
    /// Public URL produced by the upload adapter; opaque to this core
    pub image_url: String,
}

impl PinImage {
    pub fn new(pin_id: PinId, image_url: impl Into<String>) -> Self {
        Self {
            id: PinImageId::new(),
            pin_id,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pin(now: DateTime<Utc>) -> Pin {
        Pin::new(
            ReportId::new(),
            MemberId::new(),
            "Spotted near the river",
            now,
            "12 Riverside Walk",
            51.5007,
            -0.1246,
            now,
        )
        .expect("valid pin")
    }

    #[test]
    fn rejects_coordinates_outside_the_wgs84_range() {
        let now = Utc::now();
        let bad_latitude = Pin::new(
            ReportId::new(),
            MemberId::new(),
            "seen",
            now,
            "addr",
            123.0,
            -0.1246,
            now,
        );
        assert!(matches!(bad_latitude, Err(DomainError::Validation(_))));

        let bad_longitude = Pin::new(
            ReportId::new(),
            MemberId::new(),
            "seen",
            now,
            "addr",
            51.5,
            200.0,
            now,
        );
        assert!(matches!(bad_longitude, Err(DomainError::Validation(_))));
    }

    #[test]
    fn set_address_touches_only_address_and_updated_at() {
        let created = Utc::now();
        let mut pin = sample_pin(created);
        let before = pin.clone();

        let later = created + chrono::Duration::minutes(5);
        pin.set_address("3 Harbour Lane", later);

        assert_eq!(pin.address, "3 Harbour Lane");
        assert_eq!(pin.updated_at, later);
        assert_eq!(pin.description, before.description);
        assert_eq!(pin.found_at, before.found_at);
        assert_eq!(pin.latitude, before.latitude);
        assert_eq!(pin.longitude, before.longitude);
        assert_eq!(pin.report_id, before.report_id);
        assert_eq!(pin.member_id, before.member_id);
    }

    #[test]
    fn set_description_and_found_at_leave_address_alone() {
        let created = Utc::now();
        let mut pin = sample_pin(created);
        let address = pin.address.clone();

        let sighting = created - chrono::Duration::hours(2);
        let later = created + chrono::Duration::minutes(1);
        pin.set_description("Actually a fox", later);
        pin.set_found_at(sighting, later);

        assert_eq!(pin.description, "Actually a fox");
        assert_eq!(pin.found_at, sighting);
        assert_eq!(pin.address, address);
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let now = Utc::now();
        let pin = sample_pin(now);
        let json = serde_json::to_value(&pin).expect("serialize");
        assert!(json.get("reportId").is_some());
        assert!(json.get("foundAt").is_some());
        assert!(json.get("report_id").is_none());
    }
}
