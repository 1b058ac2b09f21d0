//! Result projections returned to the transport layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sightline_domain::{MemberId, Pin, PinId, PinImage, ReportId};

/// Full pin projection, without images.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRecord {
    pub id: PinId,
    pub report_id: ReportId,
    pub member_id: MemberId,
    pub description: String,
    pub found_at: DateTime<Utc>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pin> for PinRecord {
    fn from(pin: Pin) -> Self {
        Self {
            id: pin.id,
            report_id: pin.report_id,
            member_id: pin.member_id,
            description: pin.description,
            found_at: pin.found_at,
            address: pin.address,
            latitude: pin.latitude,
            longitude: pin.longitude,
            created_at: pin.created_at,
            updated_at: pin.updated_at,
        }
    }
}

/// Pin plus its image URLs, in insertion (upload) order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDetail {
    #[serde(flatten)]
    pub pin: PinRecord,
    pub image_urls: Vec<String>,
}

impl PinDetail {
    pub fn from_parts(pin: Pin, images: Vec<PinImage>) -> Self {
        Self {
            pin: pin.into(),
            image_urls: images.into_iter().map(|img| img.image_url).collect(),
        }
    }
}

/// List entry for `get_pin_list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinSummary {
    pub id: PinId,
    pub description: String,
    pub found_at: DateTime<Utc>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Pin> for PinSummary {
    fn from(pin: Pin) -> Self {
        Self {
            id: pin.id,
            description: pin.description,
            found_at: pin.found_at,
            address: pin.address,
            latitude: pin.latitude,
            longitude: pin.longitude,
            created_at: pin.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sightline_domain::{MemberId, Pin, PinImage, ReportId};

    use super::PinDetail;

    #[test]
    fn detail_serializes_flat_with_camel_case_keys() {
        let now = Utc::now();
        let pin = Pin::new(
            ReportId::new(),
            MemberId::new(),
            "seen",
            now,
            "addr",
            1.0,
            2.0,
            now,
        )
        .expect("valid pin");
        let detail = PinDetail::from_parts(
            pin.clone(),
            vec![PinImage::new(pin.id, "https://cdn/u1")],
        );

        let json = serde_json::to_value(&detail).expect("serialize");
        // flattened pin fields sit next to imageUrls
        assert_eq!(json["reportId"], pin.report_id.to_string());
        assert_eq!(json["imageUrls"][0], "https://cdn/u1");
        assert!(json.get("pin").is_none());
    }
}
