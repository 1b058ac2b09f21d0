//! Structured inputs for pin operations, as handed over by the transport
//! layer after request parsing.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::FilePayload;

/// Input for `create_pin`.
#[derive(Debug, Clone)]
pub struct CreatePinData {
    pub description: String,
    /// When the sighting happened
    pub found_at: DateTime<Utc>,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Raw uploads; may be empty
    pub files: Vec<FilePayload>,
}

/// Input for `update_pin_address`. Only the address moves.
#[derive(Debug, Clone)]
pub struct UpdatePinAddressData {
    pub address: String,
}

/// Input for `update_pin_details`. Only description and sighting time move;
/// never the address, never the coordinates.
#[derive(Debug, Clone)]
pub struct UpdatePinDetailsData {
    pub description: String,
    pub found_at: DateTime<Utc>,
}
