//! Report entity - the parent case a pin attaches to.
//!
//! A report is a lost-pet case filed and owned by exactly one member.
//! Ownership of a pin, for authorization purposes, is derived transitively
//! through this owner. The pin core references reports but never mutates
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{MemberId, ReportId};

/// A lost-pet case, owned by exactly one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    /// The member who filed the case; mutation of its pins is gated on them
    pub owner_id: MemberId,
    pub title: String,
    /// Name of the missing pet
    pub pet_name: String,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        owner_id: MemberId,
        title: impl Into<String>,
        pet_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReportId::new(),
            owner_id,
            title: title.into(),
            pet_name: pet_name.into(),
            created_at: now,
        }
    }
}
