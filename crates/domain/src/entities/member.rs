//! Member entity - an authenticated actor.
//!
//! Members are resolved by the (excluded) authentication collaborator and
//! surfaced to this core by email. The pin core only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MemberId;

/// An authenticated actor, identified by a stable unique email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    /// Stable unique identifier surfaced by the auth layer
    pub email: String,
    /// Display name
    pub nickname: String,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MemberId::new(),
            email: email.into(),
            nickname: nickname.into(),
            joined_at: now,
        }
    }
}
