//! Member entity operations.

use std::sync::Arc;

use sightline_domain as domain;

use crate::infrastructure::ports::{MemberRepo, RepoError};

/// Member entity operations. Read-only: the pin core never mutates a member.
pub struct Member {
    repo: Arc<dyn MemberRepo>,
}

impl Member {
    pub fn new(repo: Arc<dyn MemberRepo>) -> Self {
        Self { repo }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<domain::Member>, RepoError> {
        self.repo.find_by_email(email).await
    }
}
