//! Report entity operations.

use std::sync::Arc;

use sightline_domain::{self as domain, ReportId};

use crate::infrastructure::ports::{RepoError, ReportRepo};

/// Report entity operations. Read-only: the pin core never mutates a report.
pub struct Report {
    repo: Arc<dyn ReportRepo>,
}

impl Report {
    pub fn new(repo: Arc<dyn ReportRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: ReportId) -> Result<Option<domain::Report>, RepoError> {
        self.repo.get(id).await
    }
}
