//! In-memory persistence adapter.
//!
//! Implements every repository port plus transaction demarcation against a
//! single mutable state snapshot. `TxPort::begin` clones the state; rollback
//! restores the clone, commit discards it. Pin deletion cascades to the
//! pin's images here, honoring the storage-layer guarantee the `PinRepo`
//! contract states.
//!
//! This is the reference adapter used by integration tests. It performs no
//! cross-operation coordination: overlapping transactions from concurrent
//! callers resolve as last-write-wins, same as the storage model the engine
//! assumes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use sightline_domain::{Member, MemberId, Pin, PinId, PinImage, Report, ReportId};

use crate::infrastructure::ports::{
    MemberRepo, PinImageRepo, PinRepo, RepoError, ReportRepo, TxHandle, TxPort,
};

#[derive(Debug, Default, Clone)]
struct State {
    members: HashMap<MemberId, Member>,
    reports: HashMap<ReportId, Report>,
    // Vecs preserve insertion order, which is the only ordering the store
    // promises for listings
    pins: Vec<Pin>,
    images: Vec<PinImage>,
}

/// Shared in-memory store; cheap to clone, all clones see the same state.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, RepoError> {
        self.state
            .lock()
            .map_err(|_| RepoError::storage("lock", "state mutex poisoned"))
    }

    /// Seed a member. Test/setup helper; members are read-only to the engine.
    pub fn insert_member(&self, member: Member) -> Result<(), RepoError> {
        self.lock()?.members.insert(member.id, member);
        Ok(())
    }

    /// Seed a report. Test/setup helper; reports are read-only to the engine.
    pub fn insert_report(&self, report: Report) -> Result<(), RepoError> {
        self.lock()?.reports.insert(report.id, report);
        Ok(())
    }

    /// Number of image rows currently stored, across all pins.
    pub fn image_count(&self) -> Result<usize, RepoError> {
        Ok(self.lock()?.images.len())
    }
}

#[async_trait]
impl ReportRepo for MemoryStore {
    async fn get(&self, id: ReportId) -> Result<Option<Report>, RepoError> {
        Ok(self.lock()?.reports.get(&id).cloned())
    }
}

#[async_trait]
impl MemberRepo for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, RepoError> {
        Ok(self
            .lock()?
            .members
            .values()
            .find(|m| m.email == email)
            .cloned())
    }
}

#[async_trait]
impl PinRepo for MemoryStore {
    async fn get(&self, id: PinId) -> Result<Option<Pin>, RepoError> {
        Ok(self.lock()?.pins.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, pin: &Pin) -> Result<(), RepoError> {
        let mut state = self.lock()?;
        match state.pins.iter_mut().find(|p| p.id == pin.id) {
            Some(existing) => *existing = pin.clone(),
            None => state.pins.push(pin.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: PinId) -> Result<(), RepoError> {
        let mut state = self.lock()?;
        let before = state.pins.len();
        state.pins.retain(|p| p.id != id);
        if state.pins.len() == before {
            return Err(RepoError::not_found("Pin", id));
        }
        // Cascade: a deleted pin leaves no image rows behind
        state.images.retain(|img| img.pin_id != id);
        Ok(())
    }

    async fn list_for_report(&self, report_id: ReportId) -> Result<Vec<Pin>, RepoError> {
        Ok(self
            .lock()?
            .pins
            .iter()
            .filter(|p| p.report_id == report_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PinImageRepo for MemoryStore {
    async fn save_all(&self, images: &[PinImage]) -> Result<(), RepoError> {
        self.lock()?.images.extend_from_slice(images);
        Ok(())
    }

    async fn list_for_pin(&self, pin_id: PinId) -> Result<Vec<PinImage>, RepoError> {
        Ok(self
            .lock()?
            .images
            .iter()
            .filter(|img| img.pin_id == pin_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TxPort for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn TxHandle>, RepoError> {
        let snapshot = self.lock()?.clone();
        Ok(Box::new(MemoryTx {
            state: Arc::clone(&self.state),
            snapshot,
        }))
    }
}

struct MemoryTx {
    state: Arc<Mutex<State>>,
    snapshot: State,
}

#[async_trait]
impl TxHandle for MemoryTx {
    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        // Writes went straight to the shared state; nothing left to apply
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| RepoError::storage("rollback", "state mutex poisoned"))?;
        *state = self.snapshot;
        Ok(())
    }
}
