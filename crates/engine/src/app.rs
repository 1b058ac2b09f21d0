//! Application state and composition.

use std::sync::Arc;

use crate::entities;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::ports::{
    ClockPort, MemberRepo, PinImageRepo, PinRepo, ReportRepo, TxPort, UploadPort,
};
use crate::use_cases::{PinLifecycle, PinValidator};

/// Ports the outer layer must provide to assemble the engine.
pub struct Ports {
    pub report_repo: Arc<dyn ReportRepo>,
    pub member_repo: Arc<dyn MemberRepo>,
    pub pin_repo: Arc<dyn PinRepo>,
    pub pin_image_repo: Arc<dyn PinImageRepo>,
    pub upload: Arc<dyn UploadPort>,
    pub tx: Arc<dyn TxPort>,
}

/// Main application state.
///
/// Holds the pin lifecycle service fully wired. The transport layer keeps
/// one of these and routes every request through `pins`.
pub struct App {
    pub pins: Arc<PinLifecycle>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(ports: Ports) -> Self {
        Self::with_clock(ports, Arc::new(SystemClock::new()))
    }

    /// Same as [`App::new`] but with an injected clock, for tests.
    pub fn with_clock(ports: Ports, clock: Arc<dyn ClockPort>) -> Self {
        let report = Arc::new(entities::Report::new(ports.report_repo));
        let member = Arc::new(entities::Member::new(ports.member_repo));
        let pin = Arc::new(entities::Pin::new(ports.pin_repo, ports.pin_image_repo));

        let validator = Arc::new(PinValidator::new(report, member, Arc::clone(&pin)));
        let pins = Arc::new(PinLifecycle::new(
            validator,
            pin,
            ports.upload,
            ports.tx,
            clock,
        ));

        Self { pins }
    }
}
