//! Resolution and authorization for pin operations.
//!
//! Every operation resolves its targets here, so the "does this caller own
//! this pin" check exists exactly once and the failure taxonomy (NotFound
//! vs Forbidden) is the same no matter which operation triggered it.

use std::sync::Arc;

use sightline_domain::{self as domain, PinId, ReportId};

use super::PinError;
use crate::entities;
use crate::infrastructure::ports::RepoError;

/// Resolves entity references and authorizes mutations.
pub struct PinValidator {
    report: Arc<entities::Report>,
    member: Arc<entities::Member>,
    pin: Arc<entities::Pin>,
}

impl PinValidator {
    pub fn new(
        report: Arc<entities::Report>,
        member: Arc<entities::Member>,
        pin: Arc<entities::Pin>,
    ) -> Self {
        Self {
            report,
            member,
            pin,
        }
    }

    pub async fn resolve_report(&self, id: ReportId) -> Result<domain::Report, PinError> {
        self.report.get(id).await?.ok_or(PinError::ReportNotFound)
    }

    pub async fn resolve_member(&self, email: &str) -> Result<domain::Member, PinError> {
        self.member
            .find_by_email(email)
            .await?
            .ok_or(PinError::MemberNotFound)
    }

    pub async fn resolve_pin(&self, id: PinId) -> Result<domain::Pin, PinError> {
        self.pin.get(id).await?.ok_or(PinError::PinNotFound)
    }

    /// Resolve a pin for update or delete: the caller must own the pin's
    /// parent report. Always invoked before any mutation is attempted;
    /// authorization and mutation are never interleaved.
    pub async fn resolve_owned_pin_for_mutation(
        &self,
        caller_email: &str,
        pin_id: PinId,
    ) -> Result<domain::Pin, PinError> {
        let pin = self.resolve_pin(pin_id).await?;
        let caller = self.resolve_member(caller_email).await?;

        // An existing pin with no parent report is an integrity breach in
        // the store, not a client error
        let report = self.report.get(pin.report_id).await?.ok_or_else(|| {
            PinError::Repo(RepoError::constraint(format!(
                "pin {} references missing report {}",
                pin.id, pin.report_id
            )))
        })?;

        if report.owner_id != caller.id {
            return Err(PinError::Forbidden);
        }
        Ok(pin)
    }

    /// All images owned by the pin, in insertion order.
    pub async fn list_images_for_pin(
        &self,
        pin_id: PinId,
    ) -> Result<Vec<domain::PinImage>, PinError> {
        Ok(self.pin.list_images(pin_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use sightline_domain::{Member, Pin, PinId, PinImage, Report};

    use super::PinValidator;
    use crate::entities;
    use crate::infrastructure::ports::{
        MockMemberRepo, MockPinImageRepo, MockPinRepo, MockReportRepo,
    };
    use crate::use_cases::pin::PinError;

    fn validator(
        report_repo: MockReportRepo,
        member_repo: MockMemberRepo,
        pin_repo: MockPinRepo,
        image_repo: MockPinImageRepo,
    ) -> PinValidator {
        PinValidator::new(
            Arc::new(entities::Report::new(Arc::new(report_repo))),
            Arc::new(entities::Member::new(Arc::new(member_repo))),
            Arc::new(entities::Pin::new(Arc::new(pin_repo), Arc::new(image_repo))),
        )
    }

    fn fixture() -> (Member, Member, Report, Pin) {
        let now = Utc::now();
        let owner = Member::new("owner@x.com", "Owner", now);
        let stranger = Member::new("stranger@x.com", "Stranger", now);
        let report = Report::new(owner.id, "Lost dog", "Rex", now);
        let pin = Pin::new(
            report.id,
            owner.id,
            "Seen by the park gates",
            now,
            "Park Gates",
            51.53,
            -0.15,
            now,
        )
        .expect("valid pin");
        (owner, stranger, report, pin)
    }

    #[tokio::test]
    async fn owner_resolves_pin_for_mutation() {
        let (owner, _, report, pin) = fixture();
        let pin_id = pin.id;

        let mut report_repo = MockReportRepo::new();
        let report_for_get = report.clone();
        report_repo
            .expect_get()
            .withf(move |id| *id == report.id)
            .returning(move |_| Ok(Some(report_for_get.clone())));

        let mut member_repo = MockMemberRepo::new();
        let owner_for_find = owner.clone();
        member_repo
            .expect_find_by_email()
            .withf(|email| email == "owner@x.com")
            .returning(move |_| Ok(Some(owner_for_find.clone())));

        let mut pin_repo = MockPinRepo::new();
        let pin_for_get = pin.clone();
        pin_repo
            .expect_get()
            .withf(move |id| *id == pin_id)
            .returning(move |_| Ok(Some(pin_for_get.clone())));

        let validator = validator(report_repo, member_repo, pin_repo, MockPinImageRepo::new());
        let resolved = validator
            .resolve_owned_pin_for_mutation("owner@x.com", pin_id)
            .await
            .expect("owner should pass");
        assert_eq!(resolved.id, pin_id);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden() {
        let (_, stranger, report, pin) = fixture();
        let pin_id = pin.id;

        let mut report_repo = MockReportRepo::new();
        let report_for_get = report.clone();
        report_repo
            .expect_get()
            .returning(move |_| Ok(Some(report_for_get.clone())));

        let mut member_repo = MockMemberRepo::new();
        let stranger_for_find = stranger.clone();
        member_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(stranger_for_find.clone())));

        let mut pin_repo = MockPinRepo::new();
        let pin_for_get = pin.clone();
        pin_repo
            .expect_get()
            .returning(move |_| Ok(Some(pin_for_get.clone())));

        let validator = validator(report_repo, member_repo, pin_repo, MockPinImageRepo::new());
        let err = validator
            .resolve_owned_pin_for_mutation("stranger@x.com", pin_id)
            .await
            .expect_err("stranger must not pass");
        assert!(matches!(err, PinError::Forbidden));
    }

    #[tokio::test]
    async fn missing_pin_is_not_found_before_any_member_lookup() {
        let mut pin_repo = MockPinRepo::new();
        pin_repo.expect_get().returning(|_| Ok(None));

        // No expectations on the member or report repos: resolution order
        // means they are never consulted for a missing pin
        let validator = validator(
            MockReportRepo::new(),
            MockMemberRepo::new(),
            pin_repo,
            MockPinImageRepo::new(),
        );
        let err = validator
            .resolve_owned_pin_for_mutation("owner@x.com", PinId::new())
            .await
            .expect_err("missing pin");
        assert!(matches!(err, PinError::PinNotFound));
    }

    #[tokio::test]
    async fn unknown_caller_is_member_not_found() {
        let (_, _, _, pin) = fixture();

        let mut pin_repo = MockPinRepo::new();
        let pin_for_get = pin.clone();
        pin_repo
            .expect_get()
            .returning(move |_| Ok(Some(pin_for_get.clone())));

        let mut member_repo = MockMemberRepo::new();
        member_repo.expect_find_by_email().returning(|_| Ok(None));

        let validator = validator(
            MockReportRepo::new(),
            member_repo,
            pin_repo,
            MockPinImageRepo::new(),
        );
        let err = validator
            .resolve_owned_pin_for_mutation("ghost@x.com", pin.id)
            .await
            .expect_err("unknown caller");
        assert!(matches!(err, PinError::MemberNotFound));
    }

    #[tokio::test]
    async fn pin_with_missing_parent_report_is_an_integrity_error() {
        let (owner, _, _, pin) = fixture();

        let mut pin_repo = MockPinRepo::new();
        let pin_for_get = pin.clone();
        pin_repo
            .expect_get()
            .returning(move |_| Ok(Some(pin_for_get.clone())));

        let mut member_repo = MockMemberRepo::new();
        let owner_for_find = owner.clone();
        member_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(owner_for_find.clone())));

        let mut report_repo = MockReportRepo::new();
        report_repo.expect_get().returning(|_| Ok(None));

        let validator = validator(report_repo, member_repo, pin_repo, MockPinImageRepo::new());
        let err = validator
            .resolve_owned_pin_for_mutation("owner@x.com", pin.id)
            .await
            .expect_err("dangling report reference");
        assert!(matches!(err, PinError::Repo(_)));
    }

    #[tokio::test]
    async fn image_listing_preserves_insertion_order() {
        let pin_id = PinId::new();
        let first = PinImage::new(pin_id, "https://cdn/u1");
        let second = PinImage::new(pin_id, "https://cdn/u2");

        let mut image_repo = MockPinImageRepo::new();
        let images = vec![first.clone(), second.clone()];
        image_repo
            .expect_list_for_pin()
            .withf(move |id| *id == pin_id)
            .returning(move |_| Ok(images.clone()));

        let validator = validator(
            MockReportRepo::new(),
            MockMemberRepo::new(),
            MockPinRepo::new(),
            image_repo,
        );
        let listed = validator
            .list_images_for_pin(pin_id)
            .await
            .expect("listing");
        assert_eq!(
            listed.iter().map(|i| i.image_url.as_str()).collect::<Vec<_>>(),
            vec!["https://cdn/u1", "https://cdn/u2"]
        );
    }
}
