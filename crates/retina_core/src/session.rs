//! Upload session: the single state object the UI renders from.
//!
//! Every user action and every finished request is a method on [`Session`].
//! The session never touches the network itself; [`Session::submit`] hands
//! back a [`PredictRequest`] and the caller reports the outcome through
//! [`Session::complete`] with the same token. Only the most recently issued
//! token is honoured, so a response that arrives after a clear, a file swap or
//! a newer submit is dropped.

use crate::notify::{
    MSG_FAILED, MSG_NO_FILE, MSG_UNSUPPORTED, Notification, NotificationKind, Notifier,
    severity_message,
};
use crate::predict::{PredictError, PredictResponse};
use crate::report::{ReportEntry, visible_report};
use crate::severity::Diagnosis;
use crate::upload::{Upload, UploadError, UploadedFile};
use std::time::{Duration, Instant};

/// Identifies one submit. Tokens only ever increase within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Work the caller must run against a predictor.
#[derive(Debug, Clone)]
pub struct PredictRequest {
    pub token: RequestToken,
    pub file: UploadedFile,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing selected; the validation notification was raised.
    NoFile,
    /// A request for the current file is still pending.
    Busy(RequestToken),
    Dispatch(PredictRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied(Diagnosis),
    Failed,
    /// Token no longer current; state untouched.
    Stale,
}

pub struct Session<P> {
    upload: Option<Upload<P>>,
    diagnosis: Option<Diagnosis>,
    confidence: Option<f32>,
    report_visible: bool,
    drop_zone_active: bool,
    in_flight: Option<RequestToken>,
    last_token: u64,
    notifier: Notifier,
}

impl<P> Default for Session<P> {
    fn default() -> Self {
        Self {
            upload: None,
            diagnosis: None,
            confidence: None,
            report_visible: false,
            drop_zone_active: false,
            in_flight: None,
            last_token: 0,
            notifier: Notifier::default(),
        }
    }
}

impl<P> Session<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&self) -> Option<&Upload<P>> {
        self.upload.as_ref()
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.upload.as_ref().map(|u| &u.file)
    }

    pub fn preview(&self) -> Option<&P> {
        self.upload.as_ref().map(|u| &u.preview)
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    pub fn confidence(&self) -> Option<f32> {
        self.confidence
    }

    pub fn report_visible(&self) -> bool {
        self.report_visible
    }

    pub fn drop_zone_active(&self) -> bool {
        self.drop_zone_active
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn report(&self) -> Option<&'static ReportEntry> {
        visible_report(self.diagnosis.as_ref(), self.report_visible)
    }

    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notifier.current(now)
    }

    /// Expires the toast; returns the delay until the next expiry, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.notifier.tick(now);
        self.notifier.remaining(now)
    }

    /// Stores a newly picked or dropped file, releasing the previous preview.
    pub fn set_file(&mut self, file: UploadedFile, preview: P) {
        tracing::info!("selected {} ({} bytes, {})", file.name, file.bytes.len(), file.mime);
        self.upload = Some(Upload { file, preview });
        self.drop_zone_active = false;
        if let Some(token) = self.in_flight.take() {
            tracing::debug!(?token, "pending request superseded by new file");
        }
    }

    /// A selection that could not be used. Existing state is kept.
    pub fn reject_file(&mut self, err: &UploadError, now: Instant) {
        tracing::warn!("upload rejected: {err}");
        self.drop_zone_active = false;
        self.notifier.notify(NotificationKind::Error, MSG_UNSUPPORTED, now);
    }

    pub fn drag_hover(&mut self, active: bool) {
        self.drop_zone_active = active;
    }

    /// Resets file, preview, diagnosis and report visibility together.
    pub fn clear(&mut self) {
        self.upload = None;
        self.diagnosis = None;
        self.confidence = None;
        self.report_visible = false;
        if let Some(token) = self.in_flight.take() {
            tracing::debug!(?token, "pending request dropped by clear");
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let Some(upload) = &self.upload else {
            self.notifier.notify(NotificationKind::Error, MSG_NO_FILE, now);
            return SubmitOutcome::NoFile;
        };
        if let Some(token) = self.in_flight {
            return SubmitOutcome::Busy(token);
        }
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.in_flight = Some(token);
        tracing::info!(?token, "submitting {}", upload.file.name);
        SubmitOutcome::Dispatch(PredictRequest {
            token,
            file: upload.file.clone(),
        })
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<PredictResponse, PredictError>,
        now: Instant,
    ) -> Completion {
        if self.in_flight != Some(token) {
            tracing::debug!(?token, current = ?self.in_flight, "discarding stale response");
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(response) => {
                let diagnosis = Diagnosis::from_label(response.severity);
                let kind = if diagnosis.is_known() {
                    NotificationKind::Success
                } else {
                    tracing::warn!("no report for severity {:?}", diagnosis.label);
                    NotificationKind::Info
                };
                self.notifier.notify(kind, severity_message(&diagnosis.label), now);
                self.confidence = response.confidence_score;
                self.diagnosis = Some(diagnosis.clone());
                self.report_visible = true;
                Completion::Applied(diagnosis)
            }
            Err(err) => {
                tracing::error!("prediction failed: {err}");
                self.notifier.notify(NotificationKind::Error, MSG_FAILED, now);
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::upload::fixtures::PNG_HEADER;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Preview stand-in that records when it is released.
    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn png(name: &str) -> UploadedFile {
        UploadedFile::from_bytes(name, PNG_HEADER.to_vec()).unwrap()
    }

    fn ok(label: &str) -> Result<PredictResponse, PredictError> {
        Ok(PredictResponse {
            severity: label.to_string(),
            raw_prediction: serde_json::json!(3),
            probabilities: None,
            confidence_score: Some(0.8),
        })
    }

    fn failed() -> Result<PredictResponse, PredictError> {
        Err(PredictError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        })
    }

    fn dispatch<P>(session: &mut Session<P>, now: Instant) -> PredictRequest {
        match session.submit(now) {
            SubmitOutcome::Dispatch(req) => req,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn submit_without_file_notifies_and_issues_nothing() {
        let now = Instant::now();
        let mut s: Session<()> = Session::new();
        assert!(matches!(s.submit(now), SubmitOutcome::NoFile));
        assert!(!s.is_busy());
        let n = s.notification(now).unwrap();
        assert_eq!(n.message, "No file uploaded. Please upload a file.");
        assert_eq!(n.kind, NotificationKind::Error);
    }

    #[test]
    fn success_shows_report_and_severity_toast() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        let req = dispatch(&mut s, now);
        assert_eq!(req.file.name, "eye.png");
        assert!(s.is_busy());

        let done = s.complete(req.token, ok("Severe"), now);
        assert_eq!(done, Completion::Applied(Diagnosis::from_label("Severe")));
        assert!(!s.is_busy());
        assert!(s.report_visible());
        assert_eq!(s.diagnosis().and_then(|d| d.severity), Some(Severity::Severe));
        assert_eq!(s.confidence(), Some(0.8));
        assert_eq!(
            s.report().map(|r| r.overview),
            Some(crate::report::report_for(Severity::Severe).overview)
        );
        let n = s.notification(now).unwrap();
        assert_eq!(n.message, "Severity: Severe");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn failure_keeps_file_and_prior_diagnosis() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        let req = dispatch(&mut s, now);
        assert_eq!(s.complete(req.token, failed(), now), Completion::Failed);

        assert!(s.diagnosis().is_none());
        assert!(!s.report_visible());
        assert_eq!(s.file().map(|f| f.name.as_str()), Some("eye.png"));
        assert!(s.preview().is_some());
        assert_eq!(
            s.notification(now).unwrap().message,
            "Something went wrong. Please try again."
        );

        // retry without re-uploading, then fail again: earlier result survives
        let retry = dispatch(&mut s, now);
        s.complete(retry.token, ok("Mild"), now);
        let again = dispatch(&mut s, now);
        s.complete(again.token, failed(), now);
        assert_eq!(s.diagnosis().map(|d| d.label.as_str()), Some("Mild"));
        assert!(s.report_visible());
    }

    #[test]
    fn unknown_label_stores_diagnosis_without_report() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        let req = dispatch(&mut s, now);
        let done = s.complete(req.token, ok("Unknown"), now);
        assert!(matches!(done, Completion::Applied(ref d) if d.label == "Unknown"));
        assert!(s.report_visible());
        assert!(s.report().is_none());
        let n = s.notification(now).unwrap();
        assert_eq!(n.message, "Severity: Unknown");
        assert_eq!(n.kind, NotificationKind::Info);
    }

    #[test]
    fn clear_resets_everything_together_and_releases_preview() {
        let now = Instant::now();
        let released = Rc::new(Cell::new(0));
        let mut s = Session::new();
        s.set_file(png("eye.png"), Tracked(released.clone()));
        let req = dispatch(&mut s, now);
        s.complete(req.token, ok("Moderate"), now);

        s.clear();
        assert!(s.file().is_none());
        assert!(s.preview().is_none());
        assert!(s.diagnosis().is_none());
        assert!(!s.report_visible());
        assert_eq!(s.confidence(), None);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn replacing_file_releases_old_preview() {
        let released = Rc::new(Cell::new(0));
        let mut s = Session::new();
        s.set_file(png("a.png"), Tracked(released.clone()));
        s.set_file(png("b.png"), Tracked(released.clone()));
        assert_eq!(released.get(), 1);
        assert_eq!(s.file().map(|f| f.name.as_str()), Some("b.png"));
        drop(s);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn response_after_clear_is_discarded() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        let req = dispatch(&mut s, now);
        s.clear();
        assert_eq!(s.complete(req.token, ok("Severe"), now), Completion::Stale);
        assert!(s.diagnosis().is_none());
        assert!(!s.report_visible());
        assert!(s.notification(now).is_none());
    }

    #[test]
    fn response_for_replaced_file_is_discarded() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("old.png"), ());
        let old = dispatch(&mut s, now);
        s.set_file(png("new.png"), ());
        let new = dispatch(&mut s, now);
        assert!(new.token > old.token);

        assert_eq!(s.complete(old.token, ok("Mild"), now), Completion::Stale);
        assert!(s.is_busy());
        s.complete(new.token, ok("Proliferative"), now);
        assert_eq!(s.diagnosis().map(|d| d.label.as_str()), Some("Proliferative"));
    }

    #[test]
    fn second_submit_while_pending_is_busy() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        let req = dispatch(&mut s, now);
        assert!(matches!(s.submit(now), SubmitOutcome::Busy(t) if t == req.token));
    }

    #[test]
    fn rejected_file_keeps_current_upload() {
        let now = Instant::now();
        let mut s = Session::new();
        s.set_file(png("eye.png"), ());
        s.drag_hover(true);
        let err = UploadedFile::from_bytes("notes.txt", b"text".to_vec()).unwrap_err();
        s.reject_file(&err, now);
        assert!(!s.drop_zone_active());
        assert_eq!(s.file().map(|f| f.name.as_str()), Some("eye.png"));
        assert_eq!(
            s.notification(now).unwrap().message,
            "Unsupported file. Please upload an image."
        );
    }

    #[test]
    fn drop_zone_flag_is_presentation_only() {
        let mut s: Session<()> = Session::new();
        s.drag_hover(true);
        assert!(s.drop_zone_active());
        assert!(s.file().is_none());
        s.drag_hover(false);
        assert!(!s.drop_zone_active());
    }

    #[test]
    fn tick_hides_toast_after_five_seconds() {
        let now = Instant::now();
        let mut s: Session<()> = Session::new();
        s.submit(now);
        assert_eq!(s.tick(now), Some(Duration::from_secs(5)));
        assert_eq!(s.tick(now + Duration::from_secs(5)), None);
        assert!(s.notification(now + Duration::from_secs(5)).is_none());
    }
}
