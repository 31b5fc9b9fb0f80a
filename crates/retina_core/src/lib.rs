//! Client-side core for grading retinal scans against a remote model service.
//!
//! The GUI owns a [`Session`] and a [`PredictionWorker`]; everything it shows
//! is read back from the session.

pub mod config;
pub mod notify;
pub mod predict;
pub mod report;
pub mod session;
pub mod severity;
pub mod upload;
pub mod worker;

pub use config::ClientConfig;
pub use notify::{Notification, NotificationKind};
pub use predict::{HttpPredictor, PredictError, PredictResponse, Predictor};
pub use report::{ReportEntry, report_for};
pub use session::{Completion, PredictRequest, RequestToken, Session, SubmitOutcome};
pub use severity::{Diagnosis, Severity};
pub use upload::{Upload, UploadError, UploadedFile};
pub use worker::{Finished, PredictionWorker};
