//! Client for the remote grading service.

use crate::config::ClientConfig;
use crate::upload::UploadedFile;
use anyhow::Context;
use reqwest::blocking::{Client, multipart};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Multipart field the service reads the image from.
pub const FILE_FIELD: &str = "file";

/// Success payload of `POST /predict-image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub severity: String,
    /// Opaque model output; only logged.
    pub raw_prediction: serde_json::Value,
    /// Per-class probabilities. Shape varies by model build; only logged.
    #[serde(default)]
    pub probabilities: Option<serde_json::Value>,
    #[serde(default)]
    pub confidence_score: Option<f32>,
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("service answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid prediction payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("prediction worker failed to start: {0}")]
    Worker(std::io::Error),
}

/// Anything that can grade an uploaded image.
pub trait Predictor: Send + Sync {
    fn predict(&self, file: &UploadedFile) -> Result<PredictResponse, PredictError>;
}

/// Single-attempt multipart client. No retries; every failure is returned.
pub struct HttpPredictor {
    client: Client,
    url: Url,
}

impl HttpPredictor {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let url = config.predict_url()?;
        let client = Client::builder()
            .timeout(config.request_timeout_secs.map(Duration::from_secs))
            .build()
            .context("failed to build HTTP client")?;
        tracing::info!("prediction endpoint: {url}");
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn transport(&self, source: reqwest::Error) -> PredictError {
        PredictError::Transport {
            url: self.url.to_string(),
            source,
        }
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, file: &UploadedFile) -> Result<PredictResponse, PredictError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime)
            .map_err(|e| self.transport(e))?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        tracing::debug!(file = %file.name, bytes = file.bytes.len(), "posting image");
        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        let body = response.text().map_err(|e| self.transport(e))?;
        if !status.is_success() {
            return Err(PredictError::Status { status, body });
        }

        let parsed: PredictResponse = serde_json::from_str(&body)?;
        tracing::debug!(raw_prediction = %parsed.raw_prediction, "raw prediction");
        if let Some(probabilities) = &parsed.probabilities {
            tracing::debug!(%probabilities, "class probabilities");
        }
        tracing::debug!(severity = %parsed.severity, "severity");
        Ok(parsed)
    }
}
