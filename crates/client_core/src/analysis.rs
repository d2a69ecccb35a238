//! Remote analysis call: multipart encoding, dispatch, outcome classification.

use async_trait::async_trait;
use reqwest::{multipart, Client};
use shared::{
    domain::ResumeDocument,
    error::{FailureInfo, FailureKind},
    protocol::{server_error_message, AnalysisReport},
};
use tracing::{debug, warn};

/// Fixed route on the analysis service.
const ANALYZE_PATH: &str = "/api/analyze_resume";

const NETWORK_MESSAGE: &str =
    "Could not reach the analysis service. Check your connection and try again.";
const SERVER_MESSAGE: &str = "The analysis service reported an error. Try again in a moment.";
const BAD_RESUME_MESSAGE: &str = "The selected resume file could not be attached.";

/// Seam between the submission workflow and the remote analysis service.
/// Implementations classify every outcome into a report or a [`FailureInfo`];
/// nothing propagates past this boundary.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(
        &self,
        resume: &ResumeDocument,
        job_text: &str,
    ) -> Result<AnalysisReport, FailureInfo>;
}

/// HTTP client for the analysis service. Performs exactly one POST per
/// `analyze` call; no retry, no timeout, no queueing.
pub struct AnalysisClient {
    http: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AnalysisBackend for AnalysisClient {
    async fn analyze(
        &self,
        resume: &ResumeDocument,
        job_text: &str,
    ) -> Result<AnalysisReport, FailureInfo> {
        let endpoint = format!("{}{ANALYZE_PATH}", self.base_url);
        debug!(%endpoint, file = %resume.file_name, "sending analysis request");

        let resume_part = multipart::Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(resume.mime_type())
            .map_err(|err| {
                FailureInfo::new(FailureKind::Validation, BAD_RESUME_MESSAGE)
                    .with_detail(err.to_string())
            })?;
        let form = multipart::Form::new()
            .part("resume", resume_part)
            .text("job_description", job_text.to_string());

        let response = match self.http.post(&endpoint).multipart(form).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("analysis request failed before a response arrived: {err}");
                return Err(
                    FailureInfo::new(FailureKind::Network, NETWORK_MESSAGE)
                        .with_detail(err.to_string()),
                );
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "analysis service returned an error status: {body}");
            let detail = match server_error_message(&body) {
                Some(message) => format!("{status}: {message}"),
                None if body.is_empty() => status.to_string(),
                None => format!("{status}: {body}"),
            };
            return Err(FailureInfo::new(FailureKind::Server, SERVER_MESSAGE).with_detail(detail));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!("analysis response body could not be read: {err}");
                return Err(
                    FailureInfo::new(FailureKind::Server, SERVER_MESSAGE)
                        .with_detail(err.to_string()),
                );
            }
        };

        // A success status is not taken at face value: the body must actually
        // be a report before it is handed to the controller.
        match serde_json::from_str::<AnalysisReport>(&body) {
            Ok(report) if report.score_in_range() => {
                debug!(match_score = report.match_score, "analysis response accepted");
                Ok(report)
            }
            Ok(report) => {
                warn!(match_score = report.match_score, "analysis response score out of range");
                Err(FailureInfo::new(FailureKind::Server, SERVER_MESSAGE)
                    .with_detail(format!("match_score {} outside 0-100", report.match_score)))
            }
            Err(err) => {
                warn!("analysis service returned a success status with a malformed body: {err}");
                Err(FailureInfo::new(FailureKind::Server, SERVER_MESSAGE)
                    .with_detail(format!("malformed success body: {err}")))
            }
        }
    }
}
