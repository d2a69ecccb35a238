//! Submission workflow state machine: user intent in, renderable phase out.

use std::sync::Arc;

use shared::{
    domain::ResumeDocument,
    error::{FailureInfo, FailureKind},
    protocol::AnalysisReport,
};
use tracing::{debug, warn};

use crate::analysis::AnalysisBackend;

const MISSING_RESUME_MESSAGE: &str = "Please upload a resume file.";
const MISSING_JOB_DESCRIPTION_MESSAGE: &str = "Please paste the job description.";

/// User intent delivered by the presentation layer. Modeling these as plain
/// values keeps the controller free of any UI-framework dependency.
#[derive(Debug, Clone)]
pub enum SubmissionEvent {
    ResumeSelected(ResumeDocument),
    JobDescriptionChanged(String),
}

/// Lifecycle stage of one submission attempt. A single tagged value carries
/// the report or failure, so at most one of the two can exist at any time and
/// both are gone the moment a new attempt starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No request outstanding. A rejected validation gate surfaces its
    /// failure here without a request ever being issued.
    Idle { rejection: Option<FailureInfo> },
    Validating,
    InFlight,
    Succeeded { report: AnalysisReport },
    Failed { failure: FailureInfo },
}

/// Inputs captured at submit time. Owned copies: edits made while the request
/// is in flight cannot affect what was dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedSubmission {
    pub resume: ResumeDocument,
    pub job_text: String,
}

/// Mediates user intent into one well-defined request per submit action and
/// exposes a result/failure view the presentation layer can render directly.
pub struct SubmissionController {
    backend: Arc<dyn AnalysisBackend>,
    resume: Option<ResumeDocument>,
    job_description: String,
    phase: Phase,
}

impl SubmissionController {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            resume: None,
            job_description: String::new(),
            phase: Phase::Idle { rejection: None },
        }
    }

    pub fn apply(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::ResumeSelected(document) => {
                debug!(file = %document.file_name, "resume selected");
                self.resume = Some(document);
            }
            SubmissionEvent::JobDescriptionChanged(text) => {
                self.job_description = text;
            }
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Latest successful report, if the last attempt succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Succeeded { report } => Some(report),
            _ => None,
        }
    }

    /// Latest surfaced failure: a validation rejection or a failed attempt.
    pub fn failure(&self) -> Option<&FailureInfo> {
        match &self.phase {
            Phase::Idle { rejection } => rejection.as_ref(),
            Phase::Failed { failure } => Some(failure),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight)
    }

    /// Runs one submission attempt to completion: validation gate, a single
    /// backend call, and the resulting phase transition.
    pub async fn submit(&mut self) -> &Phase {
        let Some(captured) = self.begin_submission() else {
            return &self.phase;
        };
        let outcome = self
            .backend
            .analyze(&captured.resume, &captured.job_text)
            .await;
        self.finish_submission(outcome);
        &self.phase
    }

    /// First half of a submission: clears any prior report/failure, runs the
    /// validation gate, and either enters `InFlight` with the captured inputs
    /// or lands back in `Idle` with the surfaced rejection. Returns `None`
    /// when no request must be issued.
    pub fn begin_submission(&mut self) -> Option<CapturedSubmission> {
        if self.is_in_flight() {
            // The presentation layer is expected to disable resubmission
            // while a request is outstanding; this guard covers callers that
            // don't.
            warn!("submit ignored: a request is already in flight");
            return None;
        }

        self.phase = Phase::Validating;
        match self.validate() {
            Ok(captured) => {
                self.phase = Phase::InFlight;
                Some(captured)
            }
            Err(rejection) => {
                debug!(%rejection, "submission rejected by validation gate");
                self.phase = Phase::Idle {
                    rejection: Some(rejection),
                };
                None
            }
        }
    }

    /// Second half of a submission: applies the classified backend outcome.
    pub fn finish_submission(&mut self, outcome: Result<AnalysisReport, FailureInfo>) {
        self.phase = match outcome {
            Ok(report) => Phase::Succeeded { report },
            Err(failure) => Phase::Failed { failure },
        };
    }

    /// Validation gate, evaluated synchronously before any I/O. The resume
    /// check is reported first, then the job-description check; only the
    /// first failing condition surfaces.
    fn validate(&self) -> Result<CapturedSubmission, FailureInfo> {
        let Some(resume) = self.resume.clone() else {
            return Err(FailureInfo::new(
                FailureKind::Validation,
                MISSING_RESUME_MESSAGE,
            ));
        };
        if self.job_description.trim().is_empty() {
            return Err(FailureInfo::new(
                FailureKind::Validation,
                MISSING_JOB_DESCRIPTION_MESSAGE,
            ));
        }
        // The gate trims for the emptiness check only; the dispatched payload
        // carries the text exactly as edited.
        Ok(CapturedSubmission {
            resume,
            job_text: self.job_description.clone(),
        })
    }
}
