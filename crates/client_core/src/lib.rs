//! Client-side core of the resume analysis workflow: the submission state
//! machine and the HTTP client for the remote analysis service. Presentation
//! layers feed user intent in as [`SubmissionEvent`] values and render the
//! resulting [`Phase`].

pub mod analysis;
pub mod config;
pub mod controller;

pub use analysis::{AnalysisBackend, AnalysisClient};
pub use config::{load_settings, Settings};
pub use controller::{Phase, SubmissionController, SubmissionEvent};
