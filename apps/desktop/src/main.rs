use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_settings, AnalysisClient, Phase, SubmissionController, SubmissionEvent};
use shared::domain::{ResumeDocument, ACCEPTED_RESUME_EXTENSIONS};

/// Submit a resume and a job description to the analysis service and print
/// the match assessment.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the resume document (.pdf, .doc, .docx).
    #[arg(long)]
    resume: PathBuf,
    /// Job description text; use --job-description-file for longer postings.
    #[arg(long, conflicts_with = "job_description_file")]
    job_description: Option<String>,
    /// File containing the job description text.
    #[arg(long)]
    job_description_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let settings = load_settings();
    tracing::debug!(api_base_url = %settings.api_base_url, "resolved analysis service");
    let backend = Arc::new(AnalysisClient::new(settings.api_base_url));
    let mut controller = SubmissionController::new(backend);

    let file_name = args
        .resume
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume")
        .to_string();
    let bytes = fs::read(&args.resume)
        .with_context(|| format!("failed to read resume {}", args.resume.display()))?;
    let document = ResumeDocument::new(file_name, bytes);
    if !document
        .extension()
        .is_some_and(|ext| ACCEPTED_RESUME_EXTENSIONS.contains(&ext.as_str()))
    {
        // Same advisory filter a file picker would apply; the service decides.
        tracing::warn!(file = %document.file_name, "resume is not a .pdf, .doc, or .docx file");
    }
    controller.apply(SubmissionEvent::ResumeSelected(document));

    let job_text = match (args.job_description, args.job_description_file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read job description {}", path.display()))?,
        // Left empty so the controller surfaces its own validation message.
        (None, None) => String::new(),
    };
    controller.apply(SubmissionEvent::JobDescriptionChanged(job_text));

    match controller.submit().await {
        Phase::Succeeded { report } => {
            println!("Match score: {:.0}%", report.match_score);
            println!("Summary: {}", report.summary);
            if report.missing_keywords.is_empty() {
                println!("Missing keywords: none");
            } else {
                println!("Missing keywords: {}", report.missing_keywords.join(", "));
            }
            Ok(())
        }
        Phase::Failed { failure } | Phase::Idle {
            rejection: Some(failure),
        } => {
            eprintln!("{}", failure.message);
            if let Some(detail) = &failure.detail {
                tracing::info!(%detail, "failure detail");
            }
            std::process::exit(1);
        }
        phase => anyhow::bail!("submission ended in unexpected phase {phase:?}"),
    }
}
