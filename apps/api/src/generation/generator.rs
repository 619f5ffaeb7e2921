//! Cover Letter Generation: orchestrates the local and remote paths.
//!
//! Local flow: extract_keywords → classify_domain → select_bullets → render_letter.
//! Remote flow: one writer call bounded by a timeout. Any failure falls back to the
//! identical local flow; remote failures are logged and never reach the caller.

use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::bullets::{select_bullets, SelectionOptions};
use crate::generation::domain::classify_domain;
use crate::generation::keywords::extract_keywords;
use crate::generation::letter::{render_letter, LetterInput};
use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::{CoverLetterWriter, LlmError};
use crate::models::resume::Resume;

/// Job descriptions shorter than this (in characters) are rejected.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 20;

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Letter date format, e.g. "19 October 2026".
const DATE_FORMAT: &str = "%d %B %Y";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for cover letter generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub resume: Resume,
    pub job_description: String,
    pub role: String,
    pub company: String,
    /// Remote path only.
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Remote path only.
    #[serde(default = "default_length")]
    pub length: String,
}

fn default_tone() -> String {
    "concise, confident".to_string()
}

fn default_length() -> String {
    "short".to_string()
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let len = self.job_description.chars().count();
        if len < MIN_JOB_DESCRIPTION_CHARS {
            return Err(AppError::Validation(format!(
                "job_description must be at least {MIN_JOB_DESCRIPTION_CHARS} characters (got {len})"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Local,
    Llm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub cover_letter: String,
    pub mode: GenerationMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub selection: SelectionOptions,
    pub remote_timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            selection: SelectionOptions::default(),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

/// Today's date formatted for the letter header, in local time.
pub fn today_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Local path
// ────────────────────────────────────────────────────────────────────────────

/// Renders a cover letter without any network call.
///
/// Deterministic: the date is injected, so equal inputs give byte-identical output.
pub fn generate_local(
    resume: &Resume,
    company: &str,
    role: &str,
    job_description: &str,
    options: &SelectionOptions,
    today: &str,
) -> String {
    let keywords = extract_keywords(job_description);
    let domain = classify_domain(&keywords, job_description);
    let bullets = select_bullets(resume, &keywords, options);

    debug!(
        "Local generation: {} keywords, domain={}, {} bullets selected",
        keywords.len(),
        domain,
        bullets.len()
    );

    render_letter(&LetterInput {
        resume,
        company,
        role,
        bullets: &bullets,
        domain,
        today,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Produces a cover letter, remotely when a writer is configured, locally otherwise.
///
/// Never fails: a remote error of any kind yields the local letter with `mode=local`.
pub async fn generate_cover_letter(
    writer: Option<&dyn CoverLetterWriter>,
    request: &GenerateRequest,
    options: &GenerationOptions,
    today: &str,
) -> GenerationResult {
    let Some(writer) = writer else {
        info!("Generating cover letter locally for role '{}'", request.role);
        return local_result(request, options, today);
    };

    info!("Generating cover letter via LLM for role '{}'", request.role);
    match write_remote(writer, request, options.remote_timeout).await {
        Ok(cover_letter) => GenerationResult {
            cover_letter,
            mode: GenerationMode::Llm,
        },
        Err(e) => {
            warn!("LLM path failed; falling back to local: {e}");
            local_result(request, options, today)
        }
    }
}

fn local_result(
    request: &GenerateRequest,
    options: &GenerationOptions,
    today: &str,
) -> GenerationResult {
    GenerationResult {
        cover_letter: generate_local(
            &request.resume,
            &request.company,
            &request.role,
            &request.job_description,
            &options.selection,
            today,
        ),
        mode: GenerationMode::Local,
    }
}

async fn write_remote(
    writer: &dyn CoverLetterWriter,
    request: &GenerateRequest,
    timeout: Duration,
) -> Result<String, LlmError> {
    let prompt = build_user_prompt(request)?;
    tokio::time::timeout(timeout, writer.write(COVER_LETTER_SYSTEM, &prompt))
        .await
        .map_err(|_| LlmError::Timeout(timeout))?
}

/// Fills the remote prompt template. The resume is embedded as JSON.
pub fn build_user_prompt(request: &GenerateRequest) -> Result<String, serde_json::Error> {
    let resume_json = serde_json::to_string(&request.resume)?;

    Ok(fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("{resume}", resume_json.as_str()),
            ("{jd}", request.job_description.as_str()),
            ("{role}", request.role.as_str()),
            ("{company}", request.company.as_str()),
            ("{tone}", request.tone.as_str()),
            ("{length}", request.length.as_str()),
        ],
    ))
}

/// Single-pass placeholder substitution, so user text that happens to contain
/// `{role}` or similar is never expanded.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        for (placeholder, value) in values {
            if let Some(tail) = rest.strip_prefix(placeholder) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
