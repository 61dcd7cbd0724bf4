use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind, UploadedDocument};
use crate::ranking::report::{self, RankedResume, CSV_EXPORT_FILENAME, TEXT_EXPORT_FILENAME};
use crate::ranking::Ranker;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    /// When true, the response's best match carries its extracted text.
    #[serde(default)]
    pub include_preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    /// Parses the `format` query parameter; an absent parameter means CSV.
    /// An unrecognized value is a validation error, reported through the
    /// JSON error envelope like every other 4xx.
    fn from_param(param: Option<&str>) -> Result<ExportFormat, AppError> {
        match param {
            None | Some("csv") => Ok(ExportFormat::Csv),
            Some("text") => Ok(ExportFormat::Text),
            Some(other) => Err(AppError::Validation(format!(
                "unknown export format '{other}' (expected 'csv' or 'text')"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// A per-file extraction failure. Never fatal: the file still participates
/// in the ranking with empty text.
#[derive(Debug, Serialize)]
pub struct RankingWarning {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BestMatch {
    pub resume: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Sorted by score descending; equal scores keep upload order.
    pub results: Vec<RankedResume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_match: Option<BestMatch>,
    pub warnings: Vec<RankingWarning>,
}

/// One parsed ranking request: the job description plus the uploaded
/// resumes, in upload order.
struct RankingBatch {
    job_description: String,
    documents: Vec<UploadedDocument>,
}

async fn read_batch(multipart: &mut Multipart) -> Result<RankingBatch, AppError> {
    let mut job_description: Option<String> = None;
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let part_name = field.name().map(str::to_string);
        if part_name.as_deref() == Some("job_description") {
            job_description = Some(field.text().await?);
            continue;
        }

        let name = field.file_name().map(str::to_string).ok_or_else(|| {
            AppError::Validation("file part is missing a filename".to_string())
        })?;
        let content_type = field.content_type().map(str::to_string);
        let kind = DocumentKind::from_upload(content_type.as_deref(), &name).ok_or_else(|| {
            AppError::UnsupportedMediaType(format!(
                "{name}: only PDF and DOCX resumes are accepted"
            ))
        })?;
        let bytes = field.bytes().await?;
        documents.push(UploadedDocument { name, bytes, kind });
    }

    let job_description = job_description.ok_or_else(|| {
        AppError::Validation("missing job_description part".to_string())
    })?;

    Ok(RankingBatch {
        job_description,
        documents,
    })
}

/// Extracts every document's text, masking failures as empty text plus a
/// warning so each upload still receives exactly one score.
fn extract_all(
    request_id: Uuid,
    documents: &[UploadedDocument],
) -> (Vec<String>, Vec<RankingWarning>) {
    let mut texts = Vec::with_capacity(documents.len());
    let mut warnings = Vec::new();

    for doc in documents {
        match extract_text(&doc.bytes, doc.kind) {
            Ok(text) => texts.push(text),
            Err(e) => {
                warn!(%request_id, file = %doc.name, "extraction failed: {e}");
                warnings.push(RankingWarning {
                    file: doc.name.clone(),
                    message: e.to_string(),
                });
                texts.push(String::new());
            }
        }
    }

    (texts, warnings)
}

async fn rank_batch(
    state: &AppState,
    request_id: Uuid,
    batch: &RankingBatch,
) -> Result<(Vec<RankedResume>, Vec<String>, Vec<RankingWarning>), AppError> {
    let (texts, warnings) = extract_all(request_id, &batch.documents);
    let scores = state.ranker.rank(&batch.job_description, &texts).await?;
    let names = batch.documents.iter().map(|d| d.name.clone()).collect();
    let results = report::assemble(names, scores);

    info!(
        %request_id,
        resumes = results.len(),
        warnings = warnings.len(),
        "ranked resume batch"
    );

    Ok((results, texts, warnings))
}

/// POST /api/v1/rankings
///
/// Multipart body: one `job_description` text part (required, may be empty)
/// plus any number of PDF/DOCX file parts.
pub async fn handle_rank(
    State(state): State<AppState>,
    Query(params): Query<RankQuery>,
    mut multipart: Multipart,
) -> Result<Json<RankingResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let batch = read_batch(&mut multipart).await?;
    let (results, texts, warnings) = rank_batch(&state, request_id, &batch).await?;

    let best_match = results.first().map(|best| {
        let text = params.include_preview.then(|| {
            // texts are index-aligned with the uploaded documents
            batch
                .documents
                .iter()
                .position(|d| d.name == best.resume)
                .map(|i| texts[i].clone())
                .unwrap_or_default()
        });
        BestMatch {
            resume: best.resume.clone(),
            score: best.score,
            text,
        }
    });

    Ok(Json(RankingResponse {
        request_id,
        generated_at: Utc::now(),
        results,
        best_match,
        warnings,
    }))
}

/// POST /api/v1/rankings/export?format=csv|text
///
/// Same multipart body as the ranking endpoint; responds with the rendered
/// export as a download. Nothing persists between requests, so the export
/// recomputes the ranking from the uploaded files.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let format = ExportFormat::from_param(params.format.as_deref())?;
    let request_id = Uuid::new_v4();
    let batch = read_batch(&mut multipart).await?;
    let (results, _texts, _warnings) = rank_batch(&state, request_id, &batch).await?;

    let (content_type, filename, body) = match format {
        ExportFormat::Csv => ("text/csv; charset=utf-8", CSV_EXPORT_FILENAME, report::to_csv(&results)),
        ExportFormat::Text => (
            "text/plain; charset=utf-8",
            TEXT_EXPORT_FILENAME,
            report::to_text(&results),
        ),
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}
