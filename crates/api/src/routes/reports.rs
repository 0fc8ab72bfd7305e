//! Report generation routes.

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde_json::json;
use tracing::error;

use crate::AppState;
use finreport_core::report::{OutputFormat, ReportContent, ReportError, ReportOutput};
use finreport_shared::AppError;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", post(generate_report))
        .route("/templates", get(list_templates))
}

// ============================================================================
// Request parsing
// ============================================================================

/// Fields collected from the multipart request body.
#[derive(Default)]
struct GenerateRequest {
    file: Option<Bytes>,
    template: Option<String>,
    output: Option<String>,
    language: Option<String>,
}

impl GenerateRequest {
    /// Drains the multipart stream into the known fields; unknown fields are
    /// ignored.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, Response> {
        let mut request = Self::default();
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => return Err(validation_error(format!("invalid multipart body: {e}"))),
            };

            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };
            match name.as_str() {
                "file" => match field.bytes().await {
                    Ok(bytes) => request.file = Some(bytes),
                    Err(e) => {
                        return Err(validation_error(format!("failed to read file field: {e}")));
                    }
                },
                "template" | "output" | "language" => {
                    let value = match field.text().await {
                        Ok(text) => text,
                        Err(e) => {
                            return Err(validation_error(format!(
                                "failed to read {name} field: {e}"
                            )));
                        }
                    };
                    match name.as_str() {
                        "template" => request.template = Some(value),
                        "output" => request.output = Some(value),
                        _ => request.language = Some(value),
                    }
                }
                _ => {}
            }
        }
        Ok(request)
    }
}

// ============================================================================
// Route handlers
// ============================================================================

/// POST `/reports`
/// Generates a report from an uploaded statement file.
///
/// Multipart fields: `file` (raw statement JSON, required), `template`
/// (report name, required), `output` (HTML/CSV/PDF, required), `language`
/// (two-letter code, defaults to `en`).
async fn generate_report(State(state): State<AppState>, multipart: Multipart) -> Response {
    let request = match GenerateRequest::from_multipart(multipart).await {
        Ok(request) => request,
        Err(response) => return response,
    };

    let Some(file) = request.file else {
        return validation_error("missing required field: file");
    };
    let Some(template) = request.template else {
        return validation_error("missing required field: template");
    };
    let Some(output) = request.output else {
        return validation_error("missing required field: output");
    };
    let language = request.language.unwrap_or_else(|| "en".to_string());

    let format: OutputFormat = match output.parse() {
        Ok(format) => format,
        Err(e) => return error_response(e),
    };

    // The pipeline is synchronous (template rendering, browser conversion);
    // keep it off the async workers.
    let service = state.service.clone();
    let template_for_task = template.clone();
    let result = tokio::task::spawn_blocking(move || {
        service.generate(&file, &template_for_task, format, &language)
    })
    .await;

    match result {
        Ok(Ok(report)) => report_response(&template, format, report),
        Ok(Err(e)) => error_response(e),
        Err(e) => {
            error!(error = %e, "report generation task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "INTERNAL_ERROR",
                    "message": "report generation task failed"
                })),
            )
                .into_response()
        }
    }
}

/// GET `/templates`
/// Capability query: registered template names and the output formats each
/// supports.
async fn list_templates(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "templates": state.service.available_templates() }))
}

// ============================================================================
// Response building
// ============================================================================

/// Builds the success response. HTML is served inline; CSV and PDF are
/// offered as downloads named after the template.
fn report_response(template: &str, format: OutputFormat, report: ReportOutput) -> Response {
    let body = match report.content {
        ReportContent::Text(text) => Body::from(text),
        ReportContent::Binary(bytes) => Body::from(bytes),
    };

    let mut response = Response::new(body);
    match HeaderValue::from_str(&report.mime_type) {
        Ok(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        Err(e) => {
            error!(error = %e, "invalid content type");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "INTERNAL_ERROR",
                    "message": "invalid content type"
                })),
            )
                .into_response();
        }
    }

    if matches!(format, OutputFormat::Csv | OutputFormat::Pdf) {
        let filename = format!(
            "attachment; filename=\"{}-report.{}\"",
            template.replace(['"', '\\'], "_"),
            format.file_extension()
        );
        if let Ok(value) = HeaderValue::from_str(&filename) {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, value);
        }
    }

    response
}

/// Maps a pipeline error onto the API error envelope.
fn error_response(err: ReportError) -> Response {
    let message = err.to_string();
    let app_error: AppError = err.into();
    let status =
        StatusCode::from_u16(app_error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(error = %message, "report generation failed");
    }

    (
        status,
        Json(json!({
            "error": app_error.error_code(),
            "message": message
        })),
    )
        .into_response()
}

/// Shorthand for a 400 with a caller-facing message.
fn validation_error(message: impl Into<String>) -> Response {
    let message = message.into();
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "VALIDATION_ERROR",
            "message": message
        })),
    )
        .into_response()
}
