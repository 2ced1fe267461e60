//! HTTP surface for Legalens.
//!
//! This module exposes a compact Axum router with a handful of endpoints:
//!
//! - `POST /upload` – Multipart file upload (PDF/DOCX/image). Extracts text,
//!   stores the document, and returns a structured summary plus the new
//!   document id.
//! - `POST /process` – Summarize pasted text without storing it.
//! - `POST /ask` – Answer a question against a previously uploaded document.
//! - `POST /ask_text` – Answer a question against ad-hoc pasted text.
//! - `GET /documents` – List stored documents (id, filename, upload time).
//! - `GET /sample/:key` – Fetch a built-in sample legal document.
//! - `GET /metrics` – Observe intake counters.
//! - `GET /commands` – Machine-readable command catalog for quick discovery.
//!
//! All failures surface as a structured `{"error": message}` payload with a
//! non-2xx status; none of them crash the process.

use crate::extract::ExtractionError;
use crate::metrics::MetricsSnapshot;
use crate::processing::{IntakeApi, IntakeError, Language};
use crate::samples;
use crate::store::DocumentSummary;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Build the HTTP router exposing the document intake API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: IntakeApi + 'static,
{
    Router::new()
        .route("/upload", post(upload_document::<S>))
        .route("/process", post(process_text::<S>))
        .route("/ask", post(ask_document::<S>))
        .route("/ask_text", post(ask_text::<S>))
        .route("/documents", get(list_documents::<S>))
        .route("/sample/:key", get(get_sample))
        .route("/metrics", get(get_metrics::<S>))
        .route("/commands", get(get_commands))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(service)
}

fn parse_language(value: Option<&str>) -> Result<Language, AppError> {
    match value {
        None => Ok(Language::default()),
        Some(raw) if raw.trim().is_empty() => Ok(Language::default()),
        Some(raw) => raw
            .parse()
            .map_err(|()| AppError::validation(format!("Unsupported language: {raw}"))),
    }
}

/// Success response for the `POST /upload` endpoint.
#[derive(Serialize)]
struct UploadResponse {
    success: bool,
    summary: String,
    language: &'static str,
    document_id: String,
    filename: String,
}

/// Accept a multipart file upload, extract its text, store it, and summarize.
async fn upload_document<S>(
    State(service): State<Arc<S>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError>
where
    S: IntakeApi,
{
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut language = Language::default();

    while let Some(field) = multipart.next_field().await.map_err(|error| {
        AppError::validation(format!("Failed to read multipart request: {error}"))
    })? {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| AppError::validation("No file selected"))?;
                let data = field.bytes().await.map_err(|error| {
                    AppError::validation(format!("Failed to read uploaded file: {error}"))
                })?;
                file = Some((filename, data.to_vec()));
            }
            Some("language") => {
                let value = field.text().await.map_err(|error| {
                    AppError::validation(format!("Failed to read language field: {error}"))
                })?;
                language = parse_language(Some(&value))?;
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::validation("No file provided"))?;
    let outcome = service.ingest_file(filename, language, data).await?;
    tracing::info!(
        document_id = %outcome.document_id,
        filename = %outcome.filename,
        chunks = outcome.chunk_count,
        "Upload request completed"
    );
    Ok(Json(UploadResponse {
        success: true,
        summary: outcome.summary,
        language: language.as_str(),
        document_id: outcome.document_id.to_string(),
        filename: outcome.filename,
    }))
}

/// Request body for the `POST /process` endpoint.
#[derive(Deserialize)]
struct ProcessRequest {
    /// Raw document text to summarize.
    #[serde(default)]
    document_text: String,
    /// Optional target language (`english` | `tamil`, defaults to English).
    #[serde(default)]
    language: Option<String>,
}

/// Success response for the `POST /process` endpoint.
#[derive(Serialize)]
struct ProcessResponse {
    success: bool,
    summary: String,
    language: &'static str,
}

/// Summarize pasted text.
async fn process_text<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>, AppError>
where
    S: IntakeApi,
{
    let language = parse_language(request.language.as_deref())?;
    let outcome = service
        .summarize_text(&request.document_text, language)
        .await?;
    tracing::info!(chunks = outcome.chunk_count, "Process request completed");
    Ok(Json(ProcessResponse {
        success: true,
        summary: outcome.summary,
        language: language.as_str(),
    }))
}

/// Request body for the `POST /ask` endpoint.
#[derive(Deserialize)]
struct AskRequest {
    /// Question to answer.
    #[serde(default)]
    question: String,
    /// Identifier of a previously uploaded document.
    #[serde(default)]
    document_id: Option<String>,
    /// Optional target language.
    #[serde(default)]
    language: Option<String>,
}

/// Success response for question-answering endpoints.
#[derive(Serialize)]
struct AnswerResponse {
    success: bool,
    answer: String,
    language: &'static str,
}

/// Answer a question against a stored document.
async fn ask_document<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AnswerResponse>, AppError>
where
    S: IntakeApi,
{
    let language = parse_language(request.language.as_deref())?;
    let raw_id = request
        .document_id
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            AppError::validation("No document id provided. Please upload a document first.")
        })?;
    let document_id = Uuid::parse_str(raw_id)
        .map_err(|_| AppError::validation(format!("Invalid document id: {raw_id}")))?;

    let answer = service
        .answer_for_document(document_id, &request.question, language)
        .await?;
    Ok(Json(AnswerResponse {
        success: true,
        answer,
        language: language.as_str(),
    }))
}

/// Request body for the `POST /ask_text` endpoint.
#[derive(Deserialize)]
struct AskTextRequest {
    /// Question to answer.
    #[serde(default)]
    question: String,
    /// Ad-hoc document text to answer against.
    #[serde(default)]
    document_text: String,
    /// Optional target language.
    #[serde(default)]
    language: Option<String>,
}

/// Answer a question against ad-hoc text.
async fn ask_text<S>(
    State(service): State<Arc<S>>,
    Json(request): Json<AskTextRequest>,
) -> Result<Json<AnswerResponse>, AppError>
where
    S: IntakeApi,
{
    let language = parse_language(request.language.as_deref())?;
    let answer = service
        .answer_for_text(&request.document_text, &request.question, language)
        .await?;
    Ok(Json(AnswerResponse {
        success: true,
        answer,
        language: language.as_str(),
    }))
}

/// Response body for `GET /documents`.
#[derive(Serialize)]
struct DocumentsResponse {
    success: bool,
    documents: Vec<DocumentSummary>,
}

/// List stored documents.
async fn list_documents<S>(State(service): State<Arc<S>>) -> Json<DocumentsResponse>
where
    S: IntakeApi,
{
    let documents = service.list_documents().await;
    Json(DocumentsResponse {
        success: true,
        documents,
    })
}

/// Response body for `GET /sample/{key}`.
#[derive(Serialize)]
struct SampleResponse {
    success: bool,
    document: &'static str,
    language: &'static str,
}

/// Fetch a built-in sample document by key.
async fn get_sample(Path(key): Path<String>) -> Result<Json<SampleResponse>, AppError> {
    let sample = samples::sample_document(&key)
        .ok_or_else(|| AppError::validation(format!("Language not supported: {key}")))?;
    Ok(Json(SampleResponse {
        success: true,
        document: sample.text,
        language: sample.language.as_str(),
    }))
}

/// Return a concise metrics snapshot with intake counters.
async fn get_metrics<S>(State(service): State<Arc<S>>) -> Json<MetricsSnapshot>
where
    S: IntakeApi,
{
    Json(service.metrics_snapshot())
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "upload",
                method: "POST",
                path: "/upload",
                description: "Upload a PDF, DOCX, or image as multipart form data (fields: file, language). Extracts the text, stores the document, and returns a structured summary with the document id.",
                request_example: None,
            },
            CommandDescriptor {
                name: "process",
                method: "POST",
                path: "/process",
                description: "Summarize pasted document text. Oversized documents are chunked, summarized part by part, and synthesized into one report.",
                request_example: Some(json!({
                    "document_text": "LEGAL AGREEMENT FOR LOAN REPAYMENT ...",
                    "language": "english"
                })),
            },
            CommandDescriptor {
                name: "ask",
                method: "POST",
                path: "/ask",
                description: "Answer a question against a previously uploaded document.",
                request_example: Some(json!({
                    "question": "What is the interest rate?",
                    "document_id": "3f9d1c2e-0000-4000-8000-000000000000",
                    "language": "english"
                })),
            },
            CommandDescriptor {
                name: "ask_text",
                method: "POST",
                path: "/ask_text",
                description: "Answer a question against ad-hoc pasted text.",
                request_example: Some(json!({
                    "question": "Who are the parties?",
                    "document_text": "This agreement is between ...",
                    "language": "tamil"
                })),
            },
            CommandDescriptor {
                name: "documents",
                method: "GET",
                path: "/documents",
                description: "List stored documents with id, filename, language, and upload time.",
                request_example: None,
            },
            CommandDescriptor {
                name: "sample",
                method: "GET",
                path: "/sample/{key}",
                description: "Fetch a built-in sample legal document (keys: english, tamil, land).",
                request_example: None,
            },
            CommandDescriptor {
                name: "metrics",
                method: "GET",
                path: "/metrics",
                description: "Return intake counters useful for observability dashboards.",
                request_example: None,
            },
        ],
    })
}

struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<IntakeError> for AppError {
    fn from(error: IntakeError) -> Self {
        let status = match &error {
            IntakeError::Validation(_) => StatusCode::BAD_REQUEST,
            IntakeError::NotFound(_) => StatusCode::NOT_FOUND,
            IntakeError::Extraction(ExtractionError::UnsupportedType(_)) => StatusCode::BAD_REQUEST,
            IntakeError::Extraction(_) => StatusCode::BAD_REQUEST,
            IntakeError::Generation(_) => StatusCode::BAD_GATEWAY,
            IntakeError::Chunking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{create_router, get_commands};
    use crate::metrics::MetricsSnapshot;
    use crate::processing::{
        IntakeApi, IntakeError, Language, SummaryOutcome, UploadOutcome,
    };
    use crate::store::DocumentSummary;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn commands_catalog_exposes_process_endpoint() {
        let response = get_commands().await;
        let commands = response.0.commands;
        let process = commands
            .iter()
            .find(|cmd| cmd.name == "process")
            .expect("process command present");

        assert_eq!(process.method, "POST");
        assert_eq!(process.path, "/process");
        assert!(process.description.to_lowercase().contains("summarize"));
        assert!(commands.len() >= 6);
    }

    #[tokio::test]
    async fn process_route_returns_summary() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service.clone());

        let payload = json!({
            "document_text": "Loan agreement body",
            "language": "tamil"
        });
        let response = app
            .oneshot(json_request(Method::POST, "/process", &payload))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["summary"], "stub summary");
        assert_eq!(body["language"], "tamil");

        let calls = service.summarize_calls.lock().await.clone();
        assert_eq!(calls, vec![("Loan agreement body".to_string(), Language::Tamil)]);
    }

    #[tokio::test]
    async fn process_route_rejects_unknown_language() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service.clone());

        let payload = json!({ "document_text": "text", "language": "french" });
        let response = app
            .oneshot(json_request(Method::POST, "/process", &payload))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .expect("error message")
                .contains("french")
        );
        assert!(service.summarize_calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn ask_route_maps_missing_document_to_not_found() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let payload = json!({
            "question": "What is the amount?",
            "document_id": Uuid::new_v4().to_string()
        });
        let response = app
            .oneshot(json_request(Method::POST, "/ask", &payload))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .expect("error message")
                .contains("No document found")
        );
    }

    #[tokio::test]
    async fn ask_route_requires_document_id() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let payload = json!({ "question": "What is the amount?" });
        let response = app
            .oneshot(json_request(Method::POST, "/ask", &payload))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ask_text_route_returns_answer() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let payload = json!({
            "question": "Who signed?",
            "document_text": "the deed"
        });
        let response = app
            .oneshot(json_request(Method::POST, "/ask_text", &payload))
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["answer"], "stub answer");
        assert_eq!(body["language"], "english");
    }

    #[tokio::test]
    async fn documents_route_lists_store_contents() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/documents")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["documents"][0]["filename"], "deed.pdf");
    }

    #[tokio::test]
    async fn sample_route_serves_known_keys_and_rejects_unknown() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/sample/land")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["language"], "tamil");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/sample/french")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn metrics_route_reports_counters() {
        let service = Arc::new(StubIntakeService::new());
        let app = create_router(service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["documents_processed"], 2);
        assert_eq!(body["chunks_summarized"], 5);
    }

    fn json_request(method: Method, uri: &str, payload: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json body")
    }

    struct StubIntakeService {
        summarize_calls: Mutex<Vec<(String, Language)>>,
    }

    impl StubIntakeService {
        fn new() -> Self {
            Self {
                summarize_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IntakeApi for StubIntakeService {
        async fn ingest_file(
            &self,
            filename: String,
            _language: Language,
            _data: Vec<u8>,
        ) -> Result<UploadOutcome, IntakeError> {
            Ok(UploadOutcome {
                document_id: Uuid::new_v4(),
                filename,
                summary: "stub summary".to_string(),
                chunk_count: 1,
            })
        }

        async fn summarize_text(
            &self,
            text: &str,
            language: Language,
        ) -> Result<SummaryOutcome, IntakeError> {
            self.summarize_calls
                .lock()
                .await
                .push((text.to_string(), language));
            Ok(SummaryOutcome {
                summary: "stub summary".to_string(),
                chunk_count: 1,
            })
        }

        async fn answer_for_document(
            &self,
            document_id: Uuid,
            _question: &str,
            _language: Language,
        ) -> Result<String, IntakeError> {
            Err(IntakeError::NotFound(document_id))
        }

        async fn answer_for_text(
            &self,
            _text: &str,
            _question: &str,
            _language: Language,
        ) -> Result<String, IntakeError> {
            Ok("stub answer".to_string())
        }

        async fn list_documents(&self) -> Vec<DocumentSummary> {
            vec![DocumentSummary {
                id: Uuid::new_v4().to_string(),
                filename: "deed.pdf".to_string(),
                language: "english".to_string(),
                upload_time: "2024-01-01T00:00:00Z".to_string(),
            }]
        }

        fn metrics_snapshot(&self) -> MetricsSnapshot {
            MetricsSnapshot {
                documents_processed: 2,
                chunks_summarized: 5,
                questions_answered: 1,
                last_chunk_count: Some(3),
            }
        }
    }
}
