//! Route handlers and router construction for the REST API.

use std::time::Instant;

use axum::{
    extract::{Path as AxumPath, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dls_core::{export, lists, CoreError, DrugRecord};
use emc::UkLicensing;
use openfda::LabelLookup;

use crate::dto::{
    BatchError, BatchQueryReq, BatchQueryRes, ExportReq, HealthRes, StatusRes,
};
use crate::state::AppState;

/// Browser origins allowed by CORS (the development frontend).
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(OpenApi)]
#[openapi(
    paths(
        status,
        health,
        search_drug,
        batch_query,
        drug_lists,
        uk_licensing,
        export_csv,
    ),
    components(schemas(
        StatusRes,
        HealthRes,
        DrugRecord,
        BatchQueryReq,
        BatchQueryRes,
        BatchError,
        ExportReq,
        lists::DrugLists,
        UkLicensing,
    ))
)]
struct ApiDoc;

/// Build the application router.
///
/// Mounts all endpoints, the Swagger UI and the CORS layer over the shared
/// state.
pub fn router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(status))
        .route("/health", get(health))
        .route("/api/drugs/search/:drug_name", get(search_drug))
        .route("/api/drugs/batch", post(batch_query))
        .route("/api/drugs/lists", get(drug_lists))
        .route("/api/drugs/uk/:drug_name", get(uk_licensing))
        .route("/api/export/csv", post(export_csv))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status", body = StatusRes)
    )
)]
/// Service status endpoint.
#[axum::debug_handler]
async fn status() -> Json<StatusRes> {
    Json(StatusRes {
        message: "Drug Label Search API".into(),
        status: "active".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Drug Label Search API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/drugs/search/{drug_name}",
    params(
        ("drug_name" = String, Path, description = "Generic drug name to look up")
    ),
    responses(
        (status = 200, description = "Resolved drug record", body = DrugRecord),
        (status = 502, description = "Upstream lookup failed")
    )
)]
/// Search for a single drug by generic name.
///
/// Resolves the name against the label dataset and returns the assembled
/// record. A name that matches no label document still yields a record (with
/// sentinel fields); only a failed fetch is an error.
///
/// # Returns
/// * `Ok(Json<DrugRecord>)` - The resolved record
/// * `Err((StatusCode, &str))` - Bad gateway if the upstream fetch fails
///
/// # Errors
/// Returns `502 Bad Gateway` if:
/// - the openFDA request fails or answers with an error status.
#[axum::debug_handler]
async fn search_drug(
    State(state): State<AppState>,
    AxumPath(drug_name): AxumPath<String>,
) -> Result<Json<DrugRecord>, (StatusCode, &'static str)> {
    match state.fda.lookup(&drug_name).await {
        Ok(LabelLookup::Found(hit)) => Ok(Json(state.records.from_hit(&drug_name, hit))),
        Ok(LabelLookup::NotFound) => Ok(Json(state.records.not_found(&drug_name))),
        Err(e) => {
            tracing::error!("Label lookup error for {}: {:?}", drug_name, e);
            Err((StatusCode::BAD_GATEWAY, "Upstream lookup failed"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/drugs/batch",
    request_body = BatchQueryReq,
    responses(
        (status = 200, description = "Batch query results", body = BatchQueryRes)
    )
)]
/// Batch query multiple drugs sequentially.
///
/// Looks up each name in order with a fixed pause between upstream calls.
/// Failed lookups are collected into `errors` and do not abort the batch;
/// the response always carries whatever was resolved.
#[axum::debug_handler]
async fn batch_query(
    State(state): State<AppState>,
    Json(req): Json<BatchQueryReq>,
) -> Json<BatchQueryRes> {
    let started = Instant::now();
    let delay = req.delay();
    let total = req.drugs.len();

    tracing::info!("Starting batch query for {} drugs", total);

    let mut results: Vec<DrugRecord> = Vec::with_capacity(total);
    let mut errors: Vec<BatchError> = Vec::new();

    for (index, drug) in req.drugs.iter().enumerate() {
        tracing::info!("[{}/{}] querying {}", index + 1, total, drug);

        match state.fda.lookup(drug).await {
            Ok(LabelLookup::Found(hit)) => {
                let record = state.records.from_hit(drug, hit);
                tracing::info!("  found {} (last updated {})", drug, record.last_updated);
                results.push(record);
            }
            Ok(LabelLookup::NotFound) => {
                tracing::info!("  no results found for {}", drug);
                results.push(state.records.not_found(drug));
            }
            Err(e) => {
                tracing::warn!("  lookup failed for {}: {:?}", drug, e);
                errors.push(BatchError {
                    drug: drug.clone(),
                    error: e.to_string(),
                });
            }
        }

        // Respect upstream rate limits; no pause after the last call.
        if index + 1 < total && delay > std::time::Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }

    let total_found = results.iter().filter(|r| r.has_label_data()).count();
    let execution_time = started.elapsed().as_secs_f64();

    tracing::info!(
        "Batch query complete. Processed: {}, Found: {}, Errors: {}",
        results.len(),
        total_found,
        errors.len()
    );

    Json(BatchQueryRes {
        total_processed: results.len(),
        total_found,
        results,
        errors,
        execution_time,
    })
}

#[utoipa::path(
    get,
    path = "/api/drugs/lists",
    responses(
        (status = 200, description = "Predefined drug lists", body = lists::DrugLists)
    )
)]
/// Predefined drug lists for common batch queries.
#[axum::debug_handler]
async fn drug_lists() -> Json<lists::DrugLists> {
    Json(lists::predefined())
}

#[utoipa::path(
    get,
    path = "/api/drugs/uk/{drug_name}",
    params(
        ("drug_name" = String, Path, description = "Drug name to look up on eMC")
    ),
    responses(
        (status = 200, description = "UK licensing information", body = UkLicensing),
        (status = 502, description = "Upstream lookup failed")
    )
)]
/// UK licensing lookup via the eMC site.
///
/// A missing UK product is a valid result, not an error.
///
/// # Errors
/// Returns `502 Bad Gateway` if:
/// - an eMC page cannot be fetched or read.
#[axum::debug_handler]
async fn uk_licensing(
    State(state): State<AppState>,
    AxumPath(drug_name): AxumPath<String>,
) -> Result<Json<UkLicensing>, (StatusCode, &'static str)> {
    match state.emc.search(&drug_name).await {
        Ok(licensing) => Ok(Json(licensing)),
        Err(e) => {
            tracing::error!("eMC lookup error for {}: {:?}", drug_name, e);
            Err((StatusCode::BAD_GATEWAY, "UK lookup failed"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/export/csv",
    request_body = ExportReq,
    responses(
        (status = 200, description = "CSV attachment", body = String, content_type = "text/csv"),
        (status = 400, description = "No results to export"),
        (status = 500, description = "Internal server error")
    )
)]
/// Export a batch of records as a CSV attachment.
///
/// # Errors
/// Returns `400 Bad Request` for an empty result set and
/// `500 Internal Server Error` if serialisation fails.
#[axum::debug_handler]
async fn export_csv(
    Json(req): Json<ExportReq>,
) -> Result<([(header::HeaderName, String); 2], String), (StatusCode, &'static str)> {
    let csv = match export::render_csv(&req.results) {
        Ok(csv) => csv,
        Err(CoreError::InvalidInput(_)) => {
            return Err((StatusCode::BAD_REQUEST, "No results to export"));
        }
        Err(e) => {
            tracing::error!("CSV export error: {:?}", e);
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"));
        }
    };

    let filename = req
        .filename
        .unwrap_or_else(|| export::default_filename(Utc::now()));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        csv,
    ))
}
