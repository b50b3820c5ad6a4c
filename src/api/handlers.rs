//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, SchedulingError};
use crate::models::{Decision, parse_instant};

use super::request::{
    ConstraintCheckRequest, CoverageRequest, FindBestAssignmentsRequest, ResolveGapRequest,
    ValidateAssignmentRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/resolve-gap", post(resolve_gap_handler))
        .route("/validate-assignment", post(validate_assignment_handler))
        .route("/find-best-assignments", post(find_best_assignments_handler))
        .route("/constraints/check", post(constraint_check_handler))
        .route("/coverage", post(coverage_handler))
        .with_state(state)
}

/// Handler for POST /resolve-gap.
///
/// Recommends the lowest-burden legal employee for a gap.
async fn resolve_gap_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveGapRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resolve-gap request");

    let request = match accept(payload, correlation_id, |r| r.validate()) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let gap_start = match request
        .gap_start
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_instant)
        .transpose()
    {
        Ok(gap_start) => gap_start,
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Unreadable gap start");
            return ok_json(Decision::failure(SchedulingError::InvalidGapStart(message)));
        }
    };

    let start_time = Instant::now();
    let decision =
        state
            .engine()
            .resolve_gap(gap_start, &request.available_employees, request.duration());

    log_decision(correlation_id, &decision, start_time);
    ok_json(decision)
}

/// Handler for POST /validate-assignment.
///
/// Checks and prices a manager's proposed assignment.
async fn validate_assignment_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateAssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validate-assignment request");

    let request = match accept(payload, correlation_id, |r| r.validate()) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let decision = state
        .engine()
        .validate_assignment(request.employee.as_ref(), request.shift.as_ref());

    log_decision(correlation_id, &decision, start_time);
    ok_json(decision)
}

/// Handler for POST /find-best-assignments.
///
/// Resolves a batch of slots against one candidate pool.
async fn find_best_assignments_handler(
    State(state): State<AppState>,
    payload: Result<Json<FindBestAssignmentsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing find-best-assignments request");

    let request = match accept(payload, correlation_id, |r| r.validate()) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let results = state.engine().find_best_assignments(
        &request.time_slots,
        &request.available_employees,
        request.duration(),
    );

    let resolved = results.iter().filter(|r| r.result.valid).count();
    info!(
        correlation_id = %correlation_id,
        slots = results.len(),
        resolved,
        duration_us = start_time.elapsed().as_micros(),
        "Batch resolution completed"
    );
    ok_json(results)
}

/// Handler for POST /constraints/check.
///
/// Returns the full hard-rule audit, honouring a manager override.
async fn constraint_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConstraintCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing constraint check request");

    let request = match accept(payload, correlation_id, |r| r.validate()) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let report = state
        .engine()
        .audit_assignment(&request.employee, &request.shift, request.force);

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee.id,
        valid = report.valid,
        violations = report.violations.len(),
        forced = request.force,
        "Constraint check completed"
    );
    ok_json(report)
}

/// Handler for POST /coverage.
async fn coverage_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoverageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing coverage request");

    let request = match accept(payload, correlation_id, |_| Ok(())) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let statuses = state.engine().coverage(&request.time_slots);

    info!(
        correlation_id = %correlation_id,
        slots = statuses.len(),
        uncovered = statuses.iter().filter(|s| !s.covered).count(),
        "Coverage check completed"
    );
    ok_json(statuses)
}

/// Unwraps a JSON body and validates it, turning either failure into a 400.
fn accept<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
    validate: impl FnOnce(&T) -> Result<(), EngineError>,
) -> Result<T, Response> {
    let Json(request) = payload.map_err(|rejection| {
        let error = rejection_to_error(rejection, correlation_id);
        ApiErrorResponse::bad_request(error).into_response()
    })?;

    validate(&request).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
        ApiErrorResponse::from(err).into_response()
    })?;

    Ok(request)
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Body text carries serde's description of the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn log_decision(correlation_id: Uuid, decision: &Decision, start_time: Instant) {
    let duration_us = start_time.elapsed().as_micros();
    match &decision.error {
        None => info!(
            correlation_id = %correlation_id,
            employee_id = ?decision.employee.as_ref().map(|e| e.id.as_str()),
            burden = ?decision.burden,
            duration_us,
            "Decision produced"
        ),
        Some(error) => warn!(
            correlation_id = %correlation_id,
            error = %error,
            duration_us,
            "Decision declined"
        ),
    }
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
