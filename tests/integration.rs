//! Integration tests for the shift engine HTTP API.
//!
//! This test suite drives the router end to end:
//! - Gap resolution ranking and alternatives
//! - Assignment validation
//! - Batch resolution
//! - Constraint audits with manager override
//! - Slot coverage
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use shift_engine::api::{AppState, create_router};
use shift_engine::config::RulesLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let loader = RulesLoader::load("./config/default").expect("Failed to load rules");
    AppState::new(loader.into_rules())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .map(decimal)
        .or_else(|| value.as_f64().and_then(|f| Decimal::try_from(f).ok()))
        .unwrap_or_else(|| panic!("expected a decimal, got {}", value));
    assert_eq!(actual, decimal(expected), "value was {}", value);
}

async fn post(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    post(create_router_for_test(), uri, body.to_string()).await
}

fn employee(id: &str, role: &str, balance: &str) -> Value {
    json!({
        "id": id,
        "role": role,
        "contract_target_hours": "40",
        "current_balance": balance,
        "preferred_days": [],
        "shift_history": []
    })
}

fn shift(id: &str, start: &str, end: &str) -> Value {
    json!({ "id": id, "start": start, "end": end, "type": "STANDARD" })
}

/// An assistant who finished at 22:00 on Sunday 2026-01-11.
fn late_finisher(id: &str) -> Value {
    let mut value = employee(id, "ASSISTANT", "0");
    value["shift_history"] = json!([shift(
        "late",
        "2026-01-11T14:00:00",
        "2026-01-11T22:00:00"
    )]);
    value
}

// =============================================================================
// Gap resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_gap_plain_monday() {
    let (status, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [employee("A", "PHARMACIST", "0")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], true);
    assert_eq!(result["employee"]["id"], "A");
    assert_decimal(&result["burden"], "8");
    assert_decimal(&result["cost"], "64");
    assert_decimal(&result["hours"], "8");
    assert_eq!(result["alternatives"], json!([]));
}

#[tokio::test]
async fn test_resolve_gap_ranks_by_burden() {
    let (status, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [
                employee("heavy", "PHARMACIST", "14"),
                employee("light", "ASSISTANT", "4")
            ],
            "shift_duration_hours": 8
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["employee"]["id"], "light");
    assert_decimal(&result["burden"], "10");
    assert_eq!(result["alternatives"][0]["employee"]["id"], "heavy");
    assert_decimal(&result["alternatives"][0]["burden"], "15");
    assert_decimal(&result["alternatives"][0]["cost"], "120");
}

#[tokio::test]
async fn test_resolve_gap_public_holiday_weight() {
    // 2026-12-25 is listed in config/default/holidays.yaml
    let (_, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-12-25T09:00:00",
            "available_employees": [employee("A", "PHARMACIST", "0")]
        }),
    )
    .await;

    assert_decimal(&result["burden"], "16");
}

#[tokio::test]
async fn test_resolve_gap_missing_parameters() {
    let (status, result) = post_json(
        "/resolve-gap",
        json!({ "gap_start": "2026-01-12T09:00:00", "available_employees": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["error"], "Missing required parameters");
    assert_eq!(result["error_code"], "MISSING_PARAMETERS");
    assert!(result["employee"].is_null());
    assert!(result["cost"].is_null());
}

#[tokio::test]
async fn test_resolve_gap_without_start() {
    let (_, result) = post_json(
        "/resolve-gap",
        json!({ "available_employees": [employee("A", "PHARMACIST", "0")] }),
    )
    .await;

    assert_eq!(result["error"], "Missing required parameters");
}

#[tokio::test]
async fn test_resolve_gap_unreadable_start() {
    let (status, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "next tuesday",
            "available_employees": [employee("A", "PHARMACIST", "0")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["error_code"], "INVALID_GAP_START");
    assert!(
        result["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid gap start:")
    );
}

#[tokio::test]
async fn test_resolve_gap_negative_duration() {
    let (_, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [employee("A", "PHARMACIST", "0")],
            "shift_duration_hours": -4
        }),
    )
    .await;

    assert_eq!(result["valid"], false);
    assert_eq!(
        result["error"],
        "Shift duration must be a positive number of hours"
    );
}

#[tokio::test]
async fn test_resolve_gap_no_legal_candidates() {
    let (status, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T06:00:00",
            "available_employees": [late_finisher("a"), late_finisher("b")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(
        result["error"],
        "No legal candidates available. Consider marketplace or floater."
    );
    assert!(result["employee"].is_null());
}

#[tokio::test]
async fn test_resolve_gap_balance_out_of_range() {
    // Decimal::MAX
    let (status, result) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [employee("outlier", "PHARMACIST", "79228162514264337593543950335")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["error_code"], "SCORE_OUT_OF_RANGE");
    assert_eq!(result["error"], "Score out of range for employee 'outlier'");
    assert!(result["employee"].is_null());
}

// =============================================================================
// Assignment validation
// =============================================================================

#[tokio::test]
async fn test_validate_assignment_sunday_off_pattern() {
    let mut assistant = employee("B", "ASSISTANT", "0");
    assistant["preferred_days"] = json!([1, 2, 3, 4, 5]);

    let (status, result) = post_json(
        "/validate-assignment",
        json!({
            "employee": assistant,
            "shift": shift("sun", "2026-01-18T08:00:00", "2026-01-18T16:00:00")
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], true);
    assert_decimal(&result["burden"], "14");
    assert_decimal(&result["cost"], "112");
    assert_decimal(&result["hours"], "8");
}

#[tokio::test]
async fn test_validate_assignment_rest_violation() {
    let (_, result) = post_json(
        "/validate-assignment",
        json!({
            "employee": late_finisher("a"),
            "shift": shift("early", "2026-01-12T06:00:00", "2026-01-12T14:00:00")
        }),
    )
    .await;

    assert_eq!(result["valid"], false);
    assert_eq!(
        result["error"],
        "Shift violates hard constraints (rest period or consecutive days)"
    );
}

#[tokio::test]
async fn test_validate_assignment_missing_shift() {
    let (status, result) = post_json(
        "/validate-assignment",
        json!({ "employee": employee("A", "PHARMACIST", "0") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["error"], "Missing employee or shift data");
}

// =============================================================================
// Batch resolution
// =============================================================================

#[tokio::test]
async fn test_find_best_assignments_keeps_order_and_reuses_staff() {
    let (status, results) = post_json(
        "/find-best-assignments",
        json!({
            "time_slots": [
                { "time": "2026-01-12T09:00:00" },
                { "time": "2026-01-12T10:00:00" },
                { "time": "2026-01-13T09:00:00" }
            ],
            "available_employees": [employee("only", "PHARMACIST", "0")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["slot"]["time"], "2026-01-12T09:00:00");
    assert_eq!(results[1]["slot"]["time"], "2026-01-12T10:00:00");
    assert_eq!(results[2]["slot"]["time"], "2026-01-13T09:00:00");
    for resolution in results {
        assert_eq!(resolution["result"]["employee"]["id"], "only");
    }
}

#[tokio::test]
async fn test_find_best_assignments_requires_slots() {
    let (status, error) = post_json(
        "/find-best-assignments",
        json!({ "available_employees": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Constraint audit
// =============================================================================

#[tokio::test]
async fn test_constraint_check_reports_violation() {
    let (status, report) = post_json(
        "/constraints/check",
        json!({
            "employee": late_finisher("a"),
            "shift": shift("early", "2026-01-12T06:00:00", "2026-01-12T14:00:00")
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["valid"], false);
    assert_eq!(report["violations"][0]["code"], "DAILY_REST_VIOLATION");
    assert_eq!(report["violations"][0]["severity"], "ERROR");
    assert_eq!(report["violations"][0]["affected_shifts"], json!(["late"]));
}

#[tokio::test]
async fn test_constraint_check_force_override() {
    let (_, report) = post_json(
        "/constraints/check",
        json!({
            "employee": late_finisher("a"),
            "shift": shift("early", "2026-01-12T06:00:00", "2026-01-12T14:00:00"),
            "force": true
        }),
    )
    .await;

    assert_eq!(report["valid"], true);
    assert_eq!(report["violations"][0]["severity"], "WARNING");
    assert!(
        report["warnings"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w == "FORCE OVERRIDE: 1 violation(s) bypassed by manager")
    );
}

#[tokio::test]
async fn test_constraint_check_long_shift_over_contract() {
    let mut part_timer = employee("p", "ASSISTANT", "0");
    part_timer["contract_target_hours"] = json!("10");

    let (_, report) = post_json(
        "/constraints/check",
        json!({
            "employee": part_timer,
            "shift": shift("double", "2026-01-12T06:00:00", "2026-01-12T20:00:00")
        }),
    )
    .await;

    assert_eq!(report["valid"], false);
    let codes: Vec<&str> = report["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["CONTRACT_HOURS_VIOLATION", "MAX_DAILY_HOURS"]);
    assert_eq!(
        report["violations"][1]["message"],
        "Shift duration (14h) exceeds maximum daily hours (12h)"
    );
}

// =============================================================================
// Coverage
// =============================================================================

#[tokio::test]
async fn test_coverage_reports_shortfalls() {
    let (status, statuses) = post_json(
        "/coverage",
        json!({
            "time_slots": [
                {
                    "time": "2026-01-12T09:00:00",
                    "assigned_staff": [
                        { "employee_id": "p1", "role": "PHARMACIST" },
                        { "employee_id": "p2", "role": "PHARMACIST" },
                        { "employee_id": "a1", "role": "ASSISTANT" }
                    ]
                },
                {
                    "time": "2026-01-12T10:00:00",
                    "assigned_staff": [{ "employee_id": "p1", "role": "PHARMACIST" }]
                }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(statuses[0]["covered"], true);
    assert_eq!(statuses[1]["covered"], false);
    assert_eq!(statuses[1]["shortfalls"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let (status, error) = post(
        create_router_for_test(),
        "/resolve-gap",
        "{ not json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let (status, _) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [employee("A", "MANAGER", "0")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_preferred_day_is_rejected() {
    let mut invalid = employee("A", "PHARMACIST", "0");
    invalid["preferred_days"] = json!([9]);

    let (status, error) = post_json(
        "/resolve-gap",
        json!({
            "gap_start": "2026-01-12T09:00:00",
            "available_employees": [invalid]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE");
}

#[tokio::test]
async fn test_inverted_shift_is_rejected() {
    let (status, error) = post_json(
        "/validate-assignment",
        json!({
            "employee": employee("A", "PHARMACIST", "0"),
            "shift": shift("bad", "2026-01-12T17:00:00", "2026-01-12T09:00:00")
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_SHIFT");
}
