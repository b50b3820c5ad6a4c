//! HTTP API module for the shift engine.
//!
//! This module exposes gap resolution, assignment validation, batch
//! resolution, constraint audits and coverage checks as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ConstraintCheckRequest, CoverageRequest, FindBestAssignmentsRequest, ResolveGapRequest,
    ValidateAssignmentRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
