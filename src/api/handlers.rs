//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    OvertimeOccurrence, Payslip, attendance_history, daily_attendance, generate_payslip,
    overtime_report, run_payroll,
};
use crate::error::EngineResult;
use crate::models::PayrollSummary;
use crate::report::{
    attendance_history_to_csv, daily_attendance_to_csv, overtime_to_csv, render_payslip,
    render_summary, summary_to_csv,
};

use super::request::{
    AttendanceHistoryRequest, DailyAttendanceRequest, PayrollRequest, PayslipRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/payroll/csv", post(payroll_csv_handler))
        .route("/payroll/text", post(payroll_text_handler))
        .route("/payslip", post(payslip_handler))
        .route("/payslip/text", post(payslip_text_handler))
        .route("/overtime-report", post(overtime_report_handler))
        .route("/overtime-report/csv", post(overtime_report_csv_handler))
        .route("/attendance/history", post(attendance_history_handler))
        .route("/attendance/history/csv", post(attendance_history_csv_handler))
        .route("/attendance/daily", post(daily_attendance_handler))
        .route("/attendance/daily/csv", post(daily_attendance_csv_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match compute_summary(&state, &request) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                period = %summary.period,
                employees_paid = summary.line_items.len(),
                net_pay = %summary.totals.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll completed successfully"
            );
            json_ok(&summary)
        }
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /payroll/csv.
async fn payroll_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll CSV request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let csv = compute_summary(&state, &request)
        .and_then(|summary| summary_to_csv(&summary, &request.employees));
    match csv {
        Ok(body) => csv_ok(body),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /payroll/text.
async fn payroll_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll text request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_summary(&state, &request) {
        Ok(summary) => text_ok(render_summary(&summary, state.config().company())),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /payslip.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_payslip(&state, &request) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = request.employee_id,
                net_pay = %payslip.line_item.net_pay,
                "Payslip generated"
            );
            json_ok(&payslip)
        }
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /payslip/text.
async fn payslip_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip text request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_payslip(&state, &request) {
        Ok(payslip) => text_ok(render_payslip(&payslip, state.config().company())),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /overtime-report.
async fn overtime_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_overtime(&state, &request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                period = %request.period,
                occurrences = report.len(),
                "Overtime report generated"
            );
            json_ok(&report)
        }
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /overtime-report/csv.
async fn overtime_report_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime report CSV request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_overtime(&state, &request).and_then(|report| overtime_to_csv(&report)) {
        Ok(body) => csv_ok(body),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /attendance/history.
async fn attendance_history_handler(
    payload: Result<Json<AttendanceHistoryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance history request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let history = attendance_history(&request.attendance, request.employee_id);
    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id,
        entries = history.len(),
        "Attendance history generated"
    );
    json_ok(&history)
}

/// Handler for POST /attendance/history/csv.
async fn attendance_history_csv_handler(
    payload: Result<Json<AttendanceHistoryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance history CSV request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let history = attendance_history(&request.attendance, request.employee_id);
    match attendance_history_to_csv(&history) {
        Ok(body) => csv_ok(body),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /attendance/daily.
async fn daily_attendance_handler(
    payload: Result<Json<DailyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match request.day() {
        Ok(day) => {
            let rows = daily_attendance(&request.employees, &request.attendance, day);
            info!(
                correlation_id = %correlation_id,
                date = %day,
                rows = rows.len(),
                "Daily attendance generated"
            );
            json_ok(&rows)
        }
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

/// Handler for POST /attendance/daily/csv.
async fn daily_attendance_csv_handler(
    payload: Result<Json<DailyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily attendance CSV request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let csv = request.day().and_then(|day| {
        daily_attendance_to_csv(&daily_attendance(&request.employees, &request.attendance, day))
    });
    match csv {
        Ok(body) => csv_ok(body),
        Err(err) => failure_response(err.into(), correlation_id),
    }
}

fn compute_summary(state: &AppState, request: &PayrollRequest) -> EngineResult<PayrollSummary> {
    run_payroll(
        &request.employees,
        &request.attendance,
        request.period_key()?,
        &request.inputs,
        state.config().policy(),
    )
}

fn compute_payslip(state: &AppState, request: &PayslipRequest) -> EngineResult<Payslip> {
    generate_payslip(
        &request.employees,
        &request.attendance,
        request.employee_id,
        request.period_key()?,
        &request.inputs,
        state.config().policy(),
    )
}

fn compute_overtime(
    state: &AppState,
    request: &PayrollRequest,
) -> EngineResult<Vec<OvertimeOccurrence>> {
    Ok(overtime_report(
        &request.employees,
        &request.attendance,
        &request.period_key()?,
        state.config().policy().regular_hours_per_day,
    ))
}

fn json_ok<T: serde::Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn csv_ok(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response()
}

fn text_ok(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn failure_response(error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        status = error.status.as_u16(),
        code = %error.error.code,
        error = %error.error.message,
        "Request failed"
    );
    error.into_response()
}

/// Maps a body extraction failure onto the API error codes.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. "missing field `period`".
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
    };
    ApiErrorResponse::bad_request(error).into_response()
}
