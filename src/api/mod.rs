//! HTTP API for the payroll engine.
//!
//! Every endpoint takes the roster, attendance and pay inputs in the request
//! body; the daily threshold, overtime multiplier and company details come
//! from the loaded configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceHistoryRequest, DailyAttendanceRequest, PayrollRequest, PayslipRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
