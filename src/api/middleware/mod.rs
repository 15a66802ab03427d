//! API middleware.

mod timing;

pub use timing::log_execution_time;
