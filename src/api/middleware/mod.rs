//! API middleware.

mod correlation;
mod error_detail;

pub use correlation::correlation_middleware;
pub use error_detail::expose_error_details;
