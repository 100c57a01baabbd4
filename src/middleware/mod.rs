// ABOUTME: HTTP middleware shared by every route
// ABOUTME: Request ID propagation and generation for log correlation

/// Request ID extraction, generation and response tagging
pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};
