//! Middleware

pub mod cors;
pub mod request_log;
