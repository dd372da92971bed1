//! HTTP middleware applied by [`crate::router::app`].

pub mod cors;
pub mod request_id;
pub mod security_headers;
