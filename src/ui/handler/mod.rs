//! HTTP request handlers.

mod http;

pub use http::{health_check, send_message};
