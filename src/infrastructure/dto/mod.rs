//! Data Transfer Objects (DTOs) for the relay server.
//!
//! DTOs are organized by protocol:
//! - `http`: HTTP API request DTOs

pub mod http;
