//! Shared utilities used by both the library and the binary.

pub mod logger;
