//! HTTP relay server that publishes inbound messages to an Ably channel.
//!
//! This library provides an HTTP endpoint that accepts a sender name and
//! publishes a text message onto a fixed Ably channel. All real-time delivery
//! is owned by the Ably service; this crate is the publishing side only.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
