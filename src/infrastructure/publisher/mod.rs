//! メッセージ送信（publish）の実装
//!
//! ## 概要
//!
//! このモジュールは `MessagePublisher` trait の具体的な実装を提供します。
//!
//! ## 実装
//!
//! - `ably`: Ably REST API を使った実装

pub mod ably;

pub use ably::{AblyConfigError, AblyRestPublisher};
