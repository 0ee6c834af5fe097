//! Infrastructure 層
//!
//! ドメイン層の trait に対する具体的な実装（Ably REST API クライアント）と
//! プロトコル境界の DTO を提供します。

pub mod dto;
pub mod publisher;
