//! HTTP API request DTOs.

use serde::Deserialize;

/// Request body of `POST /api/send-message`.
///
/// `sender` の存在も型も検証しない（欠損は欠損のまま UseCase 層へ渡す）。
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequestDto {
    /// Name of the party the message is relayed on behalf of
    #[serde(default)]
    pub sender: Option<String>,
}
