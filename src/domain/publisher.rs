//! MessagePublisher trait 定義
//!
//! ドメイン層が必要とする外部 Pub/Sub サービスへの送信インターフェースを
//! 定義します。具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::TextMessage;

/// メッセージ送信（publish）失敗時のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessagePublishError {
    /// リクエスト自体が失敗した（接続エラーなど）
    #[error("publish request failed: {0}")]
    RequestFailed(String),

    /// サービス側が publish を拒否した（非 2xx レスポンス）
    #[error("publish rejected by service (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Message publisher trait
///
/// ドメイン層が必要とする外部 Pub/Sub サービスへのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装
/// （Ably REST API など）には依存しない。
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// 指定したチャンネルにイベントとしてメッセージを publish する
    ///
    /// 配信の保証（順序・再送・ファンアウト）は外部サービス側が持つ。
    async fn publish(
        &self,
        channel: &str,
        event: &str,
        message: &TextMessage,
    ) -> Result<(), MessagePublishError>;
}
