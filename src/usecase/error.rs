//! UseCase 層のエラー定義

/// メッセージディスパッチ失敗時のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchMessageError {
    /// 外部サービスへの publish に失敗した
    #[error("failed to publish message: {0}")]
    PublishFailed(String),
}
