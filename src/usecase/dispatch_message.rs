//! UseCase: メッセージディスパッチ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DispatchMessageUseCase::execute() メソッド
//! - メッセージ本文の組み立てと、固定チャンネル・固定イベント名での publish
//!
//! ### なぜこのテストが必要か
//! - 送信者名からメッセージ本文が正しく組み立てられることを保証
//! - チャンネル名・イベント名が常にリテラル値であることを保証
//! - publish 失敗時のエラーハンドリングを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 送信者名ありのディスパッチ
//! - 異常系: publish 失敗
//! - エッジケース: 送信者名が欠損している場合

use std::sync::Arc;

use crate::domain::{MessagePublisher, TextMessage};

use super::error::DispatchMessageError;

/// publish 先のチャンネル名（静的に固定）
pub const CHANNEL_NAME: &str = "some-channel-name";

/// publish するイベント名（静的に固定）
pub const EVENT_NAME: &str = "test-message";

/// メッセージディスパッチのユースケース
pub struct DispatchMessageUseCase {
    /// MessagePublisher（外部 Pub/Sub サービスへの送信の抽象化）
    publisher: Arc<dyn MessagePublisher>,
}

impl DispatchMessageUseCase {
    /// 新しい DispatchMessageUseCase を作成
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self { publisher }
    }

    /// メッセージディスパッチを実行
    ///
    /// # Arguments
    ///
    /// * `sender` - リクエストボディから取り出した送信者名（欠損あり得る）
    ///
    /// # Returns
    ///
    /// * `Ok(TextMessage)` - publish したメッセージ
    /// * `Err(DispatchMessageError)` - publish 失敗
    pub async fn execute(
        &self,
        sender: Option<String>,
    ) -> Result<TextMessage, DispatchMessageError> {
        // 1. メッセージ本文を組み立てる
        let message = TextMessage::on_behalf_of(sender.as_deref());

        // 2. MessagePublisher を使って固定チャンネルに publish
        self.publisher
            .publish(CHANNEL_NAME, EVENT_NAME, &message)
            .await
            .map_err(|e| DispatchMessageError::PublishFailed(e.to_string()))?;

        Ok(message)
    }
}
