//! メッセージのエンティティ定義

use serde::{Deserialize, Serialize};

/// Rendering used when the request carries no sender value.
///
/// 元の実装ではテンプレート文字列に欠損値がそのまま埋め込まれるため、
/// その挙動をそのまま踏襲しています。
const MISSING_SENDER: &str = "undefined";

/// A text message published to the channel.
///
/// Constructed fresh per request; not persisted and not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    /// メッセージ本文
    pub text: String,
}

impl TextMessage {
    /// Build the message text for a message relayed on behalf of `sender`.
    ///
    /// A missing sender renders as `undefined`, matching the behavior of the
    /// original route when the request body has no `sender` field.
    pub fn on_behalf_of(sender: Option<&str>) -> Self {
        let sender = sender.unwrap_or(MISSING_SENDER);
        Self {
            text: format!("Server sent a message on behalf of {}", sender),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_behalf_of_with_sender() {
        // テスト項目: 送信者名がメッセージ本文に埋め込まれる
        // given (前提条件):
        let sender = Some("Alice");

        // when (操作):
        let message = TextMessage::on_behalf_of(sender);

        // then (期待する結果):
        assert_eq!(message.text, "Server sent a message on behalf of Alice");
    }

    #[test]
    fn test_on_behalf_of_without_sender() {
        // テスト項目: 送信者名が欠損している場合は "undefined" として埋め込まれる
        // given (前提条件):
        let sender: Option<&str> = None;

        // when (操作):
        let message = TextMessage::on_behalf_of(sender);

        // then (期待する結果):
        assert_eq!(message.text, "Server sent a message on behalf of undefined");
    }

    #[test]
    fn test_on_behalf_of_with_empty_sender() {
        // テスト項目: 空文字の送信者名もバリデーションされずそのまま埋め込まれる
        // given (前提条件):
        let sender = Some("");

        // when (操作):
        let message = TextMessage::on_behalf_of(sender);

        // then (期待する結果):
        assert_eq!(message.text, "Server sent a message on behalf of ");
    }

    #[test]
    fn test_serializes_to_text_payload() {
        // テスト項目: ペイロードが { "text": ... } の形にシリアライズされる
        // given (前提条件):
        let message = TextMessage::on_behalf_of(Some("Bob"));

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"text": "Server sent a message on behalf of Bob"})
        );
    }
}
