//! Ably REST API を使った MessagePublisher 実装
//!
//! ## 責務
//!
//! - Ably の REST publish エンドポイント（`POST /channels/{channel}/messages`）
//!   への HTTP リクエスト
//! - API キーの分解と Basic 認証
//!
//! ## 設計ノート
//!
//! `reqwest::Client` は接続プールを内包するため、この実装はプロセス全体で
//! 1 つだけ生成し、`Arc` で共有して使う前提です。リクエストごとに生成
//! し直すことはしません。

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{MessagePublishError, MessagePublisher, TextMessage};

/// Default base URL of the Ably REST API.
pub const ABLY_REST_ENDPOINT: &str = "https://rest.ably.io";

/// Ably API キーの形式エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AblyConfigError {
    /// API キーが `<keyName>:<keySecret>` の形式になっていない
    #[error("malformed Ably API key: expected '<keyName>:<keySecret>'")]
    MalformedApiKey,
}

/// Request body of the Ably REST publish endpoint.
#[derive(Debug, Serialize)]
struct PublishBody<'a> {
    /// イベント名
    name: &'a str,
    /// ペイロード
    data: &'a TextMessage,
}

/// Ably REST API を使った MessagePublisher 実装
///
/// ## 使用例
///
/// ```ignore
/// let publisher = Arc::new(AblyRestPublisher::new(&api_key)?);
/// publisher.publish("some-channel-name", "test-message", &message).await?;
/// ```
pub struct AblyRestPublisher {
    /// 共有 HTTP クライアント（接続プール込み）
    http: reqwest::Client,
    /// REST API のベース URL
    endpoint: String,
    /// API キーの keyName 部（Basic 認証のユーザー名）
    key_name: String,
    /// API キーの keySecret 部（Basic 認証のパスワード）
    key_secret: String,
}

impl AblyRestPublisher {
    /// 新しい AblyRestPublisher を作成
    ///
    /// # Arguments
    ///
    /// * `api_key` - Ably の API キー（`<keyName>:<keySecret>` 形式）
    ///
    /// # Errors
    ///
    /// API キーが `<keyName>:<keySecret>` の形式でない場合にエラーを返す。
    pub fn new(api_key: &str) -> Result<Self, AblyConfigError> {
        Self::with_endpoint(api_key, ABLY_REST_ENDPOINT)
    }

    /// ベース URL を指定して AblyRestPublisher を作成（テスト用）
    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Result<Self, AblyConfigError> {
        let (key_name, key_secret) = split_api_key(api_key)?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key_name,
            key_secret,
        })
    }
}

/// API キーを keyName と keySecret に分解する
fn split_api_key(api_key: &str) -> Result<(String, String), AblyConfigError> {
    match api_key.split_once(':') {
        Some((name, secret)) if !name.is_empty() && !secret.is_empty() => {
            Ok((name.to_string(), secret.to_string()))
        }
        _ => Err(AblyConfigError::MalformedApiKey),
    }
}

#[async_trait]
impl MessagePublisher for AblyRestPublisher {
    async fn publish(
        &self,
        channel: &str,
        event: &str,
        message: &TextMessage,
    ) -> Result<(), MessagePublishError> {
        let url = format!("{}/channels/{}/messages", self.endpoint, channel);
        let body = PublishBody {
            name: event,
            data: message,
        };

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.key_name, Some(&self.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| MessagePublishError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MessagePublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Published event '{}' to channel '{}'", event, channel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_api_key_valid() {
        // テスト項目: API キーが keyName と keySecret に分解される
        // given (前提条件):
        let api_key = "appid.keyid:secretpart";

        // when (操作):
        let result = split_api_key(api_key);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(("appid.keyid".to_string(), "secretpart".to_string()))
        );
    }

    #[test]
    fn test_split_api_key_splits_at_first_colon() {
        // テスト項目: secret にコロンが含まれる場合も最初のコロンで分解される
        // given (前提条件):
        let api_key = "name:sec:ret";

        // when (操作):
        let result = split_api_key(api_key);

        // then (期待する結果):
        assert_eq!(result, Ok(("name".to_string(), "sec:ret".to_string())));
    }

    #[test]
    fn test_split_api_key_without_colon() {
        // テスト項目: コロンなしの API キーはエラーになる
        // given (前提条件):
        let api_key = "not-a-valid-key";

        // when (操作):
        let result = split_api_key(api_key);

        // then (期待する結果):
        assert_eq!(result, Err(AblyConfigError::MalformedApiKey));
    }

    #[test]
    fn test_split_api_key_empty_parts() {
        // テスト項目: keyName または keySecret が空の API キーはエラーになる
        // given (前提条件):

        // when (操作) / then (期待する結果):
        assert_eq!(split_api_key(":secret"), Err(AblyConfigError::MalformedApiKey));
        assert_eq!(split_api_key("name:"), Err(AblyConfigError::MalformedApiKey));
        assert_eq!(split_api_key(""), Err(AblyConfigError::MalformedApiKey));
    }

    #[test]
    fn test_publish_body_shape() {
        // テスト項目: リクエストボディが { "name": ..., "data": { "text": ... } } の形になる
        // given (前提条件):
        let message = TextMessage::on_behalf_of(Some("Alice"));
        let body = PublishBody {
            name: "test-message",
            data: &message,
        };

        // when (操作):
        let json = serde_json::to_value(&body).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "name": "test-message",
                "data": {"text": "Server sent a message on behalf of Alice"}
            })
        );
    }

    #[test]
    fn test_with_endpoint_trims_trailing_slash() {
        // テスト項目: ベース URL 末尾のスラッシュが取り除かれる
        // given (前提条件):
        let publisher = AblyRestPublisher::with_endpoint("name:secret", "http://localhost:9999/");

        // when (操作) / then (期待する結果):
        assert_eq!(publisher.unwrap().endpoint, "http://localhost:9999");
    }
}
