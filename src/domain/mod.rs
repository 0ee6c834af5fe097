//! ドメイン層
//!
//! メッセージのエンティティと、ドメイン層が必要とする送信インターフェース
//! （`MessagePublisher` trait）を定義します。

pub mod message;
pub mod publisher;

pub use message::TextMessage;
pub use publisher::{MessagePublishError, MessagePublisher};
