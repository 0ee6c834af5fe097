//! UseCase 層
//!
//! ドメイン層の trait（`MessagePublisher`）に依存し、アプリケーションの
//! 操作単位（メッセージのディスパッチ）を実装します。

pub mod dispatch_message;
pub mod error;

pub use dispatch_message::{CHANNEL_NAME, DispatchMessageUseCase, EVENT_NAME};
pub use error::DispatchMessageError;
