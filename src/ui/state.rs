//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::DispatchMessageUseCase;

/// Shared application state
pub struct AppState {
    /// DispatchMessageUseCase（メッセージディスパッチのユースケース）
    pub dispatch_message_usecase: Arc<DispatchMessageUseCase>,
}
