//! 对话接口 DTO

use serde::{Deserialize, Serialize};

/// 对话请求
///
/// session_id 缺省时由服务端生成并在响应中返回。
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatRequest {
    /// 会话 ID
    pub session_id: Option<String>,
    /// 用户消息
    pub message: String,
}

/// 对话响应
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// 会话 ID
    pub session_id: String,
    /// 助手回复
    pub reply: String,
}

/// 对话请求被拒绝时的响应（空白消息）
///
/// reply 字段保留给前端直接展示。
#[derive(Debug, Serialize)]
pub struct ChatErrorResponse {
    /// 错误消息
    pub error: String,
    /// 可直接展示的提示文案
    pub reply: String,
}

/// 清空会话请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ClearChatRequest {
    /// 会话 ID
    pub session_id: String,
}

/// 清空会话响应
#[derive(Debug, Serialize)]
pub struct ClearChatResponse {
    /// 状态消息
    pub status: String,
}
