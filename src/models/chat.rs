//! 对话轮次模型

use serde::{Deserialize, Serialize};

/// 一轮对话：用户消息 + 助手回复
///
/// 会话内按顺序追加；失败的轮次不会被记录。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    /// 用户消息
    pub user: String,
    /// 助手回复
    pub assistant: String,
}

impl ChatTurn {
    /// 创建新轮次
    pub fn new(user: &str, assistant: &str) -> Self {
        Self {
            user: user.to_string(),
            assistant: assistant.to_string(),
        }
    }
}
