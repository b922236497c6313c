//! 对话助手服务
//!
//! 每个会话维护一份滚动对话记录。prompt 只回放最近 10 轮；
//! 存储本身不设上限。生成失败时返回固定文案且不记录该轮。

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::ChatTurn;
use crate::providers::TextGenerator;
use crate::services::session_store::SessionStore;

/// 回放进 prompt 的最大历史轮数
const HISTORY_WINDOW: usize = 10;

/// 固定人设前导语
const PERSONA_PREAMBLE: &str = "You are a helpful AI assistant for an Information \
Authenticator app that verifies claims using academic research. Be concise, friendly, \
and informative.\n\n";

/// 生成失败时的固定回复
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// 对话助手
pub struct Assistant {
    generator: Arc<dyn TextGenerator>,
    sessions: Arc<dyn SessionStore>,
}

impl Assistant {
    /// 创建助手，会话存储通过参数注入
    pub fn new(generator: Arc<dyn TextGenerator>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            generator,
            sessions,
        }
    }

    /// 回复一条用户消息
    pub async fn reply(&self, session_id: &str, user_message: &str) -> String {
        let history = self.sessions.get(session_id);
        let prompt = build_prompt(&history, user_message);

        debug!(
            "chat request for session '{}' ({} prior turns)",
            session_id,
            history.len()
        );

        match self.generator.complete(&prompt).await {
            Ok(reply) => {
                self.sessions
                    .append(session_id, ChatTurn::new(user_message, &reply));
                reply
            }
            Err(e) => {
                // 失败的轮次不写入历史
                warn!("chat generation failed for session '{}': {}", session_id, e);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// 清空会话历史
    pub fn clear(&self, session_id: &str) {
        self.sessions.clear(session_id);
    }
}

/// 构造对话 prompt：人设 + 最近历史（从旧到新）+ 当前消息
fn build_prompt(history: &[ChatTurn], user_message: &str) -> String {
    let mut prompt = PERSONA_PREAMBLE.to_string();

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[start..] {
        prompt.push_str(&format!(
            "User: {}\nAssistant: {}\n\n",
            turn.user, turn.assistant
        ));
    }

    prompt.push_str(&format!("User: {}\nAssistant:", user_message));
    prompt
}
