//! 会话存储
//!
//! 按会话 ID 保存对话轮次。以 trait 形式注入助手服务，
//! 不依赖任何全局可变状态。

use dashmap::DashMap;

use crate::models::ChatTurn;

/// 会话存储抽象
pub trait SessionStore: Send + Sync {
    /// 读取会话的全部轮次（不存在时为空）
    fn get(&self, session_id: &str) -> Vec<ChatTurn>;

    /// 向会话追加一轮对话
    fn append(&self, session_id: &str, turn: ChatTurn);

    /// 清空会话
    fn clear(&self, session_id: &str);
}

/// 进程内会话存储
///
/// 同一会话下的并发写入遵循 last-write-wins，无需严格串行。
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Vec<ChatTurn>>,
}

impl InMemorySessionStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Vec<ChatTurn> {
        self.sessions
            .get(session_id)
            .map(|turns| turns.clone())
            .unwrap_or_default()
    }

    fn append(&self, session_id: &str, turn: ChatTurn) {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(turn);
    }

    fn clear(&self, session_id: &str) {
        self.sessions.insert(session_id.to_string(), Vec::new());
    }
}
