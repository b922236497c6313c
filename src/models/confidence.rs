//! 置信度评级
//!
//! 按检索结果数量映射到四个固定等级，纯函数，无失败分支。

use serde::{Deserialize, Serialize};

/// 置信度等级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    /// 无支持证据（0 条结果）
    #[serde(rename = "Not supported")]
    NotSupported,
    /// 弱证据（1-3 条结果）
    #[serde(rename = "Weak Evidence")]
    WeakEvidence,
    /// 中等证据（4-9 条结果）
    #[serde(rename = "Moderate Evidence")]
    ModerateEvidence,
    /// 强证据（10 条及以上）
    #[serde(rename = "Strong Evidence")]
    StrongEvidence,
}

impl ConfidenceLevel {
    /// 按结果数量计算置信度等级
    pub fn from_result_count(result_count: usize) -> Self {
        match result_count {
            0 => ConfidenceLevel::NotSupported,
            1..=3 => ConfidenceLevel::WeakEvidence,
            4..=9 => ConfidenceLevel::ModerateEvidence,
            _ => ConfidenceLevel::StrongEvidence,
        }
    }

    /// 等级标签
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::NotSupported => "Not supported",
            ConfidenceLevel::WeakEvidence => "Weak Evidence",
            ConfidenceLevel::ModerateEvidence => "Moderate Evidence",
            ConfidenceLevel::StrongEvidence => "Strong Evidence",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
