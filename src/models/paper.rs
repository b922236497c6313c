//! 论文记录模型
//!
//! 所有检索源统一归一化到 [`Paper`]。四个字段永远非空：
//! 提供方缺失的字段用占位值补齐，而不是传递 null。

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// 摘要最大保留长度（字符数）
pub const MAX_ABSTRACT_LEN: usize = 500;

/// 标题缺失时的占位值
pub const NO_TITLE_PLACEHOLDER: &str = "No title available";

/// 摘要缺失时的占位值
pub const NO_ABSTRACT_PLACEHOLDER: &str = "No abstract available";

/// 发表年份
///
/// 序列化为整数；未知年份序列化为字符串 "N/A"。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperYear {
    /// 已知年份
    Known(i32),
    /// 未知年份
    Unknown,
}

impl From<Option<i32>> for PaperYear {
    fn from(year: Option<i32>) -> Self {
        match year {
            Some(y) => PaperYear::Known(y),
            None => PaperYear::Unknown,
        }
    }
}

impl Serialize for PaperYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaperYear::Known(year) => serializer.serialize_i32(*year),
            PaperYear::Unknown => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for PaperYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.as_i64() {
            Some(year) => Ok(PaperYear::Known(year as i32)),
            None => Ok(PaperYear::Unknown),
        }
    }
}

/// 检索到的论文记录
///
/// 在单次验证请求内构造一次，之后只读；不作为实体持久化。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    /// 论文标题
    pub title: String,
    /// 论文链接（提供方给出或由标识符合成）
    pub url: String,
    /// 发表年份
    pub year: PaperYear,
    /// 摘要（截断到 500 字符）
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Paper {
    /// 构造论文记录，缺失字段补占位值，摘要统一截断
    pub fn new(
        title: Option<String>,
        url: String,
        year: Option<i32>,
        abstract_text: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_string()),
            url,
            year: year.into(),
            abstract_text: truncate_abstract(
                &abstract_text.unwrap_or_else(|| NO_ABSTRACT_PLACEHOLDER.to_string()),
            ),
        }
    }
}

/// 按字符截断摘要，避免切断多字节字符
pub fn truncate_abstract(text: &str) -> String {
    text.chars().take(MAX_ABSTRACT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_placeholders() {
        let paper = Paper::new(None, "https://doi.org/10.1/x".to_string(), None, None);

        assert_eq!(paper.title, NO_TITLE_PLACEHOLDER);
        assert_eq!(paper.abstract_text, NO_ABSTRACT_PLACEHOLDER);
        assert_eq!(paper.year, PaperYear::Unknown);
    }

    #[test]
    fn test_abstract_truncated_to_limit() {
        let long = "a".repeat(800);
        let paper = Paper::new(
            Some("t".to_string()),
            "u".to_string(),
            Some(2020),
            Some(long),
        );

        assert_eq!(paper.abstract_text.chars().count(), MAX_ABSTRACT_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "学".repeat(600);
        let truncated = truncate_abstract(&text);

        assert_eq!(truncated.chars().count(), MAX_ABSTRACT_LEN);
    }

    #[test]
    fn test_year_serializes_as_number_or_sentinel() {
        let known = serde_json::to_value(PaperYear::Known(2021)).unwrap();
        let unknown = serde_json::to_value(PaperYear::Unknown).unwrap();

        assert_eq!(known, serde_json::json!(2021));
        assert_eq!(unknown, serde_json::json!("N/A"));
    }

    #[test]
    fn test_paper_serializes_abstract_under_provider_key() {
        let paper = Paper::new(
            Some("Effects of X".to_string()),
            "https://example.org".to_string(),
            Some(2019),
            Some("body".to_string()),
        );
        let value = serde_json::to_value(&paper).unwrap();

        assert_eq!(value["abstract"], "body");
        assert_eq!(value["year"], 2019);
    }
}
