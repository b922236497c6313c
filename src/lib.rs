//! Authentica - 信息可信度验证服务
//!
//! 针对自然语言陈述检索学术论文证据，聚合多个检索源的结果，
//! 按结果数量给出置信度评级，并生成面向普通读者的 AI 摘要。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod providers;
pub mod services;
pub mod storage;
