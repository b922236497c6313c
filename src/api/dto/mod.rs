//! DTO 模块
//!
//! 定义 API 请求和响应数据结构。

pub mod chat_dto;
pub mod stats_dto;
pub mod verify_dto;
