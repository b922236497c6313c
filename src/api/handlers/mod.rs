//! Handler 模块

pub mod chat_handler;
pub mod stats_handler;
pub mod verify_handler;
