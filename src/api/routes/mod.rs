//! 路由模块

pub mod chat_routes;
pub mod stats_routes;
pub mod verify_routes;
