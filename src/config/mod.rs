//! 配置管理
//!
//! 配置来源按优先级从低到高：内置默认值、`config.toml`、`config.{APP_ENV}.toml`、
//! `CLASSROOM_` 前缀的环境变量，以及少量常用环境变量的直接覆盖。

#[path = "impl.rs"]
mod config_impl;
mod structs;

pub use structs::*;
