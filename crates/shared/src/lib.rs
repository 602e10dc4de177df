//! 共享库
//!
//! 包含工作区内共用的配置、错误处理、日志初始化等基础设施代码。

pub mod config;
pub mod error;
pub mod observability;
