//! Bookshelf - 内存图书资源 API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书记录、ID、示例数据
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 列表 / 详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: /books RESTful API
//! - Memory: InMemoryBookStore

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
