//! Book Repository Port - 出站端口
//!
//! 定义图书存储的抽象接口
//! 具体实现在 infrastructure 层（内存存储）
//!
//! 存储本身不会失败：查不到记录是正常结果，用 `Option` / `bool` 表达，
//! 由应用层决定如何转换为错误。

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Book, BookId, NewBook};

/// ID 分配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// 单调递增计数器，删除后也不会复用 ID
    #[default]
    Sequential,
    /// 兼容旧行为：新 ID = 当前记录数 + 1
    ///
    /// 删除记录后可能与仍存在的记录 ID 冲突
    CountBased,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::CountBased => "count_based",
        }
    }
}

/// Book Repository Port
///
/// 每个操作相对其他操作都是原子的
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 按插入顺序返回全部图书
    async fn list_all(&self) -> Vec<Book>;

    /// 根据 ID 查找图书
    async fn get_by_id(&self, id: BookId) -> Option<Book>;

    /// 创建图书并分配 ID
    async fn create(&self, new_book: NewBook) -> Book;

    /// 按 `book.id` 覆盖已有记录的可变字段，不存在时返回 None
    async fn update(&self, book: Book) -> Option<Book>;

    /// 删除图书，返回是否确实删除了记录
    async fn delete(&self, id: BookId) -> bool;

    /// 当前记录数
    async fn len(&self) -> usize {
        self.list_all().await.len()
    }
}
