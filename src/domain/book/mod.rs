//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 记录及其可变字段
//! - 图书 ID 值对象
//! - 启动时的示例数据

mod entity;
mod seed;
mod value_objects;

pub use entity::{Book, NewBook};
pub use seed::sample_books;
pub use value_objects::BookId;
