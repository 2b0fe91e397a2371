//! Book Commands

use crate::domain::{Book, BookId, NewBook};

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub book: NewBook,
}

/// 更新图书命令
///
/// `path_id` 来自请求路径，必须与 `book.id` 一致
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub path_id: BookId,
    pub book: Book,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
