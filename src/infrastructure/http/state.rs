//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookHandler, DeleteBookHandler, UpdateBookHandler,
    // Query handlers
    GetBookHandler, ListBooksHandler,
    // Ports
    BookRepositoryPort,
};

/// 应用状态
///
/// 存储由调用方构造后注入，这里不持有任何全局状态
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub update_book_handler: UpdateBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self {
            book_repo: book_repo.clone(),

            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            update_book_handler: UpdateBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            get_book_handler: GetBookHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(book_repo),
        }
    }
}
