//! HTTP Routes
//!
//! API Endpoints:
//! - /ping          GET     健康检查
//! - /books         GET     列出所有图书
//! - /books         POST    创建图书（201 + Location）
//! - /books/:id     GET     获取图书
//! - /books/:id     PUT     更新图书（路径 ID 必须与请求体 ID 一致）
//! - /books/:id     DELETE  删除图书

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;
use crate::domain::BookId;

/// 图书资源路径
pub const BOOKS_PATH: &str = "/books";

/// 单本图书的资源地址，用作创建响应的 Location
pub fn book_location(id: BookId) -> String {
    format!("{}/{}", BOOKS_PATH, id)
}

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            BOOKS_PATH,
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
}
