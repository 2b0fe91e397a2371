//! Book HTTP Handlers
//!
//! 每个 handler 只做一件事：把请求转成一次存储调用，再把结果映射为状态码

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateBook};
use crate::domain::{Book, BookId};
use crate::infrastructure::http::dto::BookPayload;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::routes::book_location;
use crate::infrastructure::http::state::AppState;

fn parse_payload(
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<BookPayload, ApiError> {
    payload
        .map(|Json(p)| p)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

fn parse_id(path: Result<Path<BookId>, PathRejection>) -> Result<BookId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// GET /books
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(state.list_books_handler.handle(ListBooks).await)
}

/// GET /books/:id
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let book_id = parse_id(path)?;
    let book = state.get_book_handler.handle(GetBook { book_id }).await?;
    Ok(Json(book))
}

/// POST /books
///
/// 201 + 新记录，Location 指向 GET /books/:id
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Book>), ApiError> {
    let payload = parse_payload(payload)?;
    if let Some(ignored) = payload.id {
        tracing::debug!(client_id = %ignored, "Ignoring client supplied id on create");
    }

    let book = state
        .create_book_handler
        .handle(CreateBook {
            book: payload.into_new_book(),
        })
        .await;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, book_location(book.id))],
        Json(book),
    ))
}

/// PUT /books/:id
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<BookId>, PathRejection>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let path_id = parse_id(path)?;
    let book = parse_payload(payload)?.into_book();

    state
        .update_book_handler
        .handle(UpdateBook { path_id, book })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /books/:id
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let book_id = parse_id(path)?;
    state
        .delete_book_handler
        .handle(DeleteBook { book_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
