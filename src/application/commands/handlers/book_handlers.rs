//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::Book;

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 创建永远成功，返回带有分配 ID 的记录
    pub async fn handle(&self, command: CreateBook) -> Book {
        self.book_repo.create(command.book).await
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<Book, ApplicationError> {
        // 路径 ID 与请求体 ID 不一致时不触碰存储
        if command.path_id != command.book.id {
            return Err(ApplicationError::invalid_request(format!(
                "path id {} does not match body id {}",
                command.path_id, command.book.id
            )));
        }

        let book_id = command.book.id;
        self.book_repo
            .update(command.book)
            .await
            .ok_or_else(|| ApplicationError::not_found("Book", book_id))
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        if self.book_repo.delete(command.book_id).await {
            Ok(())
        } else {
            Err(ApplicationError::not_found("Book", command.book_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::IdStrategy;
    use crate::domain::{BookId, NewBook};
    use crate::infrastructure::memory::InMemoryBookStore;

    fn seeded_repo() -> Arc<dyn BookRepositoryPort> {
        Arc::new(InMemoryBookStore::seeded(IdStrategy::Sequential))
    }

    fn book(id: i64, title: &str) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: "Someone".to_string(),
            year: 2000,
            isbn: None,
        }
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let handler = CreateBookHandler::new(seeded_repo());
        let created = handler
            .handle(CreateBook {
                book: NewBook::new("X", "Y"),
            })
            .await;

        assert_eq!(created.id, BookId::new(6));
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_ids() {
        let repo = seeded_repo();
        let handler = UpdateBookHandler::new(repo.clone());

        let result = handler
            .handle(UpdateBook {
                path_id: BookId::new(1),
                book: book(2, "Changed"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidRequest(_))));
        let untouched = repo.get_by_id(BookId::new(2)).await.unwrap();
        assert_eq!(untouched.title, "To Kill a Mockingbird");
    }

    #[tokio::test]
    async fn test_update_missing_book_is_not_found() {
        let handler = UpdateBookHandler::new(seeded_repo());

        let result = handler
            .handle(UpdateBook {
                path_id: BookId::new(77),
                book: book(77, "Ghost"),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_existing_book() {
        let handler = UpdateBookHandler::new(seeded_repo());

        let updated = handler
            .handle(UpdateBook {
                path_id: BookId::new(1),
                book: book(1, "New"),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, BookId::new(1));
        assert_eq!(updated.title, "New");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let handler = DeleteBookHandler::new(seeded_repo());
        let command = DeleteBook {
            book_id: BookId::new(1),
        };

        assert!(handler.handle(command.clone()).await.is_ok());
        assert!(matches!(
            handler.handle(command).await,
            Err(ApplicationError::NotFound { .. })
        ));
    }
}
