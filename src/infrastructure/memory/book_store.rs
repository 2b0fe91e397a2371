//! In-Memory Book Store Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{BookRepositoryPort, IdStrategy};
use crate::domain::{sample_books, Book, BookId, NewBook};

/// 受同一把锁保护的存储状态
#[derive(Debug)]
struct Shelf {
    /// 按插入顺序保存
    books: Vec<Book>,
    /// Sequential 策略下的下一个 ID
    next_id: BookId,
}

impl Shelf {
    fn new(books: Vec<Book>) -> Self {
        let next_id = books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or_default()
            .next();
        Self { books, next_id }
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    fn allocate_id(&mut self, strategy: IdStrategy) -> BookId {
        match strategy {
            IdStrategy::Sequential => {
                let id = self.next_id;
                self.next_id = id.next();
                id
            }
            IdStrategy::CountBased => BookId::new(self.books.len() as i64 + 1),
        }
    }
}

/// 内存图书存储
///
/// 整个状态位于一把 `RwLock` 之后，五个操作各自只加一次锁，
/// 因此彼此之间是原子的。
pub struct InMemoryBookStore {
    shelf: RwLock<Shelf>,
    id_strategy: IdStrategy,
}

impl InMemoryBookStore {
    /// 创建空存储
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self::with_books(Vec::new(), id_strategy)
    }

    /// 使用给定记录初始化存储
    pub fn with_books(books: Vec<Book>, id_strategy: IdStrategy) -> Self {
        Self {
            shelf: RwLock::new(Shelf::new(books)),
            id_strategy,
        }
    }

    /// 写入五本示例图书
    pub fn seeded(id_strategy: IdStrategy) -> Self {
        Self::with_books(sample_books(), id_strategy)
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookStore {
    async fn list_all(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    async fn get_by_id(&self, id: BookId) -> Option<Book> {
        let shelf = self.shelf.read().await;
        shelf.books.iter().find(|b| b.id == id).cloned()
    }

    async fn create(&self, new_book: NewBook) -> Book {
        let mut shelf = self.shelf.write().await;
        let id = shelf.allocate_id(self.id_strategy);
        let book = Book::from_new(id, new_book);
        shelf.books.push(book.clone());

        tracing::info!(book_id = %id, title = %book.title, "Book created");
        book
    }

    async fn update(&self, book: Book) -> Option<Book> {
        let mut shelf = self.shelf.write().await;
        let Some(index) = shelf.position(book.id) else {
            tracing::debug!(book_id = %book.id, "Update skipped, book not found");
            return None;
        };

        let existing = &mut shelf.books[index];
        existing.overwrite_with(book);

        tracing::info!(book_id = %existing.id, title = %existing.title, "Book updated");
        Some(existing.clone())
    }

    async fn delete(&self, id: BookId) -> bool {
        let mut shelf = self.shelf.write().await;
        match shelf.position(id) {
            Some(index) => {
                let removed = shelf.books.remove(index);
                tracing::info!(book_id = %id, title = %removed.title, "Book deleted");
                true
            }
            None => {
                tracing::debug!(book_id = %id, "Delete skipped, book not found");
                false
            }
        }
    }

    async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }
}
