//! Book Context - Entity

use serde::{Deserialize, Serialize};

use super::BookId;

/// 图书记录
///
/// 不变量:
/// - `id` 只由存储在创建时分配
/// - 更新只替换 title / author / year / isbn，`id` 保持不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl Book {
    /// 用存储分配的 ID 实体化一条新记录
    pub fn from_new(id: BookId, new_book: NewBook) -> Self {
        Self {
            id,
            title: new_book.title,
            author: new_book.author,
            year: new_book.year,
            isbn: new_book.isbn,
        }
    }

    /// 用另一条记录的可变字段覆盖当前记录
    pub fn overwrite_with(&mut self, other: Book) {
        self.title = other.title;
        self.author = other.author;
        self.year = other.year;
        self.isbn = other.isbn;
    }
}

/// 创建图书时的载荷（不含 ID）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: 0,
            isbn: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_assigns_id() {
        let book = Book::from_new(
            BookId::new(9),
            NewBook::new("Dune", "Frank Herbert").with_year(1965),
        );

        assert_eq!(book.id, BookId::new(9));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, 1965);
        assert_eq!(book.isbn, None);
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut book = Book::from_new(BookId::new(1), NewBook::new("Old", "Old"));
        book.overwrite_with(Book {
            id: BookId::new(99),
            title: "New".to_string(),
            author: "New".to_string(),
            year: 2000,
            isbn: Some("123".to_string()),
        });

        assert_eq!(book.id, BookId::new(1));
        assert_eq!(book.title, "New");
        assert_eq!(book.isbn.as_deref(), Some("123"));
    }

    #[test]
    fn test_json_shape() {
        let book = Book::from_new(
            BookId::new(3),
            NewBook::new("1984", "George Orwell")
                .with_year(1949)
                .with_isbn("978-0451524935"),
        );
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "title": "1984",
                "author": "George Orwell",
                "year": 1949,
                "isbn": "978-0451524935"
            })
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let book: Book =
            serde_json::from_str(r#"{"id":1,"title":"X","author":"Y"}"#).unwrap();
        assert_eq!(book.year, 0);
        assert_eq!(book.isbn, None);
    }
}
