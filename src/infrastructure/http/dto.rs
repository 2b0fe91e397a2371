//! Data Transfer Objects

use serde::Deserialize;

use crate::domain::{Book, BookId, NewBook};

// ============================================================================
// Book DTOs
// ============================================================================

/// POST / PUT 请求体
///
/// 与 Book 的 JSON 形状相同，但 `id` 可省略：
/// 创建时忽略它，更新时缺省视为 0（必然与路径 ID 不一致）
#[derive(Debug, Clone, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl BookPayload {
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            title: self.title,
            author: self.author,
            year: self.year,
            isbn: self.isbn,
        }
    }

    pub fn into_book(self) -> Book {
        Book {
            id: self.id.unwrap_or_default(),
            title: self.title,
            author: self.author,
            year: self.year,
            isbn: self.isbn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_drops_client_id() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"id":99,"title":"X","author":"Y"}"#).unwrap();
        assert_eq!(payload.id, Some(BookId::new(99)));

        let new_book = payload.into_new_book();
        assert_eq!(new_book, NewBook::new("X", "Y"));
    }

    #[test]
    fn test_update_payload_without_id() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"title":"X","author":"Y","year":1999}"#).unwrap();
        let book = payload.into_book();
        assert_eq!(book.id, BookId::new(0));
        assert_eq!(book.year, 1999);
    }
}
