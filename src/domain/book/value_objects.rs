//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

/// 图书唯一标识（由存储分配，客户端不可指定）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 下一个顺序 ID
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&BookId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: BookId = serde_json::from_str("42").unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(BookId::new(5).next(), BookId::new(6));
    }
}
