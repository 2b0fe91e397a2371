//! 示例数据

use super::{Book, BookId, NewBook};

/// 启动时写入存储的五本示例图书，ID 为 1..=5
pub fn sample_books() -> Vec<Book> {
    [
        ("The Great Gatsby", "F. Scott Fitzgerald", 1925, "978-0743273565"),
        ("To Kill a Mockingbird", "Harper Lee", 1960, "978-0446310789"),
        ("1984", "George Orwell", 1949, "978-0451524935"),
        ("The Catcher in the Rye", "J.D. Salinger", 1951, "978-0316769488"),
        ("Pride and Prejudice", "Jane Austen", 1813, "978-0141439518"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, author, year, isbn), id)| {
        Book::from_new(
            BookId::new(id),
            NewBook::new(title, author).with_year(year).with_isbn(isbn),
        )
    })
    .collect()
}
