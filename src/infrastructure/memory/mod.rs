//! Memory Layer - In-Memory State Management
//!
//! 实现 BookRepositoryPort，进程生命周期内在内存中保存图书记录

mod book_store;

pub use book_store::InMemoryBookStore;
