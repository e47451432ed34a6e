//! SQLite-backed repository implementations.

pub mod sqlite_click_repository;
pub mod sqlite_link_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
