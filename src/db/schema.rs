//! SQL DDL for the library store

/// Categories table; names are unique so seeding can rely on `INSERT OR IGNORE`.
pub const CREATE_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)
"#;

/// Books table. Only its existence is guaranteed; nothing reads or writes it yet.
pub const CREATE_BOOKS: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL
)
"#;

pub const INSERT_CATEGORY_IF_ABSENT: &str = "INSERT OR IGNORE INTO categories (name) VALUES (?)";

/// Tables every initialized store contains
pub const TABLES: [&str; 2] = ["categories", "books"];
