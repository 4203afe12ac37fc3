//! Informational banner served for `/` and every unrouted request

pub const BANNER: &str = "Library Management System Backend (Rust + SQLite)";

/// Service banner
pub async fn banner() -> &'static str {
    BANNER
}
