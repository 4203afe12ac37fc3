//! Data models for the library server

pub mod category;

pub use category::{Category, SEED_CATEGORIES};
