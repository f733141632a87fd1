/// Blog Service Library
///
/// A small HTTP service for managing blog posts backed by SQLite.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the post endpoints
/// - `models`: Data structures for posts
/// - `db`: Database access layer and post repository
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
