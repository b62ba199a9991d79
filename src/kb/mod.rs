//! Tiered knowledge base content.
//!
//! Reference Q/A content lives in a tabular source (one sheet per tier)
//! and is served through a shared TTL cache.

pub mod cache;
pub mod format;
pub mod loader;
pub mod source;
pub mod tier;

pub use cache::{CacheStore, MemoryCache};
pub use loader::{KnowledgeBaseLoader, TierStats};
pub use source::{CsvDirectorySource, MemorySource, TabularSource};
pub use tier::KbTier;
