//! Parish triage — request classification and tiered knowledge base.

pub mod config;
pub mod error;
pub mod kb;
pub mod pipeline;
