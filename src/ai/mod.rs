//! All AI/LLM functionality

pub mod client;
pub mod provider;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens, extract_summary};
pub use provider::SummaryProvider;
