//! LLM analysis of collected tweets.
//!
//! Renders a bounded subset of loaded tweets into a single
//! chat-completion prompt, sends it to OpenAI, and parses the response
//! into a typed verdict. The model is untrusted output: every response
//! field is optional on the wire, and any transport, status, or parse
//! failure degrades to the non-relevant default verdict rather than
//! surfacing an error.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::OpenAiClient;
pub use error::AnalysisError;
pub use prompt::{analysis_subset, build_prompt, MAX_ANALYZED_TWEETS};
pub use types::{AnalysisResult, Finding};
