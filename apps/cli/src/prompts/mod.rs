#![allow(dead_code)]

// Prompt library for the paper-summarization pipeline.
// Each pipeline stage keeps its prompts in its own module alongside the
// serde structs for the JSON it expects back. The orchestration layer
// replaces `{placeholder}` markers before sending; nothing in this crate
// calls an LLM directly.

pub mod qna;
pub mod summarizer;
pub mod vector_store;
pub mod weekly;

/// Last-resort repair prompt sent back with a completion that failed to
/// parse as JSON. Replace `{completion}` before sending.
pub const NAIVE_JSON_FIX: &str = r#"Instructions:
--------------
The following JSON is not valid. Please fix it and resubmit.

{completion}
--------------
"#;
