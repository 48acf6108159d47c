//! Builtin tool handlers
//!
//! One module per tool, with pure helpers separated from I/O so the
//! interesting behavior is unit-testable without touching disk or network.

pub mod file_operations;
pub mod web_fetch;
pub mod web_search;

pub use file_operations::{FileReadTool, FileWriteTool};
pub use web_fetch::WebFetchTool;
pub use web_search::WebSearchTool;
