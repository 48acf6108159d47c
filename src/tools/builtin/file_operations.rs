//! File operations tools
//!
//! `file_read` and `file_write` against the workspace tree. Paths resolve
//! through [`Workspace`], reads support 1-indexed line offset/limit windows,
//! writes create missing parent directories and overwrite.

use crate::catalog::ToolDefinition;
use crate::tools::{Tool, ToolError};
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Validated `file_read` arguments
#[derive(Debug, Deserialize)]
struct FileReadArgs {
    path: String,
    offset: Option<usize>,
    limit: Option<usize>,
}

/// Validated `file_write` arguments
#[derive(Debug, Deserialize)]
struct FileWriteArgs {
    path: String,
    content: String,
}

pub struct FileReadTool {
    workspace: Workspace,
}

impl FileReadTool {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Select the requested line window (pure function).
    ///
    /// `offset` is a 1-indexed starting line; `limit` a line count. With
    /// neither given the content is returned whole, including any trailing
    /// newline.
    fn slice_lines(content: &str, offset: Option<usize>, limit: Option<usize>) -> String {
        if offset.is_none() && limit.is_none() {
            return content.to_string();
        }

        let lines: Vec<&str> = content.split('\n').collect();
        let start = offset.map_or(0, |o| o.saturating_sub(1)).min(lines.len());
        let end = limit.map_or(lines.len(), |l| (start + l).min(lines.len()));
        lines[start..end].join("\n")
    }
}

#[async_trait]
impl Tool for FileReadTool {
    fn describe(&self) -> ToolDefinition {
        ToolDefinition {
            name: "file_read".to_string(),
            description: "Read file contents from the workspace".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path to file (relative or absolute)"
                    },
                    "offset": {
                        "type": "number",
                        "description": "Line number to start reading from (1-indexed)",
                        "minimum": 1
                    },
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of lines to read",
                        "minimum": 1
                    }
                },
                "required": ["path"]
            }),
        }
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let args: FileReadArgs = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let path = self.workspace.resolve(&args.path)?;
        let content = tokio::fs::read_to_string(&path).await?;

        Ok(Self::slice_lines(&content, args.offset, args.limit))
    }
}

pub struct FileWriteTool {
    workspace: Workspace,
}

impl FileWriteTool {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Confirmation message for a completed write (pure function).
    fn format_confirmation(path: &str, bytes_written: usize, created_dirs: bool) -> String {
        let mut message = format!("Wrote {bytes_written} bytes to {path}");
        if created_dirs {
            message.push_str(" (created parent directories)");
        }
        message
    }
}

#[async_trait]
impl Tool for FileWriteTool {
    fn describe(&self) -> ToolDefinition {
        ToolDefinition {
            name: "file_write".to_string(),
            description: "Write content to file (creates parent directories if needed)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path to file (relative or absolute)"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to write to file"
                    }
                },
                "required": ["path", "content"]
            }),
        }
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let args: FileWriteArgs = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let path = self.workspace.resolve(&args.path)?;

        let mut created_dirs = false;
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent).await?;
                created_dirs = true;
            }
        }

        tokio::fs::write(&path, &args.content).await?;

        Ok(Self::format_confirmation(
            &args.path,
            args.content.len(),
            created_dirs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn workspace_at(dir: &tempfile::TempDir) -> Workspace {
        Workspace::new(dir.path()).unwrap()
    }

    #[test]
    fn test_slice_lines_whole_content() {
        let content = "a\nb\nc\nd\ne";
        assert_eq!(FileReadTool::slice_lines(content, None, None), content);
    }

    #[test]
    fn test_slice_lines_offset_and_limit() {
        // offset is 1-indexed: offset=2, limit=2 selects lines 2 and 3
        assert_eq!(
            FileReadTool::slice_lines("a\nb\nc\nd\ne", Some(2), Some(2)),
            "b\nc"
        );
    }

    #[test]
    fn test_slice_lines_offset_only() {
        assert_eq!(
            FileReadTool::slice_lines("a\nb\nc\nd\ne", Some(4), None),
            "d\ne"
        );
    }

    #[test]
    fn test_slice_lines_limit_only() {
        assert_eq!(
            FileReadTool::slice_lines("a\nb\nc\nd\ne", None, Some(2)),
            "a\nb"
        );
    }

    #[test]
    fn test_slice_lines_window_past_end() {
        assert_eq!(
            FileReadTool::slice_lines("a\nb", Some(2), Some(10)),
            "b"
        );
        assert_eq!(FileReadTool::slice_lines("a\nb", Some(10), Some(2)), "");
    }

    #[test]
    fn test_format_confirmation() {
        assert_eq!(
            FileWriteTool::format_confirmation("notes.md", 12, false),
            "Wrote 12 bytes to notes.md"
        );
        assert_eq!(
            FileWriteTool::format_confirmation("a/b/notes.md", 12, true),
            "Wrote 12 bytes to a/b/notes.md (created parent directories)"
        );
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let tool = FileReadTool::new(workspace_at(&dir));

        let result = tool.execute(&json!({"path": "missing.txt"})).await;

        assert!(matches!(result, Err(ToolError::Io(_))));
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let workspace = workspace_at(&dir);
        let write = FileWriteTool::new(workspace.clone());
        let read = FileReadTool::new(workspace);

        let confirmation = write
            .execute(&json!({"path": "deep/nested/note.md", "content": "hello\nworld"}))
            .await
            .unwrap();
        assert_eq!(
            confirmation,
            "Wrote 11 bytes to deep/nested/note.md (created parent directories)"
        );

        let content = read
            .execute(&json!({"path": "deep/nested/note.md"}))
            .await
            .unwrap();
        assert_eq!(content, "hello\nworld");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_content() {
        let dir = tempdir().unwrap();
        let workspace = workspace_at(&dir);
        let write = FileWriteTool::new(workspace.clone());
        let read = FileReadTool::new(workspace);

        write
            .execute(&json!({"path": "note.md", "content": "first"}))
            .await
            .unwrap();
        let confirmation = write
            .execute(&json!({"path": "note.md", "content": "second"}))
            .await
            .unwrap();

        // existing parent, no directory note
        assert_eq!(confirmation, "Wrote 6 bytes to note.md");
        let content = read.execute(&json!({"path": "note.md"})).await.unwrap();
        assert_eq!(content, "second");
    }

    #[tokio::test]
    async fn test_read_rejects_traversal_outside_workspace() {
        let dir = tempdir().unwrap();
        let tool = FileReadTool::new(workspace_at(&dir));

        let result = tool.execute(&json!({"path": "../escape.txt"})).await;

        assert!(matches!(result, Err(ToolError::Workspace(_))));
    }
}
