//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content};

/// Wrap plain text as a successful tool result
///
/// Tools that report failures as readable text (rather than protocol
/// errors) return through here on both branches.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "hello world"),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_text_success_empty() {
        let result = text_success(String::new());
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }
}
