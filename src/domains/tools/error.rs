//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::NotFound(name) => {
                McpError::invalid_params(format!("Unknown tool: {}", name), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_to_invalid_params() {
        let err: McpError = ToolError::not_found("reboot_appliance").into();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("Unknown tool: reboot_appliance"));

        let err: McpError = ToolError::invalid_arguments("num must be between 1 and 20").into();
        assert_eq!(err.code.0, -32602);
    }
}
