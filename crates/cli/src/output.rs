//! Report rendering.

use signup_common::AppResult;

use crate::args::OutputFormat;
use crate::commands::Report;

/// Text shown for a passing check
pub const OK_TEXT: &str = "OK";

/// Render a report for stdout.
pub fn render(report: &Report, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(report
            .message
            .clone()
            .unwrap_or_else(|| OK_TEXT.to_string())),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> Report {
        Report {
            valid: false,
            message: Some("Please fill in all fields".to_string()),
        }
    }

    fn accepted() -> Report {
        Report {
            valid: true,
            message: None,
        }
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(&accepted(), OutputFormat::Text).unwrap(), "OK");
        assert_eq!(
            render(&rejected(), OutputFormat::Text).unwrap(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            render(&accepted(), OutputFormat::Json).unwrap(),
            r#"{"valid":true,"message":null}"#
        );
        assert_eq!(
            render(&rejected(), OutputFormat::Json).unwrap(),
            r#"{"valid":false,"message":"Please fill in all fields"}"#
        );
    }
}
