//! Error type for Sheets operations.
//!
//! Deliberately flat: remote failures are not translated or retried. The
//! service's error body rides along in `Http` untouched so callers see
//! exactly what the API said.

/// Error type for Sheets operations.
#[derive(Debug)]
pub enum SheetsError {
    /// Local file I/O error (key file)
    Io(String),
    /// Key file unreadable as a service-account key, or unusable for signing
    Key(String),
    /// Token exchange rejected by the identity provider
    Auth(String),
    /// Network error
    Network(String),
    /// HTTP error with status code and raw response body
    Http(u16, String),
    /// JSON parsing error
    Parse(String),
    /// Sheet title not present in the spreadsheet's title→id mapping
    UnknownSheet(String),
}

impl std::fmt::Display for SheetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsError::Io(msg) => write!(f, "I/O error: {}", msg),
            SheetsError::Key(msg) => write!(f, "Service account key error: {}", msg),
            SheetsError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            SheetsError::Network(msg) => write!(f, "Network error: {}", msg),
            SheetsError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            SheetsError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SheetsError::UnknownSheet(title) => write!(f, "Unknown sheet: {}", title),
        }
    }
}

impl std::error::Error for SheetsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_preserves_body() {
        let err = SheetsError::Http(429, r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#.into());
        let msg = err.to_string();
        assert!(msg.starts_with("HTTP 429"));
        assert!(msg.contains("RESOURCE_EXHAUSTED"));
    }

    #[test]
    fn test_unknown_sheet_names_the_title() {
        let err = SheetsError::UnknownSheet("Budget".into());
        assert_eq!(err.to_string(), "Unknown sheet: Budget");
    }
}
