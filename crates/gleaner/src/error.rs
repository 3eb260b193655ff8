// ABOUTME: Error types for the gleaner pipeline: ErrorCode enum and ScrapeError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the pipeline stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Config,
    Fetch,
    Extract,
    Write,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Config => "invalid configuration",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Extract => "extraction error",
            ErrorCode::Write => "write error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for scrape operations.
///
/// `subject` names what the operation was working on: the URL for config,
/// fetch and extract errors, the destination path for write errors.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub subject: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gleaner: {} {}: {}", self.op, self.subject, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    /// Create a Config error.
    pub fn config(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Config,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an Extract error.
    pub fn extract(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Extract,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Write error naming the failed path.
    pub fn write(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Write,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an Extract error.
    pub fn is_extract(&self) -> bool {
        self.code == ErrorCode::Extract
    }

    /// Returns true if this is a Write error.
    pub fn is_write(&self) -> bool {
        self.code == ErrorCode::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_op_subject_and_code() {
        let err = ScrapeError::fetch("http://example.com", "Fetch", None);
        assert_eq!(
            err.to_string(),
            "gleaner: Fetch http://example.com: fetch error"
        );
    }

    #[test]
    fn display_appends_source() {
        let err = ScrapeError::write(
            "/tmp/out.json",
            "WriteJson",
            Some(anyhow::anyhow!("permission denied")),
        );
        assert_eq!(
            err.to_string(),
            "gleaner: WriteJson /tmp/out.json: write error: permission denied"
        );
    }

    #[test]
    fn predicates_match_code() {
        assert!(ScrapeError::config("", "Locator", None).is_config());
        assert!(ScrapeError::fetch("", "Fetch", None).is_fetch());
        assert!(ScrapeError::extract("", "Extract", None).is_extract());
        assert!(ScrapeError::write("", "WriteCsv", None).is_write());
    }
}
