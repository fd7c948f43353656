//! Notice port (driven/secondary port)
//!
//! This module defines the interface for surfacing user-visible notices —
//! the "dismissible message" the interaction controller emits instead of
//! propagating failures up the stack. The CLI implements it on stderr; a
//! richer front end could route notices to a toast area.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because notice delivery is adapter-specific.
//! - Notices are fire-and-forget; the caller does not wait for the user to
//!   acknowledge them, and a failed delivery must never fail the action that
//!   produced it.

use serde::{Deserialize, Serialize};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    /// Informational, e.g. a delete confirmation message from the server
    Info,
    /// Something unexpected that did not fail the action
    Warning,
    /// An action failed; state is unchanged and the user may retry
    Error,
}

impl std::fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoticeSeverity::Info => "info",
            NoticeSeverity::Warning => "warning",
            NoticeSeverity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short description of what happened
    pub title: String,
    /// Detail text, typically the underlying error rendering
    pub body: String,
    /// How prominently the notice should be displayed
    pub severity: NoticeSeverity,
}

impl Notice {
    /// Creates an informational notice
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: NoticeSeverity::Info,
        }
    }

    /// Creates an error notice
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: NoticeSeverity::Error,
        }
    }
}

/// Port trait for delivering notices to the user
#[async_trait::async_trait]
pub trait INoticeSink: Send + Sync {
    /// Delivers a notice
    ///
    /// Implementations should handle delivery failures gracefully; the
    /// controller ignores the result beyond logging it.
    async fn notify(&self, notice: &Notice) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert_eq!(Notice::info("t", "b").severity, NoticeSeverity::Info);
        assert_eq!(Notice::error("t", "b").severity, NoticeSeverity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(NoticeSeverity::Error.to_string(), "error");
    }
}
