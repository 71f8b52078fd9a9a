use std::fmt;
use tracing::error;

/// Sink for operator-facing error lines.
pub trait Logger: Send + Sync {
    fn error(&self, line: &str, err: &dyn fmt::Display);
}

/// `Logger` that forwards to the active `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    session: String,
}

impl TracingLogger {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }

    pub fn session(&self) -> &str {
        &self.session
    }
}

impl Logger for TracingLogger {
    fn error(&self, line: &str, err: &dyn fmt::Display) {
        // Error text goes into the message so it always follows the line
        error!(session = %self.session, "{}: {}", line, err);
    }
}
