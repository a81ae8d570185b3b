//! User-facing notice slot
//!
//! Mutation failures surface here. The original UI used a blocking alert;
//! this is the non-blocking toast slot the renderer drains.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Single pending notice per screen
#[derive(Debug, Default)]
pub struct Notice {
    message: Option<(Severity, String)>,
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some((Severity::Error, message.into()));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some((Severity::Info, message.into()));
    }

    /// The pending message, if any
    pub fn current(&self) -> Option<&str> {
        self.message.as_ref().map(|(_, m)| m.as_str())
    }

    pub fn is_error(&self) -> bool {
        matches!(self.message, Some((Severity::Error, _)))
    }

    /// Drain the notice for display
    pub fn take(&mut self) -> Option<(Severity, String)> {
        self.message.take()
    }
}
