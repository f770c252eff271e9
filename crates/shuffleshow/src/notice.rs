/// Severity of a user-visible report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// A message for the user. Produced by the launcher and the slideshow,
/// drained and displayed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Emit this notice through the log.
    pub fn log(&self) {
        match self.level {
            Level::Info => tracing::info!("{}", self.message),
            Level::Warn => tracing::warn!("{}", self.message),
            Level::Error => tracing::error!("{}", self.message),
        }
    }
}

/// Pending notices, in the order they were raised.
#[derive(Debug, Default)]
pub struct Outbox {
    notices: Vec<Notice>,
}

impl Outbox {
    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Take every pending notice, leaving the outbox empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[cfg(test)]
    pub fn count(&self, level: Level) -> usize {
        self.notices.iter().filter(|n| n.level == level).count()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
