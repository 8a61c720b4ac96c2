//! Helpers shared by unit tests

use crate::core::{Appender, AppenderCore, LogLevel, Result};
use parking_lot::Mutex;

/// Appender that records every rendered line in memory.
#[derive(Default)]
pub(crate) struct CaptureAppender {
    core: AppenderCore,
    lines: Mutex<Vec<String>>,
}

impl CaptureAppender {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Appender for CaptureAppender {
    fn core(&self) -> &AppenderCore {
        &self.core
    }

    fn write(&self, _level: LogLevel, text: &str) -> Result<()> {
        self.lines.lock().push(text.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}
