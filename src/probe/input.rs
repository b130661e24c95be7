//! Scoped line input.
//!
//! An [`InputSession`] binds a reader and a writer for exactly one use
//! scope. Once closed, every further read fails with
//! [`ProbeError::InputClosed`]; dropping the session closes it.

use std::io::{BufRead, Write};

use crate::error::{ProbeError, Result};

/// Produces a fresh input session each time an interactive step runs.
pub type InputFactory = Box<dyn FnMut() -> InputSession>;

/// A text input/output binding that must be released after use.
pub struct InputSession {
    reader: Option<Box<dyn BufRead>>,
    writer: Option<Box<dyn Write>>,
}

impl InputSession {
    /// Bind a session to an arbitrary reader and writer.
    pub fn new(reader: impl BufRead + 'static, writer: impl Write + 'static) -> Self {
        Self {
            reader: Some(Box::new(reader)),
            writer: Some(Box::new(writer)),
        }
    }

    /// Bind a session to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }

    /// Factory producing stdio sessions.
    pub fn stdio_factory() -> InputFactory {
        Box::new(Self::stdio)
    }

    /// Write `question`, then block until one line is read.
    ///
    /// The returned answer excludes the line terminator (`\n` or `\r\n`) and
    /// keeps all other whitespace. End of input before any byte is read is
    /// an error, not an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        let (Some(reader), Some(writer)) = (self.reader.as_mut(), self.writer.as_mut()) else {
            return Err(ProbeError::InputClosed);
        };

        write!(writer, "{}", question)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(ProbeError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Release the reader and writer. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().ok();
        }
        if self.reader.take().is_some() {
            tracing::debug!("Input session released");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Run `f` with this session, then close it whether `f` succeeded or not.
    pub fn scoped<T>(mut self, f: impl FnOnce(&mut InputSession) -> Result<T>) -> Result<T> {
        let result = f(&mut self);
        self.close();
        result
    }
}

impl Drop for InputSession {
    fn drop(&mut self) {
        self.close();
    }
}
