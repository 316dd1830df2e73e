use std::error::Error;
use std::fmt;
use std::panic::Location;

use crate::application::ports::DocumentParserError;

/// Failure of a whole load operation. Records the raise site and keeps the
/// typed cause, so diagnostics carry file, line, message, and the full
/// cause chain without relying on unwinding metadata.
#[derive(Debug)]
pub struct LoadError {
    message: String,
    file: &'static str,
    line: u32,
    source: DocumentParserError,
}

impl LoadError {
    #[track_caller]
    pub fn new(message: impl Into<String>, source: DocumentParserError) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            file: location.file(),
            line: location.line(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The typed parser failure that caused this error.
    pub fn parser_error(&self) -> &DocumentParserError {
        &self.source
    }

    /// Every error in the cause chain, outermost first, rendered as text.
    pub fn cause_chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn Error + 'static)> = Some(&self.source);
        while let Some(err) = current {
            chain.push(err.to_string());
            current = err.source();
        }
        chain
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error in [{}] at line [{}] | Message: {}",
            self.file, self.line, self.message
        )?;
        for cause in self.cause_chain() {
            write!(f, "\nCaused by: {cause}")?;
        }
        Ok(())
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
