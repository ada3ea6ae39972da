//! Console reporting for smoke runs.

use std::io::Write;

use crate::error::{Result, SmokeError};

pub const HEADER: &str = "Running tests...";
pub const PASS_PREFIX: &str = "✓ Test passed";
pub const SUCCESS_BANNER: &str = "✓ All tests passed!";
pub const FAILURE_PREFIX: &str = "✗ Test failed:";

/// Writes run progress to an output stream and failures to an error stream.
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", HEADER)?;
        Ok(())
    }

    /// Fail with an assertion error unless `condition` holds.
    ///
    /// A passing assertion is acknowledged on the output stream with its
    /// message. A failing one writes nothing; reporting is left to whoever
    /// catches the error.
    pub fn assert(&mut self, condition: bool, message: Option<&str>) -> Result<()> {
        if !condition {
            return Err(SmokeError::assertion(message));
        }
        match message {
            Some(message) => writeln!(self.out, "{}: {}", PASS_PREFIX, message)?,
            None => writeln!(self.out, "{}", PASS_PREFIX)?,
        }
        Ok(())
    }

    pub fn all_passed(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", SUCCESS_BANNER)?;
        self.out.flush()?;
        Ok(())
    }

    /// Report a fatal error. Best effort: the stream may be the thing that broke.
    pub fn failed(&mut self, error: &SmokeError) {
        let _ = self.out.flush();
        let _ = writeln!(self.err, "\n{} {}", FAILURE_PREFIX, error);
        let _ = self.err.flush();
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
