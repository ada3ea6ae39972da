//! Fail-fast assertion runner.
//!
//! A run walks an ordered list of labeled checks. Each check produces a
//! condition; the reporter asserts it. The first error of any kind ends the
//! run, gets reported once on the error stream, and turns into exit code 1.

mod reporter;

use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info};

use crate::error::{Result, SmokeError};

pub use reporter::{Reporter, FAILURE_PREFIX, HEADER, PASS_PREFIX, SUCCESS_BANNER};

/// Produces a check's condition. Errors abort the run like a false condition.
pub type Condition<'a> = Box<dyn Fn() -> Result<bool> + 'a>;

/// One labeled condition in a run.
pub struct Check<'a> {
    label: String,
    condition: Condition<'a>,
}

impl<'a> Check<'a> {
    pub fn new(label: impl Into<String>, condition: impl Fn() -> Result<bool> + 'a) -> Self {
        Self {
            label: label.into(),
            condition: Box::new(condition),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn evaluate(&self) -> Result<bool> {
        (self.condition)()
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every check passed.
    Passed { checks: usize },
    /// A check failed. `label` is `None` when the run broke before any check.
    Failed {
        label: Option<String>,
        error: SmokeError,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Passed { .. })
    }

    /// Process exit status: 0 on success, 1 on any failure.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<&Outcome> for ExitCode {
    fn from(outcome: &Outcome) -> Self {
        ExitCode::from(outcome.exit_status())
    }
}

/// Ordered, fail-fast sequence of checks.
#[derive(Default)]
pub struct Runner<'a> {
    checks: Vec<Check<'a>>,
}

impl<'a> Runner<'a> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check to the end of the sequence.
    pub fn check(
        mut self,
        label: impl Into<String>,
        condition: impl Fn() -> Result<bool> + 'a,
    ) -> Self {
        self.checks.push(Check::new(label, condition));
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.checks.iter().map(Check::label).collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order, stopping at the first failure.
    pub fn run<O: Write, E: Write>(&self, reporter: &mut Reporter<O, E>) -> Outcome {
        if let Err(error) = reporter.header() {
            reporter.failed(&error);
            return Outcome::Failed { label: None, error };
        }

        for (index, check) in self.checks.iter().enumerate() {
            debug!(index, label = %check.label, "Evaluating check");
            let result = check
                .evaluate()
                .and_then(|condition| reporter.assert(condition, Some(check.label.as_str())));

            if let Err(error) = result {
                debug!(index, label = %check.label, error = %error, "Check failed");
                reporter.failed(&error);
                return Outcome::Failed {
                    label: Some(check.label.clone()),
                    error,
                };
            }
        }

        if let Err(error) = reporter.all_passed() {
            reporter.failed(&error);
            return Outcome::Failed { label: None, error };
        }

        info!(checks = self.checks.len(), "Smoke run passed");
        Outcome::Passed {
            checks: self.checks.len(),
        }
    }
}
