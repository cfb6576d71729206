//! The per-test scope.
//!
//! A [`Testing`] value exists only inside [`Testing::scope`]. The scope owns a
//! fresh suite, records assertions into it, and finalizes it when the test
//! body returns, whichever `return` it took.

use std::fmt::{self, Display};
use std::time::Instant;

use crate::clock;
use crate::result::{Assertion, Suite};

/// Kind of a free-form line emitted from a test body.
///
/// Notes are not part of the result tree. They go to `tracing` at the
/// matching level, with the test name and call site as fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    Msg,
    Warn,
    Err,
    Log,
}

impl Note {
    pub fn as_str(&self) -> &'static str {
        match self {
            Note::Msg => "msg",
            Note::Warn => "warn",
            Note::Err => "err",
            Note::Log => "log",
        }
    }
}

/// Handle passed to every test body.
pub struct Testing {
    suite: Suite,
    start: Instant,
    failed_so_far: bool,
}

impl Testing {
    fn begin(name: &str) -> Self {
        Self {
            suite: Suite::open(name),
            start: clock::now(),
            failed_so_far: false,
        }
    }

    /// Runs `body` in a new scope named `name` and returns the finalized,
    /// still detached suite. The caller attaches it to its parent.
    ///
    /// A panic in `body` propagates and the suite is lost with it.
    pub fn scope<F>(name: &str, body: F) -> Suite
    where
        F: FnOnce(&mut Testing),
    {
        let mut testing = Self::begin(name);
        body(&mut testing);
        testing.finish()
    }

    /// Records one check and returns `passed`.
    ///
    /// Both operands are rendered now; later changes to them do not affect
    /// the recorded text. A failing check never stops the test.
    #[allow(clippy::too_many_arguments)]
    pub fn req<T, U>(
        &mut self,
        file: &str,
        line: u32,
        actual: &T,
        expected: &U,
        operator: &str,
        expr: &str,
        passed: bool,
    ) -> bool
    where
        T: Display + ?Sized,
        U: Display + ?Sized,
    {
        self.suite
            .push(Assertion::new(file, line, actual, expected, operator, expr, passed));
        self.failed_so_far |= !passed;
        passed
    }

    /// Records a check that always fails, with `reason` as its expression.
    pub fn fail(&mut self, file: &str, line: u32, reason: &str) -> bool {
        self.req(file, line, &false, &true, "==", reason, false)
    }

    /// Emits a note for this test. Nothing is recorded in the suite.
    pub fn note(&self, kind: Note, file: &str, line: u32, message: fmt::Arguments<'_>) {
        let test = self.name();
        let label = kind.as_str();
        match kind {
            Note::Warn => tracing::warn!(test, kind = label, file, line, "{message}"),
            Note::Err => tracing::error!(test, kind = label, file, line, "{message}"),
            Note::Msg | Note::Log => tracing::info!(test, kind = label, file, line, "{message}"),
        }
    }

    /// Runs a nested test whose suite becomes a child of this one.
    ///
    /// Returns `true` when the nested test passed. A failing nested test
    /// marks this scope failed at finalization.
    pub fn sub_test<F>(&mut self, name: &str, body: F) -> bool
    where
        F: FnOnce(&mut Testing),
    {
        let nested = Self::scope(name, body);
        let passed = !nested.failed();
        self.suite.push(nested);
        passed
    }

    pub fn name(&self) -> &str {
        self.suite.name()
    }

    /// Whether anything recorded so far, including nested tests, failed.
    pub fn failed(&self) -> bool {
        self.failed_so_far || self.suite.suites().any(Suite::failed)
    }

    /// The suite as recorded so far.
    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    fn finish(mut self) -> Suite {
        let failed = self.failed();
        let duration = self.start.elapsed();
        self.suite.seal(failed, duration);
        tracing::trace!(
            test = self.suite.name(),
            failed,
            duration_ms = clock::to_ms(duration),
            "finalized test scope"
        );
        self.suite
    }
}
