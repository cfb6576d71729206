//! Values handed to units while a phase runs.

use crate::config::Settings;
use crate::result::Suite;

/// Context shared by every unit of the configuration phase.
///
/// Config units see the raw argument vector and may flip the run's toggles.
/// They have no access to the result tree.
pub struct ConfigContext<'a> {
    args: &'a [String],
    settings: &'a mut Settings,
}

impl<'a> ConfigContext<'a> {
    pub fn new(args: &'a [String], settings: &'a mut Settings) -> Self {
        Self { args, settings }
    }

    /// Process arguments, program name first, exactly as captured at entry.
    pub fn args(&self) -> &[String] {
        self.args
    }

    pub fn settings(&self) -> &Settings {
        &*self.settings
    }

    /// Disables color codes in the report.
    pub fn no_color(&mut self) {
        self.settings.color = false;
    }

    /// Suppresses the report. The data phase still receives the full tree.
    pub fn no_output(&mut self) {
        self.settings.output = false;
    }
}

/// Context shared by every unit of the test phase.
///
/// Each top-level test attaches its finalized suite to `suite`, so later units
/// in the same phase see the children appended by earlier ones.
pub struct ExecutionContext<'a> {
    suite: &'a mut Suite,
    args: &'a [String],
}

impl<'a> ExecutionContext<'a> {
    pub fn new(suite: &'a mut Suite, args: &'a [String]) -> Self {
        Self { suite, args }
    }

    pub fn suite(&self) -> &Suite {
        &*self.suite
    }

    pub fn args(&self) -> &[String] {
        self.args
    }

    pub(crate) fn attach(&mut self, finished: Suite) {
        self.suite.push(finished);
    }
}
