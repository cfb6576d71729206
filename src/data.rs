//! Queries and ready-made data units over a finished result tree.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::errors::LightestError;
use crate::result::Suite;

/// Names of the failed direct child suites of `root`, in order.
pub fn failed_suites(root: &Suite) -> Vec<&str> {
    root.suites()
        .filter(|suite| suite.failed())
        .map(Suite::name)
        .collect()
}

/// Pass/fail counts over the top-level suites of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassRate {
    pub passed: usize,
    pub failed: usize,
}

impl PassRate {
    pub fn of(root: &Suite) -> Self {
        let (failed, passed) = root
            .suites()
            .fold((0, 0), |(failed, passed), suite| {
                if suite.failed() {
                    (failed + 1, passed)
                } else {
                    (failed, passed + 1)
                }
            });
        Self { passed, failed }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Percentage of passed suites; an empty run counts as 100%.
    pub fn percent(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.passed as f64 / self.total() as f64 * 100.0
    }
}

impl fmt::Display for PassRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pass rate: {:.2}% ({}/{})",
            self.percent(),
            self.passed,
            self.total()
        )
    }
}

/// Data unit printing the pass rate of the run to stdout.
pub fn report_pass_rate(root: &Suite) -> Result<(), LightestError> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", PassRate::of(root))?;
    Ok(())
}

/// Serializes the whole tree, durations in milliseconds.
pub fn to_json(root: &Suite) -> Result<String, LightestError> {
    Ok(serde_json::to_string_pretty(root)?)
}

/// Builds a data unit that writes the tree as JSON to `path`.
pub fn write_json(path: impl Into<PathBuf>) -> impl Fn(&Suite) -> Result<(), LightestError> {
    let path = path.into();
    move |root: &Suite| {
        let mut out = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut out, root)?;
        out.flush()?;
        tracing::debug!(path = %path.display(), "wrote JSON report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::Assertion;

    fn suite(name: &str, passed: bool) -> Suite {
        let check = Assertion::new("d.rs", 1, &1, &1, "==", "x == y", passed);
        Suite::from_children(name, vec![check.into()], Duration::ZERO)
    }

    fn root() -> Suite {
        Suite::from_children(
            "",
            vec![suite("X", false).into(), suite("Y", true).into()],
            Duration::ZERO,
        )
    }

    #[test]
    fn failed_suites_lists_only_failures() {
        assert_eq!(failed_suites(&root()), vec!["X"]);
    }

    #[test]
    fn pass_rate_counts_top_level_suites() {
        let rate = PassRate::of(&root());
        assert_eq!(rate, PassRate { passed: 1, failed: 1 });
        assert_eq!(rate.percent(), 50.0);
        assert_eq!(rate.to_string(), "Pass rate: 50.00% (1/2)");
    }

    #[test]
    fn empty_run_is_fully_passing() {
        let empty = Suite::from_children("", Vec::new(), Duration::ZERO);
        assert_eq!(PassRate::of(&empty).percent(), 100.0);
    }

    #[test]
    fn json_export_contains_names_and_outcomes() {
        let json = to_json(&root()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["children"][0]["name"], "X");
        assert_eq!(value["children"][0]["failed"], true);
        assert_eq!(value["children"][1]["failed"], false);
    }

    #[test]
    fn write_json_unit_creates_file() {
        let path = std::env::temp_dir().join(format!("lightest-{}.json", std::process::id()));
        write_json(&path)(&root()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(written.contains("\"Y\""));
    }
}
