//! Shared helpers for Lightest integration tests.

use lightest::{Pipeline, RunOutcome, Settings};
use termcolor::Buffer;

/// Program arguments as a runner would receive them.
pub fn args(extra: &[&str]) -> Vec<String> {
    std::iter::once("lightest-test")
        .chain(extra.iter().copied())
        .map(String::from)
        .collect()
}

/// Pipeline starting from fixed defaults so `NO_COLOR` in the environment
/// does not leak into assertions.
pub fn pipeline() -> Pipeline {
    Pipeline::new().with_settings(Settings::default())
}

/// Runs `pipeline` into an ANSI-capable buffer and returns the outcome and
/// everything the reporter wrote.
pub fn run(pipeline: &Pipeline, extra: &[&str]) -> (RunOutcome, String) {
    let mut out = Buffer::ansi();
    let outcome = pipeline
        .run_with(args(extra), &mut out)
        .expect("run should not fault");
    let text = String::from_utf8(out.into_inner()).expect("report is UTF-8");
    (outcome, text)
}

/// Report text with the timing-dependent `<n>ms` figures blanked.
pub fn without_timings(text: &str) -> String {
    text.lines()
        .map(|line| match line.rfind(' ') {
            Some(idx) if line.ends_with("ms") || line.ends_with("ms used.") => {
                let (head, _) = line.split_at(idx);
                if line.starts_with("Done.") {
                    "Done. <t>ms used.".to_string()
                } else {
                    format!("{head} <t>ms")
                }
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
