//! Console rendering of the result tree.
//!
//! The reporter writes to any [`WriteColor`] sink. Whether color codes are
//! emitted is decided by the sink: the pipeline wraps its output in
//! [`termcolor::NoColor`] when color is off, which yields identical text with
//! no escape codes.

use std::io;
use std::time::Duration;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::clock;
use crate::result::{Assertion, ResultNode, Suite};

/// Prints suites and failed assertions depth-first.
pub struct Reporter<W> {
    out: W,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints every child of `root`; the root itself has no markers.
    pub fn print_children(&mut self, root: &Suite) -> io::Result<()> {
        for child in root.children() {
            self.print_node(child)?;
        }
        Ok(())
    }

    pub fn print_node(&mut self, node: &ResultNode) -> io::Result<()> {
        match node {
            ResultNode::Suite(suite) => self.print_suite(suite),
            ResultNode::Assertion(assertion) => self.print_assertion(assertion),
        }
    }

    pub fn print_suite(&mut self, suite: &Suite) -> io::Result<()> {
        writeln!(self.out, "[Begin ] {}", suite.name())?;
        self.print_children(suite)?;
        write!(self.out, "[End   ] {} ", suite.name())?;
        if suite.failed() {
            self.colored(Color::Red, "FAIL")?;
        } else {
            self.colored(Color::Green, "PASS")?;
        }
        writeln!(self.out, " {}ms", format_ms(suite.duration()))
    }

    /// Passed assertions print nothing.
    pub fn print_assertion(&mut self, assertion: &Assertion) -> io::Result<()> {
        if !assertion.failed() {
            return Ok(());
        }
        write!(self.out, "    ")?;
        self.colored(Color::Red, "[Fail ]")?;
        writeln!(
            self.out,
            " {}:{}: REQ [{}] failed",
            assertion.file(),
            assertion.line(),
            assertion.expr()
        )?;
        writeln!(self.out, "        + ACTUAL: {}", assertion.actual())?;
        writeln!(
            self.out,
            "        + EXPECTED: {} {}",
            assertion.operator(),
            assertion.expected()
        )
    }

    /// Final summary line.
    pub fn print_done(&mut self, total: Duration) -> io::Result<()> {
        writeln!(self.out, "Done. {}ms used.", format_ms(total))?;
        self.out.flush()
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }
}

fn format_ms(duration: Duration) -> String {
    format!("{:.3}", clock::to_ms(duration))
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;

    fn sample() -> Suite {
        let failing = Assertion::new("src/t.rs", 7, &0, &1, ">", "a > b", false);
        let passing = Assertion::new("src/t.rs", 8, &1, &1, "==", "b == b", true);
        Suite::from_children(
            "Root",
            vec![Suite::from_children(
                "Cmp",
                vec![failing.into(), passing.into()],
                Duration::from_millis(5),
            )
            .into()],
            Duration::ZERO,
        )
    }

    fn render(buffer: Buffer) -> String {
        let mut reporter = Reporter::new(buffer);
        reporter.print_children(&sample()).unwrap();
        String::from_utf8(reporter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn plain_output_matches_console_format() {
        let text = render(Buffer::no_color());
        assert_eq!(
            text,
            "[Begin ] Cmp\n\
             \x20   [Fail ] src/t.rs:7: REQ [a > b] failed\n\
             \x20       + ACTUAL: 0\n\
             \x20       + EXPECTED: > 1\n\
             [End   ] Cmp FAIL 5.000ms\n"
        );
    }

    #[test]
    fn color_only_adds_escape_codes() {
        let colored = render(Buffer::ansi());
        assert!(colored.contains("\x1b["));
        let plain = render(Buffer::no_color());
        assert!(!plain.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn passing_suite_prints_pass() {
        let suite = Suite::from_children("Ok", Vec::new(), Duration::ZERO);
        let mut reporter = Reporter::new(Buffer::no_color());
        reporter.print_suite(&suite).unwrap();
        let text = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
        assert_eq!(text, "[Begin ] Ok\n[End   ] Ok PASS 0.000ms\n");
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
