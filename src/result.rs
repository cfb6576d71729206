//! The result tree: suites own their children, assertions are leaves.
//!
//! A [`Suite`] is built by exactly one [`crate::Testing`] scope and becomes
//! immutable once that scope finalizes it. Children are exclusively owned, so
//! dropping the root releases the whole tree.

use std::fmt::Display;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::clock;

/// One node of the result tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultNode {
    Suite(Suite),
    Assertion(Assertion),
}

impl ResultNode {
    pub fn failed(&self) -> bool {
        match self {
            ResultNode::Suite(suite) => suite.failed,
            ResultNode::Assertion(assertion) => assertion.failed,
        }
    }

    pub fn as_suite(&self) -> Option<&Suite> {
        match self {
            ResultNode::Suite(suite) => Some(suite),
            ResultNode::Assertion(_) => None,
        }
    }

    pub fn as_assertion(&self) -> Option<&Assertion> {
        match self {
            ResultNode::Assertion(assertion) => Some(assertion),
            ResultNode::Suite(_) => None,
        }
    }
}

impl From<Suite> for ResultNode {
    fn from(suite: Suite) -> Self {
        ResultNode::Suite(suite)
    }
}

impl From<Assertion> for ResultNode {
    fn from(assertion: Assertion) -> Self {
        ResultNode::Assertion(assertion)
    }
}

/// A test (or the root of a run) with its aggregated outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suite {
    name: String,
    failed: bool,
    #[serde(rename = "duration_ms", serialize_with = "serialize_ms")]
    duration: Duration,
    children: Vec<ResultNode>,
}

impl Suite {
    /// An open suite with no children, used while a scope is running.
    pub(crate) fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed: false,
            duration: Duration::ZERO,
            children: Vec::new(),
        }
    }

    /// Builds an already finalized suite; `failed` is derived from the children.
    pub fn from_children(
        name: impl Into<String>,
        children: Vec<ResultNode>,
        duration: Duration,
    ) -> Self {
        let failed = children.iter().any(ResultNode::failed);
        Self {
            name: name.into(),
            failed,
            duration,
            children,
        }
    }

    pub(crate) fn push(&mut self, node: impl Into<ResultNode>) {
        self.children.push(node.into());
    }

    pub(crate) fn seal(&mut self, failed: bool, duration: Duration) {
        self.failed = failed;
        self.duration = duration;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn duration_ms(&self) -> f64 {
        clock::to_ms(self.duration)
    }

    pub fn children(&self) -> &[ResultNode] {
        &self.children
    }

    /// Direct child suites, in order.
    pub fn suites(&self) -> impl Iterator<Item = &Suite> {
        self.children.iter().filter_map(ResultNode::as_suite)
    }

    /// Direct child assertions, in order.
    pub fn assertions(&self) -> impl Iterator<Item = &Assertion> {
        self.children.iter().filter_map(ResultNode::as_assertion)
    }

    /// Depth-first, pre-order walk over every descendant with its depth
    /// (direct children are at depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.children.iter().rev().map(|node| (0, node)).collect(),
        }
    }
}

/// Iterator returned by [`Suite::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a ResultNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ResultNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let ResultNode::Suite(suite) = node {
            self.stack
                .extend(suite.children.iter().rev().map(|child| (depth + 1, child)));
        }
        Some((depth, node))
    }
}

/// One recorded check. Operands are rendered when the assertion is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    file: String,
    line: u32,
    actual: String,
    expected: String,
    operator: String,
    expr: String,
    failed: bool,
}

impl Assertion {
    pub fn new<T, U>(
        file: &str,
        line: u32,
        actual: &T,
        expected: &U,
        operator: &str,
        expr: &str,
        passed: bool,
    ) -> Self
    where
        T: Display + ?Sized,
        U: Display + ?Sized,
    {
        Self {
            file: file.to_owned(),
            line,
            actual: actual.to_string(),
            expected: expected.to_string(),
            operator: operator.to_owned(),
            expr: expr.to_owned(),
            failed: !passed,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

fn serialize_ms<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(clock::to_ms(*duration))
}
