//! Ordered, append-only registries of named units, one per phase.
//!
//! Registries are built explicitly by the caller before the pipeline runs.
//! Units execute in exactly the order they were registered; there is no
//! implicit, load-time registration.

use std::fmt;

use crate::context::{ConfigContext, ExecutionContext};
use crate::errors::LightestError;
use crate::result::Suite;
use crate::testing::Testing;

/// The three phases of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Config,
    Test,
    Data,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Config => "config",
            Phase::Test => "test",
            Phase::Data => "data",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A config unit: sees the arguments, may change the run's settings.
pub type ConfigUnit = dyn Fn(&mut ConfigContext<'_>) -> Result<(), LightestError>;
/// A test unit: records checks into the scope it is given.
pub type TestUnit = dyn Fn(&mut Testing);
/// A data unit: reads the finished result tree.
pub type DataUnit = dyn Fn(&Suite) -> Result<(), LightestError>;

pub type ConfigRegistry = Registry<ConfigUnit>;
pub type TestRegistry = Registry<TestUnit>;
pub type DataRegistry = Registry<DataUnit>;

/// One registered unit.
pub struct Entry<F: ?Sized> {
    name: String,
    unit: Box<F>,
}

impl<F: ?Sized> Entry<F> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list of named units for one phase.
pub struct Registry<F: ?Sized> {
    phase: Phase,
    entries: Vec<Entry<F>>,
}

impl<F: ?Sized> Registry<F> {
    fn with_phase(phase: Phase) -> Self {
        Self {
            phase,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, name: impl Into<String>, unit: Box<F>) {
        let name = name.into();
        tracing::trace!(phase = %self.phase, unit = %name, "registered unit");
        self.entries.push(Entry { name, unit });
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::name)
    }
}

impl Registry<ConfigUnit> {
    pub fn new() -> Self {
        Self::with_phase(Phase::Config)
    }

    pub fn register<G>(&mut self, name: impl Into<String>, unit: G) -> &mut Self
    where
        G: Fn(&mut ConfigContext<'_>) -> Result<(), LightestError> + 'static,
    {
        self.push(name, Box::new(unit));
        self
    }

    /// Runs every config unit in order. The first error aborts the phase.
    pub fn run_all(&self, ctx: &mut ConfigContext<'_>) -> Result<(), LightestError> {
        for entry in &self.entries {
            tracing::debug!(phase = %self.phase, unit = %entry.name, "running unit");
            (entry.unit)(ctx).map_err(|err| err.in_unit(self.phase, &entry.name))?;
        }
        Ok(())
    }
}

impl Default for Registry<ConfigUnit> {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry<TestUnit> {
    pub fn new() -> Self {
        Self::with_phase(Phase::Test)
    }

    pub fn register<G>(&mut self, name: impl Into<String>, unit: G) -> &mut Self
    where
        G: Fn(&mut Testing) + 'static,
    {
        self.push(name, Box::new(unit));
        self
    }

    /// Runs every test unit in its own scope and attaches each finalized
    /// suite to the context's suite, in registration order.
    ///
    /// A panicking test is not contained; it aborts the phase.
    pub fn run_all(&self, ctx: &mut ExecutionContext<'_>) {
        for entry in &self.entries {
            tracing::debug!(phase = %self.phase, unit = %entry.name, "running unit");
            let finished = Testing::scope(&entry.name, |testing| (entry.unit)(testing));
            tracing::debug!(
                unit = %entry.name,
                failed = finished.failed(),
                duration_ms = finished.duration_ms(),
                "test finished"
            );
            ctx.attach(finished);
        }
    }
}

impl Default for Registry<TestUnit> {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry<DataUnit> {
    pub fn new() -> Self {
        Self::with_phase(Phase::Data)
    }

    pub fn register<G>(&mut self, name: impl Into<String>, unit: G) -> &mut Self
    where
        G: Fn(&Suite) -> Result<(), LightestError> + 'static,
    {
        self.push(name, Box::new(unit));
        self
    }

    /// Hands the finished tree to every data unit in order. The first error
    /// aborts the phase.
    pub fn run_all(&self, root: &Suite) -> Result<(), LightestError> {
        for entry in &self.entries {
            tracing::debug!(phase = %self.phase, unit = %entry.name, "running unit");
            (entry.unit)(root).map_err(|err| err.in_unit(self.phase, &entry.name))?;
        }
        Ok(())
    }
}

impl Default for Registry<DataUnit> {
    fn default() -> Self {
        Self::new()
    }
}
