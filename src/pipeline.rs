//! The three-phase run: configuration, tests, data processing, then report.

use std::time::{Duration, Instant};

use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

use crate::clock;
use crate::config::Settings;
use crate::context::{ConfigContext, ExecutionContext};
use crate::errors::LightestError;
use crate::registry::{ConfigRegistry, DataRegistry, TestRegistry};
use crate::report::Reporter;
use crate::result::Suite;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The frozen root suite; its children are the top-level tests.
    pub root: Suite,
    /// Settings as left by the config phase.
    pub settings: Settings,
    /// Time from pipeline construction to the summary line.
    pub total: Duration,
}

/// Owns the three registries and runs them in phase order.
pub struct Pipeline {
    config: ConfigRegistry,
    tests: TestRegistry,
    data: DataRegistry,
    settings: Settings,
    start: Instant,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::from_registries(
            ConfigRegistry::new(),
            TestRegistry::new(),
            DataRegistry::new(),
        )
    }

    pub fn from_registries(
        config: ConfigRegistry,
        tests: TestRegistry,
        data: DataRegistry,
    ) -> Self {
        Self {
            config,
            tests,
            data,
            settings: Settings::from_env(),
            start: clock::process_start(),
        }
    }

    /// Replaces the settings config units start from.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn config(&mut self) -> &mut ConfigRegistry {
        &mut self.config
    }

    pub fn tests(&mut self) -> &mut TestRegistry {
        &mut self.tests
    }

    pub fn data(&mut self) -> &mut DataRegistry {
        &mut self.data
    }

    /// Runs every phase and reports to stdout.
    pub fn run(&self, args: Vec<String>) -> Result<RunOutcome, LightestError> {
        let mut stdout = StandardStream::stdout(ColorChoice::Always);
        self.run_with(args, &mut stdout)
    }

    /// Runs every phase and reports to `out`.
    ///
    /// Recorded test failures do not make this return an error; only a unit
    /// fault or a failed write does.
    pub fn run_with<W: WriteColor>(
        &self,
        args: Vec<String>,
        out: &mut W,
    ) -> Result<RunOutcome, LightestError> {
        let mut settings = self.settings;

        tracing::debug!(units = self.config.len(), "config phase");
        self.config
            .run_all(&mut ConfigContext::new(&args, &mut settings))?;

        tracing::debug!(units = self.tests.len(), "test phase");
        let test_start = clock::now();
        let mut root = Suite::from_children("", Vec::new(), Duration::ZERO);
        self.tests
            .run_all(&mut ExecutionContext::new(&mut root, &args));
        let failed = root.suites().any(Suite::failed);
        root.seal(failed, test_start.elapsed());

        tracing::debug!(units = self.data.len(), "data phase");
        self.data.run_all(&root)?;

        let total = self.start.elapsed();
        if settings.color {
            report(&mut Reporter::new(out), &root, &settings, total)?;
        } else {
            report(&mut Reporter::new(NoColor::new(out)), &root, &settings, total)?;
        }
        tracing::debug!(
            failed,
            total_ms = clock::to_ms(total),
            "run finished"
        );

        Ok(RunOutcome {
            root,
            settings,
            total,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn report<W: WriteColor>(
    reporter: &mut Reporter<W>,
    root: &Suite,
    settings: &Settings,
    total: Duration,
) -> Result<(), LightestError> {
    if settings.output {
        reporter.print_children(root)?;
    }
    reporter.print_done(total)?;
    Ok(())
}
