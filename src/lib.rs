//! Lightest: a minimal unit-testing engine.
//!
//! Units are registered explicitly into three phases and run in order:
//!
//! 1. **Config** units see the process arguments and may flip the run's
//!    settings (color, output).
//! 2. **Test** units each get a [`Testing`] scope; their checks become a
//!    [`Suite`] attached to the run's root suite.
//! 3. **Data** units read the finished tree for custom analysis.
//!
//! The report is then printed and the process exits `0` whatever the test
//! outcome.
//!
//! ```no_run
//! use lightest::{config, data, req, Pipeline};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.config().register("flags", config::standard_flags);
//! pipeline.tests().register("Basic", |t| {
//!     let (a, b) = (0, 0);
//!     req!(t, a, ==, b);
//! });
//! pipeline.data().register("pass rate", data::report_pass_rate);
//! lightest::run_main(pipeline);
//! ```

pub mod clock;
pub mod config;
pub mod context;
pub mod data;
pub mod errors;
pub mod macros;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod result;
pub mod testing;

pub use crate::config::Settings;
pub use crate::context::{ConfigContext, ExecutionContext};
pub use crate::errors::LightestError;
pub use crate::pipeline::{Pipeline, RunOutcome};
pub use crate::registry::{ConfigRegistry, DataRegistry, Phase, Registry, TestRegistry};
pub use crate::report::Reporter;
pub use crate::result::{Assertion, ResultNode, Suite};
pub use crate::testing::{Note, Testing};

/// Runs `pipeline` with `std::env::args()` and reports to stdout.
///
/// Test failures still exit `0`. A unit fault or a failed write is printed
/// as a diagnostic and exits `1`.
pub fn run_main(pipeline: Pipeline) {
    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = pipeline.run(args) {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
