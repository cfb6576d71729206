// Lightest self-test: exercises the assertion macros, timers, nested tests,
// and the data-analysis units against the engine itself.
// Usage: cargo run --bin lightest-selftest -- [--no-color] [--no-output] [--json <path>]

use std::path::PathBuf;

use clap::Parser;
use lightest::{clock, config, data, log, msg, must, req, req_arr, require, Pipeline};

/// Arguments of the self-test binary.
///
/// The standard flags are declared so clap accepts them; the
/// `StandardFlags` config unit is what applies them.
#[derive(Debug, Parser)]
#[command(name = "lightest-selftest", about = "Runs the Lightest self-test units.")]
struct SelftestArgs {
    /// Also write the result tree as JSON to this file.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
    /// Print the report without color codes.
    #[arg(long)]
    #[allow(dead_code)]
    no_color: bool,
    /// Do not print the report.
    #[arg(long)]
    #[allow(dead_code)]
    no_output: bool,
}

fn main() {
    let args = SelftestArgs::parse();
    let mut pipeline = Pipeline::new();

    pipeline
        .config()
        .register("StandardFlags", config::standard_flags);

    pipeline
        .tests()
        .register("TestTimers", |t| {
            let mut i = 0;
            let once = log!(t, clock::timer(|| i += 1));
            let avg = log!(t, clock::avg_timer(100, || i += 1));
            req!(t, i, ==, 101);
            req!(t, once, >=, 0.0);
            req!(t, avg, >=, 0.0);
        })
        .register("TestAssertions", |t| {
            let (a, b, c) = (0, 0, 1);
            require!(t, a == b);
            require!(t, a != c);
            req!(t, a, ==, b);
            req!(t, a, !=, c);
            let arr1 = [1, 2, 3, 4];
            let arr2 = [1, 2, 3, 4];
            let arr3 = [1, 2, 3];
            let arr4 = [1, 2, 3, 5];
            must!(req_arr!(t, arr1, ==, arr2));
            req_arr!(t, arr1, ==, arr3);
            req_arr!(t, arr1, ==, arr4);
        })
        .register("TestNested", |t| {
            msg!(t, "running nested checks");
            t.sub_test("Inner", |t| {
                req!(t, "inner", ==, "inner");
            });
            req!(t, 2 + 2, ==, 4);
        })
        .register("TestMust", |t| {
            req!(t, 1, ==, 1);
            must!(req!(t, 1, >, 2));
            req!(t, "never recorded", ==, "");
        });

    pipeline.data().register("PassRate", data::report_pass_rate);
    pipeline.data().register("FailedSuites", |root| {
        let failed = data::failed_suites(root);
        if !failed.is_empty() {
            println!("Failed: {}", failed.join(", "));
        }
        Ok(())
    });

    if let Some(path) = args.json {
        pipeline.data().register("Json", data::write_json(path));
    }

    lightest::run_main(pipeline);
}
