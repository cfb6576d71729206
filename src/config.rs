//! Run-wide toggles and the standard flag parser.
//!
//! The toggles live in [`Settings`], owned by the pipeline. Only config units
//! change them, through [`ConfigContext`].

use clap::Parser;

use crate::context::ConfigContext;
use crate::errors::LightestError;

/// Toggles read by the reporter once the config phase has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Emit color codes in the report.
    pub color: bool,
    /// Print the report at all.
    pub output: bool,
}

impl Settings {
    /// Defaults, honoring the `NO_COLOR` convention.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: !no_color,
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            output: true,
        }
    }
}

/// Flags understood by [`standard_flags`].
#[derive(Debug, Parser)]
#[command(
    name = "lightest",
    about = "Runs registered Lightest units.",
    args_override_self = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct StandardFlags {
    /// Print the report without color codes.
    #[arg(long)]
    pub no_color: bool,
    /// Do not print the report.
    #[arg(long)]
    pub no_output: bool,
}

const KNOWN_FLAGS: [&str; 2] = ["--no-color", "--no-output"];

/// The program name followed by the standard flags present in `args`.
///
/// Clap stops at the first argument it does not know, so anything meant for
/// other config units is dropped before parsing.
fn known_flags(args: &[String]) -> impl Iterator<Item = &str> {
    let program = args.first().map_or("lightest", String::as_str);
    let flags = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|arg| KNOWN_FLAGS.contains(arg));
    std::iter::once(program).chain(flags)
}

/// Ready-made config unit applying `--no-color` and `--no-output`.
///
/// Other arguments are ignored so user config units can define their own.
pub fn standard_flags(ctx: &mut ConfigContext<'_>) -> Result<(), LightestError> {
    let flags = StandardFlags::try_parse_from(known_flags(ctx.args()))?;
    if flags.no_color {
        ctx.no_color();
    }
    if flags.no_output {
        ctx.no_output();
    }
    tracing::debug!(
        no_color = flags.no_color,
        no_output = flags.no_output,
        "applied standard flags"
    );
    Ok(())
}
