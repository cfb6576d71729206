//! Assertion shorthands over [`crate::Testing::req`].
//!
//! Each macro captures the call site with `file!()`/`line!()` and the source
//! text of the checked expression. The leveled macros (`msg!`, `warn!`,
//! `err!`, `log!`) emit notes through [`crate::Testing::note`] and record
//! nothing; `fail!` records a check that always fails.

/// Compares `actual OP expected`, records the check, and returns the result.
///
/// ```
/// lightest::Testing::scope("cmp", |t| {
///     let (a, b) = (1, 2);
///     lightest::req!(t, a, <, b);
/// });
/// ```
#[macro_export]
macro_rules! req {
    ($testing:expr, $actual:expr, $op:tt, $expected:expr $(,)?) => {{
        let actual = &$actual;
        let expected = &$expected;
        let passed = actual $op expected;
        $testing.req(
            ::core::file!(),
            ::core::line!(),
            actual,
            expected,
            ::core::stringify!($op),
            ::core::concat!(
                ::core::stringify!($actual),
                " ",
                ::core::stringify!($op),
                " ",
                ::core::stringify!($expected)
            ),
            passed,
        )
    }};
}

/// Records a boolean condition and returns it.
#[macro_export]
macro_rules! require {
    ($testing:expr, $cond:expr $(,)?) => {{
        let passed: bool = $cond;
        $testing.req(
            ::core::file!(),
            ::core::line!(),
            &passed,
            &true,
            "==",
            ::core::stringify!($cond),
            passed,
        )
    }};
}

/// Compares two sequences element-wise with `OP` and records one check.
///
/// Sequences of different lengths always fail. Both sides are rendered with
/// their `Debug` form.
#[macro_export]
macro_rules! req_arr {
    ($testing:expr, $actual:expr, $op:tt, $expected:expr $(,)?) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        let passed = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected.iter())
                .all(|(a, e)| a $op e);
        $testing.req(
            ::core::file!(),
            ::core::line!(),
            &::std::format!("{:?}", actual),
            &::std::format!("{:?}", expected),
            ::core::stringify!($op),
            ::core::concat!(
                ::core::stringify!($actual),
                " ",
                ::core::stringify!($op),
                " ",
                ::core::stringify!($expected)
            ),
            passed,
        )
    }};
}

/// Returns from the current test body when `cond` is false.
///
/// Nothing is recorded and the test is not marked failed by this alone.
#[macro_export]
macro_rules! must {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return;
        }
    };
}

/// Records an unconditional failure with a formatted reason. Returns `false`.
#[macro_export]
macro_rules! fail {
    ($testing:expr, $($arg:tt)+) => {
        $testing.fail(
            ::core::file!(),
            ::core::line!(),
            &::std::format!($($arg)+),
        )
    };
}

/// Emits an informational note from a test body.
#[macro_export]
macro_rules! msg {
    ($testing:expr, $($arg:tt)+) => {
        $testing.note(
            $crate::testing::Note::Msg,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emits a warning note from a test body.
#[macro_export]
macro_rules! warn {
    ($testing:expr, $($arg:tt)+) => {
        $testing.note(
            $crate::testing::Note::Warn,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emits an error note from a test body. The test is not marked failed.
#[macro_export]
macro_rules! err {
    ($testing:expr, $($arg:tt)+) => {
        $testing.note(
            $crate::testing::Note::Err,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Emits `expr = value` as a note and evaluates to the value.
///
/// ```
/// lightest::Testing::scope("log", |t| {
///     let elapsed = lightest::log!(t, lightest::clock::timer(|| {}));
///     assert!(elapsed >= 0.0);
/// });
/// ```
#[macro_export]
macro_rules! log {
    ($testing:expr, $value:expr $(,)?) => {{
        let value = $value;
        $testing.note(
            $crate::testing::Note::Log,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!("{} = {:?}", ::core::stringify!($value), &value),
        );
        value
    }};
}
