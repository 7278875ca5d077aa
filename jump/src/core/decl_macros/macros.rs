// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_jump::{CommonResult, throws};
///
/// fn print_twice(it: &str) -> CommonResult<()> {
///     throws!({
///         println!("{it}");
///         println!("{it}");
///     });
/// }
///
/// assert!(print_twice("hi").is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Shorthand for `Ok(())` and `Ok($value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::CommonResult;

    fn returns_unit() -> CommonResult<()> {
        throws!({
            let _ = 1 + 1;
        });
    }

    fn returns_value() -> CommonResult<usize> { ok!(42) }

    #[test]
    fn test_throws_and_ok() {
        assert!(returns_unit().is_ok());
        assert_eq2!(returns_value().unwrap(), 42);
    }
}
