// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pattern-match helpers for `Option<T>`.
//!
//! Rivulet uses `Option<T>` as its "present or absent" container: `Some(v)` is a
//! present value, `None` is a cleared stream. `unwrap_or` / `unwrap_or_else` already
//! cover the `orElse` family, so [`ValueExt`] only adds the combinators std lacks.

use crate::error::{Result, RivuletError};

/// Extension trait adding present/absent dispatch to `Option<T>`.
pub trait ValueExt<T> {
    /// Dispatch on presence, consuming the value.
    fn match_with<R>(self, on_present: impl FnOnce(T) -> R, on_absent: impl FnOnce() -> R) -> R;

    /// Run `f` with the value if present.
    fn if_present(self, f: impl FnOnce(T));

    /// Demand the value, turning absence into [`RivuletError::MissingValue`].
    ///
    /// # Errors
    /// Returns `RivuletError::MissingValue` carrying `context` when absent.
    fn or_else_throw(self, context: &str) -> Result<T>;

    /// Demand the value, panicking on absence.
    ///
    /// # Panics
    /// Panics with the missing-value message when absent.
    fn or_else_panic(self, context: &str) -> T;
}

impl<T> ValueExt<T> for Option<T> {
    fn match_with<R>(self, on_present: impl FnOnce(T) -> R, on_absent: impl FnOnce() -> R) -> R {
        match self {
            Some(value) => on_present(value),
            None => on_absent(),
        }
    }

    fn if_present(self, f: impl FnOnce(T)) {
        if let Some(value) = self {
            f(value);
        }
    }

    fn or_else_throw(self, context: &str) -> Result<T> {
        self.ok_or_else(|| RivuletError::missing_value(context))
    }

    fn or_else_panic(self, context: &str) -> T {
        match self {
            Some(value) => value,
            None => panic!("{}", RivuletError::missing_value(context)),
        }
    }
}
