// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet.
//!
//! Absence is modelled with `Option<T>` everywhere in rivulet, so the only error is
//! [`RivuletError::MissingValue`]: raised when a caller explicitly demands a value
//! that is not there (`or_else_throw`, `next` on an exhausted stream, terminal
//! operators whose source finished or vanished without data).
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn first_reading() -> Result<u32> {
//!     Err(RivuletError::missing_value("sensor never reported"))
//! }
//!
//! assert!(first_reading().unwrap_err().is_missing_value());
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RivuletError {
    /// A value was demanded but none was present.
    #[error("Missing value: {context}")]
    MissingValue {
        /// What was being accessed when the value turned out to be absent
        context: String,
    },
}

impl RivuletError {
    /// Create a missing-value error with the given context
    pub fn missing_value(context: impl Into<String>) -> Self {
        Self::MissingValue {
            context: context.into(),
        }
    }

    /// Returns `true` for [`RivuletError::MissingValue`].
    #[must_use]
    pub const fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }

    /// The context string carried by the error.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::MissingValue { context } => context,
        }
    }
}

/// Specialized Result type for rivulet operations.
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Helper trait for prefixing context onto rivulet errors.
pub trait ResultExt<T> {
    /// Prefix the error context.
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Prefix the error context using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e {
                RivuletError::MissingValue { context: inner } => {
                    RivuletError::missing_value(format!("{context}: {inner}"))
                }
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e {
            RivuletError::MissingValue { context: inner } => {
                RivuletError::missing_value(format!("{}: {inner}", f()))
            }
        })
    }
}
