//! Error types shared by the engine and the functions it wraps.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries typed data for each failure so callers can match
//! on the kind instead of parsing messages. Factory functions (e.g.
//! `duplicate_argument()`) are the public API; they populate both `kind`
//! and `message`.
//!
//! Wrapped functions report their own failures with the same type. The
//! engine hands those back untouched, so a caller sees exactly the error the
//! function produced.

use std::fmt;

use crate::value::Value;

/// Result of calling a function.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse grouping of error kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The engine was constructed with invalid parameters.
    Configuration,
    /// Arguments could not be accumulated or bound.
    Binding,
    /// The wrapped function itself failed.
    Runtime,
}

/// Typed error category for structured diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Configuration
    InvalidCurryDepth {
        depth: usize,
    },

    // Binding
    DuplicateArgument {
        function: String,
        name: String,
    },
    TooManyPositional {
        function: String,
        expected: usize,
        got: usize,
    },
    UnexpectedKeyword {
        function: String,
        name: String,
    },
    MissingArgument {
        function: String,
        name: String,
    },
    CallsExhausted {
        function: String,
        depth: usize,
    },

    // Runtime
    TypeMismatch {
        expected: String,
        got: String,
    },
    IntegerOverflow {
        operation: String,
    },
    DivisionByZero,
    NotCallable {
        type_name: String,
    },

    /// Catch-all for errors without a structured kind.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    /// Category this kind belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCurryDepth { .. } => ErrorCategory::Configuration,
            Self::DuplicateArgument { .. }
            | Self::TooManyPositional { .. }
            | Self::UnexpectedKeyword { .. }
            | Self::MissingArgument { .. }
            | Self::CallsExhausted { .. } => ErrorCategory::Binding,
            Self::TypeMismatch { .. }
            | Self::IntegerOverflow { .. }
            | Self::DivisionByZero
            | Self::NotCallable { .. }
            | Self::Custom { .. } => ErrorCategory::Runtime,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Configuration
            Self::InvalidCurryDepth { depth } => {
                write!(f, "curry depth must be at least 1, got {depth}")
            }

            // Binding
            Self::DuplicateArgument { function, name } => {
                write!(f, "{function}() got multiple values for argument '{name}'")
            }
            Self::TooManyPositional {
                function,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "{function}() takes {expected} positional {arg_word} but {got} were given"
                )
            }
            Self::UnexpectedKeyword { function, name } => {
                write!(f, "{function}() got an unexpected keyword argument '{name}'")
            }
            Self::MissingArgument { function, name } => {
                write!(f, "{function}() missing required argument: '{name}'")
            }
            Self::CallsExhausted { function, depth } => {
                write!(f, "{function}() already received all {depth} calls")
            }

            // Runtime
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Secondary context, e.g. which call in a chain introduced the problem.
    pub notes: Vec<String>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer a factory function when a structured kind
    /// exists.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
            notes: Vec::new(),
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Category of this error.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Configuration Errors

/// Curry depth below 1.
#[cold]
pub fn invalid_curry_depth(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCurryDepth { depth })
}

// Binding Errors

/// A parameter was bound twice, by name or by name and position.
#[cold]
pub fn duplicate_argument(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateArgument {
        function: function.to_string(),
        name: name.to_string(),
    })
}

/// More positional arguments than the function can bind.
#[cold]
pub fn too_many_positional(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyPositional {
        function: function.to_string(),
        expected,
        got,
    })
}

/// Keyword argument matching no parameter.
#[cold]
pub fn unexpected_keyword(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedKeyword {
        function: function.to_string(),
        name: name.to_string(),
    })
}

/// Required parameter left unbound at call time.
#[cold]
pub fn missing_argument(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingArgument {
        function: function.to_string(),
        name: name.to_string(),
    })
}

/// A call past the last one a chain accepts.
#[cold]
pub fn calls_exhausted(function: &str, depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallsExhausted {
        function: function.to_string(),
        depth,
    })
}

// Runtime Errors

/// Argument of the wrong type.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Integer overflow.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Value is not callable.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

#[cfg(test)]
mod tests;
