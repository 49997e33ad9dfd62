#![deny(clippy::arithmetic_side_effects)]
//! Curry Value - runtime values for the curry engine.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`) shared cheaply through `Arc`
//! - The error type used by the engine and by wrapped functions
//!   (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - Parameter signatures (`Signature`, `Param`)
//! - Call arguments and their binding (`CallArgs`, `BoundArgs`)
//! - The `Callable` trait that wrapped functions implement, with
//!   `NativeFunction` for Rust closures and `FunctionValue` for storing
//!   callables inside values
//!
//! Everything here is immutable once built and `Send + Sync`.

mod args;
mod callable;
mod errors;
mod signature;
mod value;

pub use args::{BoundArgs, CallArgs, NamedArgs, PositionalArgs};
pub use callable::{Callable, FunctionValue, NativeFunction};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use signature::{Name, Param, Signature};
pub use value::{Heap, Value};

// Re-export error constructors for use by other crates
pub use errors::{
    calls_exhausted, division_by_zero, duplicate_argument, integer_overflow, invalid_curry_depth,
    missing_argument, not_callable, too_many_positional, type_mismatch, unexpected_keyword,
};
