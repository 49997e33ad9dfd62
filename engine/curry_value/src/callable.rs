//! The seam between the engine and the functions it wraps.
//!
//! A [`Callable`] describes itself (name, documentation, parameter
//! signature) and can be called with one batch of [`CallArgs`]. The engine
//! only ever talks to wrapped functions through this trait, so anything
//! callable can be curried: a Rust closure wrapped in [`NativeFunction`],
//! or another curried instance.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::args::CallArgs;
use crate::errors::EvalResult;
use crate::signature::Signature;

/// A function-like object with reflection metadata.
///
/// Implementations must be `Send + Sync`: curried instances share their
/// target across every partial application derived from them, including
/// ones handed to other threads.
pub trait Callable: Send + Sync {
    /// Name used in descriptions and error messages.
    fn name(&self) -> &str;

    /// Documentation text. Empty when the function has none.
    fn doc(&self) -> &str {
        ""
    }

    /// Declared parameters.
    fn signature(&self) -> &Signature;

    /// Call the function with a complete set of arguments.
    fn call(&self, args: CallArgs) -> EvalResult;
}

type NativeBody = dyn Fn(CallArgs) -> EvalResult + Send + Sync;

/// A Rust closure exposed as a [`Callable`].
///
/// ```text
/// let add = NativeFunction::new("add", Signature::new(["x", "y"]), |args| {
///     let bound = args.bind("add", &sig)?;
///     ...
/// });
/// ```
pub struct NativeFunction {
    name: String,
    doc: String,
    signature: Signature,
    body: Box<NativeBody>,
}

impl NativeFunction {
    /// Wrap `body` under `name` with the given parameter signature.
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        body: impl Fn(CallArgs) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            doc: String::new(),
            signature,
            body: Box::new(body),
        }
    }

    /// Attach documentation text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: CallArgs) -> EvalResult {
        (self.body)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Shared handle to a callable, storable inside a `Value`.
///
/// Equality and hashing go by identity: two handles are equal only when
/// they point at the same callable.
#[derive(Clone)]
pub struct FunctionValue(Arc<dyn Callable>);

impl FunctionValue {
    /// Wrap a callable.
    pub fn new(callable: impl Callable + 'static) -> Self {
        FunctionValue(Arc::new(callable))
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl Callable for FunctionValue {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn doc(&self) -> &str {
        self.0.doc()
    }

    fn signature(&self) -> &Signature {
        self.0.signature()
    }

    fn call(&self, args: CallArgs) -> EvalResult {
        self.0.call(args)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for FunctionValue {}

impl Hash for FunctionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.name(), self.0.signature())
    }
}
