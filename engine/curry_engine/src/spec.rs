//! Immutable description of a curried function.
//!
//! One `FunctionSpec` is built per curried function and shared through
//! `Arc` by every instance derived from it. It never changes after
//! construction.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use curry_value::{invalid_curry_depth, Callable, EvalError, Name, Signature};

use crate::Curried;

/// The wrapped function, its required call depth and its descriptive
/// metadata.
pub struct FunctionSpec {
    target: Arc<dyn Callable>,
    depth: NonZeroUsize,
    name: String,
    doc: String,
}

impl FunctionSpec {
    /// Describe `target` curried over `depth` calls.
    ///
    /// Fails with `InvalidCurryDepth` when `depth` is 0. Name and
    /// documentation are read from the target.
    pub fn new(target: Arc<dyn Callable>, depth: usize) -> Result<Self, EvalError> {
        let depth = NonZeroUsize::new(depth).ok_or_else(|| invalid_curry_depth(depth))?;
        Ok(Self::with_depth(target, depth))
    }

    pub(crate) fn with_depth(target: Arc<dyn Callable>, depth: NonZeroUsize) -> Self {
        let name = target.name().to_string();
        let doc = target.doc().to_string();
        FunctionSpec {
            target,
            depth,
            name,
            doc,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_doc(&mut self, doc: String) {
        self.doc = doc;
    }

    /// Start a call chain: an instance with nothing bound yet.
    pub fn into_curried(self) -> Curried {
        Curried::new(Arc::new(self))
    }

    /// Number of calls needed before the target runs.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation text, possibly empty.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The target's declared parameters.
    pub fn signature(&self) -> &Signature {
        self.target.signature()
    }

    /// Formal parameter names in positional order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &Name> {
        self.signature().params().iter().map(|param| &param.name)
    }

    /// The wrapped function.
    pub fn target(&self) -> &Arc<dyn Callable> {
        &self.target
    }
}

impl fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("name", &self.name)
            .field("depth", &self.depth)
            .field("signature", self.signature())
            .finish_non_exhaustive()
    }
}
