#![deny(clippy::arithmetic_side_effects)]
//! Curry Engine - runtime currying of callables.
//!
//! A curried function takes `depth` calls before it runs. Each call may
//! supply any mix of positional and named arguments (including none); the
//! arguments accumulate, and the call that reaches `depth` invokes the
//! wrapped function with all of them.
//!
//! ```text
//! let add = curry(2)?.apply(add_fn);
//! let incr = add.invoke(CallArgs::new().arg(1))?.partial()?;   // add(1)
//! incr.invoke(CallArgs::new().arg(5))?;                        // Complete(6)
//! incr.invoke(CallArgs::new().arg(10))?;                       // Complete(11)
//! ```
//!
//! # Architecture
//!
//! - [`FunctionSpec`]: immutable description of the wrapped function, shared
//!   by every instance of one curried function
//! - [`ArgumentState`]: immutable snapshot of the arguments bound so far;
//!   `ArgumentState::merge` validates a call and produces the next snapshot
//! - [`Curried`]: a (spec, state) pair; `Curried::invoke` dispatches to a
//!   new instance or to the target
//! - [`Description`]: introspection of an instance
//!
//! Nothing is mutated after construction, so instances are cheap to clone,
//! reusable, and `Send + Sync`.
//!
//! # Debugging
//!
//! Call [`init_tracing`] once and enable output with environment variables:
//! - `RUST_LOG=curry_engine=debug` - each call and each target dispatch
//! - `RUST_LOG=curry_engine=trace` - also every accepted merge
//! - `CURRY_LOG_TREE=1` - nest events under their call spans

mod describe;
mod dispatch;
mod spec;
mod state;

#[cfg(test)]
// Tests use unwrap() to panic on unexpected state, making failures immediately visible
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests;

use std::num::NonZeroUsize;
use std::sync::{Arc, Once};

use curry_value::{invalid_curry_depth, Callable, EvalError};

pub use describe::{Description, ANONYMOUS_DOC};
pub use dispatch::{Curried, Outcome};
pub use spec::FunctionSpec;
pub use state::ArgumentState;

/// Fix the call depth of a curried function.
///
/// The first stage of `curry(depth)(function)`: fails when `depth` is 0,
/// otherwise returns a factory to apply to a callable.
pub fn curry(depth: usize) -> Result<Curry, EvalError> {
    Curry::new(depth)
}

/// Factory for curried functions of one depth.
#[derive(Clone, Debug)]
pub struct Curry {
    depth: NonZeroUsize,
    name: Option<String>,
    doc: Option<String>,
}

impl Curry {
    /// Create a factory for `depth`-call curried functions.
    pub fn new(depth: usize) -> Result<Self, EvalError> {
        let depth = NonZeroUsize::new(depth).ok_or_else(|| invalid_curry_depth(depth))?;
        Ok(Curry {
            depth,
            name: None,
            doc: None,
        })
    }

    /// Required number of calls.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Use `name` instead of the target's own name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use `doc` instead of the target's own documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Curry `target`, returning its initial instance.
    pub fn apply(&self, target: impl Callable + 'static) -> Curried {
        self.apply_shared(Arc::new(target))
    }

    /// Curry an already shared target.
    pub fn apply_shared(&self, target: Arc<dyn Callable>) -> Curried {
        let mut spec = FunctionSpec::with_depth(target, self.depth);
        if let Some(name) = &self.name {
            spec.set_name(name.clone());
        }
        if let Some(doc) = &self.doc {
            spec.set_doc(doc.clone());
        }
        spec.into_curried()
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set;
/// `CURRY_LOG_TREE` switches from flat lines to an indented call tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        // Another subscriber may already be installed (e.g. by a host); keep it.
        let _ = if std::env::var_os("CURRY_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
    });
}
