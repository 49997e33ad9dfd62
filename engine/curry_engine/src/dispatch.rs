//! Call dispatch for curried instances.
//!
//! Each call merges its arguments into a fresh state. While calls remain the
//! result is a new instance sharing the same `FunctionSpec`; the call that
//! reaches the depth runs the target and returns its result as-is.

use std::fmt;
use std::sync::Arc;

use curry_value::{CallArgs, Callable, EvalError, EvalResult, Signature, Value};

use crate::{ArgumentState, FunctionSpec};

/// A curried function at one point of its call chain.
///
/// Instances are immutable. Invoking one never changes it, so the same
/// partial application can be completed any number of times, from any
/// number of threads.
#[derive(Clone)]
pub struct Curried {
    spec: Arc<FunctionSpec>,
    state: ArgumentState,
    /// Parameters still open after `state`, reported through `Callable`.
    residual: Arc<Signature>,
}

/// What a call produced.
#[derive(Debug)]
pub enum Outcome {
    /// More calls are needed.
    Partial(Curried),
    /// The target ran and returned this value.
    Complete(Value),
}

impl Curried {
    pub(crate) fn new(spec: Arc<FunctionSpec>) -> Self {
        Self::with_state(spec, ArgumentState::new())
    }

    fn with_state(spec: Arc<FunctionSpec>, state: ArgumentState) -> Self {
        let residual = spec
            .signature()
            .residual(state.positional().len(), state.named());
        Curried {
            spec,
            state,
            residual: Arc::new(residual),
        }
    }

    /// The shared function description.
    pub fn spec(&self) -> &FunctionSpec {
        &self.spec
    }

    /// Arguments bound along this chain.
    pub fn state(&self) -> &ArgumentState {
        &self.state
    }

    /// Calls still needed before the target runs, including the final one.
    pub fn calls_remaining(&self) -> usize {
        self.spec.depth().saturating_sub(self.state.call_count())
    }

    /// Call with one batch of arguments.
    ///
    /// Binding errors are reported by the call that causes them; `self`
    /// stays usable afterwards. Errors from the target itself are returned
    /// unchanged.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            function = %self.spec.name(),
            call = self.state.call_count().saturating_add(1),
            depth = self.spec.depth(),
        )
    )]
    pub fn invoke(&self, args: CallArgs) -> Result<Outcome, EvalError> {
        let state = self.state.merge(&self.spec, args)?;

        if state.call_count() < self.spec.depth() {
            return Ok(Outcome::Partial(Curried::with_state(
                Arc::clone(&self.spec),
                state,
            )));
        }

        tracing::debug!(
            positional = state.positional().len(),
            named = state.named().len(),
            "dispatching to target"
        );
        self.spec
            .target()
            .call(state.into_call_args())
            .map(Outcome::Complete)
    }
}

impl Outcome {
    /// The partial application, if more calls are needed.
    pub fn partial(self) -> Option<Curried> {
        match self {
            Outcome::Partial(curried) => Some(curried),
            Outcome::Complete(_) => None,
        }
    }

    /// The target's result, if it ran.
    pub fn value(self) -> Option<Value> {
        match self {
            Outcome::Complete(value) => Some(value),
            Outcome::Partial(_) => None,
        }
    }

    /// Whether the target ran.
    pub fn is_complete(&self) -> bool {
        matches!(self, Outcome::Complete(_))
    }

    /// Collapse into a value; a partial application becomes a function
    /// value.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Complete(value) => value,
            Outcome::Partial(curried) => Value::function(curried),
        }
    }
}

/// A curried instance is itself callable, so partial applications can be
/// passed around as function values and curried again. Its signature is the
/// residual one: a chain wrapping it rejects arguments that are already
/// bound at the call that supplies them.
impl Callable for Curried {
    fn name(&self) -> &str {
        self.spec.name()
    }

    fn doc(&self) -> &str {
        self.spec.doc()
    }

    fn signature(&self) -> &Signature {
        &self.residual
    }

    fn call(&self, args: CallArgs) -> EvalResult {
        self.invoke(args).map(Outcome::into_value)
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("function", &self.spec.name())
            .field("depth", &self.spec.depth())
            .field("state", &self.state)
            .finish()
    }
}
