//! Accumulated arguments and the merge that extends them.
//!
//! An `ArgumentState` is a snapshot of everything bound along one chain of
//! calls. States are never modified in place: `merge` validates a call's
//! arguments against the snapshot and returns a new one, leaving the old
//! state (and every instance holding it) usable.

use curry_value::{
    calls_exhausted, duplicate_argument, too_many_positional, unexpected_keyword, CallArgs, EvalError, Name,
    NamedArgs, PositionalArgs, Value,
};

use crate::FunctionSpec;

/// Arguments bound so far along one chain of calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentState {
    /// Positional values, in call order then within-call order.
    positional: PositionalArgs,
    /// Named values, unique by name, in the order they were bound.
    named: NamedArgs,
    /// Calls made so far.
    call_count: usize,
}

impl ArgumentState {
    /// The empty state every chain starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional values bound so far.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named values bound so far.
    pub fn named(&self) -> &[(Name, Value)] {
        &self.named
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    /// Whether nothing has been bound and no call has been made.
    pub fn is_empty(&self) -> bool {
        self.call_count == 0 && self.positional.is_empty() && self.named.is_empty()
    }

    /// Whether `name` is bound by name.
    fn binds_name(&self, name: &str) -> bool {
        self.named.iter().any(|(bound, _)| &**bound == name)
    }

    /// Combine this state with one more call's arguments.
    ///
    /// Positional values are appended after those already bound. Each newly
    /// filled slot must be declared (or collected by a variadic parameter)
    /// and must not already be bound by name. Each named value must not
    /// already be bound, by name or by position, and must be declared unless
    /// the target collects extra keywords. The call counts even when it
    /// supplies nothing.
    ///
    /// On error `self` is unchanged and remains usable. A state that has
    /// already seen `spec.depth()` calls accepts no more.
    pub fn merge(&self, spec: &FunctionSpec, args: CallArgs) -> Result<ArgumentState, EvalError> {
        let function = spec.name();
        if self.call_count >= spec.depth() {
            return Err(calls_exhausted(function, spec.depth()));
        }
        let signature = spec.signature();
        let call = self.call_count.saturating_add(1);
        let (new_positional, new_named) = args.into_parts();

        let total_positional = self.positional.len().saturating_add(new_positional.len());
        if !signature.accepts_positional(total_positional) {
            return Err(rejected(
                too_many_positional(function, signature.positional_count(), total_positional),
                call,
                spec.depth(),
            ));
        }

        let mut positional = self.positional.clone();
        for value in new_positional {
            if let Some(name) = signature.name_at(positional.len()) {
                if self.binds_name(name) {
                    return Err(rejected(
                        duplicate_argument(function, name),
                        call,
                        spec.depth(),
                    ));
                }
            }
            positional.push(value);
        }

        let mut named = self.named.clone();
        for (name, value) in new_named {
            let rebound = named.iter().any(|(bound, _)| *bound == name);
            let filled_positionally = signature
                .positional_slot_of(&name)
                .is_some_and(|slot| slot < positional.len());
            if rebound || filled_positionally {
                return Err(rejected(
                    duplicate_argument(function, &name),
                    call,
                    spec.depth(),
                ));
            }
            if !signature.accepts_keyword(&name) {
                return Err(rejected(
                    unexpected_keyword(function, &name),
                    call,
                    spec.depth(),
                ));
            }
            named.push((name, value));
        }

        tracing::trace!(
            function,
            call,
            positional = positional.len(),
            named = named.len(),
            "merged call arguments"
        );

        Ok(ArgumentState {
            positional,
            named,
            call_count: call,
        })
    }

    /// Hand the accumulated arguments to the target.
    pub(crate) fn into_call_args(self) -> CallArgs {
        CallArgs::from_parts(self.positional, self.named)
    }
}

/// Note which call introduced a binding error.
#[cold]
fn rejected(err: EvalError, call: usize, depth: usize) -> EvalError {
    tracing::debug!(call, depth, error = %err.message, "rejected call arguments");
    err.with_note(format!("raised by call {call} of {depth}"))
}
