//! Call arguments and their binding against a signature.
//!
//! [`CallArgs`] is what one call site supplies: positional values in order
//! and `name = value` pairs in order. Most calls carry a handful of
//! arguments, so both lists live in `SmallVec`s and avoid allocation in the
//! common case.
//!
//! [`CallArgs::bind`] resolves a finished call against a [`Signature`]
//! the way a Python function call does:
//! 1. Positional values fill parameters left to right, up to the first
//!    keyword-only one.
//! 2. Surplus positional values go to the variadic collector, or fail.
//! 3. Named values fill the matching parameter, or go to the keyword
//!    collector, or fail.
//! 4. Unfilled parameters take their default, or fail.

use smallvec::SmallVec;

use crate::errors::{
    duplicate_argument, missing_argument, too_many_positional, type_mismatch, unexpected_keyword,
    EvalError,
};
use crate::signature::{Name, Signature};
use crate::value::Value;

/// Inline-stored positional arguments.
pub type PositionalArgs = SmallVec<[Value; 4]>;

/// Inline-stored named arguments, in the order they were supplied.
pub type NamedArgs = SmallVec<[(Name, Value); 4]>;

/// Arguments supplied by one call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallArgs {
    positional: PositionalArgs,
    named: NamedArgs,
}

impl CallArgs {
    /// An empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already collected parts.
    pub fn from_parts(positional: PositionalArgs, named: NamedArgs) -> Self {
        CallArgs { positional, named }
    }

    /// Build a positional-only argument list.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        CallArgs {
            positional: values.into_iter().map(Into::into).collect(),
            named: NamedArgs::new(),
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a named argument.
    #[must_use]
    pub fn kwarg(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.named.push((Name::from(name), value.into()));
        self
    }

    /// Positional arguments in order.
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    /// Named arguments in the order supplied.
    pub fn named_values(&self) -> &[(Name, Value)] {
        &self.named
    }

    /// Total number of arguments.
    pub fn len(&self) -> usize {
        self.positional.len().saturating_add(self.named.len())
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Split into positional and named parts.
    pub fn into_parts(self) -> (PositionalArgs, NamedArgs) {
        (self.positional, self.named)
    }

    /// Resolve these arguments against `signature`.
    ///
    /// `function` is only used in error messages.
    pub fn bind(self, function: &str, signature: &Signature) -> Result<BoundArgs, EvalError> {
        let params = signature.params();
        let given = self.positional.len();
        let mut slots: Vec<Option<Value>> = vec![None; params.len()];
        let mut rest = Vec::new();
        let mut rest_keywords: Vec<(Name, Value)> = Vec::new();

        let positional_slots = signature.positional_count();
        for (index, value) in self.positional.into_iter().enumerate() {
            if index < positional_slots {
                slots[index] = Some(value);
            } else if signature.has_variadic() {
                rest.push(value);
            } else {
                return Err(too_many_positional(function, positional_slots, given));
            }
        }

        for (name, value) in self.named {
            if let Some(index) = signature.position_of(&name) {
                let slot = &mut slots[index];
                if slot.is_some() {
                    return Err(duplicate_argument(function, &name));
                }
                *slot = Some(value);
            } else if signature.has_variadic_keywords() {
                if rest_keywords.iter().any(|(seen, _)| *seen == name) {
                    return Err(duplicate_argument(function, &name));
                }
                rest_keywords.push((name, value));
            } else {
                return Err(unexpected_keyword(function, &name));
            }
        }

        let mut values = Vec::with_capacity(params.len());
        for (param, slot) in params.iter().zip(slots) {
            match slot.or_else(|| param.default.clone()) {
                Some(value) => values.push((param.name.clone(), value)),
                None => return Err(missing_argument(function, &param.name)),
            }
        }

        Ok(BoundArgs {
            function: function.to_string(),
            values,
            rest,
            rest_keywords,
        })
    }
}

/// A call resolved against a signature: one value per declared parameter
/// plus whatever the collectors picked up.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundArgs {
    function: String,
    values: Vec<(Name, Value)>,
    rest: Vec<Value>,
    rest_keywords: Vec<(Name, Value)>,
}

impl BoundArgs {
    /// Value bound to the parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| &**param == name)
            .map(|(_, value)| value)
    }

    /// Integer bound to `name`, or a type error naming the function.
    pub fn int(&self, name: &str) -> Result<i64, EvalError> {
        match self.get(name) {
            Some(Value::Int(n)) => Ok(*n),
            Some(other) => Err(type_mismatch("int", other.type_name())
                .with_note(format!("argument '{name}' of {}()", self.function))),
            None => Err(missing_argument(&self.function, name)),
        }
    }

    /// Values for declared parameters, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().map(|(_, value)| value)
    }

    /// Surplus positional arguments.
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    /// Unmatched keyword arguments, in the order supplied.
    pub fn rest_keywords(&self) -> &[(Name, Value)] {
        &self.rest_keywords
    }
}
