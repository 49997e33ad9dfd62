//! Read-only introspection of curried instances.
//!
//! `Curried::describe` projects the shared `FunctionSpec` and the instance's
//! `ArgumentState` into a [`Description`]: plain data for whatever help or
//! debugging presentation a host wants to build. Its `Display` impl renders
//! a help block:
//!
//! ```text
//! add(1) = curry(2)(add(x, y, z), 1)
//!     Returns add(x)(y)(z) = x + y + z.
//! ```
//!
//! `curry(k)` shows the calls still needed; the arguments after the
//! signature are the literal values bound so far.

use std::fmt;

use curry_value::{Name, Value};

use crate::Curried;

/// Shown in place of blank documentation.
pub const ANONYMOUS_DOC: &str = "Anonymous curried function.";

/// Snapshot of a curried instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    /// Function name.
    pub name: String,
    /// Documentation text, verbatim (possibly empty).
    pub doc: String,
    /// Rendered parameter list, e.g. `(x, y, z)`.
    pub signature: String,
    /// Positional values bound so far.
    pub bound_positional: Vec<Value>,
    /// Named values bound so far.
    pub bound_named: Vec<(Name, Value)>,
    /// Calls made so far.
    pub call_count: usize,
    /// Calls still needed, including the one that runs the target.
    pub calls_remaining: usize,
}

impl Description {
    /// Whether any argument has been bound.
    pub fn has_bound_arguments(&self) -> bool {
        !self.bound_positional.is_empty() || !self.bound_named.is_empty()
    }

    /// The bound arguments as a call-site list: `1, 2, y=3`.
    pub fn bound_arguments(&self) -> String {
        self.bound_positional
            .iter()
            .map(ToString::to_string)
            .chain(
                self.bound_named
                    .iter()
                    .map(|(name, value)| format!("{name}={value}")),
            )
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Name followed by the bound arguments: `add(1, y=2)`. The bare name
    /// when nothing is bound.
    pub fn display_name(&self) -> String {
        if self.has_bound_arguments() {
            format!("{}({})", self.name, self.bound_arguments())
        } else {
            self.name.clone()
        }
    }

    /// Documentation to show: the doc text, or a placeholder when blank.
    pub fn doc_or_default(&self) -> &str {
        if self.doc.trim().is_empty() {
            ANONYMOUS_DOC
        } else {
            &self.doc
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = curry({})({}{}",
            self.display_name(),
            self.calls_remaining,
            self.name,
            self.signature
        )?;
        if self.has_bound_arguments() {
            write!(f, ", {}", self.bound_arguments())?;
        }
        write!(f, ")")?;
        for line in self.doc_or_default().trim().lines() {
            write!(f, "\n    {}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Curried {
    /// Describe this instance without changing it.
    pub fn describe(&self) -> Description {
        let spec = self.spec();
        let state = self.state();
        Description {
            name: spec.name().to_string(),
            doc: spec.doc().to_string(),
            signature: spec.signature().to_string(),
            bound_positional: state.positional().to_vec(),
            bound_named: state.named().to_vec(),
            call_count: state.call_count(),
            calls_remaining: self.calls_remaining(),
        }
    }
}

#[cfg(test)]
// Tests use unwrap() to panic on unexpected state, making failures immediately visible
#[allow(clippy::unwrap_used)]
mod tests;
