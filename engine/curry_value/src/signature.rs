//! Declared parameters of a callable.
//!
//! A `Signature` lists the named parameters in order, each with an optional
//! default, plus optional collectors for surplus positional (`*args`) and
//! keyword (`**kwargs`) arguments. A leading run of the parameters can be
//! filled positionally; any after it are keyword-only. The engine reads it to map
//! positional slots onto parameter names; [`CallArgs::bind`] reads it to
//! resolve a finished call.
//!
//! [`CallArgs::bind`]: crate::CallArgs::bind

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Interned-by-`Arc` parameter or keyword name.
pub type Name = Arc<str>;

/// One declared parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Parameter name.
    pub name: Name,
    /// Value used when the caller leaves the parameter unbound.
    pub default: Option<Value>,
}

/// Parameter list with O(1) name -> position lookup.
#[derive(Clone, Debug, Default)]
pub struct Signature {
    params: Vec<Param>,
    positions: FxHashMap<Name, usize>,
    /// `params[..positional_count]` accept positional arguments.
    positional_count: usize,
    variadic: Option<Name>,
    variadic_keywords: Option<Name>,
}

impl Signature {
    /// Create a signature from parameter names, none of them defaulted.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let params: Vec<Param> = names
            .into_iter()
            .map(|name| Param {
                name: Name::from(name.as_ref()),
                default: None,
            })
            .collect();
        let positional_count = params.len();
        Self::from_params(params, positional_count)
    }

    fn from_params(params: Vec<Param>, positional_count: usize) -> Self {
        let positions = params
            .iter()
            .enumerate()
            .map(|(i, param)| (param.name.clone(), i))
            .collect();
        Signature {
            params,
            positions,
            positional_count,
            variadic: None,
            variadic_keywords: None,
        }
    }

    /// A signature with no named parameters that takes anything.
    pub fn open() -> Self {
        Signature::new(Vec::<&str>::new())
            .with_variadic("args")
            .with_variadic_keywords("kwargs")
    }

    /// Give the parameter `name` a default value. Unknown names are ignored.
    #[must_use]
    pub fn with_default(mut self, name: &str, value: Value) -> Self {
        if let Some(&index) = self.positions.get(name) {
            self.params[index].default = Some(value);
        }
        self
    }

    /// Collect surplus positional arguments under `name`.
    #[must_use]
    pub fn with_variadic(mut self, name: &str) -> Self {
        self.variadic = Some(Name::from(name));
        self
    }

    /// Collect unmatched keyword arguments under `name`.
    #[must_use]
    pub fn with_variadic_keywords(mut self, name: &str) -> Self {
        self.variadic_keywords = Some(Name::from(name));
        self
    }

    /// What is left to bind once `positional` leading arguments and the
    /// `named` arguments are fixed.
    ///
    /// Filled and named parameters are dropped. When a named binding sits
    /// inside the positional run, further positional arguments would land
    /// on it, so the parameters after it become keyword-only and the
    /// variadic collector is dropped.
    pub fn residual(&self, positional: usize, named: &[(Name, Value)]) -> Signature {
        let is_named = |name: &str| named.iter().any(|(bound, _)| &**bound == name);
        let filled = positional.min(self.positional_count);

        let mut params = Vec::new();
        let mut positional_count = None;
        let mut blocked = false;
        for (index, param) in self.params.iter().enumerate().skip(filled) {
            if index == self.positional_count {
                positional_count.get_or_insert(params.len());
            }
            if is_named(&param.name) {
                if index < self.positional_count && positional_count.is_none() {
                    positional_count = Some(params.len());
                    blocked = true;
                }
                continue;
            }
            params.push(param.clone());
        }
        let positional_count = positional_count.unwrap_or(params.len());

        let mut residual = Self::from_params(params, positional_count);
        if !blocked {
            residual.variadic.clone_from(&self.variadic);
        }
        residual.variadic_keywords.clone_from(&self.variadic_keywords);
        residual
    }

    /// Declared parameters in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of leading parameters that accept positional arguments.
    pub fn positional_count(&self) -> usize {
        self.positional_count
    }

    /// Name of the parameter filled by positional slot `index`.
    pub fn name_at(&self, index: usize) -> Option<&Name> {
        self.params[..self.positional_count]
            .get(index)
            .map(|param| &param.name)
    }

    /// Declaration index of the parameter called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Positional slot of the parameter called `name`, unless it is
    /// keyword-only.
    pub fn positional_slot_of(&self, name: &str) -> Option<usize> {
        self.position_of(name)
            .filter(|&index| index < self.positional_count)
    }

    /// Whether surplus positional arguments are collected.
    pub fn has_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Whether unmatched keyword arguments are collected.
    pub fn has_variadic_keywords(&self) -> bool {
        self.variadic_keywords.is_some()
    }

    /// Whether `count` positional arguments can all be bound.
    pub fn accepts_positional(&self, count: usize) -> bool {
        self.has_variadic() || count <= self.positional_count
    }

    /// Whether a keyword argument called `name` can be bound.
    pub fn accepts_keyword(&self, name: &str) -> bool {
        self.has_variadic_keywords() || self.positions.contains_key(name)
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && self.positional_count == other.positional_count
            && self.variadic == other.variadic
            && self.variadic_keywords == other.variadic_keywords
    }
}

/// Renders as a parameter list: `(x, y=1, *args, z, **kwargs)`, with a bare
/// `*` before keyword-only parameters when there is no `*args`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |param: &Param| match &param.default {
            Some(default) => format!("{}={default}", param.name),
            None => param.name.to_string(),
        };
        let (positional, keyword_only) = self.params.split_at(self.positional_count);

        let mut parts: Vec<String> = positional.iter().map(render).collect();
        if let Some(name) = &self.variadic {
            parts.push(format!("*{name}"));
        } else if !keyword_only.is_empty() {
            parts.push("*".to_string());
        }
        parts.extend(keyword_only.iter().map(render));
        if let Some(name) = &self.variadic_keywords {
            parts.push(format!("**{name}"));
        }
        write!(f, "({})", parts.join(", "))
    }
}
