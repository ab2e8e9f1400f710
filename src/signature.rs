//! Declared parameter manifests and argument binding
//!
//! Rust has no call-time reflection, so the declared parameter list is
//! captured explicitly when a function is wrapped (usually through the
//! `signature!` macro) and each invocation's positional/keyword values are
//! bound against it: positionals fill declared slots in order, keywords fill
//! by name, unsupplied optional parameters take their declared defaults.
//! Extra positionals bind under positional index strings ("0", "1", ...)
//! when the signature declares a variadic positional; unknown keywords bind
//! under their own names when it declares variadic keywords.

use crate::error::ProfileError;
use crate::value::ArgValue;

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    default: Option<ArgValue>,
}

impl Param {
    /// A parameter that must be supplied on every call.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
        }
    }

    /// A parameter with a declared default.
    pub fn with_default(name: &str, default: ArgValue) -> Self {
        Self {
            name: name.to_string(),
            default: Some(default),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Declared parameter list for one callable.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Vec<Param>,
    variadic_positional: bool,
    variadic_keyword: bool,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Signature of a callable with no declared parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Bind one invocation's values against the declared parameters.
    pub fn bind(&self, args: &CallArgs) -> Result<BoundArguments, ProfileError> {
        let mut slots: Vec<Option<ArgValue>> = vec![None; self.params.len()];
        let mut extra_positional = Vec::new();

        for (index, value) in args.positional.iter().enumerate() {
            if index < self.params.len() {
                slots[index] = Some(value.clone());
            } else if self.variadic_positional {
                extra_positional.push(value.clone());
            } else {
                return Err(ProfileError::Binding(format!(
                    "takes {} positional arguments but {} were given",
                    self.params.len(),
                    args.positional.len()
                )));
            }
        }

        let mut extra_keyword = Vec::new();
        for (name, value) in &args.keyword {
            match self.params.iter().position(|p| p.name == *name) {
                Some(index) => {
                    if slots[index].is_some() {
                        return Err(ProfileError::Binding(format!(
                            "got multiple values for argument `{}`",
                            name
                        )));
                    }
                    slots[index] = Some(value.clone());
                }
                None if self.variadic_keyword => {
                    extra_keyword.push((name.clone(), value.clone()));
                }
                None => {
                    return Err(ProfileError::Binding(format!(
                        "got an unexpected keyword argument `{}`",
                        name
                    )));
                }
            }
        }

        let mut bound = BoundArguments::default();
        for (param, slot) in self.params.iter().zip(slots) {
            match slot.or_else(|| param.default.clone()) {
                Some(value) => bound.push(param.name.clone(), value),
                None => {
                    return Err(ProfileError::Binding(format!(
                        "missing required argument `{}`",
                        param.name
                    )));
                }
            }
        }
        for (index, value) in extra_positional.into_iter().enumerate() {
            bound.push(index.to_string(), value);
        }
        for (name, value) in extra_keyword {
            bound.push(name, value);
        }

        Ok(bound)
    }
}

/// Builder for `Signature`.
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
    variadic_positional: bool,
    variadic_keyword: bool,
}

impl SignatureBuilder {
    /// Append a required parameter.
    pub fn param(mut self, name: &str) -> Self {
        self.params.push(Param::required(name));
        self
    }

    /// Append a parameter with a declared default.
    pub fn param_with_default(mut self, name: &str, default: ArgValue) -> Self {
        self.params.push(Param::with_default(name, default));
        self
    }

    /// Accept extra positional values, bound under "0", "1", ...
    pub fn variadic_positional(mut self) -> Self {
        self.variadic_positional = true;
        self
    }

    /// Accept unknown keyword values, bound under their own names.
    pub fn variadic_keyword(mut self) -> Self {
        self.variadic_keyword = true;
        self
    }

    pub fn build(self) -> Signature {
        Signature {
            params: self.params,
            variadic_positional: self.variadic_positional,
            variadic_keyword: self.variadic_keyword,
        }
    }
}

/// Positional and keyword argument values for one invocation.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<ArgValue>,
    keyword: Vec<(String, ArgValue)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value.
    pub fn positional(mut self, value: ArgValue) -> Self {
        self.positional.push(value);
        self
    }

    /// Append a keyword value.
    pub fn keyword(mut self, name: &str, value: ArgValue) -> Self {
        self.keyword.push((name.to_string(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

/// Resolved name-to-value mapping for one call, in resolution order:
/// declared parameters first, then variadic positionals, then variadic
/// keywords.
#[derive(Debug, Clone, Default)]
pub struct BoundArguments {
    entries: Vec<(String, ArgValue)>,
}

impl BoundArguments {
    fn push(&mut self, name: String, value: ArgValue) {
        self.entries.push((name, value));
    }

    /// Look up a bound value by parameter name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
