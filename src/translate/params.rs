//! Per-render template parameters.

use std::collections::BTreeMap;
use std::fmt;

use crate::component::{PropValue, Props};
use crate::format::{ParamValue, ResolvedParams};

type Deriver = Box<dyn Fn(&Props) -> ParamValue>;

/// Named functions computing template parameters from props.
#[derive(Default)]
pub struct ParamDerivers {
    derivers: BTreeMap<String, Deriver>,
}

impl ParamDerivers {
    /// No derived parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `derive` under `name`, replacing any earlier function.
    #[must_use]
    pub fn with<F, V>(mut self, name: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&Props) -> V + 'static,
        V: Into<ParamValue>,
    {
        self.derivers
            .insert(name.into(), Box::new(move |props: &Props| -> ParamValue {
                derive(props).into()
            }));
        self
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.derivers.len()
    }

    /// Whether no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.derivers.is_empty()
    }
}

impl fmt::Debug for ParamDerivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.derivers.keys()).finish()
    }
}

/// What: Build the parameter set for one render.
///
/// Inputs:
/// - `props`: current component props
/// - `derivers`: named derivation functions
///
/// Output:
/// - Text and number props copied as-is, then every derived value stored
///   under its name
///
/// Details:
/// - Flags and children are dropped.
/// - Derivers see the full `props` and overwrite same-named props.
#[must_use]
pub fn template_param_values(props: &Props, derivers: &ParamDerivers) -> ResolvedParams {
    let mut params: ResolvedParams = props
        .iter()
        .filter_map(|(name, value)| {
            let value = match value {
                PropValue::Str(s) => ParamValue::Str(s.clone()),
                PropValue::Number(n) => ParamValue::Number(*n),
                PropValue::Bool(_) | PropValue::Children(_) => return None,
            };
            Some((name.clone(), value))
        })
        .collect();
    for (name, derive) in &derivers.derivers {
        params.insert(name.clone(), derive(props));
    }
    params
}
