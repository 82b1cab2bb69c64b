//! Name → function lookup.
//!
//! A registry is built once from a base set and an override set and never
//! changes afterwards, so it can be shared freely between threads.

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::debug;

use super::{color, numeric, text, Function};
use crate::utils::error::{FunctionError, FunctionResult};

/// The functions every registry starts from.
pub fn base_functions() -> Vec<Function> {
    vec![
        color::ADD_HSB,
        color::ADJUST_BRIGHTNESS,
        color::LIGHTEN_BRIGHTNESS,
        color::DARKEN_BRIGHTNESS,
        color::BLEND_RGB,
        color::MAKE_TRANSLUCENT,
        numeric::ADD,
        numeric::SUB,
        numeric::MULT,
        numeric::DIVIDE,
        numeric::MAX_VALUE,
        numeric::MIN_VALUE,
    ]
}

/// The color and value functions layered over the base set.
pub fn custom_functions() -> Vec<Function> {
    vec![
        color::SATURATE,
        color::DESATURATE,
        color::GRAYSCALE,
        color::LIGHTEN,
        color::DARKEN,
        color::MIX_COLORS,
        color::SPIN,
        color::ARGB,
        numeric::PERCENTAGE,
        numeric::REMOVE_UNIT,
        text::CONCAT,
    ]
}

lazy_static! {
    static ref DEFAULT_REGISTRY: FunctionRegistry = FunctionRegistry::standard();
}

/// The standard registry, built on first use.
pub fn default_registry() -> &'static FunctionRegistry {
    &DEFAULT_REGISTRY
}

/// An immutable mapping from function name to function.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    /// IndexMap keeps registration order for listings
    functions: IndexMap<&'static str, Function, FxBuildHasher>,
}

impl FunctionRegistry {
    /// Merge `base` and `overrides`; on a name clash the override wins.
    pub fn build<B, O>(base: B, overrides: O) -> Self
    where
        B: IntoIterator<Item = Function>,
        O: IntoIterator<Item = Function>,
    {
        let mut functions: IndexMap<&'static str, Function, FxBuildHasher> =
            base.into_iter().map(|f| (f.name(), f)).collect();

        let mut replaced = 0;
        for function in overrides {
            if functions.insert(function.name(), function).is_some() {
                replaced += 1;
            }
        }

        debug!(
            "built function registry: {} functions, {} overridden",
            functions.len(),
            replaced
        );
        Self { functions }
    }

    /// Base functions overridden by the custom set.
    pub fn standard() -> Self {
        Self::build(base_functions(), custom_functions())
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    /// Look up `name` and evaluate it in text mode.
    pub fn call_text<S: AsRef<str>>(&self, name: &str, args: &[S]) -> FunctionResult<String> {
        self.get(name)
            .ok_or_else(|| FunctionError::unknown_function(name))?
            .call_text(args)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
