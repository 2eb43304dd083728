//! Resolved style values consumed by layout and painting.
//!
//! [CSS Values Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The cascade (an upstream crate) resolves declarations down to one value
//! per property per element; this module is the vocabulary those resolved
//! values are expressed in, plus the per-element [`PropertyMap`] painting
//! reads them back out of.

mod color;

use std::collections::HashMap;

use serde::Serialize;

pub use color::ColorValue;

/// [§ 5 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
///
/// Unit of a resolved length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths): CSS pixels.
    Px,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages), relative to a containing dimension.
    Percent,
}

/// A resolved CSS property value.
///
/// Closed set of the value kinds this engine computes. Painting only ever
/// consumes [`Value::Color`]; the other kinds exist so lookups can report
/// "present but not a color", which callers treat as no paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// A color, e.g. `background-color: #ff0000`.
    Color(ColorValue),
    /// A length with its unit, e.g. `padding: 4px`.
    Length(f32, Unit),
    /// A bare keyword, e.g. `display: block`.
    Keyword(String),
}

impl Value {
    /// The contained color, if this value is color-typed.
    #[must_use]
    pub const fn as_color(&self) -> Option<&ColorValue> {
        match self {
            Self::Color(color) => Some(color),
            Self::Length(..) | Self::Keyword(_) => None,
        }
    }
}

/// The resolved properties of one styled element.
///
/// Produced by the cascade, read by layout and painting. Unlike attribute
/// maps, later writes overwrite earlier ones — the cascade has already
/// decided which declaration wins by the time values land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyMap {
    properties: HashMap<String, Value>,
}

impl PropertyMap {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property to its resolved value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let _ = self.properties.insert(name.into(), value);
    }

    /// Look up a single property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Look up a property through an ordered fallback chain.
    ///
    /// Candidate names are tried in sequence and the first *present* name
    /// wins; its value is returned as a clone. Presence short-circuits the
    /// chain before any type checking, so a present-but-wrong-typed value
    /// shadows later candidates.
    #[must_use]
    pub fn value(&self, names: &[&str]) -> Option<Value> {
        names.iter().find_map(|name| self.properties.get(*name)).cloned()
    }

    /// Whether no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
