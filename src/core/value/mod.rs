//! Stored template values.
//!
//! [`Value`] is a closed set of variants. Each variant knows how to turn its
//! stored data into a [`RenderedOutput`] through the [`Process`] trait, and
//! how to produce an argument-bound copy of itself through [`Walk`].
//!
//! ## Module Structure
//!
//! - `action`: [`ActionNode`] (text with click command and hover lines)
//! - `pool`: [`StringPool`] and its polling [`PoolMode`]

pub mod action;
pub mod pool;

use std::fmt;

use enum_dispatch::enum_dispatch;

pub use action::ActionNode;
pub use pool::{PoolMode, StringPool};

use crate::core::{
    language::Language,
    output::RenderedOutput,
    random::SharedRandom,
    walk::{Definition, PlaceholderStyle, Walk},
};

/// Everything a value needs to render itself for one resolution call.
pub struct ProcessContext<'a> {
    /// Language the output is rendered for.
    pub language: &'a Language,
    /// Arguments bound to the active placeholder style.
    pub definition: &'a Definition<'a>,
    pub random: &'a SharedRandom,
}

/// Turn stored data plus call arguments into renderable output.
///
/// Implementations never fail: data gaps degrade to empty or verbatim text.
#[enum_dispatch]
pub trait Process {
    fn process(&self, ctx: &ProcessContext<'_>) -> RenderedOutput;
}

/// A template stored under one field of a language store.
#[enum_dispatch(Process)]
#[derive(Debug, Clone)]
pub enum Value {
    Literal(Literal),
    StringPool(StringPool),
    Action(ActionNode),
    Component(RenderedComponent),
}

impl Value {
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(Literal::new(text))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Literal(_) => ValueKind::Literal,
            Value::StringPool(_) => ValueKind::StringPool,
            Value::Action(_) => ValueKind::Action,
            Value::Component(_) => ValueKind::Component,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::literal(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::literal(text)
    }
}

impl From<RenderedOutput> for Value {
    fn from(output: RenderedOutput) -> Self {
        Value::Component(RenderedComponent(output))
    }
}

impl Walk for Value {
    fn walk(&self, definition: &Definition<'_>) -> Self {
        match self {
            Value::Literal(v) => Value::Literal(v.walk(definition)),
            Value::StringPool(v) => Value::StringPool(v.walk(definition)),
            Value::Action(v) => Value::Action(v.walk(definition)),
            Value::Component(v) => Value::Component(v.walk(definition)),
        }
    }

    fn needs_walk(&self, style: PlaceholderStyle) -> bool {
        match self {
            Value::Literal(v) => v.needs_walk(style),
            Value::StringPool(v) => v.needs_walk(style),
            Value::Action(v) => v.needs_walk(style),
            Value::Component(v) => v.needs_walk(style),
        }
    }
}

/// Variant tag of a [`Value`], for store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Literal,
    StringPool,
    Action,
    Component,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Literal => write!(f, "literal"),
            ValueKind::StringPool => write!(f, "pool"),
            ValueKind::Action => write!(f, "action"),
            ValueKind::Component => write!(f, "component"),
        }
    }
}

/// An immutable string template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Walk for Literal {
    fn walk(&self, definition: &Definition<'_>) -> Self {
        Self(definition.walk_str(&self.0))
    }

    fn needs_walk(&self, style: PlaceholderStyle) -> bool {
        style.needs_walk(&self.0)
    }
}

impl Process for Literal {
    fn process(&self, ctx: &ProcessContext<'_>) -> RenderedOutput {
        if self.needs_walk(ctx.definition.style()) {
            RenderedOutput::text(ctx.definition.walk_str(&self.0))
        } else {
            RenderedOutput::text(self.0.clone())
        }
    }
}

/// A pre-built component passed through untouched; arguments are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent(pub RenderedOutput);

impl Walk for RenderedComponent {
    fn walk(&self, _definition: &Definition<'_>) -> Self {
        self.clone()
    }

    fn needs_walk(&self, _style: PlaceholderStyle) -> bool {
        false
    }
}

impl Process for RenderedComponent {
    fn process(&self, _ctx: &ProcessContext<'_>) -> RenderedOutput {
        self.0.clone()
    }
}
