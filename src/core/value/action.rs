use super::{Process, ProcessContext};
use crate::core::{
    output::RenderedOutput,
    walk::{Definition, PlaceholderStyle, Walk},
};

/// Text with an optional click command and hover lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNode {
    text: String,
    command: Option<String>,
    hover: Vec<String>,
}

impl ActionNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: None,
            hover: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_hover<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hover = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn hover(&self) -> &[String] {
        &self.hover
    }
}

impl Walk for ActionNode {
    fn walk(&self, definition: &Definition<'_>) -> Self {
        Self {
            text: definition.walk_str(&self.text),
            command: self.command.as_deref().map(|c| definition.walk_str(c)),
            hover: definition.walk_lines(&self.hover),
        }
    }

    fn needs_walk(&self, style: PlaceholderStyle) -> bool {
        style.needs_walk(&self.text)
            || self.command.as_deref().is_some_and(|c| style.needs_walk(c))
            || style.needs_walk_any(&self.hover)
    }
}

impl Process for ActionNode {
    fn process(&self, ctx: &ProcessContext<'_>) -> RenderedOutput {
        let bound = if self.needs_walk(ctx.definition.style()) {
            self.walk(ctx.definition)
        } else {
            self.clone()
        };
        RenderedOutput {
            text: bound.text,
            command: bound.command,
            hover: bound.hover,
            extra: Vec::new(),
        }
    }
}
