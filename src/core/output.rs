//! Render-ready output handed to delivery collaborators.

use serde::{Deserialize, Serialize};

/// A resolved text component.
///
/// Plain templates render to a component with only `text` set. Action nodes
/// add a click `command` and `hover` lines. `extra` holds child components
/// appended after `text`, for callers that assemble composite messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedOutput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hover: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<RenderedOutput>,
}

impl RenderedOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_hover(mut self, lines: Vec<String>) -> Self {
        self.hover = lines;
        self
    }

    pub fn with_extra(mut self, child: RenderedOutput) -> Self {
        self.extra.push(child);
        self
    }

    /// Whether this component or any child carries a command or hover text.
    pub fn is_interactive(&self) -> bool {
        self.command.is_some()
            || !self.hover.is_empty()
            || self.extra.iter().any(RenderedOutput::is_interactive)
    }

    /// Text of this component followed by the text of its children, depth first.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.extra {
            child.push_plain_text(out);
        }
    }
}
