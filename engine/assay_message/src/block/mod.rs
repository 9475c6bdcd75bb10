//! A single labeled segment of a failure message.

use std::fmt;

use assay_render::RenderedValue;

/// Role of a block inside a message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// The value under test.
    Actual,
    /// A reference value the checked one is compared against.
    Expected,
    /// Any other labeled value (type names, secondary facts).
    Custom,
}

/// One labeled, rendered value.
///
/// Renders as two lines: `label:` then the payload in brackets, indented by
/// a tab. A comparison keyword replaces the label line with
/// `The value must be <keyword>:`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageBlock {
    pub kind: BlockKind,
    /// Label without the trailing colon.
    pub label: String,
    /// Rendered value, without the surrounding brackets.
    pub payload: String,
    /// Comparison keyword (`after`, `less than`, ...), expected blocks only.
    pub comparison: Option<String>,
}

impl MessageBlock {
    /// Create a block from an already rendered value.
    pub fn new(kind: BlockKind, label: impl Into<String>, payload: RenderedValue) -> Self {
        MessageBlock {
            kind,
            label: label.into(),
            payload: payload.into_string(),
            comparison: None,
        }
    }

    /// Check if this block can carry a comparison keyword.
    pub fn is_expected(&self) -> bool {
        matches!(self.kind, BlockKind::Expected)
    }
}

impl fmt::Display for MessageBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comparison {
            Some(keyword) => write!(f, "The value must be {keyword}:")?,
            None => write!(f, "{}:", self.label)?,
        }
        write!(f, "\n\t[{}]", self.payload)
    }
}
