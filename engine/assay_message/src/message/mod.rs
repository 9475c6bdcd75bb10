//! The fluent message builder.

use std::fmt;

use assay_render::{Render, RenderedValue};
use smallvec::SmallVec;

use crate::{BlockKind, MessageBlock};

/// Subject label substituted for `{0}` unless overridden.
pub const DEFAULT_SUBJECT: &str = "checked value";

/// Placeholder for the subject label inside a headline template.
const SUBJECT_PLACEHOLDER: &str = "{0}";

/// Builder for a failure message.
///
/// Blocks are emitted in the order they were attached, except the actual
/// value block which [`on`](FluentMessage::on) always keeps first.
///
/// # Example
///
/// ```text
/// let message = FluentMessage::build("The {0} is before the reference value whereas it must not.")
///     .on(&5)
///     .and()
///     .expected(&10)
///     .comparison("after");
///
/// assert_eq!(
///     message.to_string(),
///     "\nThe checked value is before the reference value whereas it must not.\
///      \nThe checked value:\n\t[5]\nThe value must be after:\n\t[10]",
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a message does nothing until it is rendered or raised"]
pub struct FluentMessage {
    headline: Option<String>,
    subject: String,
    blocks: SmallVec<[MessageBlock; 4]>,
    closing: Option<String>,
}

impl FluentMessage {
    /// Start a message with a headline template; `{0}` names the subject.
    pub fn build(template: impl Into<String>) -> Self {
        FluentMessage {
            headline: Some(template.into()),
            ..Self::blocks_only()
        }
    }

    /// Start a message that consists of blocks only.
    pub fn blocks_only() -> Self {
        FluentMessage {
            headline: None,
            subject: DEFAULT_SUBJECT.to_owned(),
            blocks: SmallVec::new(),
            closing: None,
        }
    }

    /// Override the subject label (`checked value` by default).
    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        let label = self.actual_label();
        if let Some(actual) = self
            .blocks
            .iter_mut()
            .find(|block| block.kind == BlockKind::Actual)
        {
            actual.label = label;
        }
        self
    }

    /// Attach the checked value as the first block.
    pub fn on<T: Render + ?Sized>(mut self, value: &T) -> Self {
        let block = MessageBlock::new(
            BlockKind::Actual,
            self.actual_label(),
            RenderedValue::of(value),
        );
        match self.blocks.first_mut() {
            Some(first) if first.kind == BlockKind::Actual => *first = block,
            _ => self.blocks.insert(0, block),
        }
        self
    }

    /// Fluent connector; reads as `.on(x).and().expected(y)`.
    #[inline]
    pub fn and(self) -> Self {
        self
    }

    /// Append an expected value block.
    pub fn expected<T: Render + ?Sized>(mut self, value: &T) -> Self {
        self.blocks.push(MessageBlock::new(
            BlockKind::Expected,
            "The expected value",
            RenderedValue::of(value),
        ));
        self
    }

    /// Tag the immediately preceding expected block with a comparison keyword.
    pub fn comparison(mut self, keyword: impl Into<String>) -> Self {
        match self.blocks.last_mut() {
            Some(last) if last.is_expected() => last.comparison = Some(keyword.into()),
            _ => {
                tracing::trace!("comparison keyword without a preceding expected block ignored");
            }
        }
        self
    }

    /// Append a free-form block with an already rendered payload.
    pub fn block(mut self, label: impl Into<String>, payload: RenderedValue) -> Self {
        self.blocks.push(MessageBlock::new(BlockKind::Custom, label, payload));
        self
    }

    /// Set the line emitted after every block.
    pub fn closing(mut self, text: impl Into<String>) -> Self {
        self.closing = Some(text.into());
        self
    }

    /// The attached blocks, in emission order.
    pub fn blocks(&self) -> &[MessageBlock] {
        &self.blocks
    }

    /// The subject label substituted for `{0}`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    fn actual_label(&self) -> String {
        format!("The {}", self.subject)
    }
}

impl fmt::Display for FluentMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(headline) = &self.headline {
            write!(f, "\n{}", headline.replace(SUBJECT_PLACEHOLDER, &self.subject))?;
        }
        for block in &self.blocks {
            write!(f, "\n{block}")?;
        }
        if let Some(closing) = &self.closing {
            write!(f, "\n{closing}")?;
        }
        Ok(())
    }
}

impl From<FluentMessage> for String {
    fn from(message: FluentMessage) -> Self {
        message.to_string()
    }
}

#[cfg(test)]
mod tests;
