//! Failure message construction.
//!
//! A failure message is a headline followed by labeled blocks, each holding
//! one rendered value, optionally closed by a final line:
//!
//! ```text
//!
//! The checked value is before the reference value whereas it must not.
//! The checked value:
//!     [5]
//! The value must be after:
//!     [10]
//! ```
//!
//! (the payload lines start with a tab). The layout is a contract: callers
//! match on the text character-for-character, so every element is prefixed
//! by a newline and nothing trails the last line.

mod block;
mod message;

pub use block::{BlockKind, MessageBlock};
pub use message::{FluentMessage, DEFAULT_SUBJECT};
