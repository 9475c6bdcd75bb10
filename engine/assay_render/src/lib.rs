//! Value rendering for check diagnostics.
//!
//! Every failure message embeds the values involved in the check. This crate
//! owns the rules that turn those values into text:
//! - [`Render`]: canonical display form of a value (`null`, quoted strings,
//!   bracketed sequences, plain numbers)
//! - [`Reflect`]: runtime type identity, including the "declared as `A`,
//!   actually a `B`" case reached through `Box<dyn Trait>`
//! - [`RenderConfig`]: how type names are spelled in messages
//!
//! # Example
//!
//! ```text
//! assert_eq!(render(&23), "23");
//! assert_eq!(render("hello"), "\"hello\"");
//! assert_eq!(render(&vec![1, 2]), "[1, 2]");
//! assert_eq!(render(&None::<i32>), "null");
//! ```

mod config;
mod reflect;
mod render;

pub use config::{ParseTypeNameStyleError, RenderConfig, TypeNameStyle};
pub use reflect::{lineage, short_type_name, Reflect, TypeDescriptor};
pub use render::{render, Render, Rendered, RenderedValue};
