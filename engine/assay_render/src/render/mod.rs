//! Canonical display form of checked and expected values.
//!
//! The output of [`Render`] is part of the diagnostic contract: failure
//! messages are matched character-for-character, so the rules here never
//! depend on configuration.

use std::fmt;

/// Canonical diagnostic rendering of a value.
///
/// Unlike `Display`, the rendering is fixed per type family:
/// - `None` renders as `null`
/// - strings are wrapped in double quotes, without escaping
/// - numbers and booleans use their standard textual form
/// - sequences render as `[a, b, c]`, each element rendered recursively
///
/// User types opt in by implementing the trait, or by delegating to their
/// `Display` impl with [`render_via_display!`](crate::render_via_display).
pub trait Render {
    /// Write the canonical form of `self` into `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Implement [`Render`] for types whose `Display` output is already their
/// canonical form.
///
/// ```text
/// struct Person { name: String }
/// impl fmt::Display for Person { ... }
/// render_via_display!(Person);
/// ```
#[macro_export]
macro_rules! render_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Render for $ty {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl Render for str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().render(f)
    }
}

impl Render for char {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{self}'")
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

/// `Display` adapter over any [`Render`] value.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Render a value to its canonical diagnostic string.
pub fn render<T: Render + ?Sized>(value: &T) -> String {
    Rendered(value).to_string()
}

/// A rendered payload ready to be placed inside a message block.
///
/// Computed on demand and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderedValue(String);

impl RenderedValue {
    /// Render `value` with its canonical [`Render`] form.
    pub fn of<T: Render + ?Sized>(value: &T) -> Self {
        RenderedValue(render(value))
    }

    /// Use `text` as-is (type names, pre-formatted payloads).
    pub fn verbatim(text: impl Into<String>) -> Self {
        RenderedValue(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
