//! Runtime type identity for instance and inheritance checks.
//!
//! Rust has no class hierarchy, so "derived type" is modelled by
//! composition: a type reports the parent value it embeds through
//! [`Reflect::base`]. `Box<T>` is transparent, so a value declared as
//! `Box<dyn Trait>` reveals its concrete runtime type. Shared references
//! are values of their own type: `"x"` is a `&str`, not a `str`.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

/// Identity of a type: its `TypeId` plus its qualified name.
///
/// Equality and hashing only consider the `TypeId`.
#[derive(Clone, Copy, Debug)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Descriptor of the static type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name, as reported by `std::any::type_name`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name with every module path stripped (`alloc::vec::Vec<i32>` -> `Vec<i32>`).
    pub fn short_name(&self) -> String {
        short_type_name(self.name)
    }

    /// Check whether this descriptor denotes `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Runtime type identity of a checked value.
///
/// Both methods have defaults, so a plain type only needs `impl Reflect for
/// Person {}`. A "derived" type overrides [`base`](Reflect::base):
///
/// ```text
/// struct Child { person: Person }
///
/// impl Reflect for Child {
///     fn base(&self) -> Option<&dyn Reflect> {
///         Some(&self.person)
///     }
/// }
/// ```
pub trait Reflect: 'static {
    /// The concrete type of `self`, seen through any indirection.
    fn runtime_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    /// The embedded parent value, if this type derives from another.
    fn base(&self) -> Option<&dyn Reflect> {
        None
    }
}

/// Runtime types from `value` up through its ancestors, nearest first.
pub fn lineage(value: &dyn Reflect) -> impl Iterator<Item = TypeDescriptor> + '_ {
    iter::successors(Some(value), |&current| current.base())
        .map(|current| current.runtime_type())
}

macro_rules! reflect_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(impl Reflect for $ty {})+
    };
}

reflect_leaf!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: 'static> Reflect for Vec<T> {}

impl<T: 'static> Reflect for [T] {}

impl<T: 'static, const N: usize> Reflect for [T; N] {}

impl<T: 'static> Reflect for Option<T> {}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn runtime_type(&self) -> TypeDescriptor {
        (**self).runtime_type()
    }

    fn base(&self) -> Option<&dyn Reflect> {
        (**self).base()
    }
}

impl<T: ?Sized + 'static> Reflect for &'static T {}

/// Strip module paths from a type name, including inside generic arguments.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }

    out
}

#[cfg(test)]
mod tests;
