//! Check catalogue.
//!
//! Extension traits over [`CheckedSubject`](assay_check::CheckedSubject),
//! grouped by the capability the checked type needs:
//!
//! | Trait              | Requires               | Checks                                   |
//! |--------------------|------------------------|------------------------------------------|
//! | [`InstanceChecks`] | `Reflect + Render`     | exact runtime type, inheritance          |
//! | [`EqualityChecks`] | `PartialEq + Render`   | equality                                 |
//! | [`OrderedChecks`]  | `PartialOrd + Render`  | before / after                           |
//! | [`NumberChecks`]   | [`Number`]             | zero, sign, thresholds                   |
//! | [`NullableChecks`] | `Option<T>`            | has a value / has no value               |
//!
//! Every check builds its negated message, then hands its predicate to the
//! executor. None of them decide pass/fail under negation themselves.
//!
//! ```text
//! use assay_catalogue::prelude::*;
//!
//! Check::that(42_i64).is_positive()?.and().is_less_than(100)?;
//! Check::that(child).not().is_instance_of::<Person>()?;
//! Check::that(None::<i32>).has_no_value()?;
//! ```

mod equality;
mod instance;
mod nullable;
mod number;
mod ordering;

pub use equality::EqualityChecks;
pub use instance::InstanceChecks;
pub use nullable::NullableChecks;
pub use number::{Number, NumberChecks};
pub use ordering::OrderedChecks;

/// Everything needed to write fluent checks.
pub mod prelude {
    pub use crate::{
        EqualityChecks, InstanceChecks, NullableChecks, Number, NumberChecks, OrderedChecks,
    };
    pub use assay_check::{
        Assert, Check, CheckError, CheckLink, CheckResult, CheckedSubject, Checker, RenderConfig,
        TypeNameStyle,
    };
    pub use assay_render::{render_via_display, Reflect, Render};
}
