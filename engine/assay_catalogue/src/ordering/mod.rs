//! Ordering checks.
//!
//! Built on `PartialOrd`. Operands that do not compare (a NaN on either side)
//! are neither before nor after one another: the positive check fails with
//! its usual message and the negated check passes.

use std::cmp::Ordering;

use assay_check::{CheckResult, CheckedSubject};
use assay_message::FluentMessage;
use assay_render::Render;

/// Checks placing the value relative to a reference value.
pub trait OrderedChecks<T> {
    /// The value sorts strictly before `reference`.
    fn is_before(self, reference: T) -> CheckResult<T>;

    /// The value sorts strictly after `reference`.
    fn is_after(self, reference: T) -> CheckResult<T>;
}

impl<T: PartialOrd + Render> OrderedChecks<T> for CheckedSubject<T> {
    fn is_before(self, reference: T) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is before the reference value whereas it must not.")
            .on(self.value())
            .and()
            .expected(&reference)
            .comparison("after");

        self.execute_check(
            move |value| {
                if value.partial_cmp(&reference) == Some(Ordering::Less) {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is not before the reference value.")
                    .on(value)
                    .and()
                    .expected(&reference)
                    .comparison("before")
                    .into())
            },
            negated,
        )
    }

    fn is_after(self, reference: T) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is after the reference value whereas it must not.")
            .on(self.value())
            .and()
            .expected(&reference)
            .comparison("before");

        self.execute_check(
            move |value| {
                if value.partial_cmp(&reference) == Some(Ordering::Greater) {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is not after the reference value.")
                    .on(value)
                    .and()
                    .expected(&reference)
                    .comparison("after")
                    .into())
            },
            negated,
        )
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
