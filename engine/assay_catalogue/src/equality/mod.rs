//! Equality checks.

use assay_check::{CheckResult, CheckedSubject};
use assay_message::FluentMessage;
use assay_render::Render;

/// Checks comparing the value to an expected one.
pub trait EqualityChecks<T> {
    /// The value equals `expected`.
    fn is_equal_to(self, expected: T) -> CheckResult<T>;
}

impl<T: PartialEq + Render> EqualityChecks<T> for CheckedSubject<T> {
    fn is_equal_to(self, expected: T) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is equal to the expected one whereas it must not.")
            .on(self.value())
            .and()
            .expected(&expected)
            .comparison("different from");

        self.execute_check(
            move |value| {
                if *value == expected {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is different from the expected one.")
                    .on(value)
                    .and()
                    .expected(&expected)
                    .into())
            },
            negated,
        )
    }
}
