//! Numeric checks.
//!
//! One set of checks serves every primitive numeric type through the
//! [`Number`] capability. A NaN is not zero, not positive, and neither less
//! nor greater than any threshold.

use std::cmp::Ordering;

use assay_check::{CheckResult, CheckedSubject};
use assay_message::FluentMessage;
use assay_render::Render;

/// A primitive numeric type.
pub trait Number: Copy + PartialOrd + Render {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

/// Checks on numeric values.
pub trait NumberChecks<T> {
    /// The value equals zero.
    fn is_zero(self) -> CheckResult<T>;

    /// The value differs from zero.
    fn is_not_zero(self) -> CheckResult<T>;

    /// The value is strictly greater than zero.
    fn is_positive(self) -> CheckResult<T>;

    /// The value is strictly less than `threshold`.
    fn is_less_than(self, threshold: T) -> CheckResult<T>;

    /// The value is strictly greater than `threshold`.
    fn is_greater_than(self, threshold: T) -> CheckResult<T>;
}

impl<T: Number> NumberChecks<T> for CheckedSubject<T> {
    fn is_zero(self) -> CheckResult<T> {
        let negated =
            FluentMessage::build("The {0} is equal to zero whereas it must not.").on(self.value());

        self.execute_check(
            |value| {
                if *value == T::ZERO {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is different from zero.")
                    .on(value)
                    .into())
            },
            negated,
        )
    }

    fn is_not_zero(self) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is different from zero whereas it must not.")
            .on(self.value());

        self.execute_check(
            |value| {
                if *value != T::ZERO {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is equal to zero.")
                    .on(value)
                    .into())
            },
            negated,
        )
    }

    fn is_positive(self) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is strictly positive whereas it must not.")
            .on(self.value());

        self.execute_check(
            |value| {
                if value.partial_cmp(&T::ZERO) == Some(Ordering::Greater) {
                    return Ok(());
                }
                Err(FluentMessage::build("The {0} is not strictly positive.")
                    .on(value)
                    .into())
            },
            negated,
        )
    }

    fn is_less_than(self, threshold: T) -> CheckResult<T> {
        let negated = FluentMessage::build("The {0} is less than the threshold whereas it must not.")
            .on(self.value())
            .and()
            .expected(&threshold)
            .comparison("greater than or equal to");

        self.execute_check(
            move |value| {
                if value.partial_cmp(&threshold) == Some(Ordering::Less) {
                    return Ok(());
                }
                Err(
                    FluentMessage::build("The {0} is greater than or equal to the threshold.")
                        .on(value)
                        .and()
                        .expected(&threshold)
                        .comparison("less than")
                        .into(),
                )
            },
            negated,
        )
    }

    fn is_greater_than(self, threshold: T) -> CheckResult<T> {
        let negated =
            FluentMessage::build("The {0} is greater than the threshold whereas it must not.")
                .on(self.value())
                .and()
                .expected(&threshold)
                .comparison("less than or equal to");

        self.execute_check(
            move |value| {
                if value.partial_cmp(&threshold) == Some(Ordering::Greater) {
                    return Ok(());
                }
                Err(
                    FluentMessage::build("The {0} is less than or equal to the threshold.")
                        .on(value)
                        .and()
                        .expected(&threshold)
                        .comparison("greater than")
                        .into(),
                )
            },
            negated,
        )
    }
}
