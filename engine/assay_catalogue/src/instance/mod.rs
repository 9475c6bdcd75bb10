//! Runtime type checks.
//!
//! `is_instance_of` demands exact runtime type equality: a `Child` deriving
//! from `Person` is not an instance of `Person`. `inherits_from` accepts the
//! type itself or any of its ancestors.

use assay_check::{CheckResult, CheckedSubject};
use assay_message::FluentMessage;
use assay_render::{lineage, Reflect, Render, RenderConfig, RenderedValue, TypeDescriptor};

/// Checks on the runtime type of the value.
pub trait InstanceChecks<T> {
    /// The runtime type is exactly `U`.
    fn is_instance_of<U: ?Sized + 'static>(self) -> CheckResult<T>;

    /// The runtime type is anything but `U`.
    fn is_not_instance_of<U: ?Sized + 'static>(self) -> CheckResult<T>;

    /// The runtime type is `U` or derives from it.
    fn inherits_from<U: ?Sized + 'static>(self) -> CheckResult<T>;
}

impl<T: Reflect + Render> InstanceChecks<T> for CheckedSubject<T> {
    fn is_instance_of<U: ?Sized + 'static>(self) -> CheckResult<T> {
        let expected = TypeDescriptor::of::<U>();
        let config = self.config();
        let negated = is_instance_message(self.value(), expected, config);

        self.execute_check(
            move |value| {
                if value.runtime_type() == expected {
                    Ok(())
                } else {
                    Err(not_instance_message(value, expected, config).into())
                }
            },
            negated,
        )
    }

    fn is_not_instance_of<U: ?Sized + 'static>(self) -> CheckResult<T> {
        let expected = TypeDescriptor::of::<U>();
        let config = self.config();
        let negated = not_instance_message(self.value(), expected, config);

        self.execute_check(
            move |value| {
                if value.runtime_type() == expected {
                    Err(is_instance_message(value, expected, config).into())
                } else {
                    Ok(())
                }
            },
            negated,
        )
    }

    fn inherits_from<U: ?Sized + 'static>(self) -> CheckResult<T> {
        let expected = TypeDescriptor::of::<U>();
        let config = self.config();
        let actual = self.value().runtime_type();
        let negated = FluentMessage::build(
            "The checked expression is part of the inheritance hierarchy, or of the same type \
             as the specified one, whereas it must not.",
        )
        .block("Indeed, checked expression type", config.type_name(actual))
        .block(
            "is a derived type of, or the same type as",
            config.type_name(expected),
        );

        self.execute_check(
            move |value| {
                if lineage(value).any(|ancestor| ancestor == expected) {
                    return Ok(());
                }
                Err(FluentMessage::build(
                    "The checked expression is not part of the inheritance hierarchy, or of the \
                     same type as the specified one.",
                )
                .block("Indeed, checked expression type", config.type_name(actual))
                .block("is not a derived type of", config.type_name(expected))
                .into())
            },
            negated,
        )
    }
}

/// `The actual value ... is not an instance of ... but an instance of ... instead.`
fn not_instance_message<T: Reflect + Render>(
    value: &T,
    expected: TypeDescriptor,
    config: RenderConfig,
) -> FluentMessage {
    FluentMessage::blocks_only()
        .block("The actual value", RenderedValue::of(value))
        .block("is not an instance of", config.type_name(expected))
        .block("but an instance of", config.type_name(value.runtime_type()))
        .closing("instead.")
}

/// `The actual value ... is an instance of ... which is not expected.`
fn is_instance_message<T: Reflect + Render>(
    value: &T,
    expected: TypeDescriptor,
    config: RenderConfig,
) -> FluentMessage {
    FluentMessage::blocks_only()
        .block("The actual value", RenderedValue::of(value))
        .block("is an instance of", config.type_name(expected))
        .closing("which is not expected.")
}
