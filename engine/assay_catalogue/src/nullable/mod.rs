//! Checks on optional values.

use assay_check::{CheckError, CheckResult, CheckedSubject};
use assay_message::FluentMessage;
use assay_render::Render;

/// Subject label used by every nullable message.
const NULLABLE_SUBJECT: &str = "checked nullable value";

/// Checks on `Option<T>` subjects.
pub trait NullableChecks<T> {
    /// The option holds a value.
    fn has_a_value(self) -> CheckResult<Option<T>>;

    /// The option is empty. Ends the chain: nothing is left to check.
    fn has_no_value(self) -> Result<(), CheckError>;
}

impl<T: Render> NullableChecks<T> for CheckedSubject<Option<T>> {
    fn has_a_value(self) -> CheckResult<Option<T>> {
        let negated = has_value_message(self.value());

        self.execute_check(
            |value| match value {
                Some(_) => Ok(()),
                None => Err(no_value_message().into()),
            },
            negated,
        )
    }

    fn has_no_value(self) -> Result<(), CheckError> {
        let negated = no_value_message();

        self.execute_check(
            |value| match value {
                Some(_) => Err(has_value_message(value).into()),
                None => Ok(()),
            },
            negated,
        )
        .map(drop)
    }
}

fn no_value_message() -> FluentMessage {
    FluentMessage::build("The {0} has no value, which is unexpected.").for_subject(NULLABLE_SUBJECT)
}

/// Shows the held value itself, not its `Some` wrapper.
fn has_value_message<T: Render>(value: &Option<T>) -> FluentMessage {
    let message = FluentMessage::blocks_only().for_subject(NULLABLE_SUBJECT);
    let message = match value {
        Some(inner) => message.on(inner),
        None => message.on(value),
    };
    message.closing("has a value, which is unexpected.")
}
