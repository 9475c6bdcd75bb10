//! Panicking surface for test runners.

use crate::CheckError;

/// Turn a check result into the "assertion failed" convention of test
/// runners: return the value on success, panic with the exact rendered
/// message otherwise.
///
/// ```text
/// #[test]
/// #[should_panic(expected = "is not an instance of")]
/// fn rejects_ints() {
///     Check::that(23).is_instance_of::<Person>().assert();
/// }
/// ```
pub trait Assert {
    type Output;

    /// Unwrap a passing check, or panic with its diagnostic.
    fn assert(self) -> Self::Output;
}

impl<T> Assert for Result<T, CheckError> {
    type Output = T;

    #[track_caller]
    fn assert(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
