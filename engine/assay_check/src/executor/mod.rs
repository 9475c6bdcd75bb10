//! The check executor.
//!
//! The only place where negation is interpreted. Catalogue checks supply a
//! predicate that fails with [`CheckError::Failed`] when the positive form of
//! the check does not hold, plus the message to raise when a negated check
//! unexpectedly passes:
//!
//! | predicate      | negated | result                                |
//! |----------------|---------|---------------------------------------|
//! | `Ok(())`       | no      | link                                  |
//! | `Ok(())`       | yes     | `Failed(negated_message)`             |
//! | `Failed(msg)`  | no      | `Failed(msg)`, unchanged              |
//! | `Failed(_)`    | yes     | link                                  |
//! | `Defect`       | any     | `Defect`, unchanged                   |
//!
//! Panics raised by a predicate are not caught.

use crate::{CheckError, CheckFailure, CheckLink, CheckResult, CheckedSubject};

impl<T> CheckedSubject<T> {
    /// Run `predicate` against the value and apply the pending negation.
    ///
    /// On success the returned link carries the subject with negation
    /// cleared, so the next check in the chain states its own polarity.
    #[tracing::instrument(level = "trace", skip_all, fields(negated = self.negated))]
    pub fn execute_check<F>(
        self,
        predicate: F,
        negated_message: impl Into<String>,
    ) -> CheckResult<T>
    where
        F: FnOnce(&T) -> Result<(), CheckError>,
    {
        let outcome = predicate(&self.value);

        match (outcome, self.negated) {
            (Ok(()), false) => {
                tracing::trace!("check passed");
                Ok(CheckLink::new(self))
            }
            (Ok(()), true) => {
                tracing::trace!("negated check passed, raising negated message");
                Err(CheckFailure::new(negated_message).into())
            }
            (Err(CheckError::Failed(_)), true) => {
                tracing::trace!("negated check failed as required");
                Ok(CheckLink::new(self))
            }
            (Err(err @ CheckError::Failed(_)), false) => {
                tracing::trace!("check failed");
                Err(err)
            }
            (Err(err @ CheckError::Defect { .. }), _) => {
                tracing::debug!(%err, "check defect propagated");
                Err(err)
            }
        }
    }
}
