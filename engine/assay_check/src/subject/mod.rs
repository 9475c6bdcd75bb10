//! Check state and chaining handles.

use assay_render::RenderConfig;

use crate::CheckError;

/// Result of running one check: a link to continue the chain, or the error.
pub type CheckResult<T> = Result<CheckLink<T>, CheckError>;

/// Entry point of every fluent expression.
///
/// ```text
/// Check::that(23).is_positive()?.and().is_less_than(100)?;
/// ```
pub struct Check;

impl Check {
    /// Wrap `value` for checking, with the default render configuration.
    pub fn that<T>(value: T) -> CheckedSubject<T> {
        CheckedSubject::new(value, RenderConfig::default())
    }

    /// A [`Checker`] whose subjects render with `config`.
    pub fn with_config(config: RenderConfig) -> Checker {
        Checker::new(config)
    }
}

/// Creates subjects that share one render configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Checker {
    config: RenderConfig,
}

impl Checker {
    pub fn new(config: RenderConfig) -> Self {
        Checker { config }
    }

    /// Wrap `value` for checking.
    pub fn that<T>(&self, value: T) -> CheckedSubject<T> {
        CheckedSubject::new(value, self.config)
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }
}

/// The value under test plus its pending negation.
///
/// Scoped to one fluent expression. `negated` applies to the next check
/// only: every [`CheckLink`] hands the subject back with negation cleared.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use = "a checked subject does nothing until a check runs on it"]
pub struct CheckedSubject<T> {
    pub(crate) value: T,
    pub(crate) negated: bool,
    pub(crate) config: RenderConfig,
}

impl<T> CheckedSubject<T> {
    pub fn new(value: T, config: RenderConfig) -> Self {
        CheckedSubject {
            value,
            negated: false,
            config,
        }
    }

    /// Invert the verdict of the next check.
    #[expect(
        clippy::should_implement_trait,
        reason = "reads as `.not()` inside check chains"
    )]
    pub fn not(self) -> Self {
        CheckedSubject {
            negated: !self.negated,
            ..self
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    pub(crate) fn cleared(self) -> Self {
        CheckedSubject {
            negated: false,
            ..self
        }
    }
}

/// Continuation handle returned by a passing check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckLink<T> {
    subject: CheckedSubject<T>,
}

impl<T> CheckLink<T> {
    pub(crate) fn new(subject: CheckedSubject<T>) -> Self {
        CheckLink {
            subject: subject.cleared(),
        }
    }

    /// Continue with another check on the same value; never negated.
    pub fn and(self) -> CheckedSubject<T> {
        self.subject.cleared()
    }

    /// Continue with a negated check on the same value.
    pub fn and_not(self) -> CheckedSubject<T> {
        self.and().not()
    }

    /// The value the chain started from.
    pub fn value(&self) -> &T {
        &self.subject.value
    }

    pub fn into_value(self) -> T {
        self.subject.value
    }
}
