//! Check execution engine.
//!
//! Wraps a value under test in a [`CheckedSubject`], runs check predicates
//! through a single executor that owns negation semantics, and hands back a
//! [`CheckLink`] for chaining when the check passes.
//!
//! # Flow
//!
//! ```text
//! Check::that(value)          -> CheckedSubject { value, negated: false }
//!     .not()                  -> CheckedSubject { value, negated: true }
//!     .<catalogue check>()    -> execute_check(predicate, negated_message)
//!                             -> Ok(CheckLink) | Err(CheckError)
//!     .and()                  -> CheckedSubject { value, negated: false }
//! ```
//!
//! # Failure Surface
//!
//! A failing check yields [`CheckError::Failed`], whose `Display` is exactly
//! the rendered diagnostic. Callers that prefer the panic convention of test
//! runners use [`Assert::assert`], which panics with that same text.

mod error;
mod executor;
mod outcome;
mod subject;

use std::sync::Once;

pub use error::{CheckError, CheckFailure};
pub use outcome::Assert;
pub use subject::{Check, CheckLink, CheckResult, CheckedSubject, Checker};

// The render configuration travels with each subject, re-export it so
// callers of `Check::with_config` need a single dependency.
pub use assay_render::{RenderConfig, TypeNameStyle};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for check diagnostics.
///
/// Only initializes when `RUST_LOG` is set, and only once per process.
/// Executor decisions are logged at `trace` level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            install_subscriber(tracing_subscriber::EnvFilter::from_default_env());
        }
    });
}

/// Install the fmt subscriber as the global default. Returns `false` when
/// another subscriber already holds that slot.
fn install_subscriber(filter: tracing_subscriber::EnvFilter) -> bool {
    use tracing_subscriber::{fmt, prelude::*};

    match tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "tracing subscriber already installed, keeping it");
            false
        }
    }
}
