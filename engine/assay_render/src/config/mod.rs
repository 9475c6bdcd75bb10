//! Rendering configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{RenderedValue, TypeDescriptor};

/// How type names are spelled inside failure messages.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TypeNameStyle {
    /// Full module path, e.g. `my_tests::Person`.
    #[default]
    Qualified,
    /// Module paths stripped, e.g. `Person`.
    Short,
}

impl TypeNameStyle {
    /// Spell `descriptor` in this style.
    pub fn apply(self, descriptor: TypeDescriptor) -> String {
        match self {
            TypeNameStyle::Qualified => descriptor.name().to_owned(),
            TypeNameStyle::Short => descriptor.short_name(),
        }
    }
}

impl fmt::Display for TypeNameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNameStyle::Qualified => write!(f, "qualified"),
            TypeNameStyle::Short => write!(f, "short"),
        }
    }
}

/// Error returned when a [`TypeNameStyle`] cannot be parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown type name style `{0}` (expected `qualified` or `short`)")]
pub struct ParseTypeNameStyleError(pub String);

impl FromStr for TypeNameStyle {
    type Err = ParseTypeNameStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("qualified") {
            Ok(TypeNameStyle::Qualified)
        } else if trimmed.eq_ignore_ascii_case("short") {
            Ok(TypeNameStyle::Short)
        } else {
            Err(ParseTypeNameStyleError(s.to_owned()))
        }
    }
}

/// Configuration for rendering values into messages.
///
/// Carried explicitly by every checked subject; nothing is read from global
/// state unless the caller asks for [`RenderConfig::from_env`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RenderConfig {
    /// Spelling of runtime type names.
    pub type_names: TypeNameStyle,
}

impl RenderConfig {
    /// Environment variable consulted by [`RenderConfig::from_env`].
    pub const ENV_VAR: &'static str = "ASSAY_TYPE_NAMES";

    /// Fully qualified type names (the default).
    pub fn qualified() -> Self {
        RenderConfig {
            type_names: TypeNameStyle::Qualified,
        }
    }

    /// Short type names, module paths stripped.
    pub fn short() -> Self {
        RenderConfig {
            type_names: TypeNameStyle::Short,
        }
    }

    /// Read the configuration from `ASSAY_TYPE_NAMES`.
    ///
    /// Missing or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return RenderConfig::default();
        };
        match raw.parse::<TypeNameStyle>() {
            Ok(type_names) => RenderConfig { type_names },
            Err(err) => {
                tracing::warn!(%err, "ignoring {}", Self::ENV_VAR);
                RenderConfig::default()
            }
        }
    }

    /// Render a type name as a message payload.
    pub fn type_name(&self, descriptor: TypeDescriptor) -> RenderedValue {
        RenderedValue::verbatim(self.type_names.apply(descriptor))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
