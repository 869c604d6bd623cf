//! Emitter and writer settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the emitter does with a [`Diagnostic`](crate::Diagnostic).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log and collect, keep building.
    #[default]
    Lenient,
    /// Fail on the first diagnostic.
    Strict,
}

/// Tag written for [`Axis`](crate::Axis) descriptors.
///
/// Existing consumers read joint axes from an `<origin>` element, so that is
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisTag {
    /// `<origin xyz="..."/>`
    #[default]
    Origin,
    /// `<axis xyz="..."/>`
    Axis,
}

impl AxisTag {
    /// Element name for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            AxisTag::Origin => "origin",
            AxisTag::Axis => "axis",
        }
    }
}

/// Settings for emission and XML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Validation policy.
    pub policy: ValidationPolicy,
    /// Tag used for axis descriptors.
    pub axis_tag: AxisTag,
    /// Spaces per nesting level in XML output (0 writes a single line).
    pub indent: usize,
    /// Write the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::Lenient,
            axis_tag: AxisTag::Origin,
            indent: 2,
            declaration: true,
        }
    }
}

impl EmitConfig {
    /// Defaults with the strict policy.
    pub fn strict() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
            ..Self::default()
        }
    }

    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrdfError;

    #[test]
    fn defaults() {
        let config = EmitConfig::default();
        assert_eq!(config.policy, ValidationPolicy::Lenient);
        assert_eq!(config.axis_tag, AxisTag::Origin);
        assert_eq!(config.indent, 2);
        assert!(config.declaration);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EmitConfig::from_toml_str("").unwrap(), EmitConfig::default());
    }

    #[test]
    fn parse_all_keys() {
        let config = EmitConfig::from_toml_str(
            r#"
            policy = "strict"
            axis_tag = "axis"
            indent = 4
            declaration = false
            "#,
        )
        .unwrap();
        assert_eq!(config.policy, ValidationPolicy::Strict);
        assert_eq!(config.axis_tag.as_str(), "axis");
        assert_eq!(config.indent, 4);
        assert!(!config.declaration);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = EmitConfig::from_toml_str(r#"policy = "pedantic""#).unwrap_err();
        assert!(matches!(err, UrdfError::Config(_)));
    }
}
