//! Breakpoint Configuration - The Source Of Truth

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type BreakpointName = String;

/// The whole configuration file. Key spelling follows the conventional
/// config format (`outputStyle`, `maxWidth`, `breakPoints`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(default)]
    pub output_style: OutputStyle,
    pub columns: u32,
    pub container: ContainerSpec,
    #[serde(default)]
    pub break_points: HashMap<BreakpointName, BreakpointSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    Sass,
    Scss,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::Scss
    }
}

impl OutputStyle {
    /// Name of the generated partial for this dialect.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Sass => "_smart-grid.sass",
            Self::Scss => "_smart-grid.scss",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Sass => Self::Scss,
            Self::Scss => Self::Sass,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub max_width: CssLength,
    /// Default horizontal padding at the container edges.
    pub fields: CssLength,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSpec {
    pub width: CssLength,
    /// Overrides `container.fields` below this breakpoint when set.
    #[serde(default)]
    pub fields: Option<CssLength>,
}

/// A breakpoint with its fields resolved and a fixed place in the
/// emission order. Produced by [`GridConfig::resolved_breakpoints`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBreakpoint {
    pub name: BreakpointName,
    pub width: CssLength,
    pub fields: CssLength,
}

impl GridConfig {
    /// Breakpoints as an explicitly ordered sequence, widest first.
    ///
    /// Emission never depends on map-iteration or insertion order; ties on
    /// width fall back to the name so the result is deterministic (duplicate
    /// widths are rejected by validation anyway).
    pub fn resolved_breakpoints(&self) -> Vec<ResolvedBreakpoint> {
        let mut resolved: Vec<ResolvedBreakpoint> = self
            .break_points
            .iter()
            .map(|(name, bp)| ResolvedBreakpoint {
                name: name.clone(),
                width: bp.width.clone(),
                fields: bp
                    .fields
                    .clone()
                    .unwrap_or_else(|| self.container.fields.clone()),
            })
            .collect();

        resolved.sort_by(|a, b| {
            b.width
                .value
                .partial_cmp(&a.width.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        resolved
    }
}

/// A CSS length: numeric value plus unit, e.g. `1200px`, `15px`, `50%`.
///
/// Serialized as the string form; an unparsable length fails
/// deserialization of the whole configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssLength {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Error)]
#[error("invalid CSS length {0:?}: expected a number followed by a unit")]
pub struct InvalidLength(pub String);

impl FromStr for CssLength {
    type Err = InvalidLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| InvalidLength(s.to_string()))?;

        // A bare "0" needs no unit; anything else does.
        if unit.is_empty() && value != 0.0 {
            return Err(InvalidLength(s.to_string()));
        }
        if !unit.is_empty() && unit != "%" && !unit.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidLength(s.to_string()));
        }

        Ok(Self {
            value,
            unit: unit.to_string(),
        })
    }
}

impl TryFrom<String> for CssLength {
    type Error = InvalidLength;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CssLength> for String {
    fn from(len: CssLength) -> String {
        len.to_string()
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 && self.value.abs() < 1e12 {
            write!(f, "{}{}", self.value as i64, self.unit)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}
