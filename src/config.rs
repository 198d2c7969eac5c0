//! Typed window configuration.
//!
//! `WindowConfig` is the validated, serializable form of a rolling window
//! transform: a symmetric frame width on the time axis plus an optional list
//! of fields to partition by. A missing `groupby` and an explicitly empty one
//! are different things: the first means "one partition", the second is
//! rejected.

use crate::error::WindowError;
use serde::{Deserialize, Serialize};

/// Observation fields that can be used as partition keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Group,
    Time,
    Value,
}

impl GroupField {
    pub fn parse(name: &str) -> Result<Self, WindowError> {
        match name {
            "group" => Ok(GroupField::Group),
            "time" => Ok(GroupField::Time),
            "value" => Ok(GroupField::Value),
            other => Err(WindowError::invalid(format!(
                "unknown groupby field '{}' (expected one of: group, time, value)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for GroupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            GroupField::Group => "group",
            GroupField::Time => "time",
            GroupField::Value => "value",
        };
        write!(f, "{repr}")
    }
}

/// Rolling window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Full frame width on the time axis; the frame spans `time ± width / 2`
    pub width: f64,
    /// Fields to partition by; `None` keeps the whole series together
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupby: Option<Vec<String>>,
}

/// A configuration that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedWindow {
    pub half_width: f64,
    pub groupby: Option<Vec<GroupField>>,
}

impl WindowConfig {
    /// Creates an ungrouped configuration with the given frame width.
    pub fn new(width: f64) -> Self {
        WindowConfig {
            width,
            groupby: None,
        }
    }

    /// Partitions by the given fields.
    pub fn grouped_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groupby = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Parses a configuration from JSON text and validates it.
    pub fn from_json(text: &str) -> Result<Self, WindowError> {
        let config: WindowConfig = serde_json::from_str(text)
            .map_err(|e| WindowError::invalid(format!("malformed window config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        // A struct of f64 and strings always serializes; non-finite widths become null.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Checks the configuration without computing anything.
    pub fn validate(&self) -> Result<(), WindowError> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> Result<ResolvedWindow, WindowError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(WindowError::invalid(format!(
                "window width must be a finite number greater than 0, got {}",
                self.width
            )));
        }

        let groupby = match &self.groupby {
            None => None,
            Some(fields) if fields.is_empty() => {
                return Err(WindowError::invalid(
                    "groupby was provided but lists no fields",
                ));
            }
            Some(fields) => Some(
                fields
                    .iter()
                    .map(|name| GroupField::parse(name))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };

        Ok(ResolvedWindow {
            half_width: self.width / 2.0,
            groupby,
        })
    }
}
