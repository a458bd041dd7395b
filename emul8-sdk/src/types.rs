//! Values exchanged between the host and device handlers

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Integer bounds of an output, read as the half-open interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OutputRange {
    pub min: i32,
    pub max: i32,
}

impl OutputRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// True when at least one value lies in `[min, max)`
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if `value` lies in `[min, max)`
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value < self.max
    }
}

/// One measurement channel of a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Semantic type label, copied onto every reading of this output
    #[serde(rename = "type")]
    pub kind: String,
    pub range: OutputRange,
}

impl Output {
    pub fn new(kind: impl Into<String>, range: OutputRange) -> Self {
        Self {
            kind: kind.into(),
            range,
        }
    }
}

/// A monitored device instance as configured by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Device type (e.g. `"airflow"`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Device model (e.g. `"emul8-air"`)
    pub model: String,
    /// Free-form description supplied by the host
    #[serde(default)]
    pub info: Option<String>,
    /// Measurement channels, in declared order
    #[serde(default, rename = "output")]
    pub outputs: Vec<Output>,
}

impl Device {
    pub fn new(kind: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            model: model.into(),
            info: None,
            outputs: Vec::new(),
        }
    }

    /// Builder-style helper to append an output
    pub fn with_output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }
}

/// One measurement result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Type label of the originating output
    #[serde(rename = "type")]
    pub kind: String,
    /// String-encoded value
    pub value: String,
    /// Wall-clock time the reading was taken
    pub timestamp: SystemTime,
}

impl Reading {
    /// Create a reading stamped with the current time
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            timestamp: SystemTime::now(),
        }
    }
}
