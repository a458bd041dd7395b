//! Emulated airflow sensor
//!
//! Every output of an `airflow`/`emul8-air` device reads as a uniformly
//! drawn integer from the output's `[min, max)` range.

use crate::rng::{global_rng, SharedRng};
use emul8_sdk::{Device, DeviceHandler, Reading, SdkError};
use std::sync::Arc;
use tracing::{trace, warn};

/// Device type served by the airflow handler
pub const AIRFLOW_KIND: &str = "airflow";

/// Device model served by the airflow handler
pub const AIRFLOW_MODEL: &str = "emul8-air";

/// Handler for the emulated airflow device
pub struct AirflowHandler {
    rng: Arc<SharedRng>,
}

impl AirflowHandler {
    /// Create a handler drawing from the process-wide generator
    pub fn new() -> Self {
        Self::with_rng(global_rng())
    }

    /// Create a handler drawing from a specific generator
    pub fn with_rng(rng: Arc<SharedRng>) -> Self {
        Self { rng }
    }
}

impl Default for AirflowHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceHandler for AirflowHandler {
    fn kind(&self) -> &str {
        AIRFLOW_KIND
    }

    fn model(&self) -> &str {
        AIRFLOW_MODEL
    }

    fn read(&self, device: &Device) -> Result<Vec<Reading>, SdkError> {
        let mut readings = Vec::with_capacity(device.outputs.len());
        for output in &device.outputs {
            let range = output.range;
            let Some(value) = self.rng.random_in(range.min, range.max) else {
                warn!(
                    "Airflow output {:?} has empty range [{}, {})",
                    output.kind, range.min, range.max
                );
                return Err(SdkError::InvalidRange {
                    output: output.kind.clone(),
                    min: range.min,
                    max: range.max,
                });
            };
            trace!("Airflow {} = {}", output.kind, value);
            readings.push(Reading::new(output.kind.clone(), value.to_string()));
        }
        Ok(readings)
    }
}
