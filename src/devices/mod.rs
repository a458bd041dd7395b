// Emulated device handlers
// Defines the emulated device models and installs their handlers

pub mod airflow;

pub use airflow::{AirflowHandler, AIRFLOW_KIND, AIRFLOW_MODEL};

use crate::config::PluginSettings;
use crate::rng::{global_rng, SharedRng};
use emul8_sdk::{HandlerRegistry, SdkError};
use std::sync::Arc;
use tracing::info;

/// Emulated device definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatedDevice {
    pub kind: &'static str,
    pub model: &'static str,
    pub display_name: &'static str,
}

/// All emulated devices this plugin answers for
pub const EMULATED_DEVICES: &[EmulatedDevice] = &[EmulatedDevice {
    kind: AIRFLOW_KIND,
    model: AIRFLOW_MODEL,
    display_name: "Emulated Airflow Sensor",
}];

/// Find an emulated device definition by type/model
pub fn find_device(kind: &str, model: &str) -> Option<&'static EmulatedDevice> {
    EMULATED_DEVICES
        .iter()
        .find(|d| d.kind == kind && d.model == model)
}

/// Check if a type/model pair is emulated by this plugin
pub fn is_supported(kind: &str, model: &str) -> bool {
    find_device(kind, model).is_some()
}

/// Install every emulated device handler into `registry`
///
/// With a configured seed, all handlers share one deterministic generator;
/// otherwise they draw from the process-wide generator.
pub fn register_handlers(
    registry: &mut HandlerRegistry,
    settings: &PluginSettings,
) -> Result<(), SdkError> {
    let rng = match settings.seed {
        Some(seed) => Arc::new(SharedRng::seeded(seed)),
        None => global_rng(),
    };
    registry.register(Arc::new(AirflowHandler::with_rng(rng)))?;
    info!(
        "Registered {} emulated device handler(s)",
        EMULATED_DEVICES.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airflow_is_supported() {
        assert!(is_supported("airflow", "emul8-air"));
        assert!(!is_supported("airflow", "emul8-fan"));
        assert_eq!(
            find_device("airflow", "emul8-air").map(|d| d.display_name),
            Some("Emulated Airflow Sensor")
        );
    }

    #[test]
    fn test_register_covers_every_emulated_device() {
        let mut registry = HandlerRegistry::new();
        register_handlers(&mut registry, &PluginSettings::default()).unwrap();
        assert_eq!(registry.len(), EMULATED_DEVICES.len());
        for device in EMULATED_DEVICES {
            assert!(registry.find(device.kind, device.model).is_some());
        }
    }

    #[test]
    fn test_register_twice_fails() {
        let mut registry = HandlerRegistry::new();
        let settings = PluginSettings::default();
        register_handlers(&mut registry, &settings).unwrap();
        assert!(matches!(
            register_handlers(&mut registry, &settings),
            Err(SdkError::DuplicateHandler { .. })
        ));
    }
}
