// Emul8 - Emulated device handlers for the plugin host
// Airflow handler, shared value source, and plugin settings

pub mod config;
pub mod devices;
pub mod rng;

pub use config::{ConfigError, PluginSettings};
pub use devices::{
    find_device, is_supported, register_handlers, AirflowHandler, EmulatedDevice,
    AIRFLOW_KIND, AIRFLOW_MODEL, EMULATED_DEVICES,
};
pub use rng::{global_rng, SharedRng};
