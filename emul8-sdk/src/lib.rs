//! Device handler contract for the plugin host
//!
//! This crate models the values a plugin host exchanges with device
//! handlers:
//!
//! - `Device` / `Output` / `OutputRange` - what the host hands in
//! - `Reading` - what a handler hands back
//! - `DeviceHandler` - the read entry point bound to a type/model pair
//! - `HandlerRegistry` - routes reads to the handler registered for a device

pub mod error;
pub mod handler_registry;
pub mod types;

pub use error::SdkError;
pub use handler_registry::HandlerRegistry;
pub use types::{Device, Output, OutputRange, Reading};

use std::sync::Arc;

/// The core handler trait - every emulated device implements this
///
/// A handler is identified by its `(kind, model)` pair and answers reads
/// for devices carrying that pair. The host may call `read` concurrently
/// from several threads.
pub trait DeviceHandler: Send + Sync {
    /// Device type label this handler serves (e.g. `"airflow"`)
    fn kind(&self) -> &str;

    /// Device model this handler serves (e.g. `"emul8-air"`)
    fn model(&self) -> &str;

    /// Produce one reading per configured output of `device`
    ///
    /// # Returns
    /// Readings in the same order as `device.outputs`. The caller owns them.
    fn read(&self, device: &Device) -> Result<Vec<Reading>, SdkError>;

    /// Check whether this handler serves the given device
    fn handles(&self, device: &Device) -> bool {
        self.kind() == device.kind && self.model() == device.model
    }
}

/// Type alias for a shared handler
pub type BoxedHandler = Arc<dyn DeviceHandler>;
