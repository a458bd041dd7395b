//! Handler registry - routes device reads by type/model
//!
//! Single source of truth for which handler answers which device.
//! Handlers are keyed by their `(kind, model)` pair; a pair may only be
//! registered once.

use crate::error::SdkError;
use crate::types::{Device, Reading};
use crate::BoxedHandler;
use tracing::debug;

/// Registry of device handlers known to the plugin
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<BoxedHandler>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its `(kind, model)` pair
    pub fn register(&mut self, handler: BoxedHandler) -> Result<(), SdkError> {
        if self.find(handler.kind(), handler.model()).is_some() {
            return Err(SdkError::DuplicateHandler {
                kind: handler.kind().to_string(),
                model: handler.model().to_string(),
            });
        }
        debug!(
            "Registered device handler {}/{}",
            handler.kind(),
            handler.model()
        );
        self.handlers.push(handler);
        Ok(())
    }

    /// Find the handler registered for a type/model pair
    pub fn find(&self, kind: &str, model: &str) -> Option<&BoxedHandler> {
        self.handlers
            .iter()
            .find(|h| h.kind() == kind && h.model() == model)
    }

    /// Find the handler that serves `device`
    pub fn handler_for(&self, device: &Device) -> Option<&BoxedHandler> {
        self.handlers.iter().find(|h| h.handles(device))
    }

    /// Read `device` through its registered handler
    pub fn read(&self, device: &Device) -> Result<Vec<Reading>, SdkError> {
        let handler = self
            .handler_for(device)
            .ok_or_else(|| SdkError::NoHandler {
                kind: device.kind.clone(),
                model: device.model.clone(),
            })?;
        handler.read(device)
    }

    /// All registered `(kind, model)` pairs, in registration order
    pub fn registered(&self) -> Vec<(&str, &str)> {
        self.handlers.iter().map(|h| (h.kind(), h.model())).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Output, OutputRange};
    use crate::DeviceHandler;
    use std::sync::Arc;

    /// Echoes each output's minimum as its value
    struct MinHandler;

    impl DeviceHandler for MinHandler {
        fn kind(&self) -> &str {
            "temperature"
        }

        fn model(&self) -> &str {
            "test-temp"
        }

        fn read(&self, device: &Device) -> Result<Vec<Reading>, SdkError> {
            Ok(device
                .outputs
                .iter()
                .map(|o| Reading::new(o.kind.clone(), o.range.min.to_string()))
                .collect())
        }
    }

    fn temp_device() -> Device {
        Device::new("temperature", "test-temp")
            .with_output(Output::new("temperature", OutputRange::new(-5, 5)))
    }

    #[test]
    fn test_registry_starts_empty() {
        let reg = HandlerRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.registered().is_empty());
    }

    #[test]
    fn test_find_registered_handler() {
        let mut reg = HandlerRegistry::new();
        reg.register(Arc::new(MinHandler)).unwrap();
        assert_eq!(reg.len(), 1);
        assert!(reg.find("temperature", "test-temp").is_some());
        assert!(reg.find("temperature", "other").is_none());
        assert_eq!(reg.registered(), vec![("temperature", "test-temp")]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut reg = HandlerRegistry::new();
        reg.register(Arc::new(MinHandler)).unwrap();
        let err = reg.register(Arc::new(MinHandler)).unwrap_err();
        assert_eq!(
            err,
            SdkError::DuplicateHandler {
                kind: "temperature".into(),
                model: "test-temp".into(),
            }
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_read_routes_to_handler() {
        let mut reg = HandlerRegistry::new();
        reg.register(Arc::new(MinHandler)).unwrap();
        let readings = reg.read(&temp_device()).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].kind, "temperature");
        assert_eq!(readings[0].value, "-5");
    }

    #[test]
    fn test_read_without_handler() {
        let reg = HandlerRegistry::new();
        let err = reg.read(&temp_device()).unwrap_err();
        assert!(matches!(err, SdkError::NoHandler { .. }));
        assert_eq!(err.to_string(), "No handler registered for temperature/test-temp");
    }
}
