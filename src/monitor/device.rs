// SPDX-License-Identifier: GPL-3.0-only
//! One physical monitor bound to its transport handle

use std::sync::Arc;

use crate::capabilities::CapabilityInfo;
use crate::error::{AppError, PropertyError, Result};
use crate::protocols::{FeatureReading, VcpTransport, ddc_ci::DdcCiDisplay};
use crate::vcp::{VcpCode, VcpRegistry};

/// A monitor controllable over DDC/CI
///
/// `model` and `display_type` are taken from the capability string once, when
/// the device is constructed. They are not updated afterwards unless
/// [`Device::refresh`] is called.
///
/// The transport (and the OS handle it owns) is released when the device is
/// dropped, including when [`Device::new`] fails.
pub struct Device<T: VcpTransport = DdcCiDisplay> {
    transport: T,
    registry: Arc<VcpRegistry>,
    capabilities: String,
    info: CapabilityInfo,
}

impl<T: VcpTransport> Device<T> {
    /// Bind a transport, reading its capability string once
    pub fn new(transport: T) -> Result<Self> {
        Self::with_registry(transport, VcpRegistry::standard())
    }

    /// Same as [`Device::new`] with a caller-supplied registry
    pub fn with_registry(mut transport: T, registry: Arc<VcpRegistry>) -> Result<Self> {
        let capabilities = transport
            .capabilities_string()
            .map_err(|e| AppError::DisplayInit {
                id: transport.id(),
                reason: format!("can't read capability string: {e:#}"),
            })?;

        let info = parse_identity(&transport.id(), &capabilities);

        Ok(Self {
            transport,
            registry,
            capabilities,
            info,
        })
    }

    /// Get the transport identifier of this display
    pub fn id(&self) -> String {
        self.transport.id()
    }

    /// Model from the capability string, empty if absent
    pub fn model(&self) -> &str {
        &self.info.model
    }

    /// Display type from the capability string, empty if absent
    pub fn display_type(&self) -> &str {
        &self.info.display_type
    }

    /// Raw capability string as read at construction (or last refresh)
    pub fn capabilities(&self) -> &str {
        &self.capabilities
    }

    pub fn registry(&self) -> &VcpRegistry {
        &self.registry
    }

    /// Re-read the capability string and re-derive model and display type
    ///
    /// On failure the previous values are kept.
    pub fn refresh(&mut self) -> Result<()> {
        let id = self.transport.id();
        let capabilities = self
            .transport
            .capabilities_string()
            .map_err(|source| AppError::DdcCi {
                id: id.clone(),
                source,
            })?;
        self.info = parse_identity(&id, &capabilities);
        self.capabilities = capabilities;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Read a feature by code, logging transport failures
    pub(crate) fn try_read_code(
        &mut self,
        feature: &str,
        code: VcpCode,
    ) -> std::result::Result<FeatureReading, PropertyError> {
        self.transport.read_feature(code).map_err(|source| {
            error!(
                display_id = %self.transport.id(),
                feature,
                code,
                error = ?source,
                "get vcp command failed"
            );
            PropertyError::Transport {
                feature: feature.to_string(),
                source,
            }
        })
    }

    /// Write a feature by code, logging transport failures
    pub(crate) fn try_write_code(
        &mut self,
        feature: &str,
        code: VcpCode,
        value: u32,
    ) -> std::result::Result<(), PropertyError> {
        self.transport.write_feature(code, value).map_err(|source| {
            error!(
                display_id = %self.transport.id(),
                feature,
                code,
                value,
                error = ?source,
                "send vcp command failed"
            );
            PropertyError::Transport {
                feature: feature.to_string(),
                source,
            }
        })
    }

    /// Read a feature by registry name
    pub(crate) fn try_read(
        &mut self,
        feature: &str,
    ) -> std::result::Result<FeatureReading, PropertyError> {
        let code = self.code_of(feature)?;
        self.try_read_code(feature, code)
    }

    /// Write a feature by registry name
    pub(crate) fn try_write(
        &mut self,
        feature: &str,
        value: u32,
    ) -> std::result::Result<(), PropertyError> {
        let code = self.code_of(feature)?;
        self.try_write_code(feature, code, value)
    }

    fn code_of(&self, feature: &str) -> std::result::Result<VcpCode, PropertyError> {
        self.registry.lookup(feature).map_err(|e| {
            error!(display_id = %self.transport.id(), "{e}");
            PropertyError::from(e)
        })
    }

    /// Read any registry feature by its MCCS name; `(0, 0)` on failure
    pub fn read_feature_by_name(&mut self, name: &str) -> FeatureReading {
        self.try_read(name).unwrap_or_default()
    }

    /// Write any registry feature by its MCCS name
    pub fn write_feature_by_name(&mut self, name: &str, value: u32) -> bool {
        self.try_write(name, value).is_ok()
    }

    /// Read a raw VCP code; `(0, 0)` on failure
    pub fn read_vcp(&mut self, code: VcpCode) -> FeatureReading {
        self.try_read_code("raw", code).unwrap_or_default()
    }

    /// Write a raw VCP code
    pub fn write_vcp(&mut self, code: VcpCode, value: u32) -> bool {
        self.try_write_code("raw", code, value).is_ok()
    }
}

fn parse_identity(id: &str, capabilities: &str) -> CapabilityInfo {
    let info = CapabilityInfo::parse(capabilities);
    if info.model.is_empty() {
        warn!(display_id = %id, capabilities, "unable to find model info in capability string");
    }
    if info.display_type.is_empty() {
        warn!(display_id = %id, capabilities, "unable to find display type info in capability string");
    }
    info
}

impl<T: VcpTransport> std::fmt::Debug for Device<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("transport", &self.transport)
            .field("model", &self.info.model)
            .field("display_type", &self.info.display_type)
            .finish()
    }
}
