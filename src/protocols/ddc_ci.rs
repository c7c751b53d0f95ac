// SPDX-License-Identifier: GPL-3.0-only
//! DDC/CI (Display Data Channel Command Interface) transport
//!
//! DDC/CI is a standard protocol for controlling monitors over I2C bus.
//! It's supported by most modern external monitors via the video cable.
//! The bus transaction itself (timing, wire-level retries) is handled by
//! `ddc-hi`; this wrapper only adapts it to [`VcpTransport`].

use anyhow::{Context, Result, anyhow};
use ddc_hi::{Ddc, Display};

use super::{FeatureReading, VcpTransport};
use crate::vcp::VcpCode;

/// DDC/CI display implementation
///
/// The underlying handle is released when this value is dropped.
pub struct DdcCiDisplay {
    display: Display,
}

impl DdcCiDisplay {
    /// Create a new DDC/CI display wrapper
    pub fn new(display: Display) -> Self {
        Self { display }
    }

    /// Enumerate all DDC/CI displays
    pub fn enumerate() -> Vec<Self> {
        Display::enumerate().into_iter().map(Self::new).collect()
    }

    /// Model name reported by EDID, if the backend exposes one
    pub fn edid_model(&self) -> Option<&str> {
        self.display.info.model_name.as_deref()
    }
}

impl VcpTransport for DdcCiDisplay {
    fn id(&self) -> String {
        self.display.info.id.clone()
    }

    fn capabilities_string(&mut self) -> Result<String> {
        let raw = self
            .display
            .handle
            .capabilities_string()
            .context("capabilities request failed")?;
        // The reply is ASCII, sometimes NUL-terminated
        let text = String::from_utf8_lossy(&raw);
        Ok(text.trim_end_matches('\0').to_string())
    }

    fn read_feature(&mut self, code: VcpCode) -> Result<FeatureReading> {
        let value = self.display.handle.get_vcp_feature(code)?;
        Ok(FeatureReading::new(
            u32::from(value.value()),
            u32::from(value.maximum()),
        ))
    }

    fn write_feature(&mut self, code: VcpCode, value: u32) -> Result<()> {
        let value = u16::try_from(value)
            .map_err(|_| anyhow!("value {value} does not fit a 16-bit VCP value"))?;
        self.display.handle.set_vcp_feature(code, value)?;
        Ok(())
    }
}

impl std::fmt::Debug for DdcCiDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DdcCiDisplay(id: {}, name: {})",
            self.id(),
            self.edid_model().unwrap_or_default()
        )
    }
}
