// SPDX-License-Identifier: GPL-3.0-only
//! Raw VCP transport
//!
//! The byte-level read/write primitive against one display handle. Every
//! implementation owns its OS handle and releases it when dropped.

pub mod ddc_ci;

#[cfg(test)]
pub mod simulated;

use anyhow::Result;

use crate::vcp::VcpCode;

/// Current and maximum value returned by every VCP read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureReading {
    pub current: u32,
    pub maximum: u32,
}

impl FeatureReading {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }
}

/// Common trait for all VCP transports
pub trait VcpTransport: std::fmt::Debug + Send {
    /// Get the unique identifier for this display
    fn id(&self) -> String;

    /// Request the raw capability string
    fn capabilities_string(&mut self) -> Result<String>;

    /// Read the current and maximum value of a feature
    fn read_feature(&mut self, code: VcpCode) -> Result<FeatureReading>;

    /// Write a new value to a feature
    fn write_feature(&mut self, code: VcpCode, value: u32) -> Result<()>;
}
