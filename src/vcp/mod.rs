// SPDX-License-Identifier: GPL-3.0-only
//! VCP (Virtual Control Panel) code registry
//!
//! Maps MCCS feature names to their single-byte code points and, for
//! enumerated features, to the closed table of labels the feature accepts.
//! The registry is immutable once built; [`VcpRegistry::standard`] hands out
//! the process-wide instance.

pub mod codes;
pub mod tables;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::RegistryError;

/// Single-byte VCP feature identifier
pub type VcpCode = u8;

static STANDARD_REGISTRY: Lazy<Arc<VcpRegistry>> = Lazy::new(|| Arc::new(VcpRegistry::build()));

/// Fixed label <-> code table of an enumerated feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    entries: &'static [(&'static str, u32)],
}

impl LabelTable {
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        Self { entries }
    }

    /// Code registered for `label`, matched exactly
    pub fn code_of(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, code)| *code)
    }

    /// Reverse lookup of a value reported by the device
    pub fn label_of(&self, code: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(label, _)| *label)
    }

    /// All labels in table order
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(label, _)| *label).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable name -> code registry
#[derive(Debug, Clone)]
pub struct VcpRegistry {
    codes: HashMap<&'static str, VcpCode>,
    labels: HashMap<&'static str, LabelTable>,
}

impl VcpRegistry {
    /// The shared registry holding the full MCCS table
    pub fn standard() -> Arc<VcpRegistry> {
        Arc::clone(&STANDARD_REGISTRY)
    }

    fn build() -> Self {
        let codes = codes::VCP_CODES.iter().copied().collect();
        let labels = [
            (codes::SELECT_COLOR_PRESET, tables::COLOR_PRESET),
            (codes::AUTO_SETUP, tables::AUTO_SETUP),
            (codes::POWER_MODE, tables::POWER_MODE),
            (codes::OSD_LANGUAGE, tables::OSD_LANGUAGE),
            (codes::INPUT_SOURCE, tables::INPUT_SOURCE),
            (codes::FLAT_PANEL_SUB_PIXEL_LAYOUT, tables::SUB_PIXEL_LAYOUT),
        ]
        .into_iter()
        .collect();

        Self { codes, labels }
    }

    /// Build a registry from explicit tables
    pub fn with_entries(
        codes: impl IntoIterator<Item = (&'static str, VcpCode)>,
        labels: impl IntoIterator<Item = (&'static str, LabelTable)>,
    ) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            labels: labels.into_iter().collect(),
        }
    }

    /// Resolve a feature name to its code point
    pub fn lookup(&self, name: &str) -> Result<VcpCode, RegistryError> {
        self.codes
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownFeature(name.to_string()))
    }

    /// Label table of an enumerated feature
    pub fn label_table(&self, name: &str) -> Result<&LabelTable, RegistryError> {
        self.labels
            .get(name)
            .ok_or_else(|| RegistryError::NoLabelTable(name.to_string()))
    }

    /// Feature names, sorted by code point
    pub fn feature_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.codes.iter().map(|(n, c)| (*c, *n)).collect();
        names.sort();
        names.into_iter().map(|(_, n)| n).collect()
    }
}

impl Default for VcpRegistry {
    fn default() -> Self {
        Self::build()
    }
}
