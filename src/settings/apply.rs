// SPDX-License-Identifier: GPL-3.0-only
//! Settings application engine
//!
//! Single pass, no retries. For each device matching the model filter:
//! optional factory reset, optional auto-setup, then every setting of the
//! batch in order. A failure is confined to its (device, property) pair and
//! recorded in the [`ApplyReport`].

use crate::error::{SettingError, SettingParseError};
use crate::monitor::Device;
use crate::protocols::VcpTransport;

use super::parse::{Setting, SettingsBatch};
use super::property::{AppliedValue, Property, PropertyValue};

/// Which devices a batch is applied to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModelFilter {
    /// `*`
    #[default]
    All,
    /// Exact model, compared case-insensitively
    Model(String),
}

impl ModelFilter {
    pub fn parse(filter: &str) -> Self {
        match filter.trim() {
            "*" | "" => ModelFilter::All,
            model => ModelFilter::Model(model.to_string()),
        }
    }

    pub fn matches(&self, model: &str) -> bool {
        match self {
            ModelFilter::All => true,
            ModelFilter::Model(wanted) => wanted.to_uppercase() == model.to_uppercase(),
        }
    }
}

/// Device-level actions accompanying a batch
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub model_filter: ModelFilter,
    /// Restore factory defaults before applying settings
    pub reset_factory: bool,
    /// Run video auto-setup before applying settings
    pub auto_setup: bool,
}

/// Result of one property on one device
#[derive(Debug)]
pub struct Outcome {
    pub display_id: String,
    pub model: String,
    pub property: String,
    pub raw_value: String,
    pub result: Result<AppliedValue, SettingError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything that happened during one application run
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub outcomes: Vec<Outcome>,
    /// Batch tokens skipped before any device was touched
    pub rejected_tokens: Vec<SettingParseError>,
    /// Number of devices that passed the model filter
    pub devices_matched: usize,
}

impl ApplyReport {
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.len() - self.successes()
    }

    /// True if every outcome succeeded and no token was rejected
    pub fn is_success(&self) -> bool {
        self.failures() == 0 && self.rejected_tokens.is_empty()
    }
}

/// Devices whose model passes `filter`, in their original order
pub fn select_targets<'a, T: VcpTransport>(
    devices: &'a mut [Device<T>],
    filter: &ModelFilter,
) -> Vec<&'a mut Device<T>> {
    devices
        .iter_mut()
        .filter(|device| {
            let matched = filter.matches(device.model());
            if !matched {
                debug!("Will NOT apply settings to model: {}", device.model());
            }
            matched
        })
        .collect()
}

/// Apply `batch` to every device selected by `options.model_filter`
pub fn apply_settings<T: VcpTransport>(
    devices: &mut [Device<T>],
    options: &ApplyOptions,
    batch: &SettingsBatch,
) -> ApplyReport {
    let mut report = ApplyReport {
        rejected_tokens: batch.rejected().to_vec(),
        ..Default::default()
    };

    for device in select_targets(devices, &options.model_filter) {
        report.devices_matched += 1;

        if options.reset_factory {
            let result = device
                .try_reset_factory()
                .map(|()| AppliedValue::Triggered)
                .map_err(SettingError::from);
            report.outcomes.push(record(device, Property::FactoryReset.name(), "true", result));
        }

        if options.auto_setup {
            let result = device
                .try_auto_setup_perform()
                .map(|()| AppliedValue::Triggered)
                .map_err(SettingError::from);
            report.outcomes.push(record(device, Property::AutoSetup.name(), "true", result));
        }

        info!("apply settings to: {}", device.model());
        for setting in batch.settings() {
            let result = apply_one(device, setting);
            report
                .outcomes
                .push(record(device, &setting.key, &setting.value, result));
        }
    }

    info!(
        devices = report.devices_matched,
        succeeded = report.successes(),
        failed = report.failures(),
        rejected = report.rejected_tokens.len(),
        "settings applied"
    );
    report
}

fn apply_one<T: VcpTransport>(
    device: &mut Device<T>,
    setting: &Setting,
) -> Result<AppliedValue, SettingError> {
    let property = Property::from_name(&setting.key)
        .ok_or_else(|| SettingError::UnknownProperty(setting.key.clone()))?;
    if !property.is_writable() {
        return Err(SettingError::ReadOnly(property.name().to_string()));
    }
    let value: PropertyValue = property.coerce(&setting.value)?;
    property.apply(device, value)
}

fn record<T: VcpTransport>(
    device: &Device<T>,
    property: &str,
    raw_value: &str,
    result: Result<AppliedValue, SettingError>,
) -> Outcome {
    let display_id = device.id();
    match &result {
        Ok(applied) => info!(display_id = %display_id, "OK: {}={}", property, applied),
        Err(e) => error!(display_id = %display_id, error = %e, "Failed: {}={}", property, raw_value),
    }

    Outcome {
        display_id,
        model: device.model().to_string(),
        property: property.to_string(),
        raw_value: raw_value.to_string(),
        result,
    }
}
