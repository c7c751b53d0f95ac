// SPDX-License-Identifier: GPL-3.0-only
mod device;
mod enumeration;
mod properties;

pub use device::Device;
pub use enumeration::{
    discover, discover_with, probe_displays, spawn_discovery, spawn_discovery_with,
};
pub use properties::{COLOR_TEMPERATURE_BASE, RgbGain};
