// SPDX-License-Identifier: GPL-3.0-only
//! Settable property names and their value coercion
//!
//! Each property belongs to one [`PropertyKind`], and the kind alone decides
//! how a raw batch string is turned into a typed [`PropertyValue`].

use crate::error::SettingError;
use crate::monitor::{Device, RgbGain};
use crate::protocols::VcpTransport;
use crate::vcp::codes;

use super::parse::parse_int_list;

/// How a property's value is represented and validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Integer checked against the device maximum
    Scalar,
    /// Label from a closed table
    Enumerated,
    /// Three integers sharing one maximum
    Composite,
    /// Integer converted before writing (color temperature)
    Derived,
    /// Fire-and-forget write of a fixed value
    Trigger,
}

/// Property addressable by name in a settings batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Brightness,
    Contrast,
    ColorTemperature,
    ColorPreset,
    RgbGain,
    OsdLanguage,
    PowerMode,
    InputSource,
    FactoryReset,
    AutoSetup,
    UsageHours,
    SubPixelLayout,
}

/// Raw batch value after coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Integer(i64),
    Label(String),
    Triple([i64; 3]),
    Flag(bool),
}

/// What actually reached the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedValue {
    Scalar(u32),
    Label(String),
    Rgb(RgbGain),
    ColorTemperature { kelvin: i64, step: u32 },
    Triggered,
    /// A trigger given `false`; nothing was sent
    Skipped,
}

impl std::fmt::Display for AppliedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppliedValue::Scalar(v) => write!(f, "{v}"),
            AppliedValue::Label(label) => write!(f, "{label}"),
            AppliedValue::Rgb(gain) => write!(f, "{gain}"),
            AppliedValue::ColorTemperature { kelvin, step } => write!(f, "{kelvin}K (step {step})"),
            AppliedValue::Triggered => write!(f, "triggered"),
            AppliedValue::Skipped => write!(f, "skipped"),
        }
    }
}

impl Property {
    pub const ALL: [Property; 12] = [
        Property::Brightness,
        Property::Contrast,
        Property::ColorTemperature,
        Property::ColorPreset,
        Property::RgbGain,
        Property::OsdLanguage,
        Property::PowerMode,
        Property::InputSource,
        Property::FactoryReset,
        Property::AutoSetup,
        Property::UsageHours,
        Property::SubPixelLayout,
    ];

    /// Resolve a batch key, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let property = match name.as_str() {
            "luminance" => Property::Brightness,
            "input_src" => Property::InputSource,
            other => return Self::ALL.into_iter().find(|p| p.name() == other),
        };
        Some(property)
    }

    pub fn name(self) -> &'static str {
        match self {
            Property::Brightness => "brightness",
            Property::Contrast => "contrast",
            Property::ColorTemperature => "color_temperature",
            Property::ColorPreset => "color_preset",
            Property::RgbGain => "rgb_gain",
            Property::OsdLanguage => "osd_language",
            Property::PowerMode => "power_mode",
            Property::InputSource => "input_source",
            Property::FactoryReset => "factory_reset",
            Property::AutoSetup => "auto_setup",
            Property::UsageHours => "usage_hours",
            Property::SubPixelLayout => "sub_pixel_layout",
        }
    }

    pub fn kind(self) -> PropertyKind {
        match self {
            Property::Brightness | Property::Contrast | Property::UsageHours => PropertyKind::Scalar,
            Property::ColorPreset
            | Property::OsdLanguage
            | Property::PowerMode
            | Property::InputSource
            | Property::SubPixelLayout => PropertyKind::Enumerated,
            Property::RgbGain => PropertyKind::Composite,
            Property::ColorTemperature => PropertyKind::Derived,
            Property::FactoryReset | Property::AutoSetup => PropertyKind::Trigger,
        }
    }

    pub fn is_writable(self) -> bool {
        !matches!(self, Property::UsageHours | Property::SubPixelLayout)
    }

    /// Whether the property has a current value to show
    pub fn is_readable(self) -> bool {
        self.kind() != PropertyKind::Trigger
    }

    /// MCCS feature backing an enumerated property
    fn label_feature(self) -> Option<&'static str> {
        match self {
            Property::ColorPreset => Some(codes::SELECT_COLOR_PRESET),
            Property::OsdLanguage => Some(codes::OSD_LANGUAGE),
            Property::PowerMode => Some(codes::POWER_MODE),
            Property::InputSource => Some(codes::INPUT_SOURCE),
            Property::SubPixelLayout => Some(codes::FLAT_PANEL_SUB_PIXEL_LAYOUT),
            _ => None,
        }
    }

    /// Turn a raw batch string into this property's value type
    pub fn coerce(self, raw: &str) -> Result<PropertyValue, SettingError> {
        let coercion = |reason: String| SettingError::Coercion {
            property: self.name().to_string(),
            value: raw.to_string(),
            reason,
        };

        match self.kind() {
            PropertyKind::Scalar | PropertyKind::Derived => raw
                .trim()
                .parse::<i64>()
                .map(PropertyValue::Integer)
                .map_err(|e| coercion(e.to_string())),
            PropertyKind::Enumerated => Ok(PropertyValue::Label(raw.to_string())),
            PropertyKind::Composite => parse_int_list::<3>(raw)
                .map(PropertyValue::Triple)
                .map_err(|e| coercion(e.to_string())),
            PropertyKind::Trigger => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(PropertyValue::Flag(true)),
                "0" | "false" | "no" | "off" => Ok(PropertyValue::Flag(false)),
                _ => Err(coercion("expected a boolean".to_string())),
            },
        }
    }

    /// Write a coerced value through the matching accessor
    pub fn apply<T: VcpTransport>(
        self,
        device: &mut Device<T>,
        value: PropertyValue,
    ) -> Result<AppliedValue, SettingError> {
        if !self.is_writable() {
            return Err(SettingError::ReadOnly(self.name().to_string()));
        }

        let applied = match (self, value) {
            (Property::Brightness, PropertyValue::Integer(v)) => {
                AppliedValue::Scalar(device.try_set_bounded(codes::LUMINANCE, v)?)
            }
            (Property::Contrast, PropertyValue::Integer(v)) => {
                AppliedValue::Scalar(device.try_set_bounded(codes::CONTRAST, v)?)
            }
            (Property::ColorTemperature, PropertyValue::Integer(kelvin)) => {
                let step = device.try_set_color_temperature(kelvin)?;
                AppliedValue::ColorTemperature { kelvin, step }
            }
            (Property::RgbGain, PropertyValue::Triple(gain)) => {
                AppliedValue::Rgb(device.try_set_rgb_gain(gain)?)
            }
            (Property::FactoryReset, PropertyValue::Flag(true)) => {
                device.try_reset_factory()?;
                AppliedValue::Triggered
            }
            (Property::AutoSetup, PropertyValue::Flag(true)) => {
                device.try_auto_setup_perform()?;
                AppliedValue::Triggered
            }
            (Property::FactoryReset | Property::AutoSetup, PropertyValue::Flag(false)) => {
                AppliedValue::Skipped
            }
            (property, PropertyValue::Label(label)) => match property.label_feature() {
                Some(feature) => {
                    device.try_set_label(feature, &label)?;
                    AppliedValue::Label(label)
                }
                None => return Err(mismatch(property, &label)),
            },
            (property, value) => return Err(mismatch(property, &format!("{value:?}"))),
        };
        Ok(applied)
    }

    /// Current value rendered for display; empty if unavailable
    pub fn read<T: VcpTransport>(self, device: &mut Device<T>) -> String {
        match self {
            Property::Brightness => {
                let r = device.brightness();
                format!("{}/{}", r.current, r.maximum)
            }
            Property::Contrast => {
                let r = device.contrast();
                format!("{}/{}", r.current, r.maximum)
            }
            Property::ColorTemperature => format!("{}K", device.color_temperature()),
            Property::ColorPreset => device.color_preset(),
            Property::RgbGain => device.rgb_gain().to_string(),
            Property::OsdLanguage => device.osd_language(),
            Property::PowerMode => device.power_mode(),
            Property::InputSource => device.input_source(),
            Property::UsageHours => format!("{}h", device.usage_hours()),
            Property::SubPixelLayout => device.sub_pixel_layout(),
            Property::FactoryReset | Property::AutoSetup => String::new(),
        }
    }
}

fn mismatch(property: Property, value: &str) -> SettingError {
    SettingError::Coercion {
        property: property.name().to_string(),
        value: value.to_string(),
        reason: format!("not a {:?} value", property.kind()),
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::simulated::SimulatedDisplay;

    fn create_test_device() -> Device<SimulatedDisplay> {
        let display = SimulatedDisplay::new("sim-1", "(type(lcd)model(X500))")
            .with_feature(0x10, 40, 100)
            .with_feature(0x12, 70, 100)
            .with_feature(0x0B, 50, 0)
            .with_feature(0x0C, 70, 140)
            .with_feature(0x16, 50, 100)
            .with_feature(0x18, 50, 100)
            .with_feature(0x1A, 50, 100)
            .with_feature(0xD6, 0x01, 0x05)
            .with_feature(0xC0, 10, 0);
        Device::new(display).unwrap()
    }

    #[test]
    fn test_names_round_trip() {
        for property in Property::ALL {
            assert_eq!(Property::from_name(property.name()), Some(property));
        }
        assert_eq!(Property::from_name("Brightness"), Some(Property::Brightness));
        assert_eq!(Property::from_name("luminance"), Some(Property::Brightness));
        assert_eq!(Property::from_name("input_src"), Some(Property::InputSource));
        assert_eq!(Property::from_name("volume"), None);
    }

    #[test]
    fn test_coerce_by_kind() {
        assert_eq!(Property::Brightness.coerce("50").unwrap(), PropertyValue::Integer(50));
        assert_eq!(
            Property::ColorTemperature.coerce("6500").unwrap(),
            PropertyValue::Integer(6500)
        );
        assert_eq!(
            Property::ColorPreset.coerce("sRGB").unwrap(),
            PropertyValue::Label("sRGB".to_string())
        );
        assert_eq!(
            Property::RgbGain.coerce("(1,2,3)").unwrap(),
            PropertyValue::Triple([1, 2, 3])
        );
        assert_eq!(Property::FactoryReset.coerce("true").unwrap(), PropertyValue::Flag(true));
        assert_eq!(Property::AutoSetup.coerce("0").unwrap(), PropertyValue::Flag(false));
    }

    #[test]
    fn test_coerce_failures() {
        assert!(matches!(
            Property::Contrast.coerce("abc"),
            Err(SettingError::Coercion { .. })
        ));
        assert!(matches!(
            Property::RgbGain.coerce("10,20,30"),
            Err(SettingError::Coercion { .. })
        ));
        assert!(matches!(
            Property::FactoryReset.coerce("maybe"),
            Err(SettingError::Coercion { .. })
        ));
    }

    #[test]
    fn test_apply_scalar_and_derived() {
        let mut device = create_test_device();
        assert_eq!(
            Property::Brightness.apply(&mut device, PropertyValue::Integer(60)).unwrap(),
            AppliedValue::Scalar(60)
        );
        assert_eq!(
            Property::ColorTemperature
                .apply(&mut device, PropertyValue::Integer(5500))
                .unwrap(),
            AppliedValue::ColorTemperature {
                kelvin: 5500,
                step: 50
            }
        );
    }

    #[test]
    fn test_apply_label_and_triple() {
        let mut device = create_test_device();
        assert_eq!(
            Property::PowerMode
                .apply(&mut device, PropertyValue::Label("off".to_string()))
                .unwrap(),
            AppliedValue::Label("off".to_string())
        );
        assert!(matches!(
            Property::RgbGain.apply(&mut device, PropertyValue::Triple([10, 9999, 10])),
            Err(SettingError::Property(_))
        ));
        assert_eq!(device.transport().writes, vec![(0xD6, 0x05)]);
    }

    #[test]
    fn test_apply_triggers() {
        let mut device = create_test_device();
        assert_eq!(
            Property::AutoSetup.apply(&mut device, PropertyValue::Flag(false)).unwrap(),
            AppliedValue::Skipped
        );
        assert!(device.transport().write_attempts.is_empty());
        assert_eq!(
            Property::FactoryReset.apply(&mut device, PropertyValue::Flag(true)).unwrap(),
            AppliedValue::Triggered
        );
        assert_eq!(device.transport().writes, vec![(0x04, 1)]);
    }

    #[test]
    fn test_read_only_rejected() {
        let mut device = create_test_device();
        assert!(matches!(
            Property::UsageHours.apply(&mut device, PropertyValue::Integer(0)),
            Err(SettingError::ReadOnly(_))
        ));
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_mismatched_value_type() {
        let mut device = create_test_device();
        assert!(matches!(
            Property::Brightness.apply(&mut device, PropertyValue::Label("50".to_string())),
            Err(SettingError::Coercion { .. })
        ));
    }

    #[test]
    fn test_read_rendering() {
        let mut device = create_test_device();
        assert_eq!(Property::Brightness.read(&mut device), "40/100");
        assert_eq!(Property::ColorTemperature.read(&mut device), "6500K");
        assert_eq!(Property::RgbGain.read(&mut device), "(50, 50, 50)");
        assert_eq!(Property::PowerMode.read(&mut device), "on");
        assert_eq!(Property::UsageHours.read(&mut device), "10h");
    }
}
