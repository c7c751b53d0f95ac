// SPDX-License-Identifier: GPL-3.0-only
//! Typed property accessors
//!
//! Every accessor comes in two tiers. The `try_*` methods return a
//! [`PropertyError`] and are what the settings engine builds on. The plain
//! getters and setters follow the failure-indicator contract: a failed read
//! yields `(0, 0)`, `0` or an empty string, a rejected or failed write yields
//! `false`. Both tiers log every failure; validation failures are rejected
//! before the device is contacted.

use crate::error::PropertyError;
use crate::protocols::{FeatureReading, VcpTransport};
use crate::vcp::codes;

use super::Device;

/// Kelvin value of a user color temperature step of zero
pub const COLOR_TEMPERATURE_BASE: u32 = 3000;

/// Sentinel written to trigger a factory restore
const RESTORE_FACTORY_SENTINEL: u32 = 1;

/// Video gain of the three color channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbGain {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl std::fmt::Display for RgbGain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl<T: VcpTransport> Device<T> {
    // Scalar bounded

    /// Validate `value` against a fresh maximum and write it
    pub fn try_set_bounded(&mut self, feature: &str, value: i64) -> Result<u32, PropertyError> {
        let max = self.try_read(feature)?.maximum;
        let value = self.check_range(feature, value, max)?;
        self.try_write(feature, value)?;
        Ok(value)
    }

    fn check_range(&self, feature: &str, value: i64, max: u32) -> Result<u32, PropertyError> {
        match u32::try_from(value) {
            Ok(v) if v <= max => Ok(v),
            _ => {
                warn!(
                    display_id = %self.id(),
                    "invalid {} level: {}, allowed: 0-{}",
                    feature, value, max
                );
                Err(PropertyError::OutOfRange {
                    feature: feature.to_string(),
                    value,
                    max,
                })
            }
        }
    }

    pub fn brightness(&mut self) -> FeatureReading {
        self.try_read(codes::LUMINANCE).unwrap_or_default()
    }

    pub fn set_brightness(&mut self, value: i64) -> bool {
        self.try_set_bounded(codes::LUMINANCE, value).is_ok()
    }

    pub fn contrast(&mut self) -> FeatureReading {
        self.try_read(codes::CONTRAST).unwrap_or_default()
    }

    pub fn set_contrast(&mut self, value: i64) -> bool {
        self.try_set_bounded(codes::CONTRAST, value).is_ok()
    }

    // Enumerated

    /// Label of the feature's current value, `None` if no entry matches
    pub fn try_get_label(&mut self, feature: &str) -> Result<Option<&'static str>, PropertyError> {
        let current = self.try_read(feature)?.current;
        let table = *self.registry().label_table(feature)?;
        Ok(table.label_of(current))
    }

    /// Translate `label` through the feature's table and write the code
    pub fn try_set_label(&mut self, feature: &str, label: &str) -> Result<u32, PropertyError> {
        let table = *self.registry().label_table(feature)?;
        let Some(code) = table.code_of(label) else {
            warn!(
                display_id = %self.id(),
                "invalid {}: {:?}, available: {:?}",
                feature,
                label,
                table.labels()
            );
            return Err(PropertyError::UnknownLabel {
                feature: feature.to_string(),
                label: label.to_string(),
            });
        };
        self.try_write(feature, code)?;
        Ok(code)
    }

    fn label_or_empty(&mut self, feature: &str) -> String {
        self.try_get_label(feature)
            .ok()
            .flatten()
            .unwrap_or_default()
            .to_string()
    }

    fn labels_of(&self, feature: &str) -> Vec<&'static str> {
        self.registry()
            .label_table(feature)
            .map(|table| table.labels())
            .unwrap_or_default()
    }

    pub fn color_preset_list(&self) -> Vec<&'static str> {
        self.labels_of(codes::SELECT_COLOR_PRESET)
    }

    pub fn color_preset(&mut self) -> String {
        self.label_or_empty(codes::SELECT_COLOR_PRESET)
    }

    pub fn set_color_preset(&mut self, preset: &str) -> bool {
        self.try_set_label(codes::SELECT_COLOR_PRESET, preset).is_ok()
    }

    pub fn osd_language_list(&self) -> Vec<&'static str> {
        self.labels_of(codes::OSD_LANGUAGE)
    }

    pub fn osd_language(&mut self) -> String {
        self.label_or_empty(codes::OSD_LANGUAGE)
    }

    pub fn set_osd_language(&mut self, language: &str) -> bool {
        self.try_set_label(codes::OSD_LANGUAGE, language).is_ok()
    }

    pub fn input_source_list(&self) -> Vec<&'static str> {
        self.labels_of(codes::INPUT_SOURCE)
    }

    pub fn input_source(&mut self) -> String {
        self.label_or_empty(codes::INPUT_SOURCE)
    }

    pub fn set_input_source(&mut self, source: &str) -> bool {
        self.try_set_label(codes::INPUT_SOURCE, source).is_ok()
    }

    pub fn power_mode_list(&self) -> Vec<&'static str> {
        self.labels_of(codes::POWER_MODE)
    }

    /// Current power mode
    ///
    /// Some monitors report an undocumented code (e.g. 0x02) while powered
    /// off, so any value outside the table reads as `off`.
    pub fn try_power_mode(&mut self) -> Result<&'static str, PropertyError> {
        Ok(self.try_get_label(codes::POWER_MODE)?.unwrap_or("off"))
    }

    pub fn power_mode(&mut self) -> String {
        self.try_power_mode().unwrap_or_default().to_string()
    }

    pub fn set_power_mode(&mut self, mode: &str) -> bool {
        self.try_set_label(codes::POWER_MODE, mode).is_ok()
    }

    // Composite

    /// Read red, green and blue independently, in that order
    fn read_gain_channels(&mut self) -> [Result<u32, PropertyError>; 3] {
        [codes::VIDEO_GAIN_RED, codes::VIDEO_GAIN_GREEN, codes::VIDEO_GAIN_BLUE]
            .map(|feature| self.try_read(feature).map(|r| r.current))
    }

    /// All three channels, or the first channel that failed
    ///
    /// Every channel is read even if an earlier one fails.
    pub fn try_rgb_gain(&mut self) -> Result<RgbGain, PropertyError> {
        let [red, green, blue] = self.read_gain_channels();
        Ok(RgbGain {
            red: red?,
            green: green?,
            blue: blue?,
        })
    }

    /// A channel that fails to read is `0`; the others keep their values
    pub fn rgb_gain(&mut self) -> RgbGain {
        let [red, green, blue] = self.read_gain_channels().map(|r| r.unwrap_or_default());
        RgbGain { red, green, blue }
    }

    /// Maximum gain, taken from the red channel for all three
    pub fn rgb_gain_max(&mut self) -> u32 {
        self.try_read(codes::VIDEO_GAIN_RED)
            .map(|r| r.maximum)
            .unwrap_or_default()
    }

    /// Validate all three channels, then write red, green and blue
    ///
    /// Nothing is written if any channel is out of range. A failed channel
    /// write does not stop the remaining ones; the first failure is returned.
    pub fn try_set_rgb_gain(&mut self, [red, green, blue]: [i64; 3]) -> Result<RgbGain, PropertyError> {
        let max = self.try_read(codes::VIDEO_GAIN_RED)?.maximum;
        let gain = RgbGain {
            red: self.check_range("RGB gain", red, max)?,
            green: self.check_range("RGB gain", green, max)?,
            blue: self.check_range("RGB gain", blue, max)?,
        };

        let results = [
            self.try_write(codes::VIDEO_GAIN_RED, gain.red),
            self.try_write(codes::VIDEO_GAIN_GREEN, gain.green),
            self.try_write(codes::VIDEO_GAIN_BLUE, gain.blue),
        ];
        results.into_iter().collect::<Result<Vec<()>, _>>()?;
        Ok(gain)
    }

    pub fn set_rgb_gain(&mut self, gain: [i64; 3]) -> bool {
        self.try_set_rgb_gain(gain).is_ok()
    }

    // Derived

    /// Color temperature in kelvin: 3000 + step * increment
    pub fn try_color_temperature(&mut self) -> Result<u32, PropertyError> {
        let increment = self.try_read(codes::USER_COLOR_TEMPERATURE_INCREMENT)?.current;
        let current = self.try_read(codes::USER_COLOR_TEMPERATURE)?.current;
        Ok(COLOR_TEMPERATURE_BASE.saturating_add(current.saturating_mul(increment)))
    }

    /// `0` on failure
    pub fn color_temperature(&mut self) -> u32 {
        self.try_color_temperature().unwrap_or_default()
    }

    /// Write the step `(kelvin - 3000) / increment`
    ///
    /// The division truncates, so reading back may not give `kelvin` exactly.
    /// Values below 3000K are rejected before the device is contacted.
    /// Returns the step written.
    pub fn try_set_color_temperature(&mut self, kelvin: i64) -> Result<u32, PropertyError> {
        let feature = codes::USER_COLOR_TEMPERATURE;
        let base = i64::from(COLOR_TEMPERATURE_BASE);
        if kelvin < base {
            warn!(
                display_id = %self.id(),
                "invalid color temperature: {}K, minimum: {}K",
                kelvin, COLOR_TEMPERATURE_BASE
            );
            return Err(PropertyError::BelowMinimum {
                feature: feature.to_string(),
                value: kelvin,
                min: COLOR_TEMPERATURE_BASE,
            });
        }

        let increment = self.try_read(codes::USER_COLOR_TEMPERATURE_INCREMENT)?.current;
        if increment == 0 {
            warn!(display_id = %self.id(), "color temperature increment reads as 0");
            return Err(PropertyError::ZeroIncrement {
                feature: feature.to_string(),
            });
        }

        let step = (kelvin - base) / i64::from(increment);
        let Ok(step) = u32::try_from(step) else {
            warn!(
                display_id = %self.id(),
                "invalid color temperature: {}K, step {} does not fit a VCP value",
                kelvin, step
            );
            return Err(PropertyError::OutOfRange {
                feature: feature.to_string(),
                value: kelvin,
                max: u32::MAX,
            });
        };
        self.try_write(feature, step)?;
        Ok(step)
    }

    pub fn set_color_temperature(&mut self, kelvin: i64) -> bool {
        self.try_set_color_temperature(kelvin).is_ok()
    }

    // Trigger

    /// Restore all factory defaults
    pub fn try_reset_factory(&mut self) -> Result<(), PropertyError> {
        info!(display_id = %self.id(), model = %self.model(), "reset monitor to factory settings");
        self.try_write(codes::RESTORE_FACTORY_DEFAULTS, RESTORE_FACTORY_SENTINEL)
    }

    pub fn reset_factory(&mut self) -> bool {
        self.try_reset_factory().is_ok()
    }

    /// Run the video auto-setup once (only meaningful for analog inputs)
    pub fn try_auto_setup_perform(&mut self) -> Result<(), PropertyError> {
        info!(display_id = %self.id(), model = %self.model(), "perform video auto-setup");
        self.try_set_label(codes::AUTO_SETUP, "Manual Perform").map(|_| ())
    }

    pub fn auto_setup_perform(&mut self) -> bool {
        self.try_auto_setup_perform().is_ok()
    }

    // Informational

    /// Hours the display has been powered on
    pub fn usage_hours(&mut self) -> u32 {
        self.try_read(codes::DISPLAY_USAGE_TIME)
            .map(|r| r.current)
            .unwrap_or_default()
    }

    pub fn sub_pixel_layout(&mut self) -> String {
        self.label_or_empty(codes::FLAT_PANEL_SUB_PIXEL_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::protocols::simulated::SimulatedDisplay;

    const CAPS: &str = "(prot(monitor)type(lcd)model(X500))";

    fn create_test_display() -> SimulatedDisplay {
        SimulatedDisplay::new("sim-1", CAPS)
            .with_feature(0x10, 40, 100)
            .with_feature(0x12, 70, 100)
            .with_feature(0x0B, 50, 0)
            .with_feature(0x0C, 70, 140)
            .with_feature(0x14, 0x05, 0x0D)
            .with_feature(0x16, 50, 100)
            .with_feature(0x18, 51, 100)
            .with_feature(0x1A, 52, 100)
            .with_feature(0xCC, 0x02, 0x25)
            .with_feature(0xD6, 0x01, 0x05)
            .with_feature(0x60, 0x0F, 0x12)
            .with_feature(0xC0, 1234, 0)
            .with_feature(0xB2, 0x01, 0x08)
    }

    fn create_test_device() -> Device<SimulatedDisplay> {
        Device::new(create_test_display()).unwrap()
    }

    #[test]
    fn test_brightness_round_trip() {
        let mut device = create_test_device();
        assert_eq!(device.brightness(), FeatureReading::new(40, 100));
        assert!(device.set_brightness(75));
        assert_eq!(device.brightness().current, 75);
    }

    #[test]
    fn test_out_of_range_never_writes() {
        let mut device = create_test_device();
        assert!(!device.set_brightness(101));
        assert!(!device.set_contrast(-1));
        assert!(device.transport().write_attempts.is_empty());
        assert_eq!(device.brightness().current, 40);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut device = create_test_device();
        assert!(device.set_contrast(0));
        assert!(device.set_contrast(100));
        assert_eq!(device.transport().writes_to(0x12), vec![0, 100]);
    }

    #[test]
    fn test_failed_max_read_does_not_write() {
        let display = create_test_display().failing_read(0x10);
        let mut device = Device::new(display).unwrap();
        assert!(matches!(
            device.try_set_bounded(codes::LUMINANCE, 10),
            Err(PropertyError::Transport { .. })
        ));
        assert!(device.transport().write_attempts.is_empty());
        assert_eq!(device.brightness(), FeatureReading::default());
    }

    #[test]
    fn test_enumerated_get_and_set() {
        let mut device = create_test_device();
        assert_eq!(device.color_preset(), "6500K");
        assert_eq!(device.osd_language(), "English");
        assert_eq!(device.input_source(), "DisplayPort 1");

        assert!(device.set_input_source("Digital Video (TMDS) 3 HDMI 1"));
        assert_eq!(device.input_source(), "Digital Video (TMDS) 3 HDMI 1");
        assert_eq!(device.transport().writes_to(0x60), vec![0x11]);
    }

    #[test]
    fn test_unknown_label_never_writes() {
        let mut device = create_test_device();
        assert!(!device.set_color_preset("Vivid"));
        assert!(!device.set_osd_language("Klingon"));
        assert!(matches!(
            device.try_set_label(codes::INPUT_SOURCE, "hdmi"),
            Err(PropertyError::UnknownLabel { .. })
        ));
        assert!(device.transport().write_attempts.is_empty());
        assert_eq!(device.color_preset(), "6500K");
    }

    #[test]
    fn test_unmatched_enum_value_is_empty() {
        let display = create_test_display().with_feature(0x14, 0x40, 0x0D);
        let mut device = Device::new(display).unwrap();
        assert_eq!(device.color_preset(), "");
    }

    #[test]
    fn test_power_mode_quirk() {
        let display = create_test_display().with_feature(0xD6, 0x02, 0x05);
        let mut device = Device::new(display).unwrap();
        assert_eq!(device.power_mode(), "off");
    }

    #[test]
    fn test_power_mode_set() {
        let mut device = create_test_device();
        assert_eq!(device.power_mode(), "on");
        assert!(device.set_power_mode("off"));
        assert_eq!(device.transport().writes_to(0xD6), vec![0x05]);
        assert_eq!(device.power_mode(), "off");
        assert!(!device.set_power_mode("standby"));
    }

    #[test]
    fn test_power_mode_read_failure_is_empty() {
        let display = create_test_display().failing_read(0xD6);
        let mut device = Device::new(display).unwrap();
        assert_eq!(device.power_mode(), "");
    }

    #[test]
    fn test_rgb_gain_read() {
        let mut device = create_test_device();
        assert_eq!(
            device.rgb_gain(),
            RgbGain {
                red: 50,
                green: 51,
                blue: 52
            }
        );
        assert_eq!(device.rgb_gain_max(), 100);
    }

    #[test]
    fn test_rgb_gain_channels_read_independently() {
        let display = create_test_display().failing_read(0x18);
        let mut device = Device::new(display).unwrap();
        assert_eq!(
            device.rgb_gain(),
            RgbGain {
                red: 50,
                green: 0,
                blue: 52
            }
        );
        assert!(matches!(
            device.try_rgb_gain(),
            Err(PropertyError::Transport { ref feature, .. }) if feature == codes::VIDEO_GAIN_GREEN
        ));
    }

    #[test]
    fn test_rgb_gain_written_in_order() {
        let mut device = create_test_device();
        assert!(device.set_rgb_gain([10, 20, 30]));
        assert_eq!(
            device.transport().writes,
            vec![(0x16, 10), (0x18, 20), (0x1A, 30)]
        );
    }

    #[test]
    fn test_rgb_gain_validated_atomically() {
        let mut device = create_test_device();
        assert!(!device.set_rgb_gain([10, 9999, 10]));
        assert!(!device.set_rgb_gain([-1, 10, 10]));
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_rgb_gain_uses_red_max_for_all_channels() {
        let display = create_test_display()
            .with_feature(0x16, 50, 80)
            .with_feature(0x1A, 52, 255);
        let mut device = Device::new(display).unwrap();
        assert!(!device.set_rgb_gain([10, 10, 90]));
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_rgb_gain_failed_channel_does_not_stop_others() {
        let display = create_test_display().failing_write(0x18);
        let mut device = Device::new(display).unwrap();
        assert!(!device.set_rgb_gain([10, 20, 30]));
        assert_eq!(device.transport().writes, vec![(0x16, 10), (0x1A, 30)]);
    }

    #[test]
    fn test_color_temperature_get() {
        let mut device = create_test_device();
        assert_eq!(device.color_temperature(), 3000 + 70 * 50);
    }

    #[test]
    fn test_color_temperature_set_truncates() {
        let mut device = create_test_device();
        assert_eq!(device.try_set_color_temperature(6549).unwrap(), 70);
        assert_eq!(device.transport().writes_to(0x0C), vec![70]);
        assert_eq!(device.color_temperature(), 6500);
    }

    #[test]
    fn test_color_temperature_below_base_is_rejected() {
        let mut device = create_test_device();
        assert!(!device.set_color_temperature(2000));
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_color_temperature_below_base_reports_kelvin() {
        let display = create_test_display().failing_read(0x0B);
        let mut device = Device::new(display).unwrap();
        match device.try_set_color_temperature(2000) {
            Err(PropertyError::BelowMinimum { value, min, .. }) => {
                assert_eq!(value, 2000);
                assert_eq!(min, COLOR_TEMPERATURE_BASE);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_color_temperature_zero_increment() {
        let display = create_test_display().with_feature(0x0B, 0, 0);
        let mut device = Device::new(display).unwrap();
        assert!(matches!(
            device.try_set_color_temperature(6500),
            Err(PropertyError::ZeroIncrement { .. })
        ));
        assert!(device.transport().write_attempts.is_empty());
    }

    #[test]
    fn test_color_temperature_read_failure() {
        let display = create_test_display().failing_read(0x0B);
        let mut device = Device::new(display).unwrap();
        assert_eq!(device.color_temperature(), 0);
    }

    #[test]
    fn test_triggers() {
        let mut device = create_test_device();
        assert!(device.reset_factory());
        assert!(device.auto_setup_perform());
        assert_eq!(device.transport().writes, vec![(0x04, 1), (0x1E, 0x01)]);
    }

    #[test]
    fn test_trigger_failure_is_reported() {
        let display = create_test_display().failing_write(0x04);
        let mut device = Device::new(display).unwrap();
        assert!(!device.reset_factory());
    }

    #[test]
    fn test_informational() {
        let mut device = create_test_device();
        assert_eq!(device.usage_hours(), 1234);
        assert_eq!(device.sub_pixel_layout(), "Red / Green / Blue vertical stripe");
    }

    #[test]
    fn test_label_lists() {
        let device = create_test_device();
        assert_eq!(device.color_preset_list().len(), 13);
        assert_eq!(device.osd_language_list().len(), 38);
        assert_eq!(device.input_source_list().len(), 18);
        assert_eq!(device.power_mode_list(), vec!["on", "off"]);
    }

    proptest! {
        #[test]
        fn test_scalar_range_property(max in 0u32..=1000, value in -2000i64..=2000) {
            let display = SimulatedDisplay::new("sim-1", CAPS).with_feature(0x10, 0, max);
            let mut device = Device::new(display).unwrap();

            let applied = device.set_brightness(value);

            if (0..=i64::from(max)).contains(&value) {
                prop_assert!(applied);
                prop_assert_eq!(i64::from(device.brightness().current), value);
            } else {
                prop_assert!(!applied);
                prop_assert!(device.transport().write_attempts.is_empty());
            }
        }
    }
}
