// SPDX-License-Identifier: GPL-3.0-only
//! MCCS feature names and their VCP code points

/// Restore all factory presets (luminance, contrast, geometry, color, TV)
pub const RESTORE_FACTORY_DEFAULTS: &str = "Restore Factory Defaults";
/// Read-only step size, in kelvin, of `USER_COLOR_TEMPERATURE`
pub const USER_COLOR_TEMPERATURE_INCREMENT: &str = "User Color Temperature Increment";
/// Read: 3000K + increment * value
pub const USER_COLOR_TEMPERATURE: &str = "User Color Temperature";
pub const LUMINANCE: &str = "Luminance";
pub const CONTRAST: &str = "Contrast";
pub const SELECT_COLOR_PRESET: &str = "Select Color Preset";
pub const VIDEO_GAIN_RED: &str = "Video Gain Red";
pub const VIDEO_GAIN_GREEN: &str = "Video Gain Green";
pub const VIDEO_GAIN_BLUE: &str = "Video Gain Blue";
pub const AUTO_SETUP: &str = "Auto Setup";
/// Unit: hours
pub const DISPLAY_USAGE_TIME: &str = "Display Usage Time";
pub const OSD_LANGUAGE: &str = "OSD Language";
pub const POWER_MODE: &str = "Power Mode";
pub const INPUT_SOURCE: &str = "Input Source";
pub const FLAT_PANEL_SUB_PIXEL_LAYOUT: &str = "Flat Panel Sub-Pixel Layout";

/// Every feature known to the registry
pub(super) const VCP_CODES: &[(&str, u8)] = &[
    // Preset operations. Writing a non-zero value triggers the restore.
    ("Restore Factory Color Defaults", 0x08),
    (RESTORE_FACTORY_DEFAULTS, 0x04),
    ("Restore Factory Geometry Defaults", 0x06),
    ("Restore Factory Luminance / Contrast Defaults", 0x05),
    ("Restore Factory TV Defaults", 0x0A),
    // SL 0x01 stores the current settings, 0x02 restores defaults for the current mode
    ("Save / Restore Settings", 0xB0),
    ("VCP Code Page", 0x00),
    // Image adjustment
    (USER_COLOR_TEMPERATURE_INCREMENT, 0x0B),
    (USER_COLOR_TEMPERATURE, 0x0C),
    (LUMINANCE, 0x10),
    ("Clock", 0x0E),
    ("Flesh Tone Enhancement", 0x11),
    (CONTRAST, 0x12),
    (SELECT_COLOR_PRESET, 0x14),
    (VIDEO_GAIN_RED, 0x16),
    (VIDEO_GAIN_GREEN, 0x18),
    (VIDEO_GAIN_BLUE, 0x1A),
    (AUTO_SETUP, 0x1E),
    ("Auto Color Setup", 0x1F),
    ("Gray Scale Expansion", 0x2E),
    ("Video Black Level: Red", 0x6C),
    ("Video Black Level: Green", 0x6E),
    ("Video Black Level: Blue", 0x70),
    ("Gamma", 0x72),
    ("Adjust Zoom", 0x7C),
    ("Sharpness", 0x87),
    // Display control
    (DISPLAY_USAGE_TIME, 0xC0),
    ("Display Controller ID", 0xC8),
    ("Display Firmware Level", 0xC9),
    (OSD_LANGUAGE, 0xCC),
    (POWER_MODE, 0xD6),
    // MH: MCCS version, ML: revision
    ("VCP Version", 0xDF),
    // Geometry
    ("Bottom Corner Flare", 0x4A),
    ("Bottom Corner Hook", 0x4C),
    ("Display Scaling", 0x86),
    ("Horizontal Convergence M / G", 0x29),
    ("Horizontal Convergence R / B", 0x28),
    ("Horizontal Keystone", 0x42),
    ("Horizontal Linearity", 0x2A),
    ("Horizontal Linearity Balance", 0x2C),
    ("Horizontal Mirror (Flip)", 0x82),
    ("Horizontal Parallelogram", 0x40),
    ("Horizontal Pincushion", 0x24),
    ("Horizontal Pincushion Balance", 0x26),
    ("Horizontal Position (Phase)", 0x20),
    ("Horizontal Size", 0x22),
    ("Rotation", 0x44),
    ("Scan Mode", 0xDA),
    ("Top Corner Flare", 0x46),
    ("Top Corner Hook", 0x48),
    ("Vertical Convergence M / G", 0x39),
    ("Vertical Convergence R / B", 0x38),
    ("Vertical Keystone", 0x43),
    ("Vertical Linearity", 0x3A),
    ("Vertical Linearity Balance", 0x3C),
    ("Vertical Mirror (Flip)", 0x84),
    ("Vertical Parallelogram", 0x41),
    ("Vertical Pincushion", 0x34),
    ("Vertical Pincushion Balance", 0x36),
    ("Vertical Position (Phase)", 0x30),
    ("Vertical Size", 0x32),
    ("Window Position (BR_X)", 0x97),
    ("Window Position (BR_Y)", 0x98),
    ("Window Position (TL_X)", 0x95),
    ("Window Position (TL_Y)", 0x96),
    // Miscellaneous
    ("Active Control", 0x52),
    ("Ambient Light Sensor", 0x66),
    ("Application Enable Key", 0xC6),
    ("Asset Tag", 0xD2),
    ("Auxiliary Display Data", 0xCF),
    ("Auxiliary Display Size", 0xCE),
    ("Auxiliary Power Output", 0xD7),
    // CRT only
    ("Degauss", 0x01),
    ("Display Descriptor Length", 0xC2),
    ("Display Identification Data Operation", 0x78),
    ("Display Technology Type", 0xB6),
    ("Enable Display of Display Descriptor", 0xC4),
    (FLAT_PANEL_SUB_PIXEL_LAYOUT, 0xB2),
    (INPUT_SOURCE, 0x60),
    ("New Control Value", 0x02),
    ("Output Select", 0xD0),
    ("Performance Preservation", 0x54),
    ("Remote Procedure Call", 0x76),
    ("Scratch Pad", 0xDE),
    ("Soft Controls", 0x03),
    ("Status Indicators (Host)", 0xCD),
    ("Transmit Display Descriptor", 0xC3),
    ("TV-Channel Up / Down", 0x8B),
    // Audio
    ("Audio: Balance L/R", 0x93),
    ("Audio: Bass", 0x91),
    ("Audio: Jack Connection Status", 0x65),
    ("Audio: Microphone Volume", 0x64),
    ("Audio: Mute (screen blank)", 0x8D),
    ("Audio: Processor Mode", 0x94),
    ("Audio: Speaker Select", 0x63),
    ("Audio: Speaker Volume", 0x62),
    ("Audio: Treble", 0x8F),
];
