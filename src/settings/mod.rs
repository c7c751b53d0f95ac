// SPDX-License-Identifier: GPL-3.0-only
//! Batch settings: parsing, per-property coercion and application

mod apply;
mod parse;
mod property;

pub use apply::{
    ApplyOptions, ApplyReport, ModelFilter, Outcome, apply_settings, select_targets,
};
pub use parse::{
    DEFAULT_SEPARATOR, RESERVED_SEPARATORS, Setting, SettingsBatch, is_valid_separator,
    parse_int_list,
};
pub use property::{AppliedValue, Property, PropertyKind, PropertyValue};
