// SPDX-License-Identifier: GPL-3.0-only
//! Settings batch text format
//!
//! A batch is a list of `key=value` tokens joined by a single separator
//! character, e.g. `brightness=50:color_preset=sRGB:rgb_gain=[90,95,100]`.
//! Malformed tokens are collected and skipped; they never fail the batch.

use crate::error::SettingParseError;

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ':';

/// Characters that appear inside values and can't separate tokens
pub const RESERVED_SEPARATORS: &[char] = &['=', ',', '[', ']', '(', ')', '"', '-', '/', '.', '+'];

/// Whether `c` can separate tokens without clashing with keys or values
pub fn is_valid_separator(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && c != '_' && !RESERVED_SEPARATORS.contains(&c)
}

/// One `key=value` pair, both trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

/// Ordered settings parsed from one batch specification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsBatch {
    settings: Vec<Setting>,
    rejected: Vec<SettingParseError>,
}

impl SettingsBatch {
    /// Split `spec` on `separator` into `key=value` settings
    ///
    /// Empty tokens (e.g. a trailing separator) are ignored. Tokens that do
    /// not split into exactly one non-empty key and one value are logged and
    /// kept in [`SettingsBatch::rejected`]. A key given twice is sent once,
    /// with its last value.
    pub fn parse(spec: &str, separator: char) -> Self {
        let mut batch = Self::default();

        for token in spec.split(separator) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let parts: Vec<&str> = token.split('=').collect();
            match parts.as_slice() {
                [key, value] if !key.trim().is_empty() => batch.insert(Setting {
                    key: key.trim().to_string(),
                    value: unquote(value.trim()).to_string(),
                }),
                _ => {
                    error!("Failed to parse setting: {}", token);
                    batch
                        .rejected
                        .push(SettingParseError::MalformedToken(token.to_string()));
                }
            }
        }

        debug!(settings = ?batch.settings, "parsed settings batch");
        batch
    }

    /// A repeated key keeps its first position and takes the latest value
    fn insert(&mut self, setting: Setting) {
        match self.settings.iter_mut().find(|s| s.key == setting.key) {
            Some(existing) => {
                debug!(
                    "duplicate setting {}: {} replaces {}",
                    setting.key, setting.value, existing.value
                );
                existing.value = setting.value;
            }
            None => self.settings.push(setting),
        }
    }

    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Tokens that could not be split into `key=value`
    pub fn rejected(&self) -> &[SettingParseError] {
        &self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse a bracketed list of exactly `N` integers, e.g. `[10, 20, 30]`
///
/// Square brackets or parentheses are accepted as long as they match. No
/// other syntax is evaluated.
pub fn parse_int_list<const N: usize>(literal: &str) -> Result<[i64; N], SettingParseError> {
    let malformed = |reason: String| SettingParseError::MalformedList {
        literal: literal.to_string(),
        reason,
    };

    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .or_else(|| trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')))
        .ok_or_else(|| malformed("expected [a, b, c] or (a, b, c)".to_string()))?;

    let values = inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| malformed(format!("{part:?} is not an integer")))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    let count = values.len();
    values
        .try_into()
        .map_err(|_| malformed(format!("expected {N} values, got {count}")))
}
