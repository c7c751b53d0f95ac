// SPDX-License-Identifier: GPL-3.0-only
//! Capability string identity extraction
//!
//! A capability string looks like
//! `(prot(monitor)type(lcd)model(X500)cmds(01 02 03)vcp(10 12 ...)mccs_ver(2.1))`.
//! Vendors vary a lot in what they put there, so only the identity fields are
//! pulled out, each as the text between `key(` and the next `)`. Nested groups
//! and the advertised VCP code list are not interpreted.

/// Identity fields taken from a capability string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityInfo {
    /// Empty if the string has no `model(...)` field
    pub model: String,
    /// Empty if the string has no `type(...)` field
    pub display_type: String,
}

impl CapabilityInfo {
    pub fn parse(caps: &str) -> Self {
        Self {
            model: field(caps, "model"),
            display_type: field(caps, "type"),
        }
    }
}

/// Text between the first `key(` and the following `)`, or empty
pub fn field(caps: &str, key: &str) -> String {
    let open = format!("{key}(");
    extract(caps, &open, ")").unwrap_or_default().to_string()
}

fn extract<'a>(src: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = src.find(start)? + start.len();
    let len = src[from..].find(end)?;
    Some(&src[from..from + len])
}
