// SPDX-License-Identifier: GPL-3.0-only
//! Monitor control over DDC/CI
//!
//! Named VCP properties on top of raw feature codes, and a batch engine that
//! applies `key=value` settings to every monitor matching a model filter.

#[macro_use]
extern crate tracing;

pub mod capabilities;
pub mod config;
pub mod error;
pub mod monitor;
pub mod protocols;
pub mod settings;
pub mod vcp;
