// SPDX-License-Identifier: GPL-3.0-only
//! Display discovery
//!
//! Enumeration and capability requests are slow blocking I/O, so they run on
//! a blocking worker. The finished device list is handed back once.

use tokio::sync::oneshot;

use crate::error::{AppError, Result};
use crate::protocols::VcpTransport;
use crate::protocols::ddc_ci::DdcCiDisplay;

use super::Device;

/// Construct a [`Device`] for every transport, skipping those that fail
///
/// A display that can't be initialized is logged and left out; its handle is
/// released when the failed construction drops it.
pub fn probe_displays<T, I>(transports: I) -> Vec<Device<T>>
where
    T: VcpTransport,
    I: IntoIterator<Item = T>,
{
    let mut devices = Vec::new();
    for transport in transports {
        let id = transport.id();
        debug!("Probing display: {}", id);
        match Device::new(transport) {
            Ok(device) => {
                info!("Found monitor: {} ({})", device.model(), id);
                devices.push(device);
            }
            Err(e) => {
                error!(display_id = %id, error = %e, "Failed to initialize display");
            }
        }
    }
    devices
}

/// Enumerate all DDC/CI displays and bind each to a [`Device`]
pub async fn discover() -> Result<Vec<Device<DdcCiDisplay>>> {
    discover_with(DdcCiDisplay::enumerate).await
}

/// Run `enumerate` on a blocking worker and probe every transport it returns
///
/// Only a failure of the worker itself is an error.
pub async fn discover_with<T, F>(enumerate: F) -> Result<Vec<Device<T>>>
where
    T: VcpTransport + 'static,
    F: FnOnce() -> Vec<T> + Send + 'static,
{
    info!("=== START ENUMERATE ===");

    let devices = tokio::task::spawn_blocking(move || {
        let transports = enumerate();
        info!("Found {} display(s) to probe", transports.len());
        probe_displays(transports)
    })
    .await
    .map_err(|e| AppError::Enumeration(format!("discovery worker failed: {e}")))?;

    info!("=== END ENUMERATE: Found {} monitors ===", devices.len());
    Ok(devices)
}

/// Run [`discover`] in the background
///
/// The receiver yields the complete result exactly once.
pub fn spawn_discovery() -> oneshot::Receiver<Result<Vec<Device<DdcCiDisplay>>>> {
    spawn_discovery_with(DdcCiDisplay::enumerate)
}

/// Run [`discover_with`] in the background
pub fn spawn_discovery_with<T, F>(enumerate: F) -> oneshot::Receiver<Result<Vec<Device<T>>>>
where
    T: VcpTransport + 'static,
    F: FnOnce() -> Vec<T> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = discover_with(enumerate).await;
        if tx.send(result).is_err() {
            debug!("Discovery result dropped: receiver went away");
        }
    });
    rx
}
