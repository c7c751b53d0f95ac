// SPDX-License-Identifier: GPL-3.0-only
//! In-memory display used by unit tests
//!
//! Writes are recorded and echoed back on the next read of the same code.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};

use super::{FeatureReading, VcpTransport};
use crate::vcp::VcpCode;

#[derive(Debug)]
pub struct SimulatedDisplay {
    id: String,
    caps: Option<String>,
    features: HashMap<VcpCode, FeatureReading>,
    fail_reads: HashSet<VcpCode>,
    fail_writes: HashSet<VcpCode>,
    /// Every successful write, in order
    pub writes: Vec<(VcpCode, u32)>,
    /// Every attempted write, including failed ones
    pub write_attempts: Vec<(VcpCode, u32)>,
    releases: Option<Arc<AtomicUsize>>,
}

impl SimulatedDisplay {
    pub fn new(id: &str, caps: &str) -> Self {
        let mut display = Self::without_caps(id);
        display.caps = Some(caps.to_string());
        display
    }

    /// A display whose capability request fails
    pub fn without_caps(id: &str) -> Self {
        Self {
            id: id.to_string(),
            caps: None,
            features: HashMap::new(),
            fail_reads: HashSet::new(),
            fail_writes: HashSet::new(),
            writes: Vec::new(),
            write_attempts: Vec::new(),
            releases: None,
        }
    }

    pub fn with_feature(mut self, code: VcpCode, current: u32, maximum: u32) -> Self {
        self.features.insert(code, FeatureReading::new(current, maximum));
        self
    }

    pub fn failing_read(mut self, code: VcpCode) -> Self {
        self.fail_reads.insert(code);
        self
    }

    pub fn failing_write(mut self, code: VcpCode) -> Self {
        self.fail_writes.insert(code);
        self
    }

    /// Count drops of this display into `counter`
    pub fn release_counter(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.releases = Some(counter);
        self
    }

    pub fn set_caps(&mut self, caps: &str) {
        self.caps = Some(caps.to_string());
    }

    pub fn current(&self, code: VcpCode) -> Option<u32> {
        self.features.get(&code).map(|f| f.current)
    }

    pub fn writes_to(&self, code: VcpCode) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|(c, _)| *c == code)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl VcpTransport for SimulatedDisplay {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn capabilities_string(&mut self) -> Result<String> {
        self.caps
            .clone()
            .ok_or_else(|| anyhow!("capabilities request timed out"))
    }

    fn read_feature(&mut self, code: VcpCode) -> Result<FeatureReading> {
        if self.fail_reads.contains(&code) {
            return Err(anyhow!("no reply for VCP code {code:#04x}"));
        }
        self.features
            .get(&code)
            .copied()
            .ok_or_else(|| anyhow!("unsupported VCP code {code:#04x}"))
    }

    fn write_feature(&mut self, code: VcpCode, value: u32) -> Result<()> {
        self.write_attempts.push((code, value));
        if self.fail_writes.contains(&code) {
            return Err(anyhow!("write to VCP code {code:#04x} not acknowledged"));
        }
        let entry = self.features.entry(code).or_default();
        entry.current = value;
        self.writes.push((code, value));
        Ok(())
    }
}

impl Drop for SimulatedDisplay {
    fn drop(&mut self) {
        if let Some(counter) = &self.releases {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}
