//! Runs every descriptor in one pass.

use std::fmt;

use ma_layout_probe::ffi::functions::ma_probe_capabilities;
use ma_layout_probe::{Capabilities, Capability};

use crate::check::{MirrorLayout, check, stamp_bytes};
use crate::config::RunConfig;
use crate::error::ConformanceError;
use crate::layouts::*;
use crate::report::ConformanceReport;

type CheckFn = fn(&RunConfig) -> Result<ConformanceReport, ConformanceError>;
type StampFn = fn(u8, usize) -> Result<Vec<u8>, ConformanceError>;

// ─── Registry ────────────────────────────────────────────────────────

/// One descriptor as the runner sees it.
///
/// Descriptors whose capability was compiled out keep an entry with no
/// check, so a run can still name what it skipped.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub capability: Option<Capability>,
    check: Option<CheckFn>,
    stamp: Option<StampFn>,
}

impl Entry {
    fn of<L: MirrorLayout>() -> Self {
        Self {
            name: L::NAME,
            capability: L::CAPABILITY,
            check: Some(check::<L>),
            stamp: Some(stamp_bytes::<L>),
        }
    }

    #[cfg(not(feature = "device-io"))]
    fn compiled_out(name: &'static str, capability: Capability) -> Self {
        Self {
            name,
            capability: Some(capability),
            check: None,
            stamp: None,
        }
    }

    /// Whether this build carries a check for the entry.
    pub fn is_compiled(&self) -> bool {
        self.check.is_some()
    }

    /// Runs the check, `None` if the entry is compiled out.
    pub fn check(&self, config: &RunConfig) -> Option<Result<ConformanceReport, ConformanceError>> {
        self.check.map(|check| check(config))
    }

    /// Initializes a buffer `repeats` times and returns its native bytes.
    pub fn stamp(&self, fill_byte: u8, repeats: usize) -> Option<Result<Vec<u8>, ConformanceError>> {
        self.stamp.map(|stamp| stamp(fill_byte, repeats))
    }
}

/// Every descriptor, nested structs before the composites embedding them.
pub fn registry() -> Vec<Entry> {
    let mut entries = vec![
        Entry::of::<FormatConverterConfigLayout>(),
        Entry::of::<FormatConverterLayout>(),
        Entry::of::<ChannelRouterConfigLayout>(),
        Entry::of::<ChannelRouterLayout>(),
        Entry::of::<SrcConfigSincLayout>(),
        Entry::of::<SrcConfigLayout>(),
        Entry::of::<SrcLayout>(),
        Entry::of::<PcmConverterConfigLayout>(),
        Entry::of::<PcmConverterLayout>(),
    ];

    #[cfg(feature = "device-io")]
    entries.extend([
        Entry::of::<DeviceConfigPlaybackLayout>(),
        Entry::of::<DeviceConfigCaptureLayout>(),
        Entry::of::<DeviceConfigLayout>(),
    ]);

    #[cfg(not(feature = "device-io"))]
    entries.extend([
        Entry::compiled_out("device_config_playback", Capability::DeviceIo),
        Entry::compiled_out("device_config_capture", Capability::DeviceIo),
        Entry::compiled_out("device_config", Capability::DeviceIo),
    ]);

    entries
}

// ─── Outcomes ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Outcome {
    Conformant(ConformanceReport),
    Diverged(ConformanceReport),
    Skipped(Capability),
}

/// Results of a run in registry order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(&'static str, Outcome)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|(_, outcome)| matches!(outcome, Outcome::Diverged(_)))
    }

    pub fn conformant(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Conformant(_)))
            .map(|(name, _)| *name)
    }

    pub fn diverged(&self) -> impl Iterator<Item = &ConformanceReport> {
        self.outcomes.iter().filter_map(|(_, o)| match o {
            Outcome::Diverged(report) => Some(report),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Skipped(_)))
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, outcome) in &self.outcomes {
            match outcome {
                Outcome::Conformant(report) | Outcome::Diverged(report) => {
                    writeln!(f, "{report}")?
                }
                Outcome::Skipped(capability) => {
                    writeln!(f, "{name}: skipped, needs {}", capability.name())?
                }
            }
        }
        Ok(())
    }
}

// ─── RunnerBuilder ───────────────────────────────────────────────────

/// Builder for a [`Runner`].
///
/// # Example
///
/// ```ignore
/// let summary = Runner::builder().fill_byte(0xA5).fail_fast(true).build().run()?;
/// ```
pub struct RunnerBuilder {
    config: RunConfig,
    capabilities: Option<Capabilities>,
}

impl RunnerBuilder {
    fn new() -> Self {
        Self {
            config: RunConfig::default(),
            capabilities: None,
        }
    }

    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fill_byte(mut self, fill_byte: u8) -> Self {
        self.config.fill_byte = fill_byte;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.fail_fast = fail_fast;
        self
    }

    pub fn strict_capabilities(mut self, strict: bool) -> Self {
        self.config.strict_capabilities = strict;
        self
    }

    /// Overrides the capability set queried from the probe.
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn build(self) -> Runner {
        Runner {
            config: self.config,
            capabilities: self
                .capabilities
                .unwrap_or_else(|| ma_probe_capabilities().to_rust()),
        }
    }
}

// ─── Runner ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Runner {
    config: RunConfig,
    capabilities: Capabilities,
}

impl Runner {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn run(&self) -> Result<RunSummary, ConformanceError> {
        let mut summary = RunSummary::default();

        for entry in registry() {
            if let Some(capability) = entry.capability {
                if !self.capabilities.has(capability) || !entry.is_compiled() {
                    if self.config.strict_capabilities {
                        return Err(ConformanceError::CapabilityUnavailable {
                            descriptor: entry.name,
                            capability,
                        });
                    }
                    tracing::warn!(
                        descriptor = entry.name,
                        capability = capability.name(),
                        "skipping descriptor"
                    );
                    summary.outcomes.push((entry.name, Outcome::Skipped(capability)));
                    continue;
                }
            }

            let Some(result) = entry.check(&self.config) else {
                continue;
            };
            let report = result?;
            let conformant = report.is_conformant();
            let outcome = if conformant {
                Outcome::Conformant(report)
            } else {
                Outcome::Diverged(report)
            };
            summary.outcomes.push((entry.name, outcome));

            if !conformant && self.config.fail_fast {
                break;
            }
        }

        Ok(summary)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
