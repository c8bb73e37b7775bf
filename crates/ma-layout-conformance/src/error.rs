use std::fmt;

use ma_layout_probe::Capability;

/// Errors that stop a check before any field is compared.
///
/// A layout mismatch is not an error: it is reported as data in a
/// [`ConformanceReport`](crate::ConformanceReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConformanceError {
    /// The conformance buffer could not be allocated.
    Allocation { size: usize, align: usize },
    /// A descriptor's capability is absent and the run is strict.
    CapabilityUnavailable {
        descriptor: &'static str,
        capability: Capability,
    },
}

impl fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { size, align } => {
                write!(f, "cannot allocate {size} bytes aligned to {align}")
            }
            Self::CapabilityUnavailable {
                descriptor,
                capability,
            } => write!(
                f,
                "{descriptor} requires capability {} which this build lacks",
                capability.name()
            ),
        }
    }
}

impl std::error::Error for ConformanceError {}
