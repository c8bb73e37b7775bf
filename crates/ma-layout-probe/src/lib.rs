//! Native layout probe for the miniaudio data-conversion structs.
//!
//! For every mirrored struct the probe exports two C-ABI functions:
//!
//! - `ma_probe_sizeof_<T>()` returns the struct's size on this target;
//! - `ma_probe_init_<T>(T*)` stamps each scalar member with a documented
//!   sentinel.
//!
//! A binding that re-declares the structs allocates `sizeof` bytes, lets the
//! probe initialize them, reads the buffer back through its own declaration
//! and compares. Any disagreement in member order, padding, enum width or
//! bit-field packing shows up as a wrong value.
//!
//! Which structs exist depends on the build's [`Capabilities`]: the device
//! configuration family is only compiled with the `device-io` feature.

pub mod capabilities;
pub mod ffi;
pub mod native;

pub use capabilities::{Backends, Capabilities, Capability, SimdTier};

use ffi::functions::*;

/// One struct the probe can measure and initialize.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Native type name without the `ma_` prefix.
    pub name: &'static str,
    /// Capability the struct only exists under.
    pub capability: Option<Capability>,
    pub size_of: extern "C" fn() -> usize,
}

impl Descriptor {
    const fn new(name: &'static str, size_of: extern "C" fn() -> usize) -> Self {
        Self {
            name,
            capability: None,
            size_of,
        }
    }

    #[cfg(feature = "device-io")]
    const fn gated(
        name: &'static str,
        capability: Capability,
        size_of: extern "C" fn() -> usize,
    ) -> Self {
        Self {
            name,
            capability: Some(capability),
            size_of,
        }
    }

    pub fn size(&self) -> usize {
        (self.size_of)()
    }
}

/// Every descriptor compiled into this probe, nested structs before the
/// composites that embed them.
pub fn descriptors() -> Vec<Descriptor> {
    #[allow(unused_mut)]
    let mut all = vec![
        Descriptor::new("format_converter_config", ma_probe_sizeof_format_converter_config),
        Descriptor::new("format_converter", ma_probe_sizeof_format_converter),
        Descriptor::new("channel_router_config", ma_probe_sizeof_channel_router_config),
        Descriptor::new("channel_router", ma_probe_sizeof_channel_router),
        Descriptor::new("src_config_sinc", ma_probe_sizeof_src_config_sinc),
        Descriptor::new("src_config", ma_probe_sizeof_src_config),
        Descriptor::new("src", ma_probe_sizeof_src),
        Descriptor::new("pcm_converter_config", ma_probe_sizeof_pcm_converter_config),
        Descriptor::new("pcm_converter", ma_probe_sizeof_pcm_converter),
    ];

    #[cfg(feature = "device-io")]
    all.extend([
        Descriptor::gated(
            "device_config_playback",
            Capability::DeviceIo,
            ma_probe_sizeof_device_config_playback,
        ),
        Descriptor::gated(
            "device_config_capture",
            Capability::DeviceIo,
            ma_probe_sizeof_device_config_capture,
        ),
        Descriptor::gated(
            "device_config",
            Capability::DeviceIo,
            ma_probe_sizeof_device_config,
        ),
    ]);

    all
}
