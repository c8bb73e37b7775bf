//! Exported size accessors and the capability query.
//!
//! Each `ma_probe_sizeof_*` returns the exact size of the native struct in
//! bytes, trailing padding included, as the C compiler computed it. They
//! have no inputs, no failure modes and no side effects.

use crate::capabilities::Capabilities;
use crate::native::sys;

use super::types::MaProbeCapabilities;

// ─── Capabilities ────────────────────────────────────────────────────

/// Returns the capability set this probe was built with.
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_capabilities() -> MaProbeCapabilities {
    MaProbeCapabilities::from_rust(&Capabilities::current())
}

// ─── Format conversion ───────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_format_converter_config() -> usize {
    sys::ma_native_sizeof_format_converter_config()
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_format_converter() -> usize {
    sys::ma_native_sizeof_format_converter()
}

// ─── Channel routing ─────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_channel_router_config() -> usize {
    sys::ma_native_sizeof_channel_router_config()
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_channel_router() -> usize {
    sys::ma_native_sizeof_channel_router()
}

// ─── Sample-rate conversion ──────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_src_config_sinc() -> usize {
    sys::ma_native_sizeof_src_config_sinc()
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_src_config() -> usize {
    sys::ma_native_sizeof_src_config()
}

/// `ma_src` is 64-byte aligned; its size is a multiple of 64.
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_src() -> usize {
    sys::ma_native_sizeof_src()
}

// ─── PCM conversion ──────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_pcm_converter_config() -> usize {
    sys::ma_native_sizeof_pcm_converter_config()
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_pcm_converter() -> usize {
    sys::ma_native_sizeof_pcm_converter()
}

// ─── Device I/O ──────────────────────────────────────────────────────

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_device_config_playback() -> usize {
    sys::ma_native_sizeof_device_config_playback()
}

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_device_config_capture() -> usize {
    sys::ma_native_sizeof_device_config_capture()
}

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_sizeof_device_config() -> usize {
    sys::ma_native_sizeof_device_config()
}

// ─── Tests ───────────────────────────────────────────────────────────
