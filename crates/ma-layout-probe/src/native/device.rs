//! Device configuration (`ma_device_config`). Only present with device I/O.

use std::ffi::{c_char, c_void};

use super::base::{MA_MAX_CHANNELS, MaBool32, MaChannel, MaFormat};

/// `ma_device_type`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaDeviceType {
    Playback = 1,
    Capture = 2,
    Duplex = 3,
    Loopback = 4,
}

/// `ma_share_mode`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaShareMode {
    Shared = 0,
    Exclusive = 1,
}

/// `ma_performance_profile`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaPerformanceProfile {
    LowLatency = 0,
    Conservative = 1,
}

/// Opaque `ma_device_id`. Its layout depends on the enabled backends and is
/// not mirrored; the config only stores a pointer to it.
#[repr(C)]
pub struct MaDeviceId {
    _private: [u8; 0],
}

/// Opaque `ma_device`.
#[repr(C)]
pub struct MaDevice {
    _private: [u8; 0],
}

pub type MaDeviceCallbackProc = unsafe extern "C" fn(
    device: *mut MaDevice,
    output: *mut c_void,
    input: *const c_void,
    frame_count: u32,
);

pub type MaStopProc = unsafe extern "C" fn(device: *mut MaDevice);

/// The anonymous `playback` member of `ma_device_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfigPlayback {
    pub device_id: *mut MaDeviceId,
    pub format: MaFormat,
    pub channels: u32,
    pub channel_map: [MaChannel; MA_MAX_CHANNELS],
    pub share_mode: MaShareMode,
}

/// The anonymous `capture` member of `ma_device_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfigCapture {
    pub device_id: *mut MaDeviceId,
    pub format: MaFormat,
    pub channels: u32,
    pub channel_map: [MaChannel; MA_MAX_CHANNELS],
    pub share_mode: MaShareMode,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfigWasapi {
    pub no_auto_convert_src: MaBool32,
    pub no_default_quality_src: MaBool32,
    pub no_auto_stream_routing: MaBool32,
    pub no_hardware_offloading: MaBool32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfigAlsa {
    pub no_mmap: MaBool32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfigPulse {
    pub stream_name_playback: *const c_char,
    pub stream_name_capture: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaDeviceConfig {
    pub device_type: MaDeviceType,
    pub sample_rate: u32,
    pub buffer_size_in_frames: u32,
    pub buffer_size_in_milliseconds: u32,
    pub periods: u32,
    pub performance_profile: MaPerformanceProfile,
    pub no_pre_zeroed_output_buffer: MaBool32,
    pub no_clip: MaBool32,
    pub data_callback: Option<MaDeviceCallbackProc>,
    pub stop_callback: Option<MaStopProc>,
    pub user_data: *mut c_void,
    pub playback: MaDeviceConfigPlayback,
    pub capture: MaDeviceConfigCapture,
    pub wasapi: MaDeviceConfigWasapi,
    pub alsa: MaDeviceConfigAlsa,
    pub pulse: MaDeviceConfigPulse,
}
