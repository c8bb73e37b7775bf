//! Device configuration mirrors, present with the `device-io` feature.

use std::ffi::{c_char, c_void};

use crate::base::{Bool32, ChannelMap, Format};
use crate::c_enum;

c_enum! {
    pub enum DeviceType: "ma_device_type" {
        Playback = 1 => "ma_device_type_playback",
        Capture = 2 => "ma_device_type_capture",
        Duplex = 3 => "ma_device_type_duplex",
        Loopback = 4 => "ma_device_type_loopback",
    }
}

c_enum! {
    pub enum ShareMode: "ma_share_mode" {
        Shared = 0 => "ma_share_mode_shared",
        Exclusive = 1 => "ma_share_mode_exclusive",
    }
}

c_enum! {
    pub enum PerformanceProfile: "ma_performance_profile" {
        LowLatency = 0 => "ma_performance_profile_low_latency",
        Conservative = 1 => "ma_performance_profile_conservative",
    }
}

/// Stands in for `ma_device_id`, which is only ever referenced by pointer.
#[repr(C)]
pub struct DeviceId {
    _opaque: [u8; 0],
}

pub type DeviceCallbackProc = unsafe extern "C" fn(
    device: *mut c_void,
    output: *mut c_void,
    input: *const c_void,
    frame_count: u32,
);

pub type StopProc = unsafe extern "C" fn(device: *mut c_void);

/// One direction of a device: the `playback` and `capture` members share
/// this shape.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfigStream {
    pub device_id: *mut DeviceId,
    pub format: Format,
    pub channels: u32,
    pub channel_map: ChannelMap,
    pub share_mode: ShareMode,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfigWasapi {
    pub no_auto_convert_src: Bool32,
    pub no_default_quality_src: Bool32,
    pub no_auto_stream_routing: Bool32,
    pub no_hardware_offloading: Bool32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfigAlsa {
    pub no_mmap: Bool32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfigPulse {
    pub stream_name_playback: *const c_char,
    pub stream_name_capture: *const c_char,
}

/// `ma_device_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DeviceConfig {
    pub device_type: DeviceType,
    pub sample_rate: u32,
    pub buffer_size_in_frames: u32,
    pub buffer_size_in_milliseconds: u32,
    pub periods: u32,
    pub performance_profile: PerformanceProfile,
    pub no_pre_zeroed_output_buffer: Bool32,
    pub no_clip: Bool32,
    pub data_callback: Option<DeviceCallbackProc>,
    pub stop_callback: Option<StopProc>,
    pub user_data: *mut c_void,
    pub playback: DeviceConfigStream,
    pub capture: DeviceConfigStream,
    pub wasapi: DeviceConfigWasapi,
    pub alsa: DeviceConfigAlsa,
    pub pulse: DeviceConfigPulse,
}
