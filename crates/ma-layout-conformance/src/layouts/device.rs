use std::mem::offset_of;

use ma_layout_mirror::{
    DeviceConfig, DeviceConfigAlsa, DeviceConfigPulse, DeviceConfigStream, DeviceConfigWasapi,
    DeviceType, Format, PerformanceProfile, ShareMode,
};
use ma_layout_probe::Capability;
use ma_layout_probe::ffi::functions::{
    ma_probe_sizeof_device_config, ma_probe_sizeof_device_config_capture,
    ma_probe_sizeof_device_config_playback,
};
use ma_layout_probe::ffi::initializers::{
    ma_probe_init_device_config, ma_probe_init_device_config_capture,
    ma_probe_init_device_config_playback,
};
use ma_layout_probe::native::{MaDeviceConfig, MaDeviceConfigCapture, MaDeviceConfigPlayback};

use crate::check::{FieldCheck, MirrorLayout, Sentinel};
use crate::field;

fn stream_checks(format: Format, channels: u64) -> Vec<FieldCheck> {
    type M = DeviceConfigStream;
    vec![
        field!(M, device_id, Sentinel::Null),
        field!(M, format, Sentinel::variant(format)),
        field!(M, channels, Sentinel::Uint(channels)),
        field!(M, share_mode, Sentinel::variant(ShareMode::Exclusive)),
    ]
}

pub struct DeviceConfigPlaybackLayout;

impl MirrorLayout for DeviceConfigPlaybackLayout {
    type Native = MaDeviceConfigPlayback;
    type Mirror = DeviceConfigStream;

    const NAME: &'static str = "device_config_playback";
    const CAPABILITY: Option<Capability> = Some(Capability::DeviceIo);

    fn native_size() -> usize {
        ma_probe_sizeof_device_config_playback()
    }

    unsafe fn native_init(target: *mut MaDeviceConfigPlayback) {
        ma_probe_init_device_config_playback(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        stream_checks(Format::S16, 6)
    }
}

pub struct DeviceConfigCaptureLayout;

impl MirrorLayout for DeviceConfigCaptureLayout {
    type Native = MaDeviceConfigCapture;
    type Mirror = DeviceConfigStream;

    const NAME: &'static str = "device_config_capture";
    const CAPABILITY: Option<Capability> = Some(Capability::DeviceIo);

    fn native_size() -> usize {
        ma_probe_sizeof_device_config_capture()
    }

    unsafe fn native_init(target: *mut MaDeviceConfigCapture) {
        ma_probe_init_device_config_capture(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        stream_checks(Format::F32, 4)
    }
}

pub struct DeviceConfigLayout;

impl MirrorLayout for DeviceConfigLayout {
    type Native = MaDeviceConfig;
    type Mirror = DeviceConfig;

    const NAME: &'static str = "device_config";
    const CAPABILITY: Option<Capability> = Some(Capability::DeviceIo);

    fn native_size() -> usize {
        ma_probe_sizeof_device_config()
    }

    unsafe fn native_init(target: *mut MaDeviceConfig) {
        ma_probe_init_device_config(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = DeviceConfig;
        let mut checks = vec![
            field!(M, device_type, Sentinel::variant(DeviceType::Duplex)),
            field!(M, sample_rate, Sentinel::Uint(88200)),
            field!(M, buffer_size_in_frames, Sentinel::Uint(333)),
            field!(M, buffer_size_in_milliseconds, Sentinel::Uint(27)),
            field!(M, periods, Sentinel::Uint(3)),
            field!(
                M,
                performance_profile,
                Sentinel::variant(PerformanceProfile::Conservative)
            ),
            field!(M, no_pre_zeroed_output_buffer, Sentinel::Bool(true)),
            field!(M, no_clip, Sentinel::Bool(false)),
            field!(M, data_callback, Sentinel::Null),
            field!(M, stop_callback, Sentinel::Null),
            field!(M, user_data, Sentinel::Null),
        ];
        checks.extend(FieldCheck::nested(
            "playback",
            offset_of!(M, playback),
            DeviceConfigPlaybackLayout::sentinels(),
        ));
        checks.extend(FieldCheck::nested(
            "capture",
            offset_of!(M, capture),
            DeviceConfigCaptureLayout::sentinels(),
        ));
        checks.extend(FieldCheck::nested(
            "wasapi",
            offset_of!(M, wasapi),
            vec![
                field!(DeviceConfigWasapi, no_auto_convert_src, Sentinel::Bool(true)),
                field!(DeviceConfigWasapi, no_default_quality_src, Sentinel::Bool(false)),
                field!(DeviceConfigWasapi, no_auto_stream_routing, Sentinel::Bool(true)),
                field!(DeviceConfigWasapi, no_hardware_offloading, Sentinel::Bool(false)),
            ],
        ));
        checks.extend(FieldCheck::nested(
            "alsa",
            offset_of!(M, alsa),
            vec![field!(DeviceConfigAlsa, no_mmap, Sentinel::Bool(true))],
        ));
        checks.extend(FieldCheck::nested(
            "pulse",
            offset_of!(M, pulse),
            vec![
                field!(DeviceConfigPulse, stream_name_playback, Sentinel::Null),
                field!(DeviceConfigPulse, stream_name_capture, Sentinel::Null),
            ],
        ));
        checks
    }
}
