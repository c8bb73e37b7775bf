use std::mem::offset_of;

use ma_layout_mirror::flags::PcmConverterFlags;
use ma_layout_mirror::{
    ChannelMixMode, DitherMode, Format, PcmConverter, PcmConverterConfig, SrcAlgorithm,
};
use ma_layout_probe::ffi::functions::{
    ma_probe_sizeof_pcm_converter, ma_probe_sizeof_pcm_converter_config,
};
use ma_layout_probe::ffi::initializers::{
    ma_probe_init_pcm_converter, ma_probe_init_pcm_converter_config,
};
use ma_layout_probe::native::{MaPcmConverter, MaPcmConverterConfig};

use super::channel_router::ChannelRouterLayout;
use super::format_converter::FormatConverterLayout;
use super::resampling::{SrcConfigSincLayout, SrcLayout, src_config_flags};
use crate::check::{FieldCheck, MirrorLayout, Sentinel};
use crate::field;

pub struct PcmConverterConfigLayout;

impl MirrorLayout for PcmConverterConfigLayout {
    type Native = MaPcmConverterConfig;
    type Mirror = PcmConverterConfig;

    const NAME: &'static str = "pcm_converter_config";

    fn native_size() -> usize {
        ma_probe_sizeof_pcm_converter_config()
    }

    unsafe fn native_init(target: *mut MaPcmConverterConfig) {
        ma_probe_init_pcm_converter_config(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = PcmConverterConfig;
        let mut checks = vec![
            field!(M, format_in, Sentinel::variant(Format::F32)),
            field!(M, channels_in, Sentinel::Uint(6)),
            field!(M, sample_rate_in, Sentinel::Uint(22050)),
            field!(M, format_out, Sentinel::variant(Format::S32)),
            field!(M, channels_out, Sentinel::Uint(2)),
            field!(M, sample_rate_out, Sentinel::Uint(96000)),
            field!(M, channel_mix_mode, Sentinel::variant(ChannelMixMode::Simple)),
            field!(M, dither_mode, Sentinel::variant(DitherMode::Triangle)),
            field!(M, src_algorithm, Sentinel::variant(SrcAlgorithm::Sinc)),
            field!(M, allow_dynamic_sample_rate, Sentinel::Bool(true)),
            field!(M, on_read, Sentinel::Null),
            field!(M, user_data, Sentinel::Null),
        ];
        checks.extend(src_config_flags(offset_of!(M, flags), false));
        checks.extend(FieldCheck::nested(
            "algorithm_config.sinc",
            offset_of!(M, algorithm_config),
            SrcConfigSincLayout::sentinels(),
        ));
        checks
    }
}

/// Every embedded stage is checked with its standalone table.
pub struct PcmConverterLayout;

impl MirrorLayout for PcmConverterLayout {
    type Native = MaPcmConverter;
    type Mirror = PcmConverter;

    const NAME: &'static str = "pcm_converter";

    fn native_size() -> usize {
        ma_probe_sizeof_pcm_converter()
    }

    unsafe fn native_init(target: *mut MaPcmConverter) {
        ma_probe_init_pcm_converter(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = PcmConverter;
        let mut checks = vec![
            field!(M, on_read, Sentinel::Null),
            field!(M, user_data, Sentinel::Null),
        ];
        checks.extend(FieldCheck::nested(
            "format_converter_in",
            offset_of!(M, format_converter_in),
            FormatConverterLayout::sentinels(),
        ));
        checks.extend(FieldCheck::nested(
            "format_converter_out",
            offset_of!(M, format_converter_out),
            FormatConverterLayout::sentinels(),
        ));
        checks.extend(FieldCheck::nested(
            "channel_router",
            offset_of!(M, channel_router),
            ChannelRouterLayout::sentinels(),
        ));
        checks.extend(FieldCheck::nested(
            "src",
            offset_of!(M, src),
            SrcLayout::sentinels(),
        ));
        checks.extend(FieldCheck::flags(
            "flags",
            offset_of!(M, flags),
            [
                (PcmConverterFlags::DYNAMIC_SAMPLE_RATE_ALLOWED, true),
                (PcmConverterFlags::PRE_FORMAT_CONVERSION_REQUIRED, true),
                (PcmConverterFlags::POST_FORMAT_CONVERSION_REQUIRED, false),
                (PcmConverterFlags::CHANNEL_ROUTING_REQUIRED, true),
                (PcmConverterFlags::SRC_REQUIRED, true),
                (PcmConverterFlags::CHANNEL_ROUTING_AT_START, false),
                (PcmConverterFlags::PASSTHROUGH, false),
            ],
        ));
        checks
    }
}
