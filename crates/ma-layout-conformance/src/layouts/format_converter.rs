use std::mem::offset_of;

use ma_layout_mirror::flags::{SimdOptOut, SimdUsage};
use ma_layout_mirror::{DitherMode, Format, FormatConverter, FormatConverterConfig, StreamFormat};
use ma_layout_probe::ffi::functions::{
    ma_probe_sizeof_format_converter, ma_probe_sizeof_format_converter_config,
};
use ma_layout_probe::ffi::initializers::{
    ma_probe_init_format_converter, ma_probe_init_format_converter_config,
};
use ma_layout_probe::native::{MaFormatConverter, MaFormatConverterConfig};

use super::{SIMD_IN_USE, SIMD_OPT_OUT, simd_profile};
use crate::check::{FieldCheck, MirrorLayout, Sentinel};
use crate::field;

pub struct FormatConverterConfigLayout;

impl MirrorLayout for FormatConverterConfigLayout {
    type Native = MaFormatConverterConfig;
    type Mirror = FormatConverterConfig;

    const NAME: &'static str = "format_converter_config";

    fn native_size() -> usize {
        ma_probe_sizeof_format_converter_config()
    }

    unsafe fn native_init(target: *mut MaFormatConverterConfig) {
        ma_probe_init_format_converter_config(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = FormatConverterConfig;
        let mut checks = vec![
            field!(M, format_in, Sentinel::variant(Format::S16)),
            field!(M, format_out, Sentinel::variant(Format::S24)),
            field!(M, channels, Sentinel::Uint(45)),
            field!(M, stream_format_in, Sentinel::variant(StreamFormat::Pcm)),
            field!(M, stream_format_out, Sentinel::variant(StreamFormat::Pcm)),
            field!(M, dither_mode, Sentinel::variant(DitherMode::Rectangle)),
            field!(M, on_read, Sentinel::Null),
            field!(M, on_read_deinterleaved, Sentinel::Null),
            field!(M, user_data, Sentinel::Null),
        ];
        checks.extend(FieldCheck::flags(
            "simd",
            offset_of!(M, simd),
            simd_profile(
                [
                    SimdOptOut::NO_SSE2,
                    SimdOptOut::NO_AVX2,
                    SimdOptOut::NO_AVX512,
                    SimdOptOut::NO_NEON,
                ],
                SIMD_OPT_OUT,
            ),
        ));
        checks
    }
}

pub struct FormatConverterLayout;

impl MirrorLayout for FormatConverterLayout {
    type Native = MaFormatConverter;
    type Mirror = FormatConverter;

    const NAME: &'static str = "format_converter";

    fn native_size() -> usize {
        ma_probe_sizeof_format_converter()
    }

    unsafe fn native_init(target: *mut MaFormatConverter) {
        ma_probe_init_format_converter(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = FormatConverter;
        let mut checks: Vec<_> = FieldCheck::nested(
            "config",
            offset_of!(M, config),
            FormatConverterConfigLayout::sentinels(),
        )
        .collect();
        checks.extend(FieldCheck::flags(
            "simd",
            offset_of!(M, simd),
            simd_profile(
                [
                    SimdUsage::USE_SSE2,
                    SimdUsage::USE_AVX2,
                    SimdUsage::USE_AVX512,
                    SimdUsage::USE_NEON,
                ],
                SIMD_IN_USE,
            ),
        ));
        checks.extend([
            field!(M, on_convert_pcm, Sentinel::Null),
            field!(M, on_interleave_pcm, Sentinel::Null),
            field!(M, on_deinterleave_pcm, Sentinel::Null),
        ]);
        checks
    }
}
