//! `ma_pcm_converter_config` and `ma_pcm_converter`, the deepest composite:
//! two format converters, a channel router and a resampler.

use std::ffi::c_void;

use super::base::{
    MA_MAX_CHANNELS, MaBitfield32, MaBool32, MaChannel, MaChannelMixMode, MaDitherMode, MaFormat,
    MaSrcAlgorithm,
};
use super::channel_router::MaChannelRouter;
use super::format_converter::MaFormatConverter;
use super::src::{MaSrc, MaSrcAlgorithmConfig};

pub type MaPcmConverterReadProc = unsafe extern "C" fn(
    converter: *mut MaPcmConverter,
    frames_out: *mut c_void,
    frame_count: u32,
    user_data: *mut c_void,
) -> u32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaPcmConverterConfig {
    pub format_in: MaFormat,
    pub channels_in: u32,
    pub sample_rate_in: u32,
    pub channel_map_in: [MaChannel; MA_MAX_CHANNELS],
    pub format_out: MaFormat,
    pub channels_out: u32,
    pub sample_rate_out: u32,
    pub channel_map_out: [MaChannel; MA_MAX_CHANNELS],
    pub channel_mix_mode: MaChannelMixMode,
    pub dither_mode: MaDitherMode,
    /// Selects the live member of `algorithm_config`.
    pub src_algorithm: MaSrcAlgorithm,
    pub allow_dynamic_sample_rate: MaBool32,
    /// `neverConsumeEndOfInput : 1`, then `noSSE2` .. `noNEON`.
    pub bitfields: MaBitfield32,
    pub on_read: Option<MaPcmConverterReadProc>,
    pub user_data: *mut c_void,
    pub algorithm_config: MaSrcAlgorithmConfig,
}

impl MaPcmConverterConfig {
    pub const NEVER_CONSUME_END_OF_INPUT_BIT: u32 = 0;
    pub const SIMD_OPT_OUT_SHIFT: u32 = 1;
}

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct MaPcmConverter {
    pub on_read: Option<MaPcmConverterReadProc>,
    pub user_data: *mut c_void,
    /// Converts input to f32 ahead of routing and resampling.
    pub format_converter_in: MaFormatConverter,
    /// Converts to the requested output format, last in the pipeline.
    pub format_converter_out: MaFormatConverter,
    pub channel_router: MaChannelRouter,
    pub src: MaSrc,
    /// `isDynamicSampleRateAllowed`, `isPreFormatConversionRequired`,
    /// `isPostFormatConversionRequired`, `isChannelRoutingRequired`,
    /// `isSRCRequired`, `isChannelRoutingAtStart`, `isPassthrough`.
    pub bitfields: MaBitfield32,
}

impl MaPcmConverter {
    pub const IS_DYNAMIC_SAMPLE_RATE_ALLOWED_BIT: u32 = 0;
    pub const IS_PRE_FORMAT_CONVERSION_REQUIRED_BIT: u32 = 1;
    pub const IS_POST_FORMAT_CONVERSION_REQUIRED_BIT: u32 = 2;
    pub const IS_CHANNEL_ROUTING_REQUIRED_BIT: u32 = 3;
    pub const IS_SRC_REQUIRED_BIT: u32 = 4;
    pub const IS_CHANNEL_ROUTING_AT_START_BIT: u32 = 5;
    pub const IS_PASSTHROUGH_BIT: u32 = 6;
}
