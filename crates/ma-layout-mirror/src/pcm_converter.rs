//! Full conversion pipeline mirrors.
//!
//! `ma_pcm_converter` embeds every other stage by value: two format
//! converters around a channel router and a resampler, then a run of flags
//! saying which of them a read actually passes through.

use std::ffi::c_void;

use crate::base::{ChannelMap, ChannelMixMode, DitherMode, Format, SrcAlgorithm};
use crate::channel_router::ChannelRouter;
use crate::flags::{PcmConverterFlags, SrcConfigFlags};
use crate::format_converter::FormatConverter;
use crate::resampling::{Src, SrcAlgorithmConfig, SrcConfigSinc};
use crate::Bool32;

pub type PcmConverterReadProc = unsafe extern "C" fn(
    converter: *mut PcmConverter,
    frames_out: *mut c_void,
    frame_count: u32,
    user_data: *mut c_void,
) -> u32;

/// `ma_pcm_converter_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PcmConverterConfig {
    pub format_in: Format,
    pub channels_in: u32,
    pub sample_rate_in: u32,
    pub channel_map_in: ChannelMap,
    pub format_out: Format,
    pub channels_out: u32,
    pub sample_rate_out: u32,
    pub channel_map_out: ChannelMap,
    pub channel_mix_mode: ChannelMixMode,
    pub dither_mode: DitherMode,
    pub src_algorithm: SrcAlgorithm,
    pub allow_dynamic_sample_rate: Bool32,
    pub flags: SrcConfigFlags,
    pub on_read: Option<PcmConverterReadProc>,
    pub user_data: *mut c_void,
    pub algorithm_config: SrcAlgorithmConfig,
}

impl PcmConverterConfig {
    pub fn sinc(&self) -> Option<&SrcConfigSinc> {
        match self.src_algorithm {
            // Safety: `src_algorithm` selects the live union member.
            SrcAlgorithm::Sinc => Some(unsafe { &self.algorithm_config.sinc }),
            SrcAlgorithm::Linear | SrcAlgorithm::None => None,
        }
    }
}

/// `ma_pcm_converter`.
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct PcmConverter {
    pub on_read: Option<PcmConverterReadProc>,
    pub user_data: *mut c_void,
    pub format_converter_in: FormatConverter,
    pub format_converter_out: FormatConverter,
    pub channel_router: ChannelRouter,
    pub src: Src,
    pub flags: PcmConverterFlags,
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;
    use crate::SrcSincWindowFunction;

    fn zeroed_config() -> PcmConverterConfig {
        // Safety: every member has a valid all-zero value.
        unsafe { std::mem::zeroed() }
    }

    #[test]
    fn sinc_follows_src_algorithm() {
        let mut config = zeroed_config();
        config.src_algorithm = SrcAlgorithm::Sinc;
        config.algorithm_config.sinc = SrcConfigSinc {
            window_function: SrcSincWindowFunction::Rectangular,
            window_width: 12,
        };
        assert_eq!(config.sinc().map(|s| s.window_width), Some(12));

        config.src_algorithm = SrcAlgorithm::Linear;
        assert!(config.sinc().is_none());
        config.src_algorithm = SrcAlgorithm::None;
        assert!(config.sinc().is_none());
    }

    #[test]
    fn converter_keeps_the_resampler_aligned() {
        assert_eq!(align_of::<PcmConverter>(), crate::SIMD_ALIGNMENT);
        assert_eq!(offset_of!(PcmConverter, src) % crate::SIMD_ALIGNMENT, 0);
        assert_eq!(offset_of!(PcmConverter, format_converter_in), 2 * size_of::<*mut c_void>());
        assert!(offset_of!(PcmConverter, flags) >= offset_of!(PcmConverter, src) + size_of::<Src>());
    }
}
