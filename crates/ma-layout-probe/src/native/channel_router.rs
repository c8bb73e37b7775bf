//! `ma_channel_router_config` and `ma_channel_router`.

use std::ffi::c_void;

use derive_more::Debug;

use super::base::{MA_MAX_CHANNELS, MaBitfield32, MaChannel, MaChannelMixMode};

pub type MaChannelRouterReadDeinterleavedProc = unsafe extern "C" fn(
    router: *mut MaChannelRouter,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaChannelRouterConfig {
    pub channels_in: u32,
    pub channels_out: u32,
    pub channel_map_in: [MaChannel; MA_MAX_CHANNELS],
    pub channel_map_out: [MaChannel; MA_MAX_CHANNELS],
    pub mixing_mode: MaChannelMixMode,
    /// `[in][out]`. Only read when `mixing_mode` is custom weights.
    #[debug(skip)]
    pub weights: [[f32; MA_MAX_CHANNELS]; MA_MAX_CHANNELS],
    /// `noSSE2 : 1`, `noAVX2 : 1`, `noAVX512 : 1`, `noNEON : 1`.
    pub simd_opt_out: MaBitfield32,
    pub on_read_deinterleaved: Option<MaChannelRouterReadDeinterleavedProc>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaChannelRouter {
    pub config: MaChannelRouterConfig,
    /// `isPassthrough`, `isSimpleShuffle`, `isSimpleMonoExpansion`,
    /// `isStereoToMono`, then `useSSE2` .. `useNEON`, one bit each.
    pub bitfields: MaBitfield32,
    pub shuffle_table: [u8; MA_MAX_CHANNELS],
}

impl MaChannelRouter {
    pub const IS_PASSTHROUGH_BIT: u32 = 0;
    pub const IS_SIMPLE_SHUFFLE_BIT: u32 = 1;
    pub const IS_SIMPLE_MONO_EXPANSION_BIT: u32 = 2;
    pub const IS_STEREO_TO_MONO_BIT: u32 = 3;
    /// First of the four `useXXX` bits.
    pub const SIMD_USAGE_SHIFT: u32 = 4;
}
