use std::ffi::c_void;

use derive_more::Debug;

use crate::base::{ChannelMap, ChannelMixMode, MAX_CHANNELS};
use crate::flags::{RouterFlags, SimdOptOut};

pub type ChannelRouterReadDeinterleavedProc = unsafe extern "C" fn(
    router: *mut ChannelRouter,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

/// `ma_channel_router_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ChannelRouterConfig {
    pub channels_in: u32,
    pub channels_out: u32,
    pub channel_map_in: ChannelMap,
    pub channel_map_out: ChannelMap,
    pub mixing_mode: ChannelMixMode,
    /// Indexed `[in][out]`.
    #[debug(skip)]
    pub weights: [[f32; MAX_CHANNELS]; MAX_CHANNELS],
    pub simd: SimdOptOut,
    pub on_read_deinterleaved: Option<ChannelRouterReadDeinterleavedProc>,
    pub user_data: *mut c_void,
}

/// `ma_channel_router`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ChannelRouter {
    pub config: ChannelRouterConfig,
    pub flags: RouterFlags,
    pub shuffle_table: [u8; MAX_CHANNELS],
}
