use std::mem::offset_of;

use ma_layout_mirror::flags::{RouterFlags, SimdOptOut};
use ma_layout_mirror::{ChannelMixMode, ChannelRouter, ChannelRouterConfig};
use ma_layout_probe::ffi::functions::{
    ma_probe_sizeof_channel_router, ma_probe_sizeof_channel_router_config,
};
use ma_layout_probe::ffi::initializers::{
    ma_probe_init_channel_router, ma_probe_init_channel_router_config,
};
use ma_layout_probe::native::{MaChannelRouter, MaChannelRouterConfig};

use super::{SIMD_IN_USE, SIMD_OPT_OUT, simd_profile};
use crate::check::{FieldCheck, MirrorLayout, Sentinel};
use crate::field;

/// Channel maps and the weight matrix are not stamped and not checked.
pub struct ChannelRouterConfigLayout;

impl MirrorLayout for ChannelRouterConfigLayout {
    type Native = MaChannelRouterConfig;
    type Mirror = ChannelRouterConfig;

    const NAME: &'static str = "channel_router_config";

    fn native_size() -> usize {
        ma_probe_sizeof_channel_router_config()
    }

    unsafe fn native_init(target: *mut MaChannelRouterConfig) {
        ma_probe_init_channel_router_config(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = ChannelRouterConfig;
        let mut checks = vec![
            field!(M, channels_in, Sentinel::Uint(5)),
            field!(M, channels_out, Sentinel::Uint(3)),
            field!(M, mixing_mode, Sentinel::variant(ChannelMixMode::Simple)),
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

pub struct ChannelRouterLayout;

impl MirrorLayout for ChannelRouterLayout {
    type Native = MaChannelRouter;
    type Mirror = ChannelRouter;

    const NAME: &'static str = "channel_router";

    fn native_size() -> usize {
        ma_probe_sizeof_channel_router()
    }

    unsafe fn native_init(target: *mut MaChannelRouter) {
        ma_probe_init_channel_router(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = ChannelRouter;
        let mut checks: Vec<_> = FieldCheck::nested(
            "config",
            offset_of!(M, config),
            ChannelRouterConfigLayout::sentinels(),
        )
        .collect();
        checks.extend(FieldCheck::flags(
            "flags",
            offset_of!(M, flags),
            [
                (RouterFlags::PASSTHROUGH, false),
                (RouterFlags::SIMPLE_SHUFFLE, true),
                (RouterFlags::SIMPLE_MONO_EXPANSION, false),
                (RouterFlags::STEREO_TO_MONO, false),
            ],
        ));
        checks.extend(FieldCheck::flags(
            "flags",
            offset_of!(M, flags),
            simd_profile(
                [
                    RouterFlags::USE_SSE2,
                    RouterFlags::USE_AVX2,
                    RouterFlags::USE_AVX512,
                    RouterFlags::USE_NEON,
                ],
                SIMD_IN_USE,
            ),
        ));
        checks
    }
}
