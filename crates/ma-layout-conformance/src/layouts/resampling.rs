use std::mem::offset_of;

use ma_layout_mirror::flags::{SrcConfigFlags, SrcFlags};
use ma_layout_mirror::{Src, SrcAlgorithm, SrcConfig, SrcConfigSinc, SrcSinc, SrcSincWindowFunction};
use ma_layout_probe::ffi::functions::{
    ma_probe_sizeof_src, ma_probe_sizeof_src_config, ma_probe_sizeof_src_config_sinc,
};
use ma_layout_probe::ffi::initializers::{
    ma_probe_init_src, ma_probe_init_src_config, ma_probe_init_src_config_sinc,
};
use ma_layout_probe::native::{MaSrc, MaSrcConfig, MaSrcConfigSinc};

use super::{SIMD_IN_USE, SIMD_OPT_OUT, simd_profile};
use crate::check::{FieldCheck, MirrorLayout, Sentinel};
use crate::field;

pub struct SrcConfigSincLayout;

impl MirrorLayout for SrcConfigSincLayout {
    type Native = MaSrcConfigSinc;
    type Mirror = SrcConfigSinc;

    const NAME: &'static str = "src_config_sinc";

    fn native_size() -> usize {
        ma_probe_sizeof_src_config_sinc()
    }

    unsafe fn native_init(target: *mut MaSrcConfigSinc) {
        ma_probe_init_src_config_sinc(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = SrcConfigSinc;
        vec![
            field!(M, window_function, Sentinel::variant(SrcSincWindowFunction::Rectangular)),
            field!(M, window_width, Sentinel::Uint(29)),
        ]
    }
}

pub struct SrcConfigLayout;

impl MirrorLayout for SrcConfigLayout {
    type Native = MaSrcConfig;
    type Mirror = SrcConfig;

    const NAME: &'static str = "src_config";

    fn native_size() -> usize {
        ma_probe_sizeof_src_config()
    }

    unsafe fn native_init(target: *mut MaSrcConfig) {
        ma_probe_init_src_config(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = SrcConfig;
        let mut checks = vec![
            field!(M, sample_rate_in, Sentinel::Uint(44100)),
            field!(M, sample_rate_out, Sentinel::Uint(48000)),
            field!(M, channels, Sentinel::Uint(7)),
            field!(M, algorithm, Sentinel::variant(SrcAlgorithm::Sinc)),
            field!(M, on_read_deinterleaved, Sentinel::Null),
            field!(M, user_data, Sentinel::Null),
        ];
        checks.extend(src_config_flags(offset_of!(M, flags), true));
        // Union members all start at the union's own offset.
        checks.extend(FieldCheck::nested(
            "algorithm_config.sinc",
            offset_of!(M, algorithm_config),
            SrcConfigSincLayout::sentinels(),
        ));
        checks
    }
}

/// `neverConsumeEndOfInput` followed by the opt-out profile.
pub(super) fn src_config_flags(offset: usize, never_consume: bool) -> Vec<FieldCheck> {
    let mut checks = FieldCheck::flags(
        "flags",
        offset,
        [(SrcConfigFlags::NEVER_CONSUME_END_OF_INPUT, never_consume)],
    );
    checks.extend(FieldCheck::flags(
        "flags",
        offset,
        simd_profile(
            [
                SrcConfigFlags::NO_SSE2,
                SrcConfigFlags::NO_AVX2,
                SrcConfigFlags::NO_AVX512,
                SrcConfigFlags::NO_NEON,
            ],
            SIMD_OPT_OUT,
        ),
    ));
    checks
}

/// Only the state member `config.algorithm` selects is stamped, and never
/// its sample buffers.
pub struct SrcLayout;

impl MirrorLayout for SrcLayout {
    type Native = MaSrc;
    type Mirror = Src;

    const NAME: &'static str = "src";

    fn native_size() -> usize {
        ma_probe_sizeof_src()
    }

    unsafe fn native_init(target: *mut MaSrc) {
        ma_probe_init_src(target);
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = Src;
        let mut checks: Vec<_> =
            FieldCheck::nested("config", offset_of!(M, config), SrcConfigLayout::sentinels())
                .collect();
        checks.extend(FieldCheck::nested(
            "state.sinc",
            offset_of!(M, state),
            vec![
                field!(SrcSinc, time_in, Sentinel::F32(0.375)),
                field!(SrcSinc, input_frame_count, Sentinel::Uint(81)),
                field!(SrcSinc, window_pos_in_samples, Sentinel::Uint(17)),
            ],
        ));
        checks.extend(FieldCheck::flags(
            "flags",
            offset_of!(M, flags),
            [(SrcFlags::END_OF_INPUT_LOADED, true)],
        ));
        checks.extend(FieldCheck::flags(
            "flags",
            offset_of!(M, flags),
            simd_profile(
                [
                    SrcFlags::USE_SSE2,
                    SrcFlags::USE_AVX2,
                    SrcFlags::USE_AVX512,
                    SrcFlags::USE_NEON,
                ],
                SIMD_IN_USE,
            ),
        ));
        checks
    }
}
