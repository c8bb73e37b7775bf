//! Sample-rate conversion: `ma_src_config_sinc`, `ma_src_config`, `ma_src`.
//!
//! `ma_src` is aligned to `MA_SIMD_ALIGNMENT` (64) and starts with an
//! anonymous union of per-algorithm state. The live member is selected by
//! `config.algorithm`.

use std::ffi::c_void;
use std::fmt;

use derive_more::Debug;

use super::base::{
    MA_MAX_CHANNELS, MA_SRC_INPUT_BUFFER_SIZE_IN_SAMPLES, MA_SRC_SINC_LOOKUP_TABLE_RESOLUTION,
    MA_SRC_SINC_MAX_WINDOW_WIDTH, MaBitfield32, MaSrcAlgorithm, MaSrcSincWindowFunction,
};

pub type MaSrcReadDeinterleavedProc = unsafe extern "C" fn(
    src: *mut MaSrc,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaSrcConfigSinc {
    pub window_function: MaSrcSincWindowFunction,
    pub window_width: u32,
}

/// The anonymous `union { ma_src_config_sinc sinc; }` trailing the configs.
#[repr(C)]
#[derive(Clone, Copy)]
pub union MaSrcAlgorithmConfig {
    pub sinc: MaSrcConfigSinc,
}

impl fmt::Debug for MaSrcAlgorithmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MaSrcAlgorithmConfig { .. }")
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaSrcConfig {
    pub sample_rate_in: u32,
    pub sample_rate_out: u32,
    pub channels: u32,
    pub algorithm: MaSrcAlgorithm,
    /// `neverConsumeEndOfInput : 1`, then `noSSE2` .. `noNEON`.
    pub bitfields: MaBitfield32,
    pub on_read_deinterleaved: Option<MaSrcReadDeinterleavedProc>,
    pub user_data: *mut c_void,
    pub algorithm_config: MaSrcAlgorithmConfig,
}

impl MaSrcConfig {
    pub const NEVER_CONSUME_END_OF_INPUT_BIT: u32 = 0;
    /// First of the four `noXXX` bits.
    pub const SIMD_OPT_OUT_SHIFT: u32 = 1;
}

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct MaSrcLinear {
    #[debug(skip)]
    pub input: [[f32; MA_SRC_INPUT_BUFFER_SIZE_IN_SAMPLES]; MA_MAX_CHANNELS],
    pub time_in: f32,
    pub left_over_frames: u32,
}

pub const MA_SRC_SINC_INPUT_LEN: usize =
    MA_SRC_SINC_MAX_WINDOW_WIDTH * 2 + MA_SRC_INPUT_BUFFER_SIZE_IN_SAMPLES;

pub const MA_SRC_SINC_TABLE_LEN: usize =
    MA_SRC_SINC_MAX_WINDOW_WIDTH * MA_SRC_SINC_LOOKUP_TABLE_RESOLUTION;

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct MaSrcSinc {
    #[debug(skip)]
    pub input: [[f32; MA_SRC_SINC_INPUT_LEN]; MA_MAX_CHANNELS],
    pub time_in: f32,
    /// Frames in `input`, not counting the first half of the window.
    pub input_frame_count: u32,
    /// Offset into `input`.
    pub window_pos_in_samples: u32,
    #[debug(skip)]
    pub table: [f32; MA_SRC_SINC_TABLE_LEN],
}

#[repr(C, align(64))]
#[derive(Clone, Copy)]
pub union MaSrcState {
    pub linear: MaSrcLinear,
    pub sinc: MaSrcSinc,
}

impl fmt::Debug for MaSrcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MaSrcState { .. }")
    }
}

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct MaSrc {
    pub state: MaSrcState,
    pub config: MaSrcConfig,
    /// `isEndOfInputLoaded : 1`, then `useSSE2` .. `useNEON`.
    pub bitfields: MaBitfield32,
}

impl MaSrc {
    pub const IS_END_OF_INPUT_LOADED_BIT: u32 = 0;
    /// First of the four `useXXX` bits.
    pub const SIMD_USAGE_SHIFT: u32 = 1;
}
