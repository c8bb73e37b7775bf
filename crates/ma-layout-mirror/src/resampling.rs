//! Sample-rate converter mirrors.
//!
//! `ma_src` opens with an anonymous union of per-algorithm state that only
//! the resampler's own `config.algorithm` tells apart. The union is kept
//! as-is for layout, and [`Src::state`] is the tagged way to read it.

use std::ffi::c_void;
use std::fmt;

use derive_more::Debug;

use crate::base::{
    MAX_CHANNELS, SRC_INPUT_BUFFER_SIZE_IN_SAMPLES, SRC_SINC_LOOKUP_TABLE_RESOLUTION,
    SRC_SINC_MAX_WINDOW_WIDTH, SrcAlgorithm, SrcSincWindowFunction,
};
use crate::flags::{SrcConfigFlags, SrcFlags};

pub type SrcReadDeinterleavedProc = unsafe extern "C" fn(
    src: *mut Src,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

/// `ma_src_config_sinc`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrcConfigSinc {
    pub window_function: SrcSincWindowFunction,
    pub window_width: u32,
}

/// Per-algorithm configuration; only `sinc` has any.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SrcAlgorithmConfig {
    pub sinc: SrcConfigSinc,
}

impl fmt::Debug for SrcAlgorithmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrcAlgorithmConfig").finish_non_exhaustive()
    }
}

/// `ma_src_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SrcConfig {
    pub sample_rate_in: u32,
    pub sample_rate_out: u32,
    pub channels: u32,
    pub algorithm: SrcAlgorithm,
    pub flags: SrcConfigFlags,
    pub on_read_deinterleaved: Option<SrcReadDeinterleavedProc>,
    pub user_data: *mut c_void,
    pub algorithm_config: SrcAlgorithmConfig,
}

impl SrcConfig {
    /// The sinc settings, present when `algorithm` selects sinc.
    pub fn sinc(&self) -> Option<&SrcConfigSinc> {
        match self.algorithm {
            // Safety: the algorithm field selects the live union member.
            SrcAlgorithm::Sinc => Some(unsafe { &self.algorithm_config.sinc }),
            SrcAlgorithm::Linear | SrcAlgorithm::None => None,
        }
    }
}

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct SrcLinear {
    #[debug(skip)]
    pub input: [[f32; SRC_INPUT_BUFFER_SIZE_IN_SAMPLES]; MAX_CHANNELS],
    pub time_in: f32,
    pub left_over_frames: u32,
}

pub const SRC_SINC_INPUT_LEN: usize =
    SRC_SINC_MAX_WINDOW_WIDTH * 2 + SRC_INPUT_BUFFER_SIZE_IN_SAMPLES;

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct SrcSinc {
    #[debug(skip)]
    pub input: [[f32; SRC_SINC_INPUT_LEN]; MAX_CHANNELS],
    pub time_in: f32,
    pub input_frame_count: u32,
    pub window_pos_in_samples: u32,
    #[debug(skip)]
    pub table: [f32; SRC_SINC_MAX_WINDOW_WIDTH * SRC_SINC_LOOKUP_TABLE_RESOLUTION],
}

#[repr(C, align(64))]
#[derive(Clone, Copy)]
pub union SrcStateUnion {
    pub linear: SrcLinear,
    pub sinc: SrcSinc,
}

impl fmt::Debug for SrcStateUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrcStateUnion").finish_non_exhaustive()
    }
}

/// `ma_src`.
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct Src {
    pub state: SrcStateUnion,
    pub config: SrcConfig,
    pub flags: SrcFlags,
}

/// The live member of [`Src::state`].
#[derive(Debug, Clone, Copy)]
pub enum SrcState<'a> {
    Linear(&'a SrcLinear),
    Sinc(&'a SrcSinc),
    /// `ma_src_algorithm_none` keeps no state.
    Passthrough,
}

impl Src {
    pub fn state(&self) -> SrcState<'_> {
        // Safety: `config.algorithm` selects the live union member.
        match self.config.algorithm {
            SrcAlgorithm::Linear => SrcState::Linear(unsafe { &self.state.linear }),
            SrcAlgorithm::Sinc => SrcState::Sinc(unsafe { &self.state.sinc }),
            SrcAlgorithm::None => SrcState::Passthrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed_src() -> Box<Src> {
        // Safety: every member of `Src` has a valid all-zero value.
        unsafe { Box::new_zeroed().assume_init() }
    }

    #[test]
    fn src_is_simd_aligned() {
        assert_eq!(align_of::<Src>(), crate::SIMD_ALIGNMENT);
        assert_eq!(size_of::<Src>() % crate::SIMD_ALIGNMENT, 0);
    }

    #[test]
    fn state_follows_algorithm() {
        let mut src = zeroed_src();
        assert!(matches!(src.state(), SrcState::Linear(_)));

        src.config.algorithm = SrcAlgorithm::Sinc;
        unsafe { src.state.sinc.input_frame_count = 81 };
        match src.state() {
            SrcState::Sinc(sinc) => assert_eq!(sinc.input_frame_count, 81),
            other => panic!("unexpected state {other:?}"),
        }

        src.config.algorithm = SrcAlgorithm::None;
        assert!(matches!(src.state(), SrcState::Passthrough));
    }

    #[test]
    fn sinc_config_only_with_sinc_algorithm() {
        let mut src = zeroed_src();
        assert!(src.config.sinc().is_none());

        src.config.algorithm = SrcAlgorithm::Sinc;
        src.config.algorithm_config.sinc = SrcConfigSinc {
            window_function: SrcSincWindowFunction::Rectangular,
            window_width: 29,
        };
        assert_eq!(src.config.sinc().map(|s| s.window_width), Some(29));
    }
}
