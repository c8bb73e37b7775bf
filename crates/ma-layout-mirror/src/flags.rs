//! Bit-field runs.
//!
//! Each `struct { ma_bool32 a : 1; ma_bool32 b : 1; ... }` run shares one
//! 32-bit storage unit with the first member in bit 0, so a run maps onto a
//! transparent `u32` flag set. Bits not named here are padding and carry no
//! meaning.

use bitflags::bitflags;

bitflags! {
    /// `noSSE2`, `noAVX2`, `noAVX512`, `noNEON` on a configuration.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SimdOptOut: u32 {
        const NO_SSE2 = 1 << 0;
        const NO_AVX2 = 1 << 1;
        const NO_AVX512 = 1 << 2;
        const NO_NEON = 1 << 3;
    }
}

bitflags! {
    /// `useSSE2`, `useAVX2`, `useAVX512`, `useNEON` on a runtime object.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SimdUsage: u32 {
        const USE_SSE2 = 1 << 0;
        const USE_AVX2 = 1 << 1;
        const USE_AVX512 = 1 << 2;
        const USE_NEON = 1 << 3;
    }
}

impl SimdUsage {
    /// Tiers that may be in use under `opt_out`.
    pub fn allowed_by(opt_out: SimdOptOut) -> Self {
        Self::from_bits_truncate(!opt_out.bits())
    }
}

bitflags! {
    /// `ma_channel_router` state bits followed by its SIMD usage.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RouterFlags: u32 {
        const PASSTHROUGH = 1 << 0;
        const SIMPLE_SHUFFLE = 1 << 1;
        const SIMPLE_MONO_EXPANSION = 1 << 2;
        const STEREO_TO_MONO = 1 << 3;
        const USE_SSE2 = 1 << 4;
        const USE_AVX2 = 1 << 5;
        const USE_AVX512 = 1 << 6;
        const USE_NEON = 1 << 7;
    }
}

bitflags! {
    /// Shared by `ma_src_config` and `ma_pcm_converter_config`.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SrcConfigFlags: u32 {
        const NEVER_CONSUME_END_OF_INPUT = 1 << 0;
        const NO_SSE2 = 1 << 1;
        const NO_AVX2 = 1 << 2;
        const NO_AVX512 = 1 << 3;
        const NO_NEON = 1 << 4;
    }
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SrcFlags: u32 {
        const END_OF_INPUT_LOADED = 1 << 0;
        const USE_SSE2 = 1 << 1;
        const USE_AVX2 = 1 << 2;
        const USE_AVX512 = 1 << 3;
        const USE_NEON = 1 << 4;
    }
}

bitflags! {
    /// The stage selection run closing `ma_pcm_converter`.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PcmConverterFlags: u32 {
        const DYNAMIC_SAMPLE_RATE_ALLOWED = 1 << 0;
        const PRE_FORMAT_CONVERSION_REQUIRED = 1 << 1;
        const POST_FORMAT_CONVERSION_REQUIRED = 1 << 2;
        const CHANNEL_ROUTING_REQUIRED = 1 << 3;
        const SRC_REQUIRED = 1 << 4;
        const CHANNEL_ROUTING_AT_START = 1 << 5;
        const PASSTHROUGH = 1 << 6;
    }
}

impl RouterFlags {
    pub fn simd_usage(self) -> SimdUsage {
        SimdUsage::from_bits_truncate(self.bits() >> 4)
    }
}

impl SrcConfigFlags {
    pub fn simd_opt_out(self) -> SimdOptOut {
        SimdOptOut::from_bits_truncate(self.bits() >> 1)
    }
}

impl SrcFlags {
    pub fn simd_usage(self) -> SimdUsage {
        SimdUsage::from_bits_truncate(self.bits() >> 1)
    }
}
