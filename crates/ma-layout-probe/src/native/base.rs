//! Scalar typedefs, constants and enumerations shared by every descriptor.

pub const MA_MAX_CHANNELS: usize = 32;
pub const MA_SRC_INPUT_BUFFER_SIZE_IN_SAMPLES: usize = 256;
pub const MA_SRC_SINC_MAX_WINDOW_WIDTH: usize = 32;
pub const MA_SRC_SINC_LOOKUP_TABLE_RESOLUTION: usize = 8;

/// `ma_bool32`.
pub type MaBool32 = u32;

pub const MA_TRUE: MaBool32 = 1;
pub const MA_FALSE: MaBool32 = 0;

/// `ma_channel` is a `ma_uint8` typedef, not an enum.
pub type MaChannel = u8;

// ─── Bit-fields ──────────────────────────────────────────────────────

/// A run of `ma_bool32 name : 1;` members sharing one 32-bit storage unit.
///
/// Read-only view of what the C compiler packed. Bit `i` is the `i`-th
/// declared member, which is how GCC, Clang and MSVC allocate on
/// little-endian targets; big-endian GCC allocates from the top bit, and
/// the conformance checks are what catch that. Bits past the named members
/// are never written by the C side and keep whatever the storage held.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaBitfield32(pub u32);

impl MaBitfield32 {
    /// Returns the member stored at `bit`.
    pub const fn get(self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }

    /// The four SIMD switches starting at `shift`, packed from bit 0.
    pub const fn simd(self, shift: u32) -> u32 {
        (self.0 >> shift) & 0b1111
    }
}

// ─── Enumerations ────────────────────────────────────────────────────

/// `ma_format`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaFormat {
    Unknown = 0,
    U8 = 1,
    S16 = 2,
    S24 = 3,
    S32 = 4,
    F32 = 5,
}

/// `ma_stream_format`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaStreamFormat {
    Pcm = 0,
}

/// `ma_dither_mode`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaDitherMode {
    None = 0,
    Rectangle = 1,
    Triangle = 2,
}

/// `ma_channel_mix_mode`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaChannelMixMode {
    Rectangular = 0,
    Simple = 1,
    CustomWeights = 2,
}

/// `ma_src_algorithm`. Selects the live member of the resampler state union.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaSrcAlgorithm {
    Linear = 0,
    Sinc = 1,
    None = 2,
}

/// `ma_src_sinc_window_function`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaSrcSincWindowFunction {
    Hann = 0,
    Rectangular = 1,
}
