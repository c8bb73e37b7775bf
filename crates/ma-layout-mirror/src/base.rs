//! Shared scalars, constants and enumerations.

use crate::c_enum;

pub const MAX_CHANNELS: usize = 32;
pub const SRC_INPUT_BUFFER_SIZE_IN_SAMPLES: usize = 256;
pub const SRC_SINC_MAX_WINDOW_WIDTH: usize = 32;
pub const SRC_SINC_LOOKUP_TABLE_RESOLUTION: usize = 8;
pub const SIMD_ALIGNMENT: usize = 64;

/// `ma_bool32`: any non-zero value is true.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bool32(pub u32);

impl Bool32 {
    pub const TRUE: Self = Self(1);
    pub const FALSE: Self = Self(0);

    pub fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool32 {
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }
}

/// `ma_channel`, one channel position.
///
/// Kept as a `u8` newtype rather than an enum: channel maps are arrays that
/// may hold any byte.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Channel(pub u8);

impl Channel {
    pub const NONE: Self = Self(0);
    pub const MONO: Self = Self(1);
    pub const FRONT_LEFT: Self = Self(2);
    pub const FRONT_RIGHT: Self = Self(3);
    pub const FRONT_CENTER: Self = Self(4);
    pub const LFE: Self = Self(5);
    pub const BACK_LEFT: Self = Self(6);
    pub const BACK_RIGHT: Self = Self(7);
    pub const FRONT_LEFT_CENTER: Self = Self(8);
    pub const FRONT_RIGHT_CENTER: Self = Self(9);
    pub const BACK_CENTER: Self = Self(10);
    pub const SIDE_LEFT: Self = Self(11);
    pub const SIDE_RIGHT: Self = Self(12);
    pub const TOP_CENTER: Self = Self(13);
    pub const TOP_FRONT_LEFT: Self = Self(14);
    pub const TOP_FRONT_CENTER: Self = Self(15);
    pub const TOP_FRONT_RIGHT: Self = Self(16);
    pub const TOP_BACK_LEFT: Self = Self(17);
    pub const TOP_BACK_CENTER: Self = Self(18);
    pub const TOP_BACK_RIGHT: Self = Self(19);
    pub const AUX_0: Self = Self(20);
    pub const AUX_31: Self = Self(51);

    /// `MA_CHANNEL_AUX_n` for `n` in `0..32`.
    pub const fn aux(n: u8) -> Option<Self> {
        if n < 32 { Some(Self(Self::AUX_0.0 + n)) } else { None }
    }
}

pub type ChannelMap = [Channel; MAX_CHANNELS];

c_enum! {
    pub enum Format: "ma_format" {
        Unknown = 0 => "ma_format_unknown",
        U8 = 1 => "ma_format_u8",
        S16 = 2 => "ma_format_s16",
        S24 = 3 => "ma_format_s24",
        S32 = 4 => "ma_format_s32",
        F32 = 5 => "ma_format_f32",
    }
}

impl Format {
    /// Bytes per sample, `None` for [`Format::Unknown`].
    pub fn bytes_per_sample(self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            Self::U8 => Some(1),
            Self::S16 => Some(2),
            Self::S24 => Some(3),
            Self::S32 | Self::F32 => Some(4),
        }
    }
}

c_enum! {
    pub enum StreamFormat: "ma_stream_format" {
        Pcm = 0 => "ma_stream_format_pcm",
    }
}

c_enum! {
    pub enum DitherMode: "ma_dither_mode" {
        None = 0 => "ma_dither_mode_none",
        Rectangle = 1 => "ma_dither_mode_rectangle",
        Triangle = 2 => "ma_dither_mode_triangle",
    }
}

c_enum! {
    pub enum ChannelMixMode: "ma_channel_mix_mode" {
        Rectangular = 0 => "ma_channel_mix_mode_rectangular",
        Simple = 1 => "ma_channel_mix_mode_simple",
        CustomWeights = 2 => "ma_channel_mix_mode_custom_weights",
    }
}

c_enum! {
    /// Also the discriminant of the resampler state union.
    pub enum SrcAlgorithm: "ma_src_algorithm" {
        Linear = 0 => "ma_src_algorithm_linear",
        Sinc = 1 => "ma_src_algorithm_sinc",
        None = 2 => "ma_src_algorithm_none",
    }
}

c_enum! {
    pub enum SrcSincWindowFunction: "ma_src_sinc_window_function" {
        Hann = 0 => "ma_src_sinc_window_function_hann",
        Rectangular = 1 => "ma_src_sinc_window_function_rectangular",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CEnum;

    #[test]
    fn enum_lookup_by_raw_value() {
        assert_eq!(Format::from_raw(3), Some(Format::S24));
        assert_eq!(Format::from_raw(6), None);
        assert_eq!(DitherMode::name_of(1), Some("ma_dither_mode_rectangle"));
        assert_eq!(SrcAlgorithm::C_NAME, "ma_src_algorithm");
    }

    #[test]
    fn enums_are_int_sized() {
        assert_eq!(size_of::<Format>(), 4);
        assert_eq!(size_of::<SrcSincWindowFunction>(), 4);
    }

    #[test]
    fn sample_widths() {
        assert_eq!(Format::Unknown.bytes_per_sample(), None);
        assert_eq!(Format::U8.bytes_per_sample(), Some(1));
        assert_eq!(Format::S24.bytes_per_sample(), Some(3));
        assert_eq!(Format::F32.bytes_per_sample(), Format::S32.bytes_per_sample());
    }

    #[test]
    fn aux_channels() {
        assert_eq!(Channel::aux(0), Some(Channel::AUX_0));
        assert_eq!(Channel::aux(31), Some(Channel::AUX_31));
        assert_eq!(Channel::aux(32), None);
    }

    #[test]
    fn bool32_from_bool() {
        assert_eq!(Bool32::from(true), Bool32::TRUE);
        assert!(!Bool32::from(false).get());
        assert!(Bool32(7).get());
    }
}
