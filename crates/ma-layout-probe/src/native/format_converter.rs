//! `ma_format_converter_config` and `ma_format_converter`.

use std::ffi::c_void;

use super::base::{MaBitfield32, MaDitherMode, MaFormat, MaStreamFormat};

pub type MaFormatConverterReadProc = unsafe extern "C" fn(
    converter: *mut MaFormatConverter,
    frame_count: u32,
    frames_out: *mut c_void,
    user_data: *mut c_void,
) -> u32;

pub type MaFormatConverterReadDeinterleavedProc = unsafe extern "C" fn(
    converter: *mut MaFormatConverter,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

pub type MaConvertPcmProc = unsafe extern "C" fn(
    dst: *mut c_void,
    src: *const c_void,
    count: u64,
    dither_mode: MaDitherMode,
);

pub type MaInterleavePcmProc = unsafe extern "C" fn(
    dst: *mut c_void,
    src: *mut *const c_void,
    frame_count: u64,
    channels: u32,
);

pub type MaDeinterleavePcmProc = unsafe extern "C" fn(
    dst: *mut *mut c_void,
    src: *const c_void,
    frame_count: u64,
    channels: u32,
);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaFormatConverterConfig {
    pub format_in: MaFormat,
    pub format_out: MaFormat,
    pub channels: u32,
    pub stream_format_in: MaStreamFormat,
    pub stream_format_out: MaStreamFormat,
    pub dither_mode: MaDitherMode,
    /// `noSSE2 : 1`, `noAVX2 : 1`, `noAVX512 : 1`, `noNEON : 1`.
    pub simd_opt_out: MaBitfield32,
    pub on_read: Option<MaFormatConverterReadProc>,
    pub on_read_deinterleaved: Option<MaFormatConverterReadDeinterleavedProc>,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MaFormatConverter {
    pub config: MaFormatConverterConfig,
    /// `useSSE2 : 1`, `useAVX2 : 1`, `useAVX512 : 1`, `useNEON : 1`.
    pub simd_usage: MaBitfield32,
    pub on_convert_pcm: Option<MaConvertPcmProc>,
    pub on_interleave_pcm: Option<MaInterleavePcmProc>,
    pub on_deinterleave_pcm: Option<MaDeinterleavePcmProc>,
}
