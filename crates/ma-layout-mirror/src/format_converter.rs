use std::ffi::c_void;

use crate::base::{DitherMode, Format, StreamFormat};
use crate::flags::{SimdOptOut, SimdUsage};

pub type FormatConverterReadProc = unsafe extern "C" fn(
    converter: *mut FormatConverter,
    frame_count: u32,
    frames_out: *mut c_void,
    user_data: *mut c_void,
) -> u32;

pub type FormatConverterReadDeinterleavedProc = unsafe extern "C" fn(
    converter: *mut FormatConverter,
    frame_count: u32,
    samples_out: *mut *mut c_void,
    user_data: *mut c_void,
) -> u32;

pub type ConvertPcmProc =
    unsafe extern "C" fn(dst: *mut c_void, src: *const c_void, count: u64, dither: DitherMode);

pub type InterleavePcmProc =
    unsafe extern "C" fn(dst: *mut c_void, src: *mut *const c_void, frames: u64, channels: u32);

pub type DeinterleavePcmProc =
    unsafe extern "C" fn(dst: *mut *mut c_void, src: *const c_void, frames: u64, channels: u32);

/// `ma_format_converter_config`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FormatConverterConfig {
    pub format_in: Format,
    pub format_out: Format,
    pub channels: u32,
    pub stream_format_in: StreamFormat,
    pub stream_format_out: StreamFormat,
    pub dither_mode: DitherMode,
    pub simd: SimdOptOut,
    pub on_read: Option<FormatConverterReadProc>,
    pub on_read_deinterleaved: Option<FormatConverterReadDeinterleavedProc>,
    pub user_data: *mut c_void,
}

/// `ma_format_converter`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FormatConverter {
    pub config: FormatConverterConfig,
    pub simd: SimdUsage,
    pub on_convert_pcm: Option<ConvertPcmProc>,
    pub on_interleave_pcm: Option<InterleavePcmProc>,
    pub on_deinterleave_pcm: Option<DeinterleavePcmProc>,
}
