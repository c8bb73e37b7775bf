//! Mirrors that disagree with the native layout must be reported with the
//! struct, the member, the expected sentinel and the value found.

use std::ffi::c_void;
use std::mem::offset_of;

use ma_layout_conformance::layouts::FormatConverterConfigLayout;
use ma_layout_conformance::{
    FieldCheck, MirrorLayout, RunConfig, Runner, Sentinel, check, field,
};
use ma_layout_mirror::flags::SimdOptOut;
use ma_layout_mirror::{CEnum, DitherMode, Format, StreamFormat};
use ma_layout_probe::native::MaFormatConverterConfig;

// ─── Swapped members ─────────────────────────────────────────────────

#[allow(dead_code)]
#[repr(C)]
struct SwappedFormats {
    format_out: Format,
    format_in: Format,
    channels: u32,
    stream_format_in: StreamFormat,
    stream_format_out: StreamFormat,
    dither_mode: DitherMode,
    simd: SimdOptOut,
    on_read: *mut c_void,
    on_read_deinterleaved: *mut c_void,
    user_data: *mut c_void,
}

struct SwappedFormatsLayout;

impl MirrorLayout for SwappedFormatsLayout {
    type Native = MaFormatConverterConfig;
    type Mirror = SwappedFormats;

    const NAME: &'static str = "format_converter_config";

    fn native_size() -> usize {
        FormatConverterConfigLayout::native_size()
    }

    unsafe fn native_init(target: *mut MaFormatConverterConfig) {
        unsafe { FormatConverterConfigLayout::native_init(target) }
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = SwappedFormats;
        vec![
            field!(M, format_in, Sentinel::variant(Format::S16)),
            field!(M, format_out, Sentinel::variant(Format::S24)),
            field!(M, channels, Sentinel::Uint(45)),
        ]
    }
}

#[test]
fn swapped_members_are_named() {
    let report = check::<SwappedFormatsLayout>(&RunConfig::default()).unwrap();
    assert!(!report.is_conformant());
    assert!(report.size_matches());
    assert_eq!(report.descriptor, "format_converter_config");
    assert_eq!(report.mismatches.len(), 2);

    let format_in = report.mismatch("format_in").unwrap();
    assert_eq!(format_in.offset, 4);
    assert_eq!(format_in.expected.to_string(), "ma_format_s16 (2)");
    assert_eq!(format_in.observed_value(), "ma_format_s24 (3)");

    let format_out = report.mismatch("format_out").unwrap();
    assert_eq!(format_out.observed_value(), "ma_format_s16 (2)");

    let text = report.to_string();
    assert!(text.contains("format_converter_config: 2 of 3 fields differ"), "{text}");
    assert!(text.contains("format_in (+4, 4 bytes): expected ma_format_s16 (2), observed ma_format_s24 (3)"));
}

#[test]
fn fail_fast_stops_at_first_mismatch() {
    let config = RunConfig {
        fail_fast: true,
        ..RunConfig::default()
    };
    let report = check::<SwappedFormatsLayout>(&config).unwrap();
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].path, "format_in");
}

// ─── Shifted enum ────────────────────────────────────────────────────

/// `ma_dither_mode` declared as if `none` were missing.
#[allow(dead_code)]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShiftedDither {
    Rectangle = 0,
    Triangle = 1,
}

impl CEnum for ShiftedDither {
    const VARIANTS: &'static [Self] = &[Self::Rectangle, Self::Triangle];
    const C_NAME: &'static str = "ma_dither_mode";

    fn raw(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }
}

struct ShiftedDitherLayout;

impl MirrorLayout for ShiftedDitherLayout {
    type Native = MaFormatConverterConfig;
    type Mirror = ma_layout_mirror::FormatConverterConfig;

    const NAME: &'static str = "format_converter_config";

    fn native_size() -> usize {
        FormatConverterConfigLayout::native_size()
    }

    unsafe fn native_init(target: *mut MaFormatConverterConfig) {
        unsafe { FormatConverterConfigLayout::native_init(target) }
    }

    fn sentinels() -> Vec<FieldCheck> {
        type M = ma_layout_mirror::FormatConverterConfig;
        vec![FieldCheck::new(
            "dither_mode",
            offset_of!(M, dither_mode),
            4,
            Sentinel::variant(ShiftedDither::Rectangle),
        )]
    }
}

#[test]
fn shifted_enum_is_reported() {
    let report = check::<ShiftedDitherLayout>(&RunConfig::default()).unwrap();
    let mismatch = report.mismatch("dither_mode").unwrap();
    assert_eq!(mismatch.expected.to_string(), "rectangle (0)");
    assert_eq!(mismatch.observed, Some(1));
    assert_eq!(mismatch.observed_value(), "triangle (1)");
}

// ─── Missing trailing member ─────────────────────────────────────────

#[allow(dead_code)]
#[repr(C)]
struct Truncated {
    format_in: Format,
    format_out: Format,
    channels: u32,
    stream_format_in: StreamFormat,
    stream_format_out: StreamFormat,
    dither_mode: DitherMode,
    simd: SimdOptOut,
    on_read: *mut c_void,
    on_read_deinterleaved: *mut c_void,
}

struct TruncatedLayout;

impl MirrorLayout for TruncatedLayout {
    type Native = MaFormatConverterConfig;
    type Mirror = Truncated;

    const NAME: &'static str = "format_converter_config";

    fn native_size() -> usize {
        FormatConverterConfigLayout::native_size()
    }

    unsafe fn native_init(target: *mut MaFormatConverterConfig) {
        unsafe { FormatConverterConfigLayout::native_init(target) }
    }

    fn sentinels() -> Vec<FieldCheck> {
        vec![field!(Truncated, channels, Sentinel::Uint(45))]
    }
}

#[test]
fn size_mismatch_is_reported() {
    let report = check::<TruncatedLayout>(&RunConfig::default()).unwrap();
    assert!(report.mismatches.is_empty());
    assert!(!report.size_matches());
    assert!(!report.is_conformant());
    assert_eq!(
        report.native_size - report.mirror_size,
        size_of::<*mut c_void>()
    );
    assert!(report.to_string().contains("size: native"));
}

// ─── Wrong flag bit ──────────────────────────────────────────────────

#[test]
fn misplaced_flag_bit_is_reported() {
    type M = ma_layout_mirror::FormatConverterConfig;
    // NO_AVX2 is clear in the profile; claiming it set must fail.
    let checks = FieldCheck::flags("simd", offset_of!(M, simd), [(SimdOptOut::NO_AVX2, true)]);
    assert_eq!(checks.len(), 1);

    struct WrongFlag;
    impl MirrorLayout for WrongFlag {
        type Native = MaFormatConverterConfig;
        type Mirror = M;
        const NAME: &'static str = "format_converter_config";
        fn native_size() -> usize {
            FormatConverterConfigLayout::native_size()
        }
        unsafe fn native_init(target: *mut MaFormatConverterConfig) {
            unsafe { FormatConverterConfigLayout::native_init(target) }
        }
        fn sentinels() -> Vec<FieldCheck> {
            FieldCheck::flags("simd", offset_of!(M, simd), [(SimdOptOut::NO_AVX2, true)])
        }
    }

    let report = check::<WrongFlag>(&RunConfig::default()).unwrap();
    let mismatch = report.mismatch("simd.NO_AVX2").unwrap();
    assert_eq!(mismatch.expected.to_string(), "NO_AVX2 set");
    assert_eq!(mismatch.observed_value(), "NO_AVX2 clear");
}

#[test]
fn conformant_registry_is_unaffected() {
    assert!(Runner::new().run().unwrap().is_success());
}
