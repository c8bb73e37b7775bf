//! Sentinel tables and the per-descriptor check.
//!
//! A check allocates one buffer large enough for both views, lets the
//! native probe initialize it, then reads each member at the offset and
//! width the *mirror* declares and compares the raw bits against the
//! documented sentinel. Reads are raw so that a mirror that disagrees with
//! the native layout is reported rather than producing an invalid value.

use std::fmt;

use bitflags::Flags;
use ma_layout_mirror::CEnum;
use ma_layout_probe::Capability;

use crate::buffer::ProbeBuffer;
use crate::config::RunConfig;
use crate::error::ConformanceError;
use crate::report::{ConformanceReport, FieldMismatch};

// ─── Sentinels ───────────────────────────────────────────────────────

/// The value a member must hold after native initialization.
#[derive(Debug, Clone, Copy)]
pub enum Sentinel {
    Uint(u64),
    Enum {
        raw: i32,
        name: &'static str,
        name_of: fn(i32) -> Option<&'static str>,
    },
    /// A whole `ma_bool32`, `1` for true.
    Bool(bool),
    /// One bit of a bit-field run.
    Flag {
        name: &'static str,
        mask: u32,
        set: bool,
    },
    /// Null pointer or absent callback.
    Null,
    /// Compared bit for bit.
    F32(f32),
}

impl Sentinel {
    pub fn variant<E: CEnum>(value: E) -> Self {
        Self::Enum {
            raw: value.raw(),
            name: value.name(),
            name_of: E::name_of,
        }
    }

    /// Expects the single flag `flag` to be `set`.
    pub fn flag<F: Flags<Bits = u32>>(flag: F, set: bool) -> Self {
        let name = flag.iter_names().next().map_or("<unnamed>", |(name, _)| name);
        Self::Flag {
            name,
            mask: flag.bits(),
            set,
        }
    }

    pub fn matches(&self, raw: u64) -> bool {
        match *self {
            Self::Uint(value) => raw == value,
            Self::Enum { raw: value, .. } => raw == u64::from(value as u32),
            Self::Bool(value) => raw == u64::from(value),
            Self::Flag { mask, set, .. } => (raw & u64::from(mask) != 0) == set,
            Self::Null => raw == 0,
            Self::F32(value) => raw == u64::from(value.to_bits()),
        }
    }

    /// Renders raw bits as this sentinel's kind of value.
    pub fn render(&self, raw: u64) -> String {
        match *self {
            Self::Uint(_) => raw.to_string(),
            Self::Enum { name_of, .. } => {
                let value = raw as u32 as i32;
                match name_of(value) {
                    Some(name) => format!("{name} ({value})"),
                    None => format!("{value} (no such enumerator)"),
                }
            }
            Self::Bool(_) => match raw {
                0 => "false".to_string(),
                1 => "true".to_string(),
                other => format!("{other} (not a bool)"),
            },
            Self::Flag { name, mask, .. } => {
                let state = if raw & u64::from(mask) != 0 { "set" } else { "clear" };
                format!("{name} {state}")
            }
            Self::Null => {
                if raw == 0 {
                    "null".to_string()
                } else {
                    format!("{raw:#x}")
                }
            }
            Self::F32(_) => f32::from_bits(raw as u32).to_string(),
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Uint(value) => write!(f, "{value}"),
            Self::Enum { raw, name, .. } => write!(f, "{name} ({raw})"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Flag { name, set, .. } => {
                write!(f, "{name} {}", if set { "set" } else { "clear" })
            }
            Self::Null => f.write_str("null"),
            Self::F32(value) => write!(f, "{value}"),
        }
    }
}

// ─── Field checks ────────────────────────────────────────────────────

/// One member of a mirror paired with its sentinel.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub path: String,
    pub offset: usize,
    pub width: usize,
    pub expected: Sentinel,
}

impl FieldCheck {
    pub fn new(path: impl Into<String>, offset: usize, width: usize, expected: Sentinel) -> Self {
        Self {
            path: path.into(),
            offset,
            width,
            expected,
        }
    }

    /// One check per bit of the run stored at `offset`.
    pub fn flags<F, I>(path: &str, offset: usize, flags: I) -> Vec<Self>
    where
        F: Flags<Bits = u32>,
        I: IntoIterator<Item = (F, bool)>,
    {
        flags
            .into_iter()
            .map(|(flag, set)| {
                let sentinel = Sentinel::flag(flag, set);
                let name = match sentinel {
                    Sentinel::Flag { name, .. } => name,
                    _ => "<unnamed>",
                };
                Self::new(format!("{path}.{name}"), offset, size_of::<F>(), sentinel)
            })
            .collect()
    }

    /// Re-roots checks of an embedded struct at `base` under `prefix`.
    pub fn nested(prefix: &str, base: usize, checks: Vec<Self>) -> impl Iterator<Item = Self> {
        checks.into_iter().map(move |check| Self {
            path: format!("{prefix}.{}", check.path),
            offset: base + check.offset,
            ..check
        })
    }
}

/// Size of the member a projection closure points at.
pub fn width_of<M, F>(_project: fn(&M) -> &F) -> usize {
    size_of::<F>()
}

/// Builds a [`FieldCheck`] for a direct member of a mirror struct.
///
/// ```ignore
/// field!(FormatConverterConfig, channels, Sentinel::Uint(45))
/// ```
#[macro_export]
macro_rules! field {
    ($mirror:ty, $member:ident, $expected:expr) => {
        $crate::FieldCheck::new(
            ::std::stringify!($member),
            ::std::mem::offset_of!($mirror, $member),
            $crate::check::width_of(|m: &$mirror| &m.$member),
            $expected,
        )
    };
}

// ─── Layout pairing ──────────────────────────────────────────────────

/// Pairs a native probe descriptor with its mirror declaration.
pub trait MirrorLayout {
    /// The probe's view of the struct.
    type Native;
    /// The binding's view of the struct.
    type Mirror;

    /// Descriptor name as the probe lists it.
    const NAME: &'static str;
    const CAPABILITY: Option<Capability> = None;

    fn native_size() -> usize;

    /// # Safety
    ///
    /// `target` must be valid for writes of `native_size()` bytes and
    /// aligned for `Native`.
    unsafe fn native_init(target: *mut Self::Native);

    /// Every scalar member of the mirror with its sentinel.
    fn sentinels() -> Vec<FieldCheck>;
}

fn buffer_for<L: MirrorLayout>(fill_byte: u8) -> Result<ProbeBuffer, ConformanceError> {
    let len = L::native_size().max(size_of::<L::Mirror>());
    let align = align_of::<L::Native>().max(align_of::<L::Mirror>());
    ProbeBuffer::filled(len, align, fill_byte)
}

/// Runs the native initializer on a fresh buffer and compares every
/// sentinel through the mirror's declared layout.
pub fn check<L: MirrorLayout>(config: &RunConfig) -> Result<ConformanceReport, ConformanceError> {
    let mut buffer = buffer_for::<L>(config.fill_byte)?;
    // Safety: the buffer is at least `native_size()` bytes and aligned for
    // both views.
    unsafe { L::native_init(buffer.native_ptr::<L::Native>()) };

    let mut report = ConformanceReport::new(L::NAME, L::native_size(), size_of::<L::Mirror>());
    tracing::debug!(
        descriptor = L::NAME,
        native_size = report.native_size,
        mirror_size = report.mirror_size,
        "checking layout"
    );

    if !report.size_matches() {
        tracing::warn!(
            descriptor = L::NAME,
            native_size = report.native_size,
            mirror_size = report.mirror_size,
            "size mismatch"
        );
    }

    for field in L::sentinels() {
        report.fields_checked += 1;
        let observed = buffer.read_raw(field.offset, field.width);
        if observed.is_some_and(|raw| field.expected.matches(raw)) {
            continue;
        }

        let mismatch = FieldMismatch {
            path: field.path,
            offset: field.offset,
            width: field.width,
            expected: field.expected,
            observed,
        };
        tracing::warn!(descriptor = L::NAME, %mismatch, "field mismatch");
        report.mismatches.push(mismatch);

        if config.fail_fast {
            break;
        }
    }

    Ok(report)
}

/// Initializes a buffer `repeats` times and returns its bytes.
pub fn stamp_bytes<L: MirrorLayout>(
    fill_byte: u8,
    repeats: usize,
) -> Result<Vec<u8>, ConformanceError> {
    let mut buffer = buffer_for::<L>(fill_byte)?;
    for _ in 0..repeats {
        // Safety: as in `check`.
        unsafe { L::native_init(buffer.native_ptr::<L::Native>()) };
    }
    Ok(buffer.as_bytes()[..L::native_size()].to_vec())
}

/// Panics with the full report unless `L` conforms.
pub fn assert_conforms<L: MirrorLayout>() {
    let report = match check::<L>(&RunConfig::default()) {
        Ok(report) => report,
        Err(err) => panic!("{}: {err}", L::NAME),
    };
    assert!(report.is_conformant(), "layout mismatch: {report}");
}
