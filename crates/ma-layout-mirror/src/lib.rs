//! Rust declarations of the miniaudio data-conversion structs.
//!
//! These types are written from the public headers, independently of the
//! native probe. They are what a binding would hand to the native library,
//! so their layout must agree with the platform C ABI field for field. The
//! conformance crate proves that it does.
//!
//! Conventions:
//!
//! - C enums become `#[repr(i32)]` Rust enums implementing [`CEnum`];
//! - `ma_bool32` is [`Bool32`], never `bool`;
//! - runs of `ma_bool32 x : 1;` bit-fields become one `bitflags` word per
//!   run (see [`flags`]);
//! - anonymous unions become named `#[repr(C)]` unions with a safe, tagged
//!   accessor on the owning struct.

mod base;
pub mod flags;

mod channel_router;
mod format_converter;
mod pcm_converter;
mod resampling;

#[cfg(feature = "device-io")]
mod device;

pub use base::*;
pub use channel_router::*;
pub use format_converter::*;
pub use pcm_converter::*;
pub use resampling::*;

#[cfg(feature = "device-io")]
pub use device::*;

/// A C enumeration mirrored as a Rust enum.
pub trait CEnum: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The C type name.
    const C_NAME: &'static str;

    fn raw(self) -> i32;

    /// The C enumerator name, e.g. `ma_format_s16`.
    fn name(self) -> &'static str;

    fn from_raw(raw: i32) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.raw() == raw)
    }

    /// Names `raw` if it is a known enumerator.
    fn name_of(raw: i32) -> Option<&'static str> {
        Self::from_raw(raw).map(Self::name)
    }
}

/// Declares a `#[repr(i32)]` enum and its [`CEnum`] impl.
macro_rules! c_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $c_name:literal {
            $($variant:ident = $value:literal => $c_variant:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant = $value,)*
        }

        impl $crate::CEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)*];
            const C_NAME: &'static str = $c_name;

            fn raw(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $c_variant,)*
                }
            }
        }
    };
}

pub(crate) use c_enum;
