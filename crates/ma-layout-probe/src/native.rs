//! Native struct and enum definitions.
//!
//! The layouts themselves are decided by the C compiler: the build script
//! compiles `c/ma_layout_native.c`, whose size accessors and sentinel
//! initializers are imported in [`sys`]. The `#[repr(C)]` types here are
//! the probe's own typed view of those structs, in the declaration order of
//! the native data-conversion API, so that the exports have typed pointers
//! and the probe's tests can read what C wrote. C bit-field runs
//! (`ma_bool32 x : 1;`) are viewed as a single [`MaBitfield32`].

mod base;
mod channel_router;
mod format_converter;
mod pcm_converter;
mod src;
pub(crate) mod sys;

#[cfg(feature = "device-io")]
mod device;

pub use base::*;
pub use channel_router::*;
pub use format_converter::*;
pub use pcm_converter::*;
pub use src::*;

#[cfg(feature = "device-io")]
pub use device::*;
