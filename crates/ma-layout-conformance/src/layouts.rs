//! [`MirrorLayout`](crate::MirrorLayout) pairings for every descriptor.
//!
//! Each pairing is a unit struct naming the descriptor. The sentinel tables
//! restate the values the probe documents; they are written against the
//! mirror types, so a mirror member at the wrong offset reads the wrong
//! bytes and is reported.

mod channel_router;
mod format_converter;
mod pcm_converter;
mod resampling;

#[cfg(feature = "device-io")]
mod device;

pub use channel_router::{ChannelRouterConfigLayout, ChannelRouterLayout};
pub use format_converter::{FormatConverterConfigLayout, FormatConverterLayout};
pub use pcm_converter::{PcmConverterConfigLayout, PcmConverterLayout};
pub use resampling::{SrcConfigLayout, SrcConfigSincLayout, SrcLayout};

#[cfg(feature = "device-io")]
pub use device::{DeviceConfigCaptureLayout, DeviceConfigLayout, DeviceConfigPlaybackLayout};

use bitflags::Flags;

/// The SIMD profile shared by every descriptor, in tier order SSE2, AVX2,
/// AVX-512, NEON: the first two allowed and in use, the rest opted out.
pub const SIMD_OPT_OUT: [bool; 4] = [false, false, true, true];
pub const SIMD_IN_USE: [bool; 4] = [true, true, false, false];

/// Pairs four tier flags with a profile.
fn simd_profile<F: Flags<Bits = u32>>(tiers: [F; 4], profile: [bool; 4]) -> [(F, bool); 4] {
    let [a, b, c, d] = tiers;
    [
        (a, profile[0]),
        (b, profile[1]),
        (c, profile[2]),
        (d, profile[3]),
    ]
}
