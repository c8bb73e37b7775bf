//! C-compatible type definitions for the probe C API.

use crate::capabilities::{Backends, Capabilities};

/// Flat snapshot of [`Capabilities`].
///
/// `backends` holds one bit per backend, in the order
/// wasapi, dsound, winmm, alsa, pulseaudio, jack, coreaudio, sndio, audio4,
/// oss, aaudio, opensl, webaudio, null (bit 0 first). `backends_enabled`
/// uses the same bits and is always a subset of `backends`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaProbeCapabilities {
    pub device_io: bool,
    pub simd_sse2: bool,
    pub simd_avx2: bool,
    pub simd_avx512: bool,
    pub simd_neon: bool,
    pub backends: u32,
    pub backends_enabled: u32,
}

impl MaProbeCapabilities {
    pub fn from_rust(caps: &Capabilities) -> Self {
        Self {
            device_io: caps.device_io,
            simd_sse2: caps.sse2,
            simd_avx2: caps.avx2,
            simd_avx512: caps.avx512,
            simd_neon: caps.neon,
            backends: caps.backends.bits(),
            backends_enabled: caps.enabled_backends.bits(),
        }
    }

    /// Unknown backend bits are dropped.
    pub fn to_rust(&self) -> Capabilities {
        Capabilities {
            device_io: self.device_io,
            sse2: self.simd_sse2,
            avx2: self.simd_avx2,
            avx512: self.simd_avx512,
            neon: self.simd_neon,
            backends: Backends::from_bits_truncate(self.backends),
            enabled_backends: Backends::from_bits_truncate(self.backends_enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_survive_the_c_representation() {
        let caps = Capabilities::current();
        assert_eq!(MaProbeCapabilities::from_rust(&caps).to_rust(), caps);
    }

    #[test]
    fn enabled_bits_are_a_subset() {
        let raw = MaProbeCapabilities::from_rust(&Capabilities::current());
        assert_eq!(raw.backends_enabled & !raw.backends, 0);
    }

    #[test]
    fn unknown_backend_bits_are_dropped() {
        let raw = MaProbeCapabilities {
            device_io: true,
            simd_sse2: false,
            simd_avx2: false,
            simd_avx512: false,
            simd_neon: false,
            backends: Backends::ALSA.bits() | 1 << 31,
            backends_enabled: Backends::ALSA.bits() | 1 << 30,
        };
        assert_eq!(raw.to_rust().backends, Backends::ALSA);
        assert_eq!(raw.to_rust().enabled_backends, Backends::ALSA);
    }
}
