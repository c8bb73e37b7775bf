//! Build-time capability set.
//!
//! The build script resolves which SIMD tiers and audio backends the native
//! library would compile in for the current target and Cargo features, and
//! emits one `cfg` per item. A backend is enabled when the target supports it
//! and no `no-<backend>` feature opts it out. This module turns those `cfg`s into a value
//! that tests and foreign callers can query. It never changes at run time.

use bitflags::bitflags;

/// SIMD instruction-set tiers the native structs carry switches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdTier {
    Sse2,
    Avx2,
    Avx512,
    Neon,
}

impl SimdTier {
    /// Every tier, in the order the native bit-field runs declare them.
    pub const ALL: [SimdTier; 4] = [Self::Sse2, Self::Avx2, Self::Avx512, Self::Neon];

    /// Returns the name of this tier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sse2 => "sse2",
            Self::Avx2 => "avx2",
            Self::Avx512 => "avx512",
            Self::Neon => "neon",
        }
    }

    /// Whether the target enables this tier and the build did not opt out.
    pub const fn enabled(self) -> bool {
        match self {
            Self::Sse2 => cfg!(ma_simd_sse2),
            Self::Avx2 => cfg!(ma_simd_avx2),
            Self::Avx512 => cfg!(ma_simd_avx512),
            Self::Neon => cfg!(ma_simd_neon),
        }
    }
}

bitflags! {
    /// Audio backends the native library would support on this target.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Backends: u32 {
        const WASAPI = 1 << 0;
        const DSOUND = 1 << 1;
        const WINMM = 1 << 2;
        const ALSA = 1 << 3;
        const PULSEAUDIO = 1 << 4;
        const JACK = 1 << 5;
        const COREAUDIO = 1 << 6;
        const SNDIO = 1 << 7;
        const AUDIO4 = 1 << 8;
        const OSS = 1 << 9;
        const AAUDIO = 1 << 10;
        const OPENSL = 1 << 11;
        const WEBAUDIO = 1 << 12;
        const NULL = 1 << 13;
    }
}

const fn backend_if(flag: Backends, supported: bool) -> Backends {
    if supported { flag } else { Backends::empty() }
}

impl Backends {
    /// The backend set resolved by the build script.
    pub const fn supported() -> Self {
        Self::empty()
            .union(backend_if(Self::WASAPI, cfg!(ma_support_wasapi)))
            .union(backend_if(Self::DSOUND, cfg!(ma_support_dsound)))
            .union(backend_if(Self::WINMM, cfg!(ma_support_winmm)))
            .union(backend_if(Self::ALSA, cfg!(ma_support_alsa)))
            .union(backend_if(Self::PULSEAUDIO, cfg!(ma_support_pulseaudio)))
            .union(backend_if(Self::JACK, cfg!(ma_support_jack)))
            .union(backend_if(Self::COREAUDIO, cfg!(ma_support_coreaudio)))
            .union(backend_if(Self::SNDIO, cfg!(ma_support_sndio)))
            .union(backend_if(Self::AUDIO4, cfg!(ma_support_audio4)))
            .union(backend_if(Self::OSS, cfg!(ma_support_oss)))
            .union(backend_if(Self::AAUDIO, cfg!(ma_support_aaudio)))
            .union(backend_if(Self::OPENSL, cfg!(ma_support_opensl)))
            .union(backend_if(Self::WEBAUDIO, cfg!(ma_support_webaudio)))
            .union(backend_if(Self::NULL, cfg!(ma_support_null)))
    }

    /// Supported backends left after the `no-<backend>` opt-outs.
    pub const fn enabled() -> Self {
        Self::empty()
            .union(backend_if(Self::WASAPI, cfg!(ma_enable_wasapi)))
            .union(backend_if(Self::DSOUND, cfg!(ma_enable_dsound)))
            .union(backend_if(Self::WINMM, cfg!(ma_enable_winmm)))
            .union(backend_if(Self::ALSA, cfg!(ma_enable_alsa)))
            .union(backend_if(Self::PULSEAUDIO, cfg!(ma_enable_pulseaudio)))
            .union(backend_if(Self::JACK, cfg!(ma_enable_jack)))
            .union(backend_if(Self::COREAUDIO, cfg!(ma_enable_coreaudio)))
            .union(backend_if(Self::SNDIO, cfg!(ma_enable_sndio)))
            .union(backend_if(Self::AUDIO4, cfg!(ma_enable_audio4)))
            .union(backend_if(Self::OSS, cfg!(ma_enable_oss)))
            .union(backend_if(Self::AAUDIO, cfg!(ma_enable_aaudio)))
            .union(backend_if(Self::OPENSL, cfg!(ma_enable_opensl)))
            .union(backend_if(Self::WEBAUDIO, cfg!(ma_enable_webaudio)))
            .union(backend_if(Self::NULL, cfg!(ma_enable_null)))
    }
}

/// A switch that decides whether a group of descriptors exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Device configuration structs (`ma_device_config` and its members).
    DeviceIo,
}

impl Capability {
    pub fn name(self) -> &'static str {
        match self {
            Self::DeviceIo => "device-io",
        }
    }
}

/// The full capability set of this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub device_io: bool,
    pub sse2: bool,
    pub avx2: bool,
    pub avx512: bool,
    pub neon: bool,
    pub backends: Backends,
    pub enabled_backends: Backends,
}

impl Capabilities {
    /// Capabilities compiled into this probe.
    pub const fn current() -> Self {
        Self {
            device_io: cfg!(feature = "device-io"),
            sse2: SimdTier::Sse2.enabled(),
            avx2: SimdTier::Avx2.enabled(),
            avx512: SimdTier::Avx512.enabled(),
            neon: SimdTier::Neon.enabled(),
            backends: Backends::supported(),
            enabled_backends: Backends::enabled(),
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::DeviceIo => self.device_io,
        }
    }

    /// Enabled SIMD tiers in declaration order.
    pub fn simd_tiers(&self) -> Vec<SimdTier> {
        SimdTier::ALL
            .into_iter()
            .filter(|tier| match tier {
                SimdTier::Sse2 => self.sse2,
                SimdTier::Avx2 => self.avx2,
                SimdTier::Avx512 => self.avx512,
                SimdTier::Neon => self.neon,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simd_tiers_match_flags() {
        let caps = Capabilities::current();
        for tier in caps.simd_tiers() {
            assert!(tier.enabled(), "{} listed but not enabled", tier.name());
        }
        assert_eq!(
            caps.simd_tiers().len(),
            SimdTier::ALL.iter().filter(|t| t.enabled()).count()
        );
    }

    #[test]
    fn backends_follow_device_io() {
        let caps = Capabilities::current();
        if caps.device_io {
            // Every target the native library knows falls back to either the
            // null backend or Web Audio.
            assert!(caps.backends.intersects(Backends::NULL | Backends::WEBAUDIO));
        } else {
            assert!(caps.backends.is_empty());
        }
    }

    #[test]
    fn enabled_backends_are_supported() {
        let caps = Capabilities::current();
        assert!(caps.backends.contains(caps.enabled_backends));
    }

    #[cfg(not(feature = "no-null"))]
    #[test]
    fn null_backend_enabled_wherever_supported() {
        let caps = Capabilities::current();
        assert_eq!(
            caps.enabled_backends.contains(Backends::NULL),
            caps.backends.contains(Backends::NULL)
        );
    }

    #[cfg(feature = "no-null")]
    #[test]
    fn opted_out_backend_is_not_enabled() {
        assert!(!Capabilities::current().enabled_backends.contains(Backends::NULL));
    }

    #[test]
    fn neon_and_x86_tiers_are_exclusive() {
        let caps = Capabilities::current();
        assert!(!(caps.neon && (caps.sse2 || caps.avx2 || caps.avx512)));
    }

    #[test]
    fn has_reports_device_io() {
        let caps = Capabilities::current();
        assert_eq!(caps.has(Capability::DeviceIo), cfg!(feature = "device-io"));
        assert_eq!(Capability::DeviceIo.name(), "device-io");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_backends() {
        let caps = Capabilities::current();
        if caps.device_io {
            assert!(caps.backends.contains(
                Backends::ALSA | Backends::PULSEAUDIO | Backends::JACK | Backends::NULL
            ));
            assert!(!caps.backends.contains(Backends::WASAPI));
        }
    }
}
