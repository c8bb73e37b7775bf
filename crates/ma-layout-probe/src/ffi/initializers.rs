//! Exported sentinel initializers.
//!
//! `ma_probe_init_*` stamps every scalar member of the target with a fixed,
//! non-default value so a foreign mirror of the struct can read the same
//! memory back and compare. The writes happen on the C side, through C's
//! own member names, so bit-field placement is whatever the C compiler
//! chose. Composites run the nested initializer for each embedded struct
//! first, then stamp their own members.
//!
//! Rules the sentinels follow:
//!
//! - enum members hold a variant that is neither first nor zero;
//! - integer members are never 0 or 1 and neighbours never repeat;
//! - SIMD switches follow one profile: SSE2 and AVX2 allowed and in use,
//!   AVX-512 and NEON opted out and unused;
//! - callbacks, user data and device ids are null;
//! - arrays (channel maps, weights, shuffle tables, sample buffers) are
//!   left as the caller's storage holds them, and so are the unnamed bits
//!   after a bit-field run;
//! - of a union only the member selected by the owning struct is written.
//!
//! The caller must pass storage that is aligned for the target type and at
//! least `ma_probe_sizeof_*()` bytes long. A null pointer is logged and
//! ignored. The storage may hold any bytes beforehand.

use crate::native::*;

use super::panic_guard::init_guard;

// ─── Format conversion ───────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_format_converter_config(config: *mut MaFormatConverterConfig) {
    init_guard!("ma_probe_init_format_converter_config", config, {
        unsafe { sys::ma_native_init_format_converter_config(config) };
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_format_converter(converter: *mut MaFormatConverter) {
    init_guard!("ma_probe_init_format_converter", converter, {
        unsafe { sys::ma_native_init_format_converter(converter) };
    })
}

// ─── Channel routing ─────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_channel_router_config(config: *mut MaChannelRouterConfig) {
    init_guard!("ma_probe_init_channel_router_config", config, {
        unsafe { sys::ma_native_init_channel_router_config(config) };
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_channel_router(router: *mut MaChannelRouter) {
    init_guard!("ma_probe_init_channel_router", router, {
        unsafe { sys::ma_native_init_channel_router(router) };
    })
}

// ─── Sample-rate conversion ──────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_src_config_sinc(config: *mut MaSrcConfigSinc) {
    init_guard!("ma_probe_init_src_config_sinc", config, {
        unsafe { sys::ma_native_init_src_config_sinc(config) };
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_src_config(config: *mut MaSrcConfig) {
    init_guard!("ma_probe_init_src_config", config, {
        unsafe { sys::ma_native_init_src_config(config) };
    })
}

/// Stamps the config, then the state member its algorithm selects.
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_src(src: *mut MaSrc) {
    init_guard!("ma_probe_init_src", src, {
        unsafe { sys::ma_native_init_src(src) };
    })
}

// ─── PCM conversion ──────────────────────────────────────────────────

#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_pcm_converter_config(config: *mut MaPcmConverterConfig) {
    init_guard!("ma_probe_init_pcm_converter_config", config, {
        unsafe { sys::ma_native_init_pcm_converter_config(config) };
    })
}

/// Runs the format converter, channel router and resampler initializers
/// on the embedded stages before stamping the converter's own members.
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_pcm_converter(converter: *mut MaPcmConverter) {
    init_guard!("ma_probe_init_pcm_converter", converter, {
        unsafe { sys::ma_native_init_pcm_converter(converter) };
    })
}

// ─── Device I/O ──────────────────────────────────────────────────────

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_device_config_playback(config: *mut MaDeviceConfigPlayback) {
    init_guard!("ma_probe_init_device_config_playback", config, {
        unsafe { sys::ma_native_init_device_config_playback(config) };
    })
}

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_device_config_capture(config: *mut MaDeviceConfigCapture) {
    init_guard!("ma_probe_init_device_config_capture", config, {
        unsafe { sys::ma_native_init_device_config_capture(config) };
    })
}

#[cfg(feature = "device-io")]
#[unsafe(no_mangle)]
pub extern "C" fn ma_probe_init_device_config(config: *mut MaDeviceConfig) {
    init_guard!("ma_probe_init_device_config", config, {
        unsafe { sys::ma_native_init_device_config(config) };
    })
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::mem::{MaybeUninit, offset_of};
    use std::ptr;

    use test_strategy::proptest;

    use super::*;

    /// Storage for one `T` whose every byte starts as `fill`.
    fn filled<T>(fill: u8) -> Box<MaybeUninit<T>> {
        let mut storage = Box::<T>::new_uninit();
        unsafe { storage.as_mut_ptr().cast::<u8>().write_bytes(fill, size_of::<T>()) };
        storage
    }

    fn bytes_of<T>(storage: &MaybeUninit<T>) -> &[u8] {
        unsafe { std::slice::from_raw_parts(storage.as_ptr().cast::<u8>(), size_of::<T>()) }
    }

    /// Offsets of bytes outside `start..end` that no longer hold `fill`.
    fn touched_outside(bytes: &[u8], fill: u8, start: usize, end: usize) -> Vec<usize> {
        bytes
            .iter()
            .enumerate()
            .filter(|&(at, &b)| !(start..end).contains(&at) && b != fill)
            .map(|(at, _)| at)
            .collect()
    }

    #[test]
    fn format_converter_config_sentinels() {
        let mut storage = filled::<MaFormatConverterConfig>(0);
        ma_probe_init_format_converter_config(storage.as_mut_ptr());
        let config = unsafe { storage.assume_init_ref() };

        assert_eq!(config.format_in, MaFormat::S16);
        assert_eq!(config.format_out, MaFormat::S24);
        assert_eq!(config.channels, 45);
        assert_eq!(config.stream_format_in, MaStreamFormat::Pcm);
        assert_eq!(config.stream_format_out, MaStreamFormat::Pcm);
        assert_eq!(config.dither_mode, MaDitherMode::Rectangle);
        assert!(config.on_read.is_none());
        assert!(config.on_read_deinterleaved.is_none());
        assert!(config.user_data.is_null());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn c_packs_first_bitfield_member_into_bit_zero() {
        let mut storage = filled::<MaFormatConverterConfig>(0);
        ma_probe_init_format_converter_config(storage.as_mut_ptr());
        let config = unsafe { storage.assume_init_ref() };

        assert!(!config.simd_opt_out.get(0));
        assert!(!config.simd_opt_out.get(1));
        assert!(config.simd_opt_out.get(2));
        assert!(config.simd_opt_out.get(3));
        assert_eq!(config.simd_opt_out.0, 0b1100);
    }

    #[test]
    fn bitfield_padding_keeps_the_fill() {
        let mut storage = filled::<MaFormatConverterConfig>(0xFF);
        ma_probe_init_format_converter_config(storage.as_mut_ptr());
        let config = unsafe { storage.assume_init_ref() };

        // Only the four named bits are written; the other 28 stay set.
        assert_eq!(config.simd_opt_out.0.count_zeros(), 2);
    }

    #[test]
    fn format_converter_usage_is_complement_of_opt_out() {
        let mut storage = filled::<MaFormatConverter>(0);
        ma_probe_init_format_converter(storage.as_mut_ptr());
        let converter = unsafe { storage.assume_init_ref() };

        assert_eq!(converter.config.channels, 45);
        assert_eq!(converter.simd_usage.simd(0), 0b0011);
        assert_eq!(converter.simd_usage.0 & converter.config.simd_opt_out.0, 0);
        assert!(converter.on_convert_pcm.is_none());
    }

    #[test]
    fn channel_router_leaves_arrays_alone() {
        let mut storage = filled::<MaChannelRouter>(0x5A);
        ma_probe_init_channel_router(storage.as_mut_ptr());
        let router = unsafe { storage.assume_init_ref() };

        assert_eq!(router.config.channels_in, 5);
        assert_eq!(router.config.channels_out, 3);
        assert_eq!(router.config.mixing_mode, MaChannelMixMode::Simple);
        assert!(router.config.channel_map_in.iter().all(|&c| c == 0x5A));
        assert!(router.shuffle_table.iter().all(|&c| c == 0x5A));
        assert!(router.bitfields.get(MaChannelRouter::IS_SIMPLE_SHUFFLE_BIT));
        assert!(!router.bitfields.get(MaChannelRouter::IS_PASSTHROUGH_BIT));
        assert_eq!(router.bitfields.simd(MaChannelRouter::SIMD_USAGE_SHIFT), 0b0011);
    }

    #[test]
    fn src_writes_only_the_sinc_state() {
        let mut storage = filled::<MaSrc>(0);
        ma_probe_init_src(storage.as_mut_ptr());
        let src = unsafe { storage.assume_init_ref() };

        assert_eq!(src.config.algorithm, MaSrcAlgorithm::Sinc);
        let sinc = unsafe { src.config.algorithm_config.sinc };
        assert_eq!(sinc.window_function, MaSrcSincWindowFunction::Rectangular);
        assert_eq!(sinc.window_width, 29);

        let state = unsafe { &src.state.sinc };
        assert_eq!(state.time_in, 0.375);
        assert_eq!(state.input_frame_count, 81);
        assert_eq!(state.window_pos_in_samples, 17);
        assert!(state.input.iter().flatten().all(|&s| s == 0.0));

        assert!(src.bitfields.get(MaSrc::IS_END_OF_INPUT_LOADED_BIT));
        assert_eq!(src.bitfields.simd(MaSrc::SIMD_USAGE_SHIFT), 0b0011);
        assert!(src.config.bitfields.get(MaSrcConfig::NEVER_CONSUME_END_OF_INPUT_BIT));
        assert_eq!(src.config.bitfields.simd(MaSrcConfig::SIMD_OPT_OUT_SHIFT), 0b1100);
    }

    #[test]
    fn src_state_follows_the_algorithm() {
        let mut storage = filled::<MaSrc>(0);
        let src = storage.as_mut_ptr();
        unsafe {
            (&raw mut (*src).config.algorithm).write(MaSrcAlgorithm::Linear);
            sys::ma_native_init_src_state(src);
        }
        let src = unsafe { storage.assume_init_ref() };
        let linear = unsafe { &src.state.linear };
        assert_eq!(linear.time_in, 0.625);
        assert_eq!(linear.left_over_frames, 13);
    }

    #[test]
    fn src_state_untouched_without_algorithm() {
        let mut storage = filled::<MaSrc>(0x5A);
        let before = bytes_of(&storage).to_vec();
        let src = storage.as_mut_ptr();
        unsafe {
            (&raw mut (*src).config.algorithm).write(MaSrcAlgorithm::None);
            sys::ma_native_init_src_state(src);
        }
        let state_len = offset_of!(MaSrc, config);
        assert!(bytes_of(&storage)[..state_len] == before[..state_len]);
    }

    #[test]
    fn nested_initializer_writes_only_its_member() {
        let mut storage = filled::<MaSrcConfig>(0x5A);
        let config = storage.as_mut_ptr();
        ma_probe_init_src_config_sinc(unsafe { &raw mut (*config).algorithm_config.sinc });

        let start = offset_of!(MaSrcConfig, algorithm_config);
        let end = start + size_of::<MaSrcConfigSinc>();
        assert_eq!(touched_outside(bytes_of(&storage), 0x5A, start, end), Vec::<usize>::new());
        let sinc = unsafe { (*storage.as_ptr()).algorithm_config.sinc };
        assert_eq!(sinc.window_width, 29);
    }

    #[test]
    fn embedded_format_converter_writes_only_its_member() {
        let mut storage = filled::<MaPcmConverter>(0x5A);
        let converter = storage.as_mut_ptr();
        ma_probe_init_format_converter(unsafe { &raw mut (*converter).format_converter_out });

        let start = offset_of!(MaPcmConverter, format_converter_out);
        let end = start + size_of::<MaFormatConverter>();
        assert_eq!(touched_outside(bytes_of(&storage), 0x5A, start, end), Vec::<usize>::new());
    }

    #[test]
    fn pcm_converter_config_sentinels() {
        let mut storage = filled::<MaPcmConverterConfig>(0);
        ma_probe_init_pcm_converter_config(storage.as_mut_ptr());
        let config = unsafe { storage.assume_init_ref() };

        assert_eq!(config.format_in, MaFormat::F32);
        assert_eq!(config.format_out, MaFormat::S32);
        assert_eq!(config.sample_rate_out, 96000);
        assert_eq!(config.dither_mode, MaDitherMode::Triangle);
        assert_eq!(config.allow_dynamic_sample_rate, MA_TRUE);
        assert!(!config.bitfields.get(MaPcmConverterConfig::NEVER_CONSUME_END_OF_INPUT_BIT));
        assert_eq!(unsafe { config.algorithm_config.sinc.window_width }, 29);
    }

    #[test]
    fn pcm_converter_stamps_every_stage() {
        let mut storage = filled::<MaPcmConverter>(0x5A);
        ma_probe_init_pcm_converter(storage.as_mut_ptr());
        let converter = unsafe { storage.assume_init_ref() };

        assert!(converter.on_read.is_none());
        assert!(converter.user_data.is_null());
        assert_eq!(converter.format_converter_in.config.format_out, MaFormat::S24);
        assert_eq!(converter.format_converter_out.config.channels, 45);
        assert_eq!(converter.channel_router.config.channels_in, 5);
        assert_eq!(unsafe { converter.src.state.sinc.input_frame_count }, 81);
        assert_eq!(converter.src.config.sample_rate_out, 48000);

        let bits = converter.bitfields;
        assert!(bits.get(MaPcmConverter::IS_DYNAMIC_SAMPLE_RATE_ALLOWED_BIT));
        assert!(bits.get(MaPcmConverter::IS_PRE_FORMAT_CONVERSION_REQUIRED_BIT));
        assert!(!bits.get(MaPcmConverter::IS_POST_FORMAT_CONVERSION_REQUIRED_BIT));
        assert!(bits.get(MaPcmConverter::IS_CHANNEL_ROUTING_REQUIRED_BIT));
        assert!(bits.get(MaPcmConverter::IS_SRC_REQUIRED_BIT));
        assert!(!bits.get(MaPcmConverter::IS_CHANNEL_ROUTING_AT_START_BIT));
        assert!(!bits.get(MaPcmConverter::IS_PASSTHROUGH_BIT));
    }

    #[cfg(feature = "device-io")]
    #[test]
    fn device_config_embeds_standalone_members() {
        let mut storage = filled::<MaDeviceConfig>(0);
        ma_probe_init_device_config(storage.as_mut_ptr());
        let config = unsafe { storage.assume_init_ref() };

        assert_eq!(config.device_type, MaDeviceType::Duplex);
        assert_eq!(config.performance_profile, MaPerformanceProfile::Conservative);
        assert_eq!(config.playback.format, MaFormat::S16);
        assert_eq!(config.playback.channels, 6);
        assert_eq!(config.capture.format, MaFormat::F32);
        assert_eq!(config.capture.channels, 4);
        assert_eq!(config.capture.share_mode, MaShareMode::Exclusive);
        assert!(config.playback.device_id.is_null());
        assert_eq!(config.wasapi.no_auto_stream_routing, MA_TRUE);
        assert_eq!(config.alsa.no_mmap, MA_TRUE);
        assert!(config.pulse.stream_name_capture.is_null());
    }

    #[test]
    fn null_targets_are_ignored() {
        ma_probe_init_format_converter(ptr::null_mut());
        ma_probe_init_channel_router(ptr::null_mut());
        ma_probe_init_src(ptr::null_mut());
        ma_probe_init_pcm_converter_config(ptr::null_mut());
        ma_probe_init_pcm_converter(ptr::null_mut());
    }

    #[proptest]
    fn src_init_is_idempotent(fill: u8) {
        let mut once = filled::<MaSrc>(fill);
        ma_probe_init_src(once.as_mut_ptr());

        let mut twice = filled::<MaSrc>(fill);
        ma_probe_init_src(twice.as_mut_ptr());
        ma_probe_init_src(twice.as_mut_ptr());

        assert!(bytes_of(&once) == bytes_of(&twice));
    }

    #[proptest]
    fn sentinels_survive_any_fill(fill: u8) {
        let mut storage = filled::<MaFormatConverter>(fill);
        ma_probe_init_format_converter(storage.as_mut_ptr());
        let converter = unsafe { storage.assume_init_ref() };
        assert_eq!(converter.config.format_out, MaFormat::S24);
        assert_eq!(converter.config.channels, 45);
        assert_eq!(converter.simd_usage.simd(0), 0b0011);
    }
}
