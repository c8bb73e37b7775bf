//! Exports of `c/ma_layout_native.c`, compiled and linked by the build
//! script. The sizes and sentinel writes come from the C compiler; the
//! Rust declarations in this module tree are only the probe's typed view.

use super::*;

unsafe extern "C" {
    pub safe fn ma_native_sizeof_format_converter_config() -> usize;
    pub safe fn ma_native_sizeof_format_converter() -> usize;
    pub safe fn ma_native_sizeof_channel_router_config() -> usize;
    pub safe fn ma_native_sizeof_channel_router() -> usize;
    pub safe fn ma_native_sizeof_src_config_sinc() -> usize;
    pub safe fn ma_native_sizeof_src_config() -> usize;
    pub safe fn ma_native_sizeof_src() -> usize;
    pub safe fn ma_native_sizeof_pcm_converter_config() -> usize;
    pub safe fn ma_native_sizeof_pcm_converter() -> usize;

    pub fn ma_native_init_format_converter_config(config: *mut MaFormatConverterConfig);
    pub fn ma_native_init_format_converter(converter: *mut MaFormatConverter);
    pub fn ma_native_init_channel_router_config(config: *mut MaChannelRouterConfig);
    pub fn ma_native_init_channel_router(router: *mut MaChannelRouter);
    pub fn ma_native_init_src_config_sinc(config: *mut MaSrcConfigSinc);
    pub fn ma_native_init_src_config(config: *mut MaSrcConfig);
    /// Stamps the state member selected by `(*src).config.algorithm`.
    pub fn ma_native_init_src_state(src: *mut MaSrc);
    pub fn ma_native_init_src(src: *mut MaSrc);
    pub fn ma_native_init_pcm_converter_config(config: *mut MaPcmConverterConfig);
    pub fn ma_native_init_pcm_converter(converter: *mut MaPcmConverter);
}

#[cfg(feature = "device-io")]
unsafe extern "C" {
    pub safe fn ma_native_sizeof_device_config_playback() -> usize;
    pub safe fn ma_native_sizeof_device_config_capture() -> usize;
    pub safe fn ma_native_sizeof_device_config() -> usize;

    pub fn ma_native_init_device_config_playback(config: *mut MaDeviceConfigPlayback);
    pub fn ma_native_init_device_config_capture(config: *mut MaDeviceConfigCapture);
    pub fn ma_native_init_device_config(config: *mut MaDeviceConfig);
}
