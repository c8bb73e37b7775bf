use std::env;
use std::path::PathBuf;

/// SIMD tiers as `(cfg name, target feature, opt-out cargo feature)`.
const SIMD_TIERS: [(&str, &str, &str); 4] = [
    ("ma_simd_sse2", "sse2", "NO_SSE2"),
    ("ma_simd_avx2", "avx2", "NO_AVX2"),
    ("ma_simd_avx512", "avx512f", "NO_AVX512"),
    ("ma_simd_neon", "neon", "NO_NEON"),
];

const BACKENDS: [&str; 14] = [
    "wasapi",
    "dsound",
    "winmm",
    "alsa",
    "pulseaudio",
    "jack",
    "coreaudio",
    "sndio",
    "audio4",
    "oss",
    "aaudio",
    "opensl",
    "webaudio",
    "null",
];

fn main() {
    println!("cargo::rerun-if-changed=c/ma_layout_native.c");
    println!("cargo::rerun-if-env-changed=MINIAUDIO_INCLUDE_DIR");
    println!("cargo::rerun-if-changed=src/ffi.rs");
    println!("cargo::rerun-if-changed=src/ffi/types.rs");
    println!("cargo::rerun-if-changed=src/ffi/functions.rs");
    println!("cargo::rerun-if-changed=src/ffi/initializers.rs");
    println!("cargo::rerun-if-changed=src/native");
    println!("cargo::rerun-if-changed=cbindgen.toml");

    compile_native();
    emit_simd_tiers();
    emit_backend_support();
    generate_header();
}

/// Builds the C side. With `MINIAUDIO_INCLUDE_DIR` set the structs come from
/// the real `miniaudio.h`; otherwise from the declarations in the C file.
fn compile_native() {
    let mut build = cc::Build::new();
    build.cpp(false).file("c/ma_layout_native.c");

    if let Some(dir) = env::var_os("MINIAUDIO_INCLUDE_DIR") {
        build.include(dir).define("MA_PROBE_USE_MINIAUDIO_H", None);
    }

    if !cargo_feature("DEVICE_IO") {
        build.define("MA_NO_DEVICE_IO", "1");
    }
    for (_, _, opt_out) in SIMD_TIERS {
        if cargo_feature(opt_out) {
            build.define(&format!("MA_{opt_out}"), "1");
        }
    }
    for backend in BACKENDS {
        let opt_out = format!("NO_{}", backend.to_uppercase());
        if cargo_feature(&opt_out) {
            build.define(&format!("MA_{opt_out}"), "1");
        }
    }

    build.compile("ma_layout_native");
}

fn cargo_feature(name: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{name}")).is_some()
}

fn target_cfg(name: &str) -> String {
    env::var(format!("CARGO_CFG_{name}")).unwrap_or_default()
}

/// A tier is usable when the target enables it and the crate has not opted out.
fn emit_simd_tiers() {
    let target_features = target_cfg("TARGET_FEATURE");
    let enabled: Vec<&str> = target_features.split(',').collect();

    for (cfg, target_feature, opt_out) in SIMD_TIERS {
        println!("cargo::rustc-check-cfg=cfg({cfg})");
        if enabled.contains(&target_feature) && !cargo_feature(opt_out) {
            println!("cargo::rustc-cfg={cfg}");
        }
    }
}

/// Mirrors the native library's platform detection: which backends it would
/// compile in for this target (`ma_support_*`), and which of those survive
/// the `no-<backend>` opt-outs (`ma_enable_*`). Nothing is supported without
/// device I/O.
fn emit_backend_support() {
    for backend in BACKENDS {
        println!("cargo::rustc-check-cfg=cfg(ma_support_{backend})");
        println!("cargo::rustc-check-cfg=cfg(ma_enable_{backend})");
    }

    if !cargo_feature("DEVICE_IO") {
        return;
    }

    let os = target_cfg("TARGET_OS");
    let family = target_cfg("TARGET_FAMILY");

    let apple = os == "macos" || os == "ios";
    let win32 = family.split(',').any(|f| f == "windows");
    // Apple targets do not define __unix__, so the native side never treats them as unix.
    let unix = family.split(',').any(|f| f == "unix") && !apple;
    let android = os == "android";
    let linux = android || os == "linux";
    let openbsd = os == "openbsd";
    let freebsd = os == "freebsd";
    let netbsd = os == "netbsd";
    let dragonfly = os == "dragonfly";
    let bsd = openbsd || freebsd || netbsd || dragonfly;
    let emscripten = os == "emscripten";

    let mut supported: Vec<&str> = Vec::new();
    if win32 {
        supported.extend(["wasapi", "dsound", "winmm", "jack"]);
    }
    if unix {
        if linux && !android {
            supported.push("alsa");
        }
        if !bsd && !android && !emscripten {
            supported.extend(["pulseaudio", "jack"]);
        }
        if android {
            supported.extend(["aaudio", "opensl"]);
        }
        if openbsd {
            supported.push("sndio");
        }
        if netbsd || openbsd {
            supported.push("audio4");
        }
        if freebsd || dragonfly {
            supported.push("oss");
        }
    }
    if apple {
        supported.push("coreaudio");
    }
    if emscripten {
        supported.push("webaudio");
    } else {
        supported.push("null");
    }

    supported.sort_unstable();
    supported.dedup();
    for backend in supported {
        println!("cargo::rustc-cfg=ma_support_{backend}");
        if !cargo_feature(&format!("NO_{}", backend.to_uppercase())) {
            println!("cargo::rustc-cfg=ma_enable_{backend}");
        }
    }
}

fn generate_header() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_dir = PathBuf::from(&crate_dir).join("include");
    let output_file = output_dir.join("ma_layout_probe.h");

    std::fs::create_dir_all(&output_dir).expect("Failed to create include/ directory");

    let config = cbindgen::Config::from_file(PathBuf::from(&crate_dir).join("cbindgen.toml"))
        .expect("Failed to read cbindgen.toml");

    // Header failures are reported, never fatal.
    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(&output_file);
        }
        Err(err) => println!("cargo::warning=C header not regenerated: {err}"),
    }
}
