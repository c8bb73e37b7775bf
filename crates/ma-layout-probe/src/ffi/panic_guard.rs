//! Panic guard macros for FFI boundary safety.
//!
//! Every `extern "C"` function that runs more than a constant expression
//! must catch panics to prevent undefined behaviour when unwinding crosses
//! the FFI boundary. The initializers return nothing, so a caught panic is
//! logged and the call returns normally.

/// Wrap an FFI function body that returns `()`.
///
/// On panic the macro logs the failure under `$name` and returns.
///
/// # Example
///
/// ```ignore
/// extern "C" fn ma_probe_do_thing() {
///     ffi_guard!("ma_probe_do_thing", {
///         // ... body ...
///     })
/// }
/// ```
macro_rules! ffi_guard {
    ($name:expr, { $($body:tt)* }) => {{
        use std::panic;
        use std::panic::AssertUnwindSafe;

        if panic::catch_unwind(AssertUnwindSafe(move || { $($body)* })).is_err() {
            tracing::error!(function = $name, "panic caught at FFI boundary");
        }
    }};
}

/// Wrap the body of an initializer taking a target pointer.
///
/// A null target is logged and nothing is written; otherwise the body runs
/// under [`ffi_guard!`].
macro_rules! init_guard {
    ($name:expr, $target:ident, { $($body:tt)* }) => {{
        if $target.is_null() {
            tracing::error!(function = $name, "null target pointer, nothing written");
            return;
        }
        $crate::ffi::panic_guard::ffi_guard!($name, { $($body)* })
    }};
}

pub(crate) use ffi_guard;
pub(crate) use init_guard;
