//! C-compatible FFI layer of the probe.
//!
//! Exposes, per native struct `T`, a size accessor and a sentinel
//! initializer, plus a snapshot of the build's capability set.
//!
//! # Symbol prefix
//!
//! - Functions: `ma_probe_*`
//! - Types: `MaProbe*` (the native structs keep their `Ma*` names)
//!
//! # Thread safety
//!
//! Every function reads only constants and writes only the storage it is
//! handed, so calls on distinct buffers may run concurrently.

pub mod types;

pub mod functions;
pub mod initializers;
mod panic_guard;
