//! The shared memory region a check reads and writes.
//!
//! One allocation, two interpretations: the native initializer writes it as
//! the probe's type, and the mirror reads it back. Both interpretations go
//! through this type so every reinterpretation is explicit.

use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::slice;

use crate::error::ConformanceError;

/// A heap buffer with an explicit size and alignment, pre-filled with one
/// byte value.
pub struct ProbeBuffer {
    ptr: NonNull<u8>,
    layout: Layout,
    len: usize,
}

// Safety: the buffer exclusively owns its allocation.
unsafe impl Send for ProbeBuffer {}

impl ProbeBuffer {
    pub fn filled(len: usize, align: usize, fill_byte: u8) -> Result<Self, ConformanceError> {
        let failed = ConformanceError::Allocation { size: len, align };
        let layout = Layout::from_size_align(len.max(1), align).map_err(|_| failed)?;

        // Safety: `layout` has a non-zero size.
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) }).ok_or(failed)?;
        // Safety: the allocation is `layout.size()` bytes long.
        unsafe { ptr.as_ptr().write_bytes(fill_byte, layout.size()) };

        Ok(Self { ptr, layout, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn align(&self) -> usize {
        self.layout.align()
    }

    /// Pointer for handing the buffer to a native initializer as a `T`.
    ///
    /// # Panics
    ///
    /// If the buffer is too small or under-aligned for `T`.
    pub fn native_ptr<T>(&mut self) -> *mut T {
        self.assert_fits::<T>();
        self.ptr.as_ptr().cast()
    }

    /// Reads the buffer as a `T`.
    ///
    /// # Panics
    ///
    /// If the buffer is too small or under-aligned for `T`.
    ///
    /// # Safety
    ///
    /// The bytes must form a valid `T`: every enum member must hold a
    /// declared variant, which the native initializers only guarantee for
    /// a mirror that matches the native layout.
    pub unsafe fn view<T>(&self) -> &T {
        self.assert_fits::<T>();
        unsafe { &*self.ptr.as_ptr().cast::<T>() }
    }

    /// Reads `width` bytes at `offset` as a native-endian unsigned integer.
    ///
    /// Returns `None` if the range leaves the buffer or `width` is not 1, 2,
    /// 4 or 8.
    pub fn read_raw(&self, offset: usize, width: usize) -> Option<u64> {
        let end = offset.checked_add(width)?;
        let bytes = self.as_bytes().get(offset..end)?;
        let value = match width {
            1 => u64::from(bytes[0]),
            2 => u64::from(u16::from_ne_bytes(bytes.try_into().ok()?)),
            4 => u64::from(u32::from_ne_bytes(bytes.try_into().ok()?)),
            8 => u64::from_ne_bytes(bytes.try_into().ok()?),
            _ => return None,
        };
        Some(value)
    }

    pub fn as_bytes(&self) -> &[u8] {
        // Safety: the allocation holds at least `len` initialized bytes.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn assert_fits<T>(&self) {
        assert!(
            size_of::<T>() <= self.len,
            "buffer of {} bytes cannot hold {} bytes",
            self.len,
            size_of::<T>()
        );
        assert!(
            align_of::<T>() <= self.layout.align(),
            "buffer aligned to {} cannot hold a type aligned to {}",
            self.layout.align(),
            align_of::<T>()
        );
    }
}

impl Drop for ProbeBuffer {
    fn drop(&mut self) {
        // Safety: allocated in `filled` with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

impl std::fmt::Debug for ProbeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeBuffer")
            .field("len", &self.len)
            .field("align", &self.layout.align())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_with_requested_byte() {
        let buffer = ProbeBuffer::filled(24, 8, 0xA5).unwrap();
        assert_eq!(buffer.len(), 24);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0xA5));
    }

    #[test]
    fn honours_alignment() {
        let mut buffer = ProbeBuffer::filled(128, 64, 0).unwrap();
        assert_eq!(buffer.native_ptr::<u8>() as usize % 64, 0);
    }

    #[test]
    fn invalid_alignment_is_an_allocation_error() {
        let err = ProbeBuffer::filled(16, 3, 0).unwrap_err();
        assert_eq!(err, ConformanceError::Allocation { size: 16, align: 3 });
    }

    #[test]
    fn read_raw_is_bounded() {
        let mut buffer = ProbeBuffer::filled(8, 8, 0).unwrap();
        unsafe { buffer.native_ptr::<u32>().write(0xDEAD_BEEF) };
        assert_eq!(buffer.read_raw(0, 4), Some(0xDEAD_BEEF));
        assert_eq!(buffer.read_raw(4, 4), Some(0));
        assert_eq!(buffer.read_raw(6, 4), None);
        assert_eq!(buffer.read_raw(0, 3), None);
        assert_eq!(buffer.read_raw(usize::MAX, 2), None);
    }

    #[test]
    fn view_reads_what_was_written() {
        let mut buffer = ProbeBuffer::filled(16, 8, 0).unwrap();
        unsafe { buffer.native_ptr::<[u32; 4]>().write([1, 2, 3, 4]) };
        let view = unsafe { buffer.view::<[u32; 4]>() };
        assert_eq!(view, &[1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "cannot hold")]
    fn view_rejects_oversized_type() {
        let buffer = ProbeBuffer::filled(4, 4, 0).unwrap();
        let _ = unsafe { buffer.view::<u64>() };
    }
}
