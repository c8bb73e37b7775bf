//! Check results.

use std::fmt;

use crate::check::Sentinel;

/// One member whose mirror read disagrees with its sentinel.
#[derive(Debug, Clone)]
pub struct FieldMismatch {
    /// Dotted member path as declared by the mirror, e.g. `config.channels`.
    pub path: String,
    /// Byte offset the mirror declares for the member.
    pub offset: usize,
    pub width: usize,
    pub expected: Sentinel,
    /// Raw bits found at `offset`, `None` if the mirror's member lies
    /// outside the buffer.
    pub observed: Option<u64>,
}

impl FieldMismatch {
    /// The observed bits rendered the way `expected` would be.
    pub fn observed_value(&self) -> String {
        match self.observed {
            Some(raw) => self.expected.render(raw),
            None => "<out of bounds>".to_string(),
        }
    }
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (+{}, {} bytes): expected {}, observed {}",
            self.path,
            self.offset,
            self.width,
            self.expected,
            self.observed_value(),
        )
    }
}

/// Outcome of checking one descriptor.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub descriptor: &'static str,
    pub native_size: usize,
    pub mirror_size: usize,
    pub fields_checked: usize,
    pub mismatches: Vec<FieldMismatch>,
}

impl ConformanceReport {
    pub fn new(descriptor: &'static str, native_size: usize, mirror_size: usize) -> Self {
        Self {
            descriptor,
            native_size,
            mirror_size,
            fields_checked: 0,
            mismatches: Vec::new(),
        }
    }

    pub fn size_matches(&self) -> bool {
        self.native_size == self.mirror_size
    }

    pub fn is_conformant(&self) -> bool {
        self.size_matches() && self.mismatches.is_empty()
    }

    /// The mismatch recorded for `path`, if any.
    pub fn mismatch(&self, path: &str) -> Option<&FieldMismatch> {
        self.mismatches.iter().find(|m| m.path == path)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conformant() {
            return write!(
                f,
                "{}: conformant ({} bytes, {} fields)",
                self.descriptor, self.native_size, self.fields_checked
            );
        }

        write!(
            f,
            "{}: {} of {} fields differ",
            self.descriptor,
            self.mismatches.len(),
            self.fields_checked
        )?;
        if !self.size_matches() {
            write!(
                f,
                "\n  size: native {} bytes, mirror {} bytes",
                self.native_size, self.mirror_size
            )?;
        }
        for mismatch in &self.mismatches {
            write!(f, "\n  {mismatch}")?;
        }
        Ok(())
    }
}
