/// Run-time settings for conformance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Byte every conformance buffer is filled with before the native
    /// initializer runs. Members the initializer leaves alone keep it.
    pub fill_byte: u8,
    /// Stop at the first mismatch, both within a descriptor and across a run.
    pub fail_fast: bool,
    /// Treat a descriptor whose capability is absent as an error instead of
    /// skipping it.
    pub strict_capabilities: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fill_byte: 0,
            fail_fast: false,
            strict_capabilities: false,
        }
    }
}
