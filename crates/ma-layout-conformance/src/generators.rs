//! Generators for property tests over the descriptor registry.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::runner::{Entry, registry};

/// Index into [`registry()`].
pub fn entry_index() -> impl Strategy<Value = usize> {
    0..registry().len()
}

/// One initialization of one descriptor over pre-filled storage.
#[derive(Debug, Clone, Arbitrary)]
pub struct InitScenario {
    /// Byte the buffer holds before the initializer runs.
    pub fill_byte: u8,
    #[strategy(entry_index())]
    pub entry: usize,
    /// How many times the initializer runs.
    #[strategy(1usize..4)]
    pub repeats: usize,
}

impl InitScenario {
    pub fn entry(&self) -> Entry {
        registry()[self.entry]
    }
}
