//! Two rotating error rows.
//!
//! Both rows are `width + 2` cells long. Cell `0` and cell `width + 1` are
//! sentinels that always hold zero; cell `x + 1` holds column `x`. The
//! engine only ever reads cells `1..=width`.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// The `current` row holds brightness (source plus carried-in error) of the
/// row being scanned. The `next` row collects the row below.
#[derive(Debug, Clone)]
pub(crate) struct ErrorRows {
    current: Vec<i16>,
    next: Vec<i16>,
}

impl ErrorRows {
    /// Create both rows for `width` columns and seed `current` with the
    /// first source row.
    pub(crate) fn new(first_row: &[u8]) -> Self {
        let width = first_row.len();
        let mut current = vec![0; width + 2];

        current[1..=width]
            .iter_mut()
            .zip(first_row)
            .for_each(|(cell, &value)| *cell = value as i16);

        Self {
            current,
            next: vec![0; width + 2],
        }
    }

    /// Brightness of column `x` in the row being scanned.
    #[inline(always)]
    pub(crate) fn current(&self, x: usize) -> i16 {
        self.current[x + 1]
    }

    /// Finalize column `x` of the row below.
    #[inline(always)]
    pub(crate) fn set_next(&mut self, x: usize, value: i16) {
        self.next[x + 1] = value;
    }

    /// Make `next` the row being scanned. The old `current` is reused for
    /// the row after that; its cells are all overwritten before being read.
    #[inline(always)]
    pub(crate) fn rotate(&mut self) {
        core::mem::swap(&mut self.current, &mut self.next);
    }

    #[cfg(test)]
    pub(crate) fn sentinels(&self) -> [i16; 4] {
        let last = self.current.len() - 1;
        [self.current[0], self.current[last], self.next[0], self.next[last]]
    }
}
