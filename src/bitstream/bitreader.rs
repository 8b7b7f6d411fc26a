//! BitReader: reads an unpacked bit sequence one bit at a time.
//!
//! The reader never fails on its own. Running off the end is reported as `None`, and the
//! decoder turns that into an error that carries the position from `position()`.
//!

/// Reads bits from a borrowed bit sequence.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a [bool],
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit.
    pub fn new(bits: &'a [bool]) -> Self {
        Self { bits, cursor: 0 }
    }

    /// Return the next bit, consuming it, or None if there is no more data to read.
    pub fn bit(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(bit)
    }

    /// Index of the next bit to be read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.cursor
    }

    /// Debugging function. Report current position as [byte.bit].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor / 8, self.cursor % 8)
    }
}
