use super::Bits;

/// Collects Huffman codes into a bit sequence, in the order they are written.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer holding every bit written so far.
    output: Bits,
}

impl BitWriter {
    /// Create a new BitWriter with room for `capacity` bits.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
        }
    }

    /// Put a complete code on the stream. An empty code writes nothing.
    pub fn out_code(&mut self, code: &[bool]) {
        self.output.extend_from_slice(code);
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Debugging function. Report current position as [byte.bit].
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.output.len() / 8, self.output.len() % 8)
    }

    /// Hand back the finished bit sequence.
    pub fn into_bits(self) -> Bits {
        self.output
    }
}
