//! The bitstream module holds the bit level I/O used by the Huffman codec.
//!
//! Encoded data is kept as an unpacked sequence of bits (`Vec<bool>`), one entry per bit, in the
//! order the bits were produced. Keeping the bits unpacked lets each parallel worker produce its
//! own independent sequence, and lets the final aggregator concatenate them without any bit
//! shifting at the boundaries.
//!
//! There is no byte packing and no container format here. How the bits are stored or sent
//! is up to the caller.
//!
pub mod bitreader;
pub mod bitwriter;

/// An encoded bit sequence. `false` is a 0 bit (left branch), `true` is a 1 bit (right branch).
pub type Bits = Vec<bool>;
