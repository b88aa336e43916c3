use thiserror::Error;

/// Everything that can go wrong while pulling values out of a [`Packet`].
///
/// None of these are recoverable from inside the decoder: once a read fails
/// the packet should be treated as malformed and dropped.
///
/// [`Packet`]: crate::Packet
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte was requested at or past the end of the buffer.
    #[error("buffer overread at position {position}")]
    Overread {
        /// Offset of the byte that could not be read.
        position: usize,
    },
    /// An integer was requested from a zero-length packet.
    #[error("buffer too short")]
    BufferTooShort,
    /// A sub-packet was requested outside of `0..=length` or with `start > end`.
    #[error("invalid range {start}..{end} for packet of length {length}")]
    InvalidRange {
        /// Requested start offset.
        start: usize,
        /// Requested end offset (exclusive).
        end: usize,
        /// Length of the packet the range was taken from.
        length: usize,
    },
}
