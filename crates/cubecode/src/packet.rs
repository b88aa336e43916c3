use core::fmt;

use bstr::BStr;

use crate::DecodeError;

/// A read cursor over one received datagram.
///
/// The packet borrows its bytes; [`Packet::sub_packet`] hands out further
/// cursors over the same memory without copying. Each cursor owns its own
/// position, so sub-packets can be read independently of their parent and of
/// each other.
///
/// ```rust
/// use cubecode::Packet;
///
/// let data = [1, 2, 3, 4];
/// let mut packet = Packet::new(&data);
/// assert_eq!(packet.read_byte(), Ok(1));
///
/// let mut rest = packet.sub_packet_from_current().unwrap();
/// assert_eq!(rest.len(), 3);
/// assert_eq!(rest.read_byte(), Ok(2));
/// assert_eq!(packet.position(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Packet<'a> {
    /// Creates a packet positioned at the first byte of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Length of the packet in bytes, independent of the read position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the packet holds no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if there are bytes left to read.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// All bytes viewed by this packet, read or not.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// The unread tail of the packet.
    #[must_use]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns a new packet viewing `start..end` of this one, positioned at
    /// its own first byte. The bytes are shared, not copied.
    ///
    /// Any range with `start <= end <= len` is accepted, including empty ones
    /// such as `len..len`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidRange`] when `start > end` or `end > len`.
    pub fn sub_packet(&self, start: usize, end: usize) -> Result<Packet<'a>, DecodeError> {
        let length = self.buf.len();
        if start > end || end > length {
            return Err(DecodeError::InvalidRange { start, end, length });
        }

        tracing::trace!(start, end, length, "carved sub-packet");
        Ok(Packet::new(&self.buf[start..end]))
    }

    /// Returns a new packet over the unread remainder, `position..len`.
    ///
    /// # Errors
    ///
    /// Never fails in practice since the position is always within bounds;
    /// the `Result` mirrors [`Packet::sub_packet`].
    pub fn sub_packet_from_current(&self) -> Result<Packet<'a>, DecodeError> {
        self.sub_packet(self.pos, self.buf.len())
    }

    /// Reads the next byte and advances by one.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Overread`] when the packet is exhausted; the position is
    /// left unchanged.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(DecodeError::Overread { position: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads `N` bytes in order, failing on the first one past the end.
    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        for byte in &mut out {
            *byte = self.read_byte()?;
        }
        Ok(out)
    }
}

impl fmt::Debug for Packet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("buf", &BStr::new(self.buf))
            .field("pos", &self.pos)
            .finish()
    }
}

impl<'a> From<&'a [u8]> for Packet<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Packet::new(buf)
    }
}
