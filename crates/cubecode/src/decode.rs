//! Compressed integers and strings.
//!
//! Integers use one byte for `-127..=127` (read as `i8`) and an escape byte
//! for anything wider:
//!
//! | lead byte     | payload                  | bytes |
//! |---------------|--------------------------|-------|
//! | `0x00..=0x7f` | the byte itself          | 1     |
//! | `0x82..=0xff` | the byte itself, as `i8` | 1     |
//! | `0x80`        | `i16`, little endian     | 3     |
//! | `0x81`        | `i32`, little endian     | 5     |
//!
//! Strings are a run of such integers, each truncated to a byte and mapped
//! through [`CUBE_TO_UNI`](crate::CUBE_TO_UNI), ended by an integer equal to 0.

use alloc::string::String;

use crate::{DecodeError, Packet, SanitizeOptions, charset::cube_to_char, sanitize_string_with};

const MARKER_I16: u8 = 0x80;
const MARKER_I32: u8 = 0x81;

impl Packet<'_> {
    /// Reads one compressed signed integer.
    ///
    /// Each width sign-extends from its own top bit, so a lone `0xff` is `-1`
    /// and `[0x80, 0x00, 0x80]` is `-32768`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::BufferTooShort`] if the packet has zero length,
    /// otherwise [`DecodeError::Overread`] if the value is cut off. The
    /// position then sits after the last byte that could be read.
    pub fn read_int(&mut self) -> Result<i32, DecodeError> {
        if self.is_empty() {
            return Err(DecodeError::BufferTooShort);
        }

        let value = match self.read_byte()? {
            MARKER_I16 => {
                let value = i32::from(i16::from_le_bytes(self.read_array()?));
                tracing::trace!(value, "decoded 16-bit int");
                value
            }
            MARKER_I32 => {
                let value = i32::from_le_bytes(self.read_array()?);
                tracing::trace!(value, "decoded 32-bit int");
                value
            }
            #[allow(clippy::cast_possible_wrap)]
            byte => i32::from(byte as i8),
        };
        Ok(value)
    }

    /// Reads a zero-terminated string in the Cube 2 character set.
    ///
    /// The terminator is any integer that decodes to 0, including the
    /// escaped forms `[0x80, 0, 0]` and `[0x81, 0, 0, 0, 0]`. Other integers
    /// keep only their low byte.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Packet::read_int`]; a string that
    /// runs off the end of the packet is an [`DecodeError::Overread`].
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let mut s = String::new();
        loop {
            let value = self.read_int()?;
            if value == 0 {
                return Ok(s);
            }
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            s.push(cube_to_char(value as u8));
        }
    }

    /// Reads a string and strips it for display, see [`sanitize_string_with`].
    ///
    /// # Errors
    ///
    /// Same as [`Packet::read_string`].
    pub fn read_sanitized_string(
        &mut self,
        options: SanitizeOptions,
    ) -> Result<String, DecodeError> {
        self.read_string().map(|s| sanitize_string_with(&s, options))
    }
}
