//! Decoder for the UDP wire format spoken by Cube 2: Sauerbraten servers and
//! clients.
//!
//! A [`Packet`] wraps a received datagram and hands out bytes, compressed
//! signed integers and strings in the game's own 8-bit character set. Strings
//! meant for display go through [`sanitize_string`] to drop the in-band
//! colour escapes.
//!
//! ```rust
//! use cubecode::{Packet, sanitize_string};
//!
//! let mut packet = Packet::new(&[0x80, 0xe8, 0x03, 0x0c, b'3', b'h', b'i', 0x00]);
//! assert_eq!(packet.read_int(), Ok(1000));
//!
//! let name = packet.read_string().unwrap();
//! assert_eq!(name, "\x0c3hi");
//! assert_eq!(sanitize_string(&name), "hi");
//! assert!(!packet.has_remaining());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod charset;
mod decode;
mod error;
mod options;
mod packet;
mod sanitize;

#[cfg(test)]
mod tests;

pub use charset::{CUBE_TO_UNI, cube_to_char};
pub use error::DecodeError;
pub use options::SanitizeOptions;
pub use packet::Packet;
pub use sanitize::{sanitize_string, sanitize_string_with};
