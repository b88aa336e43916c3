//! Decodes the reply a Sauerbraten server sends to a basic info query.
//!
//! The reply starts with the bytes of the query echoed back, followed by the
//! player count, a list of integer attributes (protocol version, game mode,
//! seconds left, player limit, master mode) and two strings: the map name
//! and the server description. The description usually carries colour
//! escapes, so it is sanitized before printing.
//!
//! Run with
//!
//! ```bash
//! cargo run -p cubecode --example server_info
//! ```
#![allow(missing_docs)]

use cubecode::{DecodeError, Packet, SanitizeOptions};

/// The query we sent: a single byte asking for basic info.
const QUERY_LEN: usize = 1;

const REPLY: &[u8] = &[
    0x01, // echoed query
    0x02, // players
    0x05, // attributes
    0x80, 0x03, 0x01, // protocol 259
    0x03, // mode
    0x80, 0x2c, 0x01, // seconds left
    0x10, // max players
    0x00, // master mode
    b'd', b'u', b's', b't', b'2', 0x00,
    0x0c, b'2', b'W', 0x97, b'r', b'l', b'd', b' ', 0x0c, b'7', b'C', b'u', b'p', 0x00,
];

#[derive(Debug)]
struct ServerInfo {
    players: i32,
    attributes: Vec<i32>,
    map: String,
    description: String,
}

fn parse(reply: &[u8]) -> Result<ServerInfo, DecodeError> {
    let mut packet = Packet::new(reply).sub_packet(QUERY_LEN, reply.len())?;

    let players = packet.read_int()?;
    let count = packet.read_int()?;
    let attributes = (0..count)
        .map(|_| packet.read_int())
        .collect::<Result<Vec<_>, _>>()?;
    let map = packet.read_string()?;
    let description = packet.read_sanitized_string(SanitizeOptions::STRIP_NUL)?;

    Ok(ServerInfo {
        players,
        attributes,
        map,
        description,
    })
}

fn main() {
    match parse(REPLY) {
        Ok(info) => {
            println!("{} players on {}", info.players, info.map);
            println!("attributes: {:?}", info.attributes);
            println!("description: {}", info.description);
        }
        Err(err) => eprintln!("malformed reply: {err}"),
    }

    // A reply cut short mid-string is reported, not panicked on.
    if let Err(err) = parse(&REPLY[..15]) {
        println!("truncated reply: {err}");
    }
}
