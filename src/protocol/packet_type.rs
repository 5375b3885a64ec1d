//! Single byte discriminator which precedes every message body on the link.
//!
//! [`PacketType`] itself is a plain enumeration, the byte codes live in a separate table so
//! routing code can match on packet kinds without pulling in the codec.

use crate::protocol::{DecodeError, EncodeError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PacketType {
    Connect,
    SmData,
    ServerData,
    Disconnect,
    ConnectionReply,
    Strategy,
    StrategyOK,
    Telemetry,
    UpdateUsers,
    /// Decode result for any byte which has no entry in the code table. Never transmitted.
    Unknown,
}

const PACKET_CODES: [(PacketType, u8); 9] = [
    (PacketType::Connect, 1),
    (PacketType::SmData, 2),
    (PacketType::ServerData, 3),
    (PacketType::Disconnect, 4),
    (PacketType::ConnectionReply, 5),
    (PacketType::Strategy, 6),
    (PacketType::StrategyOK, 7),
    (PacketType::Telemetry, 8),
    (PacketType::UpdateUsers, 9),
];

pub const PACKET_TYPE_SIZE: usize = 1;

/// Wire code for `kind`, `None` for [`PacketType::Unknown`].
pub fn packet_type_code(kind: PacketType) -> Option<u8> {
    PACKET_CODES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|&(_, code)| code)
}

pub fn packet_type_from_code(code: u8) -> Result<PacketType, DecodeError> {
    PACKET_CODES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|&(kind, _)| kind)
        .ok_or(DecodeError::UnrecognizedTag(code))
}

pub fn encode_packet_type(kind: PacketType) -> Result<[u8; PACKET_TYPE_SIZE], EncodeError> {
    packet_type_code(kind)
        .map(u8::to_be_bytes)
        .ok_or(EncodeError::UnknownPacketType)
}

/// Classify a buffer by its first byte.
///
/// An empty buffer, or a first byte with no entry in the code table, yields
/// [`PacketType::Unknown`]. Reporting that is left to the caller.
pub fn decode_packet_type(input: &[u8]) -> PacketType {
    input
        .first()
        .and_then(|&code| packet_type_from_code(code).ok())
        .unwrap_or(PacketType::Unknown)
}
