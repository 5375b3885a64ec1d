//! Wire codec for the link between a driver's client and the race crew's strategy server.
//!
//! Every message starts with a one byte [`PacketType`], followed by a body. Bodies for
//! [`PacketType::SmData`] and [`PacketType::Strategy`] are the fixed-layout [`CarInfo`] and
//! [`PitStop`] records, written in network byte order. The codec does no framing, the transport
//! is expected to hand over one complete message per buffer.

pub mod credentials;
pub mod format;
pub mod protocol;

pub use credentials::Credentials;
pub use protocol::{
    decode_packet_type, encode_packet_type, CarInfo, DecodeError, EncodeError, Packet,
    PacketType, Payload, PitStop, Record,
};
