use nom_supreme::error::ErrorTree;
use nom_supreme::final_parser::ByteOffset;
use thiserror::Error;

pub mod car_info;
pub mod layout;
pub mod packet;
pub mod packet_type;
pub mod pit_stop;

pub use car_info::CarInfo;
pub use layout::{Field, FieldKind, Layout, Record, Value};
pub use packet::{Packet, Payload};
pub use packet_type::{decode_packet_type, encode_packet_type, PacketType};
pub use pit_stop::PitStop;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unrecognised packet type `{0}`")]
    UnrecognizedTag(u8),
    #[error("Truncated input, expected {expected} bytes but only {actual} available")]
    TruncatedInput { expected: usize, actual: usize },
    #[error("Failed decoding record at location {0:?}")]
    Malformed(ErrorTree<ByteOffset>),
    #[error("Decoded fields do not match the `{0}` layout")]
    LayoutMismatch(&'static str),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Field `{field}` must encode to exactly {expected} bytes, got {actual}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Packet type `Unknown` cannot be transmitted")]
    UnknownPacketType,
    #[error("Payload does not belong to packet type `{0:?}`")]
    PayloadMismatch(PacketType),
    #[error("Value for field `{0}` does not match its layout")]
    LayoutMismatch(&'static str),
    #[error("Layout has {expected} fields but {actual} values were supplied")]
    FieldCount { expected: usize, actual: usize },
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}
