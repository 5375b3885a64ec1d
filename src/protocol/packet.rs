use byteorder::WriteBytesExt;
use log::{trace, warn};
use std::io::Write;

use crate::protocol::car_info::CarInfo;
use crate::protocol::layout::Record;
use crate::protocol::packet_type::{decode_packet_type, packet_type_code, PacketType};
use crate::protocol::pit_stop::PitStop;
use crate::protocol::{DecodeError, EncodeError};

/// Message body following the packet type byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    CarInfo(CarInfo),
    PitStop(PitStop),
    /// Body of a packet type which carries no fixed-layout record, passed through untouched.
    Raw(Vec<u8>),
}

/// A classified message: the packet type and its decoded body, ready for routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    pub kind: PacketType,
    pub payload: Payload,
}

impl Packet {
    pub fn car_info(car_info: CarInfo) -> Self {
        Self {
            kind: PacketType::SmData,
            payload: Payload::CarInfo(car_info),
        }
    }

    pub fn pit_stop(pit_stop: PitStop) -> Self {
        Self {
            kind: PacketType::Strategy,
            payload: Payload::PitStop(pit_stop),
        }
    }

    pub fn raw(kind: PacketType, body: Vec<u8>) -> Self {
        Self {
            kind,
            payload: Payload::Raw(body),
        }
    }

    /// Classifies `input` by its first byte and decodes the rest as the matching record.
    ///
    /// Unrecognised packet types are not an error, they come back as [`PacketType::Unknown`] with
    /// the body kept as raw bytes.
    pub fn decode(input: &[u8]) -> Result<Packet, DecodeError> {
        let kind = decode_packet_type(input);
        let body = input.get(1..).unwrap_or_default();

        let payload = match kind {
            PacketType::SmData => Payload::CarInfo(CarInfo::decode(body)?),
            PacketType::Strategy => Payload::PitStop(PitStop::decode(body)?),
            PacketType::Unknown => {
                warn!(
                    "Unrecognised packet type {:?}, keeping {} byte body",
                    input.first(),
                    body.len()
                );
                Payload::Raw(body.to_vec())
            }
            _ => Payload::Raw(body.to_vec()),
        };
        trace!("Decoded {:?} packet", kind);

        Ok(Packet { kind, payload })
    }

    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError> {
        let code = packet_type_code(self.kind).ok_or(EncodeError::UnknownPacketType)?;

        match (self.kind, &self.payload) {
            (PacketType::SmData, Payload::CarInfo(_))
            | (PacketType::Strategy, Payload::PitStop(_)) => (),
            (PacketType::SmData, _) | (PacketType::Strategy, _) => {
                return Err(EncodeError::PayloadMismatch(self.kind))
            }
            (_, Payload::Raw(_)) => (),
            _ => return Err(EncodeError::PayloadMismatch(self.kind)),
        }

        // Serialise the record before touching the writer, so a rejected record writes nothing
        let body = match &self.payload {
            Payload::CarInfo(car_info) => car_info.to_vec()?,
            Payload::PitStop(pit_stop) => pit_stop.to_vec()?,
            Payload::Raw(body) => body.clone(),
        };

        writer.write_u8(code)?; // Packet type
        writer.write_all(&body)?;
        Ok(())
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = vec![];
        self.encode(&mut buffer)?;
        Ok(buffer)
    }
}
