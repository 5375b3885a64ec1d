use crate::protocol::layout::{Field, FieldKind, Layout, Record, Value};
use crate::protocol::{DecodeError, EncodeError};

/// Width of the tyre compound text on the wire, e.g. `DRY` or `WET`
pub const COMPOUND_WIDTH: usize = 3;

const PIT_STOP_FIELDS: &[Field] = &[
    Field {
        name: "fuel",
        kind: FieldKind::Float,
    },
    Field {
        name: "tyre_set",
        kind: FieldKind::Int,
    },
    Field {
        name: "tyre_compound",
        kind: FieldKind::Text(COMPOUND_WIDTH),
    },
    Field {
        name: "front_left_pressure",
        kind: FieldKind::Float,
    },
    Field {
        name: "front_right_pressure",
        kind: FieldKind::Float,
    },
    Field {
        name: "rear_left_pressure",
        kind: FieldKind::Float,
    },
    Field {
        name: "rear_right_pressure",
        kind: FieldKind::Float,
    },
    Field {
        name: "driver_offset",
        kind: FieldKind::Int,
    },
    Field {
        name: "brake_pad",
        kind: FieldKind::Int,
    },
    Field {
        name: "repairs_bodywork",
        kind: FieldKind::Bool,
    },
    Field {
        name: "repairs_suspension",
        kind: FieldKind::Bool,
    },
];

pub const PIT_STOP_SIZE: usize = <PitStop as Record>::SIZE;

/// A pit stop instruction sent from the crew to the driver.
///
/// Records built with [`PitStop::new`] start with no driver swap, brake pad set 1 and both repair
/// flags set. Decoding always takes every field from the wire.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitStop {
    pub fuel: f32,
    pub tyre_set: i32,
    /// Must be exactly [`COMPOUND_WIDTH`] bytes of UTF-8 to be encodable.
    pub tyre_compound: String,
    /// Front left, front right, rear left, rear right
    pub tyre_pressures: [f32; 4],
    /// Position offset of the next driver in the rotation, 0 keeps the current driver.
    pub driver_offset: i32,
    pub brake_pad: i32,
    pub repairs_bodywork: bool,
    pub repairs_suspension: bool,
}

impl PitStop {
    pub fn new<S: Into<String>>(
        fuel: f32,
        tyre_set: i32,
        tyre_compound: S,
        tyre_pressures: [f32; 4],
    ) -> Self {
        Self {
            fuel,
            tyre_set,
            tyre_compound: tyre_compound.into(),
            tyre_pressures,
            driver_offset: 0,
            brake_pad: 1,
            repairs_bodywork: true,
            repairs_suspension: true,
        }
    }

    pub fn with_driver_offset(mut self, driver_offset: i32) -> Self {
        self.driver_offset = driver_offset;
        self
    }

    pub fn with_brake_pad(mut self, brake_pad: i32) -> Self {
        self.brake_pad = brake_pad;
        self
    }

    pub fn with_repairs(mut self, bodywork: bool, suspension: bool) -> Self {
        self.repairs_bodywork = bodywork;
        self.repairs_suspension = suspension;
        self
    }

    /// Encodes into a fixed size buffer, failing with
    /// [`InvalidFieldLength`](EncodeError::InvalidFieldLength) if the compound is not exactly
    /// [`COMPOUND_WIDTH`] bytes.
    pub fn to_bytes(&self) -> Result<[u8; PIT_STOP_SIZE], EncodeError> {
        let mut buffer = [0u8; PIT_STOP_SIZE];
        let mut cursor = &mut buffer[..];
        self.encode(&mut cursor)?;
        Ok(buffer)
    }
}

impl Record for PitStop {
    const LAYOUT: Layout = Layout {
        name: "pit_stop",
        fields: PIT_STOP_FIELDS,
    };

    fn values(&self) -> Vec<Value<'_>> {
        let [front_left, front_right, rear_left, rear_right] = self.tyre_pressures;
        vec![
            Value::Float(self.fuel),
            Value::Int(self.tyre_set),
            Value::Text(&self.tyre_compound),
            Value::Float(front_left),
            Value::Float(front_right),
            Value::Float(rear_left),
            Value::Float(rear_right),
            Value::Int(self.driver_offset),
            Value::Int(self.brake_pad),
            Value::Bool(self.repairs_bodywork),
            Value::Bool(self.repairs_suspension),
        ]
    }

    fn from_values(values: &[Value<'_>]) -> Result<Self, DecodeError> {
        match *values {
            [
                Value::Float(fuel),
                Value::Int(tyre_set),
                Value::Text(tyre_compound),
                Value::Float(front_left),
                Value::Float(front_right),
                Value::Float(rear_left),
                Value::Float(rear_right),
                Value::Int(driver_offset),
                Value::Int(brake_pad),
                Value::Bool(repairs_bodywork),
                Value::Bool(repairs_suspension),
            ] => {
                Ok(PitStop {
                    fuel,
                    tyre_set,
                    tyre_compound: tyre_compound.to_owned(),
                    tyre_pressures: [front_left, front_right, rear_left, rear_right],
                    driver_offset,
                    brake_pad,
                    repairs_bodywork,
                    repairs_suspension,
                })
            }
            _ => Err(DecodeError::LayoutMismatch(Self::LAYOUT.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENCODED: &[u8; 37] = b"\x42\x48\x00\x00\x00\x00\x00\x03DRY\x41\xcc\x00\x00\x41\xcc\x00\x00\x41\xc0\x00\x00\x41\xc0\x00\x00\x00\x00\x00\x01\x00\x00\x00\x02\x00\x01";

    fn sample() -> PitStop {
        PitStop::new(50.0, 3, "DRY", [25.5, 25.5, 24.0, 24.0])
            .with_driver_offset(1)
            .with_brake_pad(2)
            .with_repairs(false, true)
    }

    #[test]
    fn new_applies_defaults() {
        let stop = PitStop::new(12.5, 1, "WET", [30.0, 30.0, 29.5, 29.5]);

        assert_eq!(stop.driver_offset, 0);
        assert_eq!(stop.brake_pad, 1);
        assert!(stop.repairs_bodywork);
        assert!(stop.repairs_suspension);
    }

    #[test]
    fn size_is_37_bytes() {
        assert_eq!(PIT_STOP_SIZE, 37);
        assert_eq!(sample().to_vec().unwrap().len(), 37);
    }

    #[test]
    fn encode_pit_stop() {
        let buf = sample().to_bytes().expect("Failed to encode");

        assert_eq!(&buf, ENCODED);
    }

    #[test]
    fn decode_pit_stop() {
        let res = PitStop::decode(ENCODED).unwrap();

        assert_eq!(res, sample());
        assert_eq!(res.tyre_compound, "DRY");
    }

    #[test]
    fn decode_keeps_wire_values_over_defaults() {
        let stop = PitStop::new(0.0, 0, "WET", [0.0; 4])
            .with_brake_pad(0)
            .with_repairs(false, false);
        let decoded = PitStop::decode(&stop.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded.brake_pad, 0);
        assert!(!decoded.repairs_bodywork);
        assert!(!decoded.repairs_suspension);
    }

    #[test]
    fn decode_truncated() {
        let res = PitStop::decode(&ENCODED[..36]);

        assert!(matches!(
            res,
            Err(DecodeError::TruncatedInput {
                expected: 37,
                actual: 36
            })
        ));
    }

    #[test]
    fn decode_invalid_compound() {
        let mut input = *ENCODED;
        input[8] = 0xff;
        let res = PitStop::decode(&input);

        assert!(matches!(res, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn compound_must_be_three_bytes() {
        for compound in &["M", "MEDI", ""] {
            let stop = PitStop::new(10.0, 1, *compound, [27.0; 4]);
            let mut buf = vec![];
            let res = stop.encode(&mut buf);

            assert!(
                matches!(
                    res,
                    Err(EncodeError::InvalidFieldLength {
                        field: "tyre_compound",
                        expected: 3,
                        ..
                    })
                ),
                "compound {:?} was accepted",
                compound
            );
            assert!(buf.is_empty());
        }

        assert!(PitStop::new(10.0, 1, "DRY", [27.0; 4]).to_bytes().is_ok());
    }

    #[test]
    fn compound_width_is_counted_in_bytes() {
        // Two characters, but three bytes once encoded
        let stop = PitStop::new(10.0, 1, "é1", [27.0; 4]);
        let decoded = PitStop::decode(&stop.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded.tyre_compound, "é1");
    }
}
