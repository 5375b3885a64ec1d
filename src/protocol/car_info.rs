use crate::protocol::layout::{Field, FieldKind, Layout, Record, Value};
use crate::protocol::{DecodeError, EncodeError};

const CAR_INFO_FIELDS: &[Field] = &[
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
        name: "fuel_to_add",
        kind: FieldKind::Float,
    },
    Field {
        name: "max_fuel",
        kind: FieldKind::Float,
    },
    Field {
        name: "tyre_set",
        kind: FieldKind::Int,
    },
];

pub const CAR_INFO_SIZE: usize = <CarInfo as Record>::SIZE;

/// Current tyre and fuel state of the driver's car, sent to the crew so a strategy can be built
/// around it.
///
/// Values are carried as-is, the codec performs no plausibility checks (`fuel_to_add` may well
/// exceed `max_fuel`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarInfo {
    /// Tyre pressures in PSI
    pub front_left_pressure: f32,
    pub front_right_pressure: f32,
    pub rear_left_pressure: f32,
    pub rear_right_pressure: f32,
    /// Litres
    pub fuel_to_add: f32,
    pub max_fuel: f32,
    pub tyre_set: i32,
}

impl CarInfo {
    pub fn to_bytes(&self) -> Result<[u8; CAR_INFO_SIZE], EncodeError> {
        let mut buffer = [0u8; CAR_INFO_SIZE];
        let mut cursor = &mut buffer[..];
        self.encode(&mut cursor)?;
        Ok(buffer)
    }
}

impl Record for CarInfo {
    const LAYOUT: Layout = Layout {
        name: "car_info",
        fields: CAR_INFO_FIELDS,
    };

    fn values(&self) -> Vec<Value<'_>> {
        vec![
            Value::Float(self.front_left_pressure),
            Value::Float(self.front_right_pressure),
            Value::Float(self.rear_left_pressure),
            Value::Float(self.rear_right_pressure),
            Value::Float(self.fuel_to_add),
            Value::Float(self.max_fuel),
            Value::Int(self.tyre_set),
        ]
    }

    fn from_values(values: &[Value<'_>]) -> Result<Self, DecodeError> {
        match *values {
            [
                Value::Float(front_left_pressure),
                Value::Float(front_right_pressure),
                Value::Float(rear_left_pressure),
                Value::Float(rear_right_pressure),
                Value::Float(fuel_to_add),
                Value::Float(max_fuel),
                Value::Int(tyre_set),
            ] => {
                Ok(CarInfo {
                    front_left_pressure,
                    front_right_pressure,
                    rear_left_pressure,
                    rear_right_pressure,
                    fuel_to_add,
                    max_fuel,
                    tyre_set,
                })
            }
            _ => Err(DecodeError::LayoutMismatch(Self::LAYOUT.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CarInfo {
        CarInfo {
            front_left_pressure: 25.5,
            front_right_pressure: 25.5,
            rear_left_pressure: 24.0,
            rear_right_pressure: 24.0,
            fuel_to_add: 10.0,
            max_fuel: 110.0,
            tyre_set: 2,
        }
    }

    #[test]
    fn size_is_28_bytes() {
        assert_eq!(CAR_INFO_SIZE, 28);
        assert_eq!(sample().to_vec().unwrap().len(), 28);
    }

    #[test]
    fn encode_car_info() {
        let buf = sample().to_bytes().expect("Failed to encode");

        let expected = [
            0x41, 0xcc, 0x00, 0x00, 0x41, 0xcc, 0x00, 0x00, 0x41, 0xc0, 0x00, 0x00, 0x41, 0xc0,
            0x00, 0x00, 0x41, 0x20, 0x00, 0x00, 0x42, 0xdc, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
        ];
        assert_eq!(buf, expected);
        assert_eq!(i32::from_be_bytes([buf[24], buf[25], buf[26], buf[27]]), 2);
    }

    #[test]
    fn decode_car_info() {
        let input = b"\x41\xcc\x00\x00\x41\xcc\x00\x00\x41\xc0\x00\x00\x41\xc0\x00\x00\x41\x20\x00\x00\x42\xdc\x00\x00\x00\x00\x00\x02";
        let res = CarInfo::decode(input).unwrap();

        assert_eq!(res, sample());
    }

    #[test]
    fn decode_ignores_excess_bytes() {
        let mut input = sample().to_vec().unwrap();
        input.extend_from_slice(b"\xde\xad\xbe\xef");

        assert_eq!(CarInfo::decode(&input).unwrap(), sample());
    }

    #[test]
    fn decode_truncated() {
        let input = sample().to_vec().unwrap();
        let res = CarInfo::decode(&input[..27]);

        assert!(matches!(
            res,
            Err(DecodeError::TruncatedInput {
                expected: 28,
                actual: 27
            })
        ));
    }

    #[test]
    fn extreme_values_survive() {
        let car = CarInfo {
            front_left_pressure: -1.5,
            front_right_pressure: f32::MAX,
            rear_left_pressure: f32::MIN_POSITIVE,
            rear_right_pressure: 0.0,
            fuel_to_add: 500.0,
            max_fuel: 0.1,
            tyre_set: i32::MIN,
        };
        let decoded = CarInfo::decode(&car.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded, car);
    }
}
