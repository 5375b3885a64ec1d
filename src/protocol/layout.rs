//! Declarative fixed-width record layouts.
//!
//! A [`Layout`] is an ordered list of named fields, each with a fixed on-wire width. Every record
//! in the protocol is described by one, and all of them are written by [`pack`] and read back by
//! [`unpack`]. All multi-byte numbers are big-endian.

use byteorder::{BigEndian, WriteBytesExt};
use nom::bytes::complete::take;
use nom::combinator::{map, map_res};
use nom::error::context;
use nom::number::complete::{be_f32, be_i32, be_u8};
use nom::IResult;
use nom_supreme::error::ErrorTree;
use nom_supreme::final_parser::final_parser;
use std::io::Write;

use crate::protocol::{DecodeError, EncodeError};

type Res<T, U> = IResult<T, U, ErrorTree<T>>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// IEEE-754 single precision float
    Float,
    /// Signed 32-bit integer
    Int,
    /// UTF-8 text occupying exactly this many bytes, no length marker and no padding
    Text(usize),
    /// A single byte, written as 0 or 1
    Bool,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::Float | FieldKind::Int => 4,
            FieldKind::Text(width) => width,
            FieldKind::Bool => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Layout {
    /// Total encoded size of a record with this layout, in bytes.
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.width();
            i += 1;
        }
        total
    }
}

/// A single field value, as handed to [`pack`] or produced by [`unpack`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value<'a> {
    Float(f32),
    Int(i32),
    Text(&'a str),
    Bool(bool),
}

/// A value type with a fixed wire layout.
pub trait Record: Sized {
    const LAYOUT: Layout;
    const SIZE: usize = Self::LAYOUT.size();

    /// Field values in layout order.
    fn values(&self) -> Vec<Value<'_>>;

    fn from_values(values: &[Value<'_>]) -> Result<Self, DecodeError>;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), EncodeError> {
        pack(&Self::LAYOUT, &self.values(), writer)
    }

    /// Decodes a record from the start of `input`, bytes past the end of the record are ignored.
    fn decode(input: &[u8]) -> Result<Self, DecodeError> {
        let values = unpack(&Self::LAYOUT, input)?;
        Self::from_values(&values)
    }

    fn to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = Vec::with_capacity(Self::SIZE);
        self.encode(&mut buffer)?;
        Ok(buffer)
    }
}

// Every value is checked against the layout before anything is written, so a rejected record
// never leaves a partial encoding behind in the writer.
fn check(layout: &Layout, values: &[Value<'_>]) -> Result<(), EncodeError> {
    if values.len() != layout.fields.len() {
        return Err(EncodeError::FieldCount {
            expected: layout.fields.len(),
            actual: values.len(),
        });
    }

    for (field, value) in layout.fields.iter().zip(values) {
        match (field.kind, value) {
            (FieldKind::Text(width), Value::Text(text)) if text.len() != width => {
                return Err(EncodeError::InvalidFieldLength {
                    field: field.name,
                    expected: width,
                    actual: text.len(),
                });
            }
            (FieldKind::Float, Value::Float(_))
            | (FieldKind::Int, Value::Int(_))
            | (FieldKind::Text(_), Value::Text(_))
            | (FieldKind::Bool, Value::Bool(_)) => (),
            _ => return Err(EncodeError::LayoutMismatch(field.name)),
        }
    }
    Ok(())
}

pub fn pack<W: Write>(
    layout: &Layout,
    values: &[Value<'_>],
    writer: &mut W,
) -> Result<(), EncodeError> {
    check(layout, values)?;

    for (field, value) in layout.fields.iter().zip(values) {
        match *value {
            Value::Float(f) => writer.write_f32::<BigEndian>(f)?,
            Value::Int(i) => writer.write_i32::<BigEndian>(i)?,
            Value::Text(text) => writer.write_all(text.as_bytes())?,
            Value::Bool(b) => writer.write_u8(u8::from(b))?,
        }
        log::trace!("Packed field {}.{}", layout.name, field.name);
    }
    Ok(())
}

pub fn unpack<'a>(layout: &Layout, input: &'a [u8]) -> Result<Vec<Value<'a>>, DecodeError> {
    let size = layout.size();
    let record = input.get(..size).ok_or(DecodeError::TruncatedInput {
        expected: size,
        actual: input.len(),
    })?;

    final_parser(context(layout.name, |i: &'a [u8]| fields(layout, i)))(record)
        .map_err(DecodeError::Malformed)
}

fn fields<'a>(layout: &Layout, mut input: &'a [u8]) -> Res<&'a [u8], Vec<Value<'a>>> {
    let mut values = Vec::with_capacity(layout.fields.len());
    for descriptor in layout.fields {
        let (next_input, value) = field(descriptor)(input)?;
        values.push(value);
        input = next_input;
    }
    Ok((input, values))
}

fn field<'a>(descriptor: &Field) -> impl FnMut(&'a [u8]) -> Res<&'a [u8], Value<'a>> {
    let kind = descriptor.kind;
    context(
        descriptor.name,
        move |input: &'a [u8]| -> Res<&'a [u8], Value<'a>> {
            match kind {
                FieldKind::Float => map(be_f32, Value::Float)(input),
                FieldKind::Int => map(be_i32, Value::Int)(input),
                FieldKind::Text(width) => {
                    map(map_res(take(width), std::str::from_utf8), Value::Text)(input)
                }
                FieldKind::Bool => map(boolean, Value::Bool)(input),
            }
        },
    )
}

// Any non-zero byte reads as true, encoders only ever write 0 or 1
fn boolean(input: &[u8]) -> Res<&[u8], bool> {
    context("boolean", map(be_u8, |i: u8| i != 0))(input)
}
