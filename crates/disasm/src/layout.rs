//! Declarative layout of the `.world` header.
//!
//! Every header field lives at a fixed byte offset. The table below is the
//! only place those offsets appear; decoding and rendering both walk it.

use bgworld_common::{ByteReader, ReadError};

/// Identifies one header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    NumElements,
    Offset4,
    Rows,
    Cols,
    Offset18,
    ElementBase,
    Rows1,
    Cols1,
    Offset38,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::NumElements => "num_elements",
            FieldKey::Offset4 => "offset4",
            FieldKey::Rows => "rows",
            FieldKey::Cols => "cols",
            FieldKey::Offset18 => "offset18",
            FieldKey::ElementBase => "element_base",
            FieldKey::Rows1 => "rows1",
            FieldKey::Cols1 => "cols1",
            FieldKey::Offset38 => "offset38",
        }
    }
}

/// Stored width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    Int16,
    Int32,
}

impl FieldWidth {
    pub fn bytes(self) -> usize {
        match self {
            FieldWidth::Int16 => 2,
            FieldWidth::Int32 => 4,
        }
    }

    /// Read a value of this width at `offset`, sign-extended to `i32`.
    pub fn read(self, reader: &ByteReader<'_>, offset: i64) -> Result<i32, ReadError> {
        match self {
            FieldWidth::Int16 => reader.i16_at(offset).map(i32::from),
            FieldWidth::Int32 => reader.i32_at(offset),
        }
    }
}

/// How a field value is printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Decimal,
}

/// One row of the header layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Label printed before the value in the report.
    pub label: &'static str,
    pub offset: i64,
    pub width: FieldWidth,
    pub radix: Radix,
}

const fn field(key: FieldKey, label: &'static str, offset: i64, radix: Radix) -> FieldSpec {
    FieldSpec {
        key,
        label,
        offset,
        width: FieldWidth::Int32,
        radix,
    }
}

/// Header fields in report order. Groups are separated by a blank line.
pub static HEADER_GROUPS: [&[FieldSpec]; 4] = [
    &[
        field(FieldKey::NumElements, "Num Elements", 0x00, Radix::Hex),
        field(FieldKey::Offset4, "Offset4", 0x04, Radix::Hex),
    ],
    &[
        field(FieldKey::Rows, "Rows", 0x10, Radix::Decimal),
        field(FieldKey::Cols, "Cols", 0x14, Radix::Decimal),
        // Start of the offset table.
        field(FieldKey::Offset18, "Offset18", 0x18, Radix::Hex),
    ],
    &[field(FieldKey::ElementBase, "Element Base", 0x24, Radix::Hex)],
    &[
        field(FieldKey::Rows1, "Rows1", 0x30, Radix::Decimal),
        field(FieldKey::Cols1, "Cols1", 0x34, Radix::Decimal),
        field(FieldKey::Offset38, "Offset38", 0x38, Radix::Hex),
    ],
];

/// Smallest buffer that satisfies every header read.
pub const HEADER_LEN: usize = 0x3c;

/// All header fields in report order.
pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
    HEADER_GROUPS.iter().flat_map(|group| group.iter())
}
