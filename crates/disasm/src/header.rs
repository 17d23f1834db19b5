use std::fmt;

use bgworld_common::{ByteReader, HexI32};
use serde::Serialize;

use crate::error::DisasmError;
use crate::layout::{self, FieldKey, FieldSpec, HEADER_GROUPS, Radix};
use crate::listing::LINE_END;

/// Fixed-offset header fields of a world file.
///
/// Values are raw; nothing here checks that they make sense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorldHeader {
    pub num_elements: i32,
    pub offset4: i32,
    pub rows: i32,
    pub cols: i32,
    /// Absolute offset of the offset table.
    pub offset18: i32,
    pub element_base: i32,
    pub rows1: i32,
    pub cols1: i32,
    pub offset38: i32,
}

impl WorldHeader {
    /// Read every field listed in the header layout.
    pub fn decode(reader: &ByteReader<'_>) -> Result<Self, DisasmError> {
        let mut header = Self::default();
        for spec in layout::fields() {
            let value = spec
                .width
                .read(reader, spec.offset)
                .map_err(|source| DisasmError::Header {
                    field: spec.key.as_str(),
                    source,
                })?;
            header.set(spec.key, value);
        }
        Ok(header)
    }

    pub fn get(&self, key: FieldKey) -> i32 {
        match key {
            FieldKey::NumElements => self.num_elements,
            FieldKey::Offset4 => self.offset4,
            FieldKey::Rows => self.rows,
            FieldKey::Cols => self.cols,
            FieldKey::Offset18 => self.offset18,
            FieldKey::ElementBase => self.element_base,
            FieldKey::Rows1 => self.rows1,
            FieldKey::Cols1 => self.cols1,
            FieldKey::Offset38 => self.offset38,
        }
    }

    fn set(&mut self, key: FieldKey, value: i32) {
        let slot = match key {
            FieldKey::NumElements => &mut self.num_elements,
            FieldKey::Offset4 => &mut self.offset4,
            FieldKey::Rows => &mut self.rows,
            FieldKey::Cols => &mut self.cols,
            FieldKey::Offset18 => &mut self.offset18,
            FieldKey::ElementBase => &mut self.element_base,
            FieldKey::Rows1 => &mut self.rows1,
            FieldKey::Cols1 => &mut self.cols1,
            FieldKey::Offset38 => &mut self.offset38,
        };
        *slot = value;
    }

    fn write_field(&self, f: &mut fmt::Formatter<'_>, spec: &FieldSpec) -> fmt::Result {
        let value = self.get(spec.key);
        match spec.radix {
            Radix::Hex => write!(f, "{}: {}{LINE_END}", spec.label, HexI32(value)),
            Radix::Decimal => write!(f, "{}: {value}{LINE_END}", spec.label),
        }
    }
}

/// Header section of the report: one line per field, blank line between
/// groups, no trailing blank line.
impl fmt::Display for WorldHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in HEADER_GROUPS.iter().enumerate() {
            if i > 0 {
                f.write_str(LINE_END)?;
            }
            for spec in group.iter() {
                self.write_field(f, spec)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::WorldBytes;

    #[test]
    fn decodes_every_field() {
        let buf = WorldBytes::new()
            .i32(0x00, 5)
            .i32(0x04, 0x100)
            .i32(0x10, 2)
            .i32(0x14, 3)
            .i32(0x18, 0x40)
            .i32(0x24, 0x80)
            .i32(0x30, 4)
            .i32(0x34, 6)
            .i32(0x38, 0xc0)
            .build();
        let header = WorldHeader::decode(&ByteReader::new(&buf)).unwrap();
        assert_eq!(
            header,
            WorldHeader {
                num_elements: 5,
                offset4: 0x100,
                rows: 2,
                cols: 3,
                offset18: 0x40,
                element_base: 0x80,
                rows1: 4,
                cols1: 6,
                offset38: 0xc0,
            }
        );
        assert_eq!(header.get(FieldKey::Cols), 3);
        assert_eq!(header.get(FieldKey::Offset18), 0x40);
    }

    #[test]
    fn truncated_header_names_the_field() {
        // Long enough for everything up to element_base.
        let buf = vec![0u8; 0x30];
        let err = WorldHeader::decode(&ByteReader::new(&buf)).unwrap_err();
        match err {
            DisasmError::Header { field, source } => {
                assert_eq!(field, "rows1");
                assert_eq!(
                    source,
                    bgworld_common::ReadError::OutOfBounds {
                        offset: 0x30,
                        width: 4,
                        len: 0x30
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn all_zero_header_renders_zeros() {
        let buf = vec![0u8; layout::HEADER_LEN];
        let header = WorldHeader::decode(&ByteReader::new(&buf)).unwrap();
        assert_eq!(
            header.to_string(),
            "Num Elements: 0x0\r\n\
             Offset4: 0x0\r\n\
             \r\n\
             Rows: 0\r\n\
             Cols: 0\r\n\
             Offset18: 0x0\r\n\
             \r\n\
             Element Base: 0x0\r\n\
             \r\n\
             Rows1: 0\r\n\
             Cols1: 0\r\n\
             Offset38: 0x0\r\n"
        );
    }

    #[test]
    fn negative_counts_render_signed() {
        let header = WorldHeader {
            rows: -3,
            offset38: -1,
            ..WorldHeader::default()
        };
        let text = header.to_string();
        assert!(text.contains("Rows: -3\r\n"));
        assert!(text.contains("Offset38: 0xffffffff\r\n"));
    }
}
