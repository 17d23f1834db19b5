use std::fmt;

use bgworld_common::{ByteReader, HexI32, ReadError};
use serde::Serialize;
use tracing::trace;

use crate::error::DisasmError;
use crate::header::WorldHeader;
use crate::listing::LINE_END;

/// One decoded offset table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub index: i64,
    /// Absolute offset read from the table.
    pub offset: i32,
    /// Values before the sentinel; the sentinel itself is not kept.
    pub values: Vec<i16>,
}

/// Number of table entries the header declares.
///
/// Computed in `i64` so `rows * cols` never wraps; a non-positive product
/// means an empty table.
pub fn entry_count(header: &WorldHeader) -> i64 {
    (i64::from(header.rows) * i64::from(header.cols)).max(0)
}

/// Read 16-bit values from `start` until the first negative one.
///
/// Any negative value ends the array, not just `-1`.
pub fn read_terminated(reader: &ByteReader<'_>, start: i32) -> Result<Vec<i16>, ReadError> {
    let mut values = Vec::new();
    let mut cursor = i64::from(start);
    loop {
        let value = reader.i16_at(cursor)?;
        if value < 0 {
            return Ok(values);
        }
        values.push(value);
        cursor += 2;
    }
}

/// Walk the whole offset table, decoding the array behind each entry.
pub(crate) fn read_table(
    reader: &ByteReader<'_>,
    header: &WorldHeader,
) -> Result<Vec<TableEntry>, DisasmError> {
    let base = i64::from(header.offset18);
    let mut entries = Vec::new();
    for index in 0..entry_count(header) {
        let slot = base + index * 4;
        let offset = reader
            .i32_at(slot)
            .map_err(|source| DisasmError::TableEntry {
                index,
                slot,
                source,
            })?;
        let values = read_terminated(reader, offset).map_err(|source| DisasmError::ShortArray {
            index,
            offset,
            source,
        })?;
        trace!(index, offset, len = values.len(), "decoded table entry");
        entries.push(TableEntry {
            index,
            offset,
            values,
        });
    }
    Ok(entries)
}

/// `<index> : <offset> -> v0, v1, ...` followed by the line break.
impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} -> ", self.index, HexI32(self.offset))?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(LINE_END)
    }
}
