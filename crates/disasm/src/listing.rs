use std::fmt;

use bgworld_common::ByteReader;
use serde::Serialize;
use tracing::debug;

use crate::error::DisasmError;
use crate::header::WorldHeader;
use crate::table::{self, TableEntry};

/// Line terminator used throughout the report.
pub const LINE_END: &str = "\r\n";

/// Rule printed between the header and the offset table section.
pub const SEPARATOR: &str = "-----------------------------------------------------";

/// A fully decoded world file, ready to render.
///
/// Decoding is all-or-nothing: a listing only exists if every read
/// succeeded, so rendering it can never produce a partial report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldListing {
    pub header: WorldHeader,
    pub entries: Vec<TableEntry>,
}

impl WorldListing {
    pub fn decode(buf: &[u8]) -> Result<Self, DisasmError> {
        let reader = ByteReader::new(buf);
        let header = WorldHeader::decode(&reader)?;
        debug!(
            len = buf.len(),
            rows = header.rows,
            cols = header.cols,
            table = header.offset18,
            entries = table::entry_count(&header),
            "decoded world header"
        );
        let entries = table::read_table(&reader, &header)?;
        Ok(Self { header, entries })
    }

    /// Total number of 16-bit values across all arrays.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|e| e.values.len()).sum()
    }
}

impl fmt::Display for WorldListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        write!(f, "{SEPARATOR}{LINE_END}")?;
        f.write_str(LINE_END)?;
        // The section title keeps its trailing space and is followed by a
        // line holding a single space.
        write!(f, "Offsets array {LINE_END} {LINE_END}")?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
