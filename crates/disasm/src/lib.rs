//! World disassembler: decodes the fixed header, the offset table and the
//! sentinel-terminated value arrays of a `.world` file into a text report.
//!
//! # Invariants
//! - The input buffer is only read, never written.
//! - Identical bytes always produce byte-identical reports.
//! - Any out-of-bounds read aborts the whole decode; no partial report exists.
//! - In-bounds but meaningless header values shape the output, they are not
//!   errors.

mod error;
mod header;
pub mod layout;
mod listing;
mod table;

#[cfg(test)]
mod fixture;

pub use error::DisasmError;
pub use header::WorldHeader;
pub use layout::{FieldKey, FieldSpec, FieldWidth, HEADER_GROUPS, HEADER_LEN, Radix};
pub use listing::{LINE_END, SEPARATOR, WorldListing};
pub use table::{TableEntry, entry_count, read_terminated};

/// Decode `buf` and render the full report.
///
/// Lines end with CRLF. Fails on the first out-of-bounds read.
pub fn disassemble(buf: &[u8]) -> Result<String, DisasmError> {
    WorldListing::decode(buf).map(|listing| listing.to_string())
}

pub fn crate_info() -> &'static str {
    "bgworld-disasm v0.1.0"
}
