use bgworld_common::ReadError;

/// Errors from disassembling a world file.
///
/// Every variant is an out-of-bounds read; the variant records where in the
/// decode it happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisasmError {
    #[error("header field `{field}` is out of bounds")]
    Header {
        field: &'static str,
        #[source]
        source: ReadError,
    },
    #[error("offset table entry {index} at {slot:#x} is out of bounds")]
    TableEntry {
        index: i64,
        slot: i64,
        #[source]
        source: ReadError,
    },
    #[error("value array of table entry {index} starting at {offset:#x} runs out of bounds")]
    ShortArray {
        index: i64,
        offset: i32,
        #[source]
        source: ReadError,
    },
}

impl DisasmError {
    /// The underlying failed read.
    pub fn read_error(&self) -> &ReadError {
        match self {
            DisasmError::Header { source, .. }
            | DisasmError::TableEntry { source, .. }
            | DisasmError::ShortArray { source, .. } => source,
        }
    }
}
