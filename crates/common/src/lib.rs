//! Shared primitives for the world file tools: bounds-checked byte reads and
//! hex formatting.
//!
//! # Invariants
//! - Reads never touch bytes outside the borrowed buffer.
//! - Hex rendering is canonical: one form for every call site.

pub mod hex;
pub mod reader;

pub use hex::{HexI32, format_hex};
pub use reader::{ByteReader, ReadError, read_i16_le, read_i32_le};

pub fn crate_info() -> &'static str {
    "bgworld-common v0.1.0"
}
