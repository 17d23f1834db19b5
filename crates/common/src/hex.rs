use std::fmt;

/// Display adapter rendering an `i32` in the canonical report form: `0x`
/// prefix, lowercase digits, no padding. Negative values show their
/// two's-complement bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexI32(pub i32);

impl fmt::Display for HexI32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0 as u32)
    }
}

/// Render `value` as hex. Same output as formatting a [`HexI32`].
pub fn format_hex(value: i32) -> String {
    HexI32(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_small_values() {
        assert_eq!(format_hex(0), "0x0");
        assert_eq!(format_hex(10), "0xa");
        assert_eq!(format_hex(0x1c0), "0x1c0");
    }

    #[test]
    fn negative_values_use_bit_pattern() {
        assert_eq!(format_hex(-1), "0xffffffff");
        assert_eq!(format_hex(i32::MIN), "0x80000000");
    }

    #[test]
    fn lowercase_digits() {
        assert_eq!(format_hex(0x00AB_CDEF), "0xabcdef");
    }

    #[test]
    fn deterministic() {
        for v in [0, 1, -7, 0x7fff_ffff, 123_456] {
            assert_eq!(format_hex(v), format_hex(v));
        }
    }

    #[test]
    fn adapter_matches_function() {
        assert_eq!(format!("{}", HexI32(0x40)), format_hex(0x40));
    }
}
