/// A read whose byte range falls outside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("read of {width} bytes at offset {offset} is out of bounds (buffer length {len})")]
    OutOfBounds { offset: i64, width: usize, len: usize },
}

/// Borrow `width` bytes starting at `offset`, or fail if any of them lie
/// outside `buf`.
fn window(buf: &[u8], offset: i64, width: usize) -> Result<&[u8], ReadError> {
    let err = ReadError::OutOfBounds {
        offset,
        width,
        len: buf.len(),
    };
    let start = usize::try_from(offset).map_err(|_| err)?;
    let end = start.checked_add(width).ok_or(err)?;
    buf.get(start..end).ok_or(err)
}

/// Read a little-endian `i32` at `offset`.
///
/// Offsets are `i64` so callers can do table arithmetic on values read from
/// the file without wrapping; a negative offset is out of bounds.
pub fn read_i32_le(buf: &[u8], offset: i64) -> Result<i32, ReadError> {
    let bytes = window(buf, offset, 4)?;
    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read a little-endian `i16` at `offset`.
pub fn read_i16_le(buf: &[u8], offset: i64) -> Result<i16, ReadError> {
    let bytes = window(buf, offset, 2)?;
    Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read-only view over a file buffer.
///
/// Stateless: every read takes an absolute offset, so the same reader can be
/// shared by the header pass and the table walk.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn i32_at(&self, offset: i64) -> Result<i32, ReadError> {
        read_i32_le(self.buf, offset)
    }

    pub fn i16_at(&self, offset: i64) -> Result<i16, ReadError> {
        read_i16_le(self.buf, offset)
    }
}
